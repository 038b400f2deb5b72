//! Working out where the user is: geolocation first, a zip code prompt otherwise.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    error::LocationError,
    model::{Coordinates, Location},
};

pub const DEFAULT_GEOLOCATION_ENDPOINT: &str = "http://ip-api.com/json/";

/// Something that can report the host's position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, LocationError>;
}

/// Blocking prompt for a postal code. `Ok(None)` means the user cancelled.
pub trait ZipPrompt {
    fn ask_zip(&self) -> Result<Option<String>, LocationError>;
}

/// Approximate position from the public IP address.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    endpoint: String,
    http: Client,
}

impl IpGeolocator {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::new(DEFAULT_GEOLOCATION_ENDPOINT.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        debug!(endpoint = %self.endpoint, "requesting ip geolocation");

        let res = self.http.get(&self.endpoint).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(LocationError::Unavailable(format!(
                "geolocation service returned status {status}"
            )));
        }

        let parsed: IpApiResponse = res.json().await?;

        match (parsed.status.as_str(), parsed.lat, parsed.lon) {
            ("success", Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(LocationError::Unavailable(
                parsed.message.unwrap_or_else(|| "no position in response".to_string()),
            )),
        }
    }
}

/// Resolve the location to ask the weather for.
///
/// Uses the geolocator when one is given and it produces a position; otherwise asks for a
/// zip code. The zip is trimmed but not validated.
pub async fn resolve_location(
    geolocator: Option<&dyn Geolocator>,
    prompt: &dyn ZipPrompt,
) -> Result<Location, LocationError> {
    if let Some(geolocator) = geolocator {
        match geolocator.locate().await {
            Ok(coords) => {
                info!(lat = coords.latitude, lon = coords.longitude, "resolved location by geolocation");
                return Ok(Location::Coordinates(coords));
            }
            Err(err) => warn!(error = %err, "geolocation failed, asking for a zip code"),
        }
    }

    let zip = prompt.ask_zip()?.ok_or(LocationError::PromptCancelled)?;
    let zip = zip.trim();
    if zip.is_empty() {
        return Err(LocationError::EmptyZip);
    }

    info!(zip, "resolved location from prompt");
    Ok(Location::zip(zip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FixedGeolocator(Result<Coordinates, ()>);

    #[async_trait]
    impl Geolocator for FixedGeolocator {
        async fn locate(&self) -> Result<Coordinates, LocationError> {
            self.0
                .map_err(|_| LocationError::Unavailable("permission denied".to_string()))
        }
    }

    struct ScriptedPrompt {
        answer: Option<&'static str>,
        asked: Cell<bool>,
    }

    impl ScriptedPrompt {
        fn new(answer: Option<&'static str>) -> Self {
            Self { answer, asked: Cell::new(false) }
        }
    }

    impl ZipPrompt for ScriptedPrompt {
        fn ask_zip(&self) -> Result<Option<String>, LocationError> {
            self.asked.set(true);
            Ok(self.answer.map(str::to_string))
        }
    }

    #[tokio::test]
    async fn geolocation_wins_and_prompt_is_not_shown() {
        let geo = FixedGeolocator(Ok(Coordinates { latitude: 1.5, longitude: 2.5 }));
        let prompt = ScriptedPrompt::new(Some("10001"));

        let loc = resolve_location(Some(&geo as &dyn Geolocator), &prompt).await.unwrap();

        assert_eq!(loc, Location::coordinates(1.5, 2.5));
        assert!(!prompt.asked.get());
    }

    #[tokio::test]
    async fn no_geolocator_falls_back_to_prompt() {
        let prompt = ScriptedPrompt::new(Some(" 10001 "));

        let loc = resolve_location(None, &prompt).await.unwrap();

        assert_eq!(loc, Location::zip("10001"));
        assert!(prompt.asked.get());
    }

    #[tokio::test]
    async fn failed_geolocation_falls_back_to_prompt() {
        let geo = FixedGeolocator(Err(()));
        let prompt = ScriptedPrompt::new(Some("94103"));

        let loc = resolve_location(Some(&geo as &dyn Geolocator), &prompt).await.unwrap();
        assert_eq!(loc, Location::zip("94103"));
    }

    #[tokio::test]
    async fn cancelled_prompt_is_an_error() {
        let prompt = ScriptedPrompt::new(None);
        let err = resolve_location(None, &prompt).await.unwrap_err();
        assert!(matches!(err, LocationError::PromptCancelled));
    }

    #[tokio::test]
    async fn empty_zip_is_an_error() {
        let prompt = ScriptedPrompt::new(Some("   "));
        let err = resolve_location(None, &prompt).await.unwrap_err();
        assert!(matches!(err, LocationError::EmptyZip));
    }

    #[tokio::test]
    async fn ip_geolocator_reads_position() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "city": "London",
                "lat": 51.5,
                "lon": -0.12
            })))
            .mount(&server)
            .await;

        let coords = IpGeolocator::new(server.uri()).locate().await.unwrap();
        assert_eq!(coords, Coordinates { latitude: 51.5, longitude: -0.12 });
    }

    #[tokio::test]
    async fn ip_geolocator_reports_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "fail",
                "message": "private range"
            })))
            .mount(&server)
            .await;

        let err = IpGeolocator::new(server.uri()).locate().await.unwrap_err();
        match err {
            LocationError::Unavailable(msg) => assert_eq!(msg, "private range"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn ip_geolocator_reports_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = IpGeolocator::new(server.uri()).locate().await.unwrap_err();
        assert!(matches!(err, LocationError::Unavailable(_)));
    }
}
