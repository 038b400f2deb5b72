//! Unit and encoding conversions applied to raw OpenWeather values.

/// Compass labels, clockwise from north.
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR: f64 = 360.0 / 16.0;

/// Map a wind bearing in degrees to one of the 16 compass labels.
///
/// Each label owns a 22.5° sector centred on it, lower bound inclusive. The bearing is
/// reduced modulo 360 first, so `-10.0` and `350.0` give the same label. Non-finite input
/// yields `"N"`.
pub fn degrees_to_direction(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return "N";
    }

    let degrees = degrees.rem_euclid(360.0);
    let mut low = 360.0 - SECTOR / 2.0;
    let mut high = (low + SECTOR) % 360.0;

    for label in COMPASS_POINTS {
        // The north sector wraps through 0°, so its bounds are inverted.
        let inside = if low > high {
            degrees >= low || degrees < high
        } else {
            degrees >= low && degrees < high
        };

        if inside {
            return label;
        }

        low = (low + SECTOR) % 360.0;
        high = (high + SECTOR) % 360.0;
    }

    "N"
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> i64 {
    (kelvin * 9.0 / 5.0 - 459.67).round() as i64
}

pub fn kelvin_to_celsius(kelvin: f64) -> i64 {
    (kelvin - 273.15).round() as i64
}
