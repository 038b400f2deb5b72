//! Writing a weather record into named presentation slots.

use std::{collections::BTreeMap, fmt};

use crate::model::WeatherRecord;

/// Named output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Icon,
    Humidity,
    Wind,
    Direction,
    Location,
    Temperature,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Icon => "icon",
            Slot::Humidity => "humidity",
            Slot::Wind => "wind",
            Slot::Direction => "direction",
            Slot::Location => "location",
            Slot::Temperature => "temperature",
        }
    }

    pub const fn all() -> &'static [Slot] {
        &[
            Slot::Icon,
            Slot::Humidity,
            Slot::Wind,
            Slot::Direction,
            Slot::Location,
            Slot::Temperature,
        ]
    }
}

/// A write-only rendering surface.
pub trait PresentationTarget {
    /// Replace whatever the slot currently shows.
    fn write(&mut self, slot: Slot, value: String);
}

/// Overwrite every slot of `target` with the values of `record`.
pub fn render(record: &WeatherRecord, target: &mut dyn PresentationTarget) {
    target.write(Slot::Icon, record.icon_path());
    target.write(Slot::Humidity, record.humidity.to_string());
    target.write(Slot::Wind, record.wind_speed.to_string());
    target.write(Slot::Direction, record.wind_direction.clone());
    target.write(Slot::Location, record.location.clone());
    target.write(
        Slot::Temperature,
        format!("{}{}", record.temperature, record.unit.symbol()),
    );
}

/// In-memory target, printable on a terminal.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    slots: BTreeMap<Slot, String>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl PresentationTarget for Panel {
    fn write(&mut self, slot: Slot, value: String) {
        self.slots.insert(slot, value);
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |slot: Slot| self.get(slot).unwrap_or("-");

        writeln!(f, "{}", show(Slot::Location))?;
        writeln!(f, "  Temperature: {}", show(Slot::Temperature))?;
        writeln!(f, "  Humidity:    {}%", show(Slot::Humidity))?;
        writeln!(f, "  Wind:        {} {}", show(Slot::Wind), show(Slot::Direction))?;
        write!(f, "  Icon:        {}", show(Slot::Icon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemperatureUnit;

    fn sample_record() -> WeatherRecord {
        WeatherRecord {
            code: 800,
            humidity: 50,
            wind_speed: 5.0,
            wind_direction: "N".to_string(),
            location: "Testville".to_string(),
            temperature: 80,
            unit: TemperatureUnit::Fahrenheit,
            observed_at: None,
        }
    }

    #[test]
    fn render_sets_icon_path_from_condition_code() {
        let mut panel = Panel::new();
        render(&sample_record(), &mut panel);

        assert_eq!(panel.get(Slot::Icon), Some("imgs/codes/800.png"));
    }

    #[test]
    fn render_writes_every_slot() {
        let mut panel = Panel::new();
        render(&sample_record(), &mut panel);

        for slot in Slot::all() {
            assert!(panel.get(*slot).is_some(), "slot {} not written", slot.as_str());
        }
        assert_eq!(panel.get(Slot::Humidity), Some("50"));
        assert_eq!(panel.get(Slot::Wind), Some("5"));
        assert_eq!(panel.get(Slot::Direction), Some("N"));
        assert_eq!(panel.get(Slot::Location), Some("Testville"));
        assert_eq!(panel.get(Slot::Temperature), Some("80°F"));
    }

    #[test]
    fn render_overwrites_previous_values() {
        let mut panel = Panel::new();
        render(&sample_record(), &mut panel);

        let next = WeatherRecord {
            code: 501,
            location: "Rainham".to_string(),
            temperature: 12,
            unit: TemperatureUnit::Celsius,
            ..sample_record()
        };
        render(&next, &mut panel);

        assert_eq!(panel.get(Slot::Icon), Some("imgs/codes/501.png"));
        assert_eq!(panel.get(Slot::Location), Some("Rainham"));
        assert_eq!(panel.get(Slot::Temperature), Some("12°C"));
    }

    #[test]
    fn panel_display_lists_slots() {
        let mut panel = Panel::new();
        render(&sample_record(), &mut panel);

        let out = panel.to_string();
        assert!(out.starts_with("Testville\n"));
        assert!(out.contains("Temperature: 80°F"));
        assert!(out.contains("Wind:        5 N"));
    }
}
