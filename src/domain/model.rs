use crate::utils::error::{FarmaError, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("static regex"));

/// One pharmacy's directory entry, as served by `GET /farmacias`.
///
/// Opening hours stay as the raw `"HH:MM"` strings from the wire; they are
/// parsed during classification so a bad value is reported as
/// [`FarmaError::InvalidTimeFormat`] rather than as a payload error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PharmacyRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(deserialize_with = "coordinate")]
    pub latitude: f64,
    #[serde(deserialize_with = "coordinate")]
    pub longitude: f64,
    #[serde(rename = "abre")]
    pub opens_at: String,
    #[serde(rename = "fecha")]
    pub closes_at: String,
}

impl PharmacyRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Parsed `(opens_at, closes_at)`.
    pub fn opening_window(&self) -> Result<(TimeOfDay, TimeOfDay)> {
        Ok((self.opens_at.parse()?, self.closes_at.parse()?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A clock time within one day. `24:00` is accepted as end of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        let valid = (hour < 24 && minute < 60) || (hour == 24 && minute == 0);
        if !valid {
            return Err(FarmaError::InvalidTimeFormat {
                value: format!("{:02}:{:02}", hour, minute),
            });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn as_fractional_hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Minute precision; seconds are dropped.
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = FarmaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FarmaError::InvalidTimeFormat {
            value: s.to_string(),
        };

        let caps = TIME_OF_DAY.captures(s.trim()).ok_or_else(invalid)?;
        let hour: u8 = caps[1].parse().map_err(|_| invalid())?;
        let minute: u8 = caps[2].parse().map_err(|_| invalid())?;

        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Records split by availability at one reference time. Both sides keep the
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub open: Vec<PharmacyRecord>,
    pub closed: Vec<PharmacyRecord>,
}

impl ClassificationResult {
    pub fn len(&self) -> usize {
        self.open.len() + self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.closed.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

// Some directory backends serialize coordinates as strings.
fn coordinate<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawCoordinate::deserialize(deserializer)? {
        RawCoordinate::Number(value) => Ok(value),
        RawCoordinate::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid coordinate {:?}: {}", text, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_of_day() {
        let t: TimeOfDay = "08:30".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (8, 30));
        assert_eq!(t.as_fractional_hours(), 8.5);

        let t: TimeOfDay = " 7:05 ".parse().unwrap();
        assert_eq!(t.to_string(), "07:05");

        let end: TimeOfDay = "24:00".parse().unwrap();
        assert_eq!(end.as_fractional_hours(), 24.0);
    }

    #[test]
    fn test_parse_time_of_day_rejects_garbage() {
        for bad in ["abc:00", "08:xx", "", "0800", "8:5", "25:00", "24:30", "12:60", "08:00:00"] {
            match bad.parse::<TimeOfDay>() {
                Err(FarmaError::InvalidTimeFormat { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidTimeFormat for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_from_naive_time_drops_seconds() {
        let t = TimeOfDay::from(NaiveTime::from_hms_opt(22, 0, 59).unwrap());
        assert_eq!(t.as_fractional_hours(), 22.0);
    }

    #[test]
    fn test_deserialize_wire_record() {
        let json = serde_json::json!({
            "nome": "Drogal",
            "endereco": "Rua Sete de Setembro, 100",
            "telefone": "(14) 3642-3242",
            "latitude": -22.2171,
            "longitude": "-49.6506",
            "abre": "08:00",
            "fecha": "22:00"
        });

        let record: PharmacyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.name, "Drogal");
        assert_eq!(record.coordinates().longitude, -49.6506);
        let (opens, closes) = record.opening_window().unwrap();
        assert_eq!(opens.to_string(), "08:00");
        assert_eq!(closes.to_string(), "22:00");
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_coordinate() {
        let json = serde_json::json!({
            "nome": "X", "endereco": "", "telefone": "",
            "latitude": "north", "longitude": 0,
            "abre": "08:00", "fecha": "18:00"
        });
        assert!(serde_json::from_value::<PharmacyRecord>(json).is_err());
    }
}
