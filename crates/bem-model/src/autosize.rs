//! Autosize sentinel for sizable numeric fields.

use core::fmt;
use core::str::FromStr;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric field value that may instead hold the autosize sentinel.
///
/// Sizable fields store either an actual number or the keyword
/// "Autosize", which tells the sizing engine to compute the value. The
/// two cases are distinct: an autosized field has no number at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutosizableValue {
    Autosize,
    Value(f64),
}

impl AutosizableValue {
    /// True if this field is left to the sizing engine.
    pub fn is_autosized(&self) -> bool {
        matches!(self, AutosizableValue::Autosize)
    }

    /// The stored number, if one is set.
    pub fn value(&self) -> Option<f64> {
        match self {
            AutosizableValue::Autosize => None,
            AutosizableValue::Value(v) => Some(*v),
        }
    }
}

impl From<f64> for AutosizableValue {
    fn from(v: f64) -> Self {
        AutosizableValue::Value(v)
    }
}

impl fmt::Display for AutosizableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutosizableValue::Autosize => write!(f, "Autosize"),
            AutosizableValue::Value(v) => write!(f, "{}", v),
        }
    }
}

impl FromStr for AutosizableValue {
    type Err = core::num::ParseFloatError;

    /// Accepts the sentinel case-insensitively ("autosize", "Autosize",
    /// "AUTOSIZE"); anything else must parse as a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("autosize") {
            return Ok(AutosizableValue::Autosize);
        }
        s.parse::<f64>().map(AutosizableValue::Value)
    }
}

impl Serialize for AutosizableValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AutosizableValue::Autosize => serializer.serialize_str("Autosize"),
            AutosizableValue::Value(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for AutosizableValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AutosizableVisitor)
    }
}

struct AutosizableVisitor;

impl<'de> Visitor<'de> for AutosizableVisitor {
    type Value = AutosizableValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a number or the string \"Autosize\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(AutosizableValue::Value(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(AutosizableValue::Value(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(AutosizableValue::Value(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(v), &self))
    }
}
