//! Numeric-type and unit-type vocabularies for schedule limits.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Whether schedule values are real-valued or integer/discrete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericType {
    Continuous,
    Discrete,
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericType::Continuous => write!(f, "Continuous"),
            NumericType::Discrete => write!(f, "Discrete"),
        }
    }
}

impl FromStr for NumericType {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Continuous" => Ok(NumericType::Continuous),
            "Discrete" => Ok(NumericType::Discrete),
            _ => Err(UnknownKeyword {
                vocabulary: "numeric type",
                value: s.to_string(),
            }),
        }
    }
}

/// Recognized unit-type vocabulary for schedule limits.
///
/// These are tags, not dimensional quantities: a limits object declares
/// which tag its values carry, and compatibility checks compare tags
/// for exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Dimensionless,
    Temperature,
    DeltaTemperature,
    ActivityLevel,
    Angle,
    Availability,
    Capacity,
    ControlMode,
    Percent,
    Power,
    MassFlowRate,
    VolumetricFlowRate,
}

impl UnitType {
    /// Canonical spelling used in documents and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Dimensionless => "Dimensionless",
            UnitType::Temperature => "Temperature",
            UnitType::DeltaTemperature => "DeltaTemperature",
            UnitType::ActivityLevel => "ActivityLevel",
            UnitType::Angle => "Angle",
            UnitType::Availability => "Availability",
            UnitType::Capacity => "Capacity",
            UnitType::ControlMode => "ControlMode",
            UnitType::Percent => "Percent",
            UnitType::Power => "Power",
            UnitType::MassFlowRate => "MassFlowRate",
            UnitType::VolumetricFlowRate => "VolumetricFlowRate",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitType {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dimensionless" => Ok(UnitType::Dimensionless),
            "Temperature" => Ok(UnitType::Temperature),
            "DeltaTemperature" => Ok(UnitType::DeltaTemperature),
            "ActivityLevel" => Ok(UnitType::ActivityLevel),
            "Angle" => Ok(UnitType::Angle),
            "Availability" => Ok(UnitType::Availability),
            "Capacity" => Ok(UnitType::Capacity),
            "ControlMode" => Ok(UnitType::ControlMode),
            "Percent" => Ok(UnitType::Percent),
            "Power" => Ok(UnitType::Power),
            "MassFlowRate" => Ok(UnitType::MassFlowRate),
            "VolumetricFlowRate" => Ok(UnitType::VolumetricFlowRate),
            _ => Err(UnknownKeyword {
                vocabulary: "unit type",
                value: s.to_string(),
            }),
        }
    }
}

/// Parse error for the vocabularies above.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {vocabulary} keyword: '{value}'")]
pub struct UnknownKeyword {
    pub vocabulary: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_type_round_trip() {
        for nt in [NumericType::Continuous, NumericType::Discrete] {
            assert_eq!(nt.to_string().parse::<NumericType>().unwrap(), nt);
        }
    }

    #[test]
    fn unit_type_round_trip() {
        let all = [
            UnitType::Dimensionless,
            UnitType::Temperature,
            UnitType::DeltaTemperature,
            UnitType::ActivityLevel,
            UnitType::Angle,
            UnitType::Availability,
            UnitType::Capacity,
            UnitType::ControlMode,
            UnitType::Percent,
            UnitType::Power,
            UnitType::MassFlowRate,
            UnitType::VolumetricFlowRate,
        ];
        for ut in all {
            assert_eq!(ut.as_str().parse::<UnitType>().unwrap(), ut);
        }
    }

    #[test]
    fn unknown_keyword_is_an_error() {
        let err = "Kelvin".parse::<UnitType>().unwrap_err();
        assert!(err.to_string().contains("Kelvin"));
    }
}
