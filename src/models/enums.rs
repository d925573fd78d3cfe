use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(TestCategory {
    BloodSugar => "blood_sugar",
    Cholesterol => "cholesterol",
    Hemoglobin => "hemoglobin",
    Creatinine => "creatinine",
    BloodPressure => "blood_pressure",
});

str_enum!(ResultStatus {
    Normal => "normal",
    Low => "low",
    High => "high",
    Critical => "critical",
    Unknown => "unknown",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_round_trip() {
        for (variant, s) in [
            (TestCategory::BloodSugar, "blood_sugar"),
            (TestCategory::Cholesterol, "cholesterol"),
            (TestCategory::Hemoglobin, "hemoglobin"),
            (TestCategory::Creatinine, "creatinine"),
            (TestCategory::BloodPressure, "blood_pressure"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(TestCategory::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn result_status_round_trip() {
        for (variant, s) in [
            (ResultStatus::Normal, "normal"),
            (ResultStatus::Low, "low"),
            (ResultStatus::High, "high"),
            (ResultStatus::Critical, "critical"),
            (ResultStatus::Unknown, "unknown"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ResultStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        assert!(TestCategory::from_str("blood type").is_err());
        assert!(ResultStatus::from_str("elevated").is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ResultStatus::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: ResultStatus = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(back, ResultStatus::Unknown);
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&TestCategory::BloodSugar).unwrap();
        assert_eq!(json, "\"blood_sugar\"");
    }
}
