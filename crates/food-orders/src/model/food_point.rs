use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A vending location with its own catalog and stock.
///
/// The set is closed. Serialized names match the campus signage exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FoodPoint {
    #[serde(rename = "APU")]
    Apu,
    #[serde(rename = "Engineering Block")]
    EngineeringBlock,
    #[serde(rename = "Breakfast and Snacks Food Bus")]
    BreakfastAndSnacksFoodBus,
    #[serde(rename = "Lunch Food Bus")]
    LunchFoodBus,
}

impl FoodPoint {
    /// Every food point, in catalog order.
    pub const ALL: [FoodPoint; 4] = [
        FoodPoint::Apu,
        FoodPoint::EngineeringBlock,
        FoodPoint::BreakfastAndSnacksFoodBus,
        FoodPoint::LunchFoodBus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodPoint::Apu => "APU",
            FoodPoint::EngineeringBlock => "Engineering Block",
            FoodPoint::BreakfastAndSnacksFoodBus => "Breakfast and Snacks Food Bus",
            FoodPoint::LunchFoodBus => "Lunch Food Bus",
        }
    }
}

impl Display for FoodPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known food point.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown food point: {0}")]
pub struct UnknownFoodPoint(pub String);

impl FromStr for FoodPoint {
    type Err = UnknownFoodPoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FoodPoint::ALL
            .into_iter()
            .find(|fp| fp.as_str() == s)
            .ok_or_else(|| UnknownFoodPoint(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_exact_names_only() {
        assert_eq!("APU".parse::<FoodPoint>(), Ok(FoodPoint::Apu));
        assert_eq!(
            "Lunch Food Bus".parse::<FoodPoint>(),
            Ok(FoodPoint::LunchFoodBus)
        );
        assert_eq!(
            "apu".parse::<FoodPoint>(),
            Err(UnknownFoodPoint("apu".to_string()))
        );
        assert!("Library Cafe".parse::<FoodPoint>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&FoodPoint::BreakfastAndSnacksFoodBus).unwrap();
        assert_eq!(json, "\"Breakfast and Snacks Food Bus\"");

        let parsed: FoodPoint = serde_json::from_str("\"Engineering Block\"").unwrap();
        assert_eq!(parsed, FoodPoint::EngineeringBlock);
    }
}
