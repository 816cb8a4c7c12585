use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Axle counts the regulator defines a rate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AxleClass {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Nine,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0} axles is not a legal ANTT axle class")]
pub struct IllegalAxleCount(pub u8);

impl AxleClass {
    pub const ALL: [AxleClass; 7] = [
        AxleClass::Two,
        AxleClass::Three,
        AxleClass::Four,
        AxleClass::Five,
        AxleClass::Six,
        AxleClass::Seven,
        AxleClass::Nine,
    ];

    pub fn count(&self) -> u8 {
        match self {
            AxleClass::Two => 2,
            AxleClass::Three => 3,
            AxleClass::Four => 4,
            AxleClass::Five => 5,
            AxleClass::Six => 6,
            AxleClass::Seven => 7,
            AxleClass::Nine => 9,
        }
    }
}

impl TryFrom<u8> for AxleClass {
    type Error = IllegalAxleCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AxleClass::ALL
            .into_iter()
            .find(|class| class.count() == value)
            .ok_or(IllegalAxleCount(value))
    }
}

impl From<AxleClass> for u8 {
    fn from(value: AxleClass) -> Self {
        value.count()
    }
}

impl Display for AxleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_counts() {
        for count in [2, 3, 4, 5, 6, 7, 9] {
            let class = AxleClass::try_from(count).unwrap();
            assert_eq!(class.count(), count);
        }
    }

    #[test]
    fn test_illegal_counts() {
        for count in [0, 1, 8, 10, 255] {
            assert_eq!(AxleClass::try_from(count), Err(IllegalAxleCount(count)));
        }
    }

    #[test]
    fn test_serde_as_integer() {
        assert_eq!(serde_json::to_string(&AxleClass::Nine).unwrap(), "9");
        assert_eq!(
            serde_json::from_str::<AxleClass>("5").unwrap(),
            AxleClass::Five
        );
        assert!(serde_json::from_str::<AxleClass>("8").is_err());
    }
}
