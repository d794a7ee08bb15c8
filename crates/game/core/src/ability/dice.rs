//! Dice expressions (`NdM`).

use std::fmt;
use std::str::FromStr;

use crate::error::{ErrorSeverity, GameError};

/// Malformed dice expression.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiceError {
    #[error("dice expression '{0}' is not of the form NdM")]
    Malformed(String),

    #[error("dice expression '{0}' needs at least one die with at least one side")]
    Empty(String),
}

impl GameError for DiceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "DICE_MALFORMED",
            Self::Empty(_) => "DICE_EMPTY",
        }
    }
}

/// `count` dice with `sides` faces each, e.g. `2d6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DiceExpr {
    pub count: u32,
    pub sides: u32,
}

impl DiceExpr {
    pub const fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    pub const fn min_total(&self) -> u32 {
        self.count
    }

    pub const fn max_total(&self) -> u32 {
        self.count * self.sides
    }
}

impl FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (count, sides) = trimmed
            .split_once(['d', 'D'])
            .ok_or_else(|| DiceError::Malformed(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| DiceError::Malformed(s.to_string()))
        };
        // "d8" is shorthand for "1d8".
        let count = if count.trim().is_empty() {
            1
        } else {
            parse(count)?
        };
        let sides = parse(sides)?;

        if count == 0 || sides == 0 {
            return Err(DiceError::Empty(s.to_string()));
        }
        Ok(Self { count, sides })
    }
}

impl TryFrom<String> for DiceExpr {
    type Error = DiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DiceExpr> for String {
    fn from(value: DiceExpr) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_notation() {
        assert_eq!("1d8".parse::<DiceExpr>(), Ok(DiceExpr::new(1, 8)));
        assert_eq!(" 3D6 ".parse::<DiceExpr>(), Ok(DiceExpr::new(3, 6)));
        assert_eq!("d4".parse::<DiceExpr>(), Ok(DiceExpr::new(1, 4)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("8".parse::<DiceExpr>(), Err(DiceError::Malformed(_))));
        assert!(matches!("2dx".parse::<DiceExpr>(), Err(DiceError::Malformed(_))));
        assert!(matches!("0d6".parse::<DiceExpr>(), Err(DiceError::Empty(_))));
    }

    #[test]
    fn displays_canonically() {
        assert_eq!(DiceExpr::new(2, 10).to_string(), "2d10");
    }
}
