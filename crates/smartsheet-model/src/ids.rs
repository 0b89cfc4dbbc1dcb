use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Numeric identifier of a Smartsheet sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetId(u64);

impl SheetId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for SheetId {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptySheetId);
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ModelError::InvalidSheetId(value.to_string()))
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SheetId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numeric_id() {
        let id: SheetId = " 3002834590427012 ".parse().unwrap();
        assert_eq!(id.get(), 3_002_834_590_427_012);
        assert_eq!(id.to_string(), "3002834590427012");
    }

    #[test]
    fn rejects_empty_and_non_numeric() {
        assert_eq!("  ".parse::<SheetId>(), Err(ModelError::EmptySheetId));
        assert_eq!(
            "abc".parse::<SheetId>(),
            Err(ModelError::InvalidSheetId("abc".to_string()))
        );
        assert!("-5".parse::<SheetId>().is_err());
    }
}
