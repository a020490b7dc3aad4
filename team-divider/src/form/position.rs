use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// The five lane positions, in the order they are entered and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Top,
        Position::Jungle,
        Position::Mid,
        Position::Adc,
        Position::Support,
    ];

    /// Index of this position in `Position::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Top => "TOP",
            Position::Jungle => "JUNGLE",
            Position::Mid => "MID",
            Position::Adc => "ADC",
            Position::Support => "SUPPORT",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown position: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_index() {
        for (i, position) in Position::ALL.iter().enumerate() {
            assert_eq!(position.index(), i);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("adc".parse::<Position>(), Ok(Position::Adc));
        assert_eq!(" Jungle ".parse::<Position>(), Ok(Position::Jungle));
        assert!("bot".parse::<Position>().is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Position::Support).unwrap();
        assert_eq!(json, "\"SUPPORT\"");
        let back: Position = serde_json::from_str("\"MID\"").unwrap();
        assert_eq!(back, Position::Mid);
    }
}
