use std::fmt;
use serde::Serialize;
use thiserror::Error;
use super::position::Position;

/// Number of name fields per position
pub const SLOTS_PER_POSITION: usize = 2;

/// One empty field in the form, reported back when a submission is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingField {
    pub position: Position,
    pub slot: usize,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} player {}", self.position, self.slot + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a player for every position! Missing: {}", format_missing(.missing))]
    Incomplete { missing: Vec<MissingField> },

    #[error("Invalid player slot {slot} (expected 0 or 1)")]
    InvalidSlot { slot: usize },
}

fn format_missing(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The ten name fields, two per position. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerForm {
    slots: [[String; SLOTS_PER_POSITION]; 5],
}

/// A fully filled form: both names for every position, in position order
pub type CompletePairs = [(Position, [String; SLOTS_PER_POSITION]); 5];

impl PlayerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_player_name(
        &mut self,
        position: Position,
        slot: usize,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if slot >= SLOTS_PER_POSITION {
            return Err(FormError::InvalidSlot { slot });
        }
        self.slots[position.index()][slot] = value.into();
        Ok(())
    }

    pub fn slots(&self, position: Position) -> &[String; SLOTS_PER_POSITION] {
        &self.slots[position.index()]
    }

    /// Clears every field back to an empty string
    pub fn reset(&mut self) {
        self.slots = Default::default();
    }
}

/// Checks that all ten fields are filled. Whitespace-only names count as empty.
pub fn validate_form(form: &PlayerForm) -> Result<CompletePairs, FormError> {
    let missing: Vec<MissingField> = Position::ALL
        .iter()
        .flat_map(move |&position| {
            form.slots(position)
                .iter()
                .enumerate()
                .filter(|(_, name)| name.trim().is_empty())
                .map(move |(slot, _)| MissingField { position, slot })
        })
        .collect();

    if !missing.is_empty() {
        return Err(FormError::Incomplete { missing });
    }

    Ok(Position::ALL.map(|position| (position, form.slots(position).clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PlayerForm {
        let mut form = PlayerForm::new();
        let names = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
        for (i, position) in Position::ALL.iter().enumerate() {
            form.set_player_name(*position, 0, names[i * 2]).unwrap();
            form.set_player_name(*position, 1, names[i * 2 + 1]).unwrap();
        }
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = PlayerForm::new();
        for position in Position::ALL {
            assert_eq!(form.slots(position), &[String::new(), String::new()]);
        }
    }

    #[test]
    fn test_set_player_name_rejects_bad_slot() {
        let mut form = PlayerForm::new();
        let err = form.set_player_name(Position::Mid, 2, "Faker").unwrap_err();
        assert_eq!(err, FormError::InvalidSlot { slot: 2 });
        assert_eq!(form, PlayerForm::new());
    }

    #[test]
    fn test_validate_complete_form() {
        let pairs = validate_form(&filled_form()).unwrap();
        assert_eq!(pairs[0], (Position::Top, ["A".to_string(), "B".to_string()]));
        assert_eq!(pairs[4], (Position::Support, ["I".to_string(), "J".to_string()]));
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let mut form = filled_form();
        form.set_player_name(Position::Jungle, 1, "").unwrap();
        form.set_player_name(Position::Adc, 0, "   ").unwrap();

        match validate_form(&form) {
            Err(FormError::Incomplete { missing }) => {
                assert_eq!(
                    missing,
                    vec![
                        MissingField { position: Position::Jungle, slot: 1 },
                        MissingField { position: Position::Adc, slot: 0 },
                    ]
                );
            }
            other => panic!("expected incomplete form, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_message() {
        let err = validate_form(&PlayerForm::new()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Please enter a player for every position!"));
        assert!(message.contains("TOP player 1"));
        assert!(message.contains("SUPPORT player 2"));
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, PlayerForm::new());
    }
}
