pub mod position;
pub mod submission;

pub use position::Position;
pub use submission::{validate_form, CompletePairs, FormError, PlayerForm};
