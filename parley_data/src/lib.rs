//! Shared data model for parley quest dialogue.

pub mod defs;
pub mod stop;
pub mod validate;

pub use defs::*;
pub use stop::{ConditionKind, UnknownConditionKind};
pub use validate::{ValidationError, validate_conversation};
