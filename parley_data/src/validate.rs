use std::collections::HashSet;
use std::fmt;

use crate::defs::ConversationSet;
use crate::stop::ConditionKind;

/// Structural problem in an edited conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateStopKind { kind: ConditionKind },
    EmptyStopBranch { kind: ConditionKind },
    EmptyLineText { index: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateStopKind { kind } => {
                write!(f, "duplicate stop branch for '{kind}'")
            },
            ValidationError::EmptyStopBranch { kind } => {
                write!(f, "stop branch '{kind}' has no responses")
            },
            ValidationError::EmptyLineText { index } => {
                write!(f, "dialogue line {index} has empty text")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check the invariants an in-place edit can break before serializing.
///
/// The parser upholds these on its own output; this exists for conversations
/// assembled or mutated by an editor frontend. Pure report, no mutation.
pub fn validate_conversation(set: &ConversationSet) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for branch in &set.stop_branches {
        if !seen.insert(branch.condition_kind) {
            errors.push(ValidationError::DuplicateStopKind {
                kind: branch.condition_kind,
            });
        }
        if branch.responses.is_empty() {
            errors.push(ValidationError::EmptyStopBranch {
                kind: branch.condition_kind,
            });
        }
    }

    for (index, line) in set.lines.iter().enumerate() {
        if line.text.is_empty() {
            errors.push(ValidationError::EmptyLineText { index });
        }
    }

    errors
}
