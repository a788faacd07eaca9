use std::fmt;

use serde::{Deserialize, Serialize};

/// Prerequisite categories a `stop` refusal dialogue can be keyed by.
///
/// This is a closed set: the container format defines exactly these kinds,
/// so a new kind is a code change here, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionKind {
    /// Not enough of a required item.
    Item,
    /// Hunt count below the required threshold.
    Mob,
    /// Later-version alias for hunt requirements.
    Monster,
    /// Wrong NPC, or the required NPC is absent from the map.
    Npc,
    /// A prerequisite quest is not in the required state.
    Quest,
    /// Fallback chat when any other requirement is unmet.
    Default,
    /// A quest-info record requirement is unmet.
    Info,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 7] = [
        ConditionKind::Item,
        ConditionKind::Mob,
        ConditionKind::Monster,
        ConditionKind::Npc,
        ConditionKind::Quest,
        ConditionKind::Default,
        ConditionKind::Info,
    ];

    /// Case-insensitive lookup from a wire name.
    ///
    /// # Errors
    /// Returns [`UnknownConditionKind`] for names outside the closed set.
    pub fn from_name(name: &str) -> Result<ConditionKind, UnknownConditionKind> {
        for kind in ConditionKind::ALL {
            if name.eq_ignore_ascii_case(kind.name()) {
                return Ok(kind);
            }
        }
        Err(UnknownConditionKind(name.to_string()))
    }

    /// Canonical lowercase name written back to the tree.
    pub fn name(self) -> &'static str {
        match self {
            ConditionKind::Item => "item",
            ConditionKind::Mob => "mob",
            ConditionKind::Monster => "monster",
            ConditionKind::Npc => "npc",
            ConditionKind::Quest => "quest",
            ConditionKind::Default => "default",
            ConditionKind::Info => "info",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup error for a condition name outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownConditionKind(pub String);

impl fmt::Display for UnknownConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stop condition kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownConditionKind {}
