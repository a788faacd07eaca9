use serde::{Deserialize, Serialize};

use crate::stop::ConditionKind;

/// One phase (start-quest or end-quest) of a quest's NPC dialogue.
///
/// Built fresh per parse, edited in place by the editor, then handed to the
/// serializer to produce a replacement tree node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversationSet {
    /// NPC utterances in speaking order.
    #[serde(default)]
    pub lines: Vec<DialogueLine>,
    /// Refusal dialogues keyed by unmet-prerequisite kind, at most one per kind.
    #[serde(default)]
    pub stop_branches: Vec<StopBranch>,
}

impl ConversationSet {
    /// Look up the stop branch for `kind`, if present.
    pub fn stop_branch(&self, kind: ConditionKind) -> Option<&StopBranch> {
        self.stop_branches.iter().find(|b| b.condition_kind == kind)
    }

    /// Fetch the stop branch for `kind`, creating an empty one at the end when
    /// missing. Adding to a kind that already has a branch extends it instead
    /// of growing a duplicate.
    pub fn stop_branch_mut(&mut self, kind: ConditionKind) -> &mut StopBranch {
        let pos = match self.stop_branches.iter().position(|b| b.condition_kind == kind) {
            Some(pos) => pos,
            None => {
                self.stop_branches.push(StopBranch {
                    condition_kind: kind,
                    responses: Vec::new(),
                });
                self.stop_branches.len() - 1
            },
        };
        &mut self.stop_branches[pos]
    }
}

/// One NPC utterance plus its immediate yes/no branching.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Raw conversation text. May embed game markup tokens such as `#L0#` or
    /// `#p2101001#`; only the option-menu markers affect classification.
    pub text: String,
    #[serde(default)]
    pub yes_responses: Vec<String>,
    #[serde(default)]
    pub no_responses: Vec<String>,
    /// Set when the enclosing conversation carried an explicit `ask` marker.
    /// Distinct from the markup heuristic [`DialogueLine::kind`] applies.
    #[serde(default)]
    pub is_ask_flagged: bool,
}

impl DialogueLine {
    pub fn new(text: impl Into<String>) -> Self {
        DialogueLine {
            text: text.into(),
            ..DialogueLine::default()
        }
    }

    /// Classify this line from its current content.
    ///
    /// The markup heuristic always wins; otherwise any recorded response makes
    /// the line a yes/no prompt. Computed on demand so edits can never leave a
    /// stale classification behind.
    pub fn kind(&self) -> LineKind {
        if contains_ask_markup(&self.text) {
            LineKind::Ask
        } else if !self.yes_responses.is_empty() || !self.no_responses.is_empty() {
            LineKind::YesNo
        } else {
            LineKind::NextPrev
        }
    }
}

/// How a dialogue line advances: plain next/prev paging, a yes/no prompt, or
/// an in-text multiple-choice menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    NextPrev,
    YesNo,
    Ask,
}

/// Dialogue shown when a named prerequisite is not met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopBranch {
    pub condition_kind: ConditionKind,
    #[serde(default)]
    pub responses: Vec<String>,
}

/// Detect the in-text multiple-choice menu markup (`#L<n>#...#l` option lists).
///
/// `#L0#` alone is enough; `#L1#`/`#L2#`/`#L3#` count only together with a
/// `#l` closer. The grouping is load-bearing and matches the game data.
pub fn contains_ask_markup(text: &str) -> bool {
    text.contains("#L0#")
        || (text.contains("#L1#") || text.contains("#L2#") || text.contains("#L3#"))
            && text.contains("#l")
}
