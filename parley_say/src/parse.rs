//! Conversation parsing from one phase of a quest's say tree.

use parley_data::{ConditionKind, ConversationSet, DialogueLine};
use thiserror::Error;

use crate::tree::{Node, SubNode};

/// Dialogue-line keys are small integers; anything at or above this bound is
/// some other numeric-looking property and is not a line.
const LINE_KEY_LIMIT: i64 = 200;

/// Non-fatal diagnostic accumulated during a parse.
///
/// Parsing never aborts on malformed input; the offending subtree is skipped
/// and one of these is recorded for the editor to surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// A `yes`/`no`/`ask` node appeared before any dialogue line.
    #[error("quest {quest_id}: response property '{key}' has no preceding dialogue line")]
    OrphanResponse { quest_id: u32, key: String },
    /// A key neither the line rule nor any literal rule recognizes.
    #[error("quest {quest_id}: unrecognized property '{key}'")]
    UnknownProperty { quest_id: u32, key: String },
    /// A recognized construct the model does not carry; it is skipped.
    #[error("quest {quest_id}: unsupported {construct} at '{key}'")]
    Unsupported {
        quest_id: u32,
        key: String,
        construct: &'static str,
    },
    /// A quest phase slot that is absent or not a property group.
    #[error("quest {quest_id}: phase '{key}' is missing or not a property group")]
    MissingPhase { quest_id: u32, key: String },
}

/// Parse one phase of a quest's dialogue.
///
/// Walks the children of `node` in declared order, which is load-bearing:
/// `yes`/`no`/`ask` properties attach to whichever dialogue line preceded
/// them. Returns a best-effort [`ConversationSet`] plus every warning hit
/// along the way; an input with zero usable children parses to an empty set,
/// not an error. `quest_id` only tags the warnings.
pub fn parse_conversation(node: &SubNode, quest_id: u32) -> (ConversationSet, Vec<ParseWarning>) {
    let mut set = ConversationSet::default();
    let mut warnings = Vec::new();
    // Cursor over the most recently started line, local so the parser stays
    // reentrant.
    let mut current: Option<usize> = None;

    for (key, child) in node.iter() {
        if let Ok(index) = key.parse::<i64>() {
            if index < LINE_KEY_LIMIT {
                match child {
                    Node::Str(text) => {
                        set.lines.push(DialogueLine::new(text.clone()));
                        current = Some(set.lines.len() - 1);
                    },
                    _ => warnings.push(ParseWarning::Unsupported {
                        quest_id,
                        key: key.to_string(),
                        construct: "non-string dialogue line",
                    }),
                }
            } else {
                warnings.push(ParseWarning::UnknownProperty {
                    quest_id,
                    key: key.to_string(),
                });
            }
            continue;
        }

        match key {
            "yes" | "no" => {
                let Some(line) = current.map(|i| &mut set.lines[i]) else {
                    warnings.push(ParseWarning::OrphanResponse {
                        quest_id,
                        key: key.to_string(),
                    });
                    continue;
                };
                let Node::Sub(group) = child else {
                    warnings.push(ParseWarning::Unsupported {
                        quest_id,
                        key: key.to_string(),
                        construct: "non-group response list",
                    });
                    continue;
                };
                let responses = if key == "yes" {
                    &mut line.yes_responses
                } else {
                    &mut line.no_responses
                };
                collect_responses(group, responses, quest_id, &mut warnings);
            },
            "ask" => match current {
                None => warnings.push(ParseWarning::OrphanResponse {
                    quest_id,
                    key: key.to_string(),
                }),
                Some(i) => match child {
                    Node::Int(value) => set.lines[i].is_ask_flagged = *value > 0,
                    _ => warnings.push(ParseWarning::Unsupported {
                        quest_id,
                        key: key.to_string(),
                        construct: "non-integer ask flag",
                    }),
                },
            },
            "lost" => warnings.push(ParseWarning::Unsupported {
                quest_id,
                key: key.to_string(),
                construct: "lost quest item dialogue",
            }),
            "stop" => match child {
                Node::Sub(stop) => parse_stop(stop, &mut set, quest_id, &mut warnings),
                _ => warnings.push(ParseWarning::Unsupported {
                    quest_id,
                    key: key.to_string(),
                    construct: "non-group stop",
                }),
            },
            _ => warnings.push(ParseWarning::UnknownProperty {
                quest_id,
                key: key.to_string(),
            }),
        }
    }

    (set, warnings)
}

/// Fold the children of a `stop` group into per-condition refusal branches.
///
/// Only registry-keyed groups of string leaves are modeled. Conditional
/// continuations after a stop (`yes`/`no`), doubly nested `stop`, and
/// indexed answer-set variants exist in the wild but are skipped with a
/// warning.
fn parse_stop(
    stop: &SubNode,
    set: &mut ConversationSet,
    quest_id: u32,
    warnings: &mut Vec<ParseWarning>,
) {
    for (key, child) in stop.iter() {
        match key {
            "yes" | "no" => {
                warnings.push(ParseWarning::Unsupported {
                    quest_id,
                    key: key.to_string(),
                    construct: "yes/no continuation after stop",
                });
                continue;
            },
            "stop" => {
                warnings.push(ParseWarning::Unsupported {
                    quest_id,
                    key: key.to_string(),
                    construct: "nested stop",
                });
                continue;
            },
            _ => {},
        }
        if key.parse::<i64>().is_ok() {
            warnings.push(ParseWarning::Unsupported {
                quest_id,
                key: key.to_string(),
                construct: "indexed answer set",
            });
            continue;
        }
        let Ok(kind) = ConditionKind::from_name(key) else {
            warnings.push(ParseWarning::UnknownProperty {
                quest_id,
                key: key.to_string(),
            });
            continue;
        };
        let Node::Sub(group) = child else {
            warnings.push(ParseWarning::Unsupported {
                quest_id,
                key: key.to_string(),
                construct: "non-group stop branch",
            });
            continue;
        };
        let mut responses = Vec::new();
        collect_responses(group, &mut responses, quest_id, warnings);
        if !responses.is_empty() {
            // Find-or-create keeps a single branch per kind even when the
            // same kind shows up again later in the group.
            set.stop_branch_mut(kind).responses.extend(responses);
        }
    }
}

/// Gather the integer-keyed string leaves of a response group in declared
/// order. Later game versions nest groups here (e.g. `illustration`); those
/// are warned about and skipped.
fn collect_responses(
    group: &SubNode,
    responses: &mut Vec<String>,
    quest_id: u32,
    warnings: &mut Vec<ParseWarning>,
) {
    for (key, child) in group.iter() {
        if key.parse::<i64>().is_err() {
            warnings.push(ParseWarning::UnknownProperty {
                quest_id,
                key: key.to_string(),
            });
            continue;
        }
        match child {
            Node::Str(text) => responses.push(text.clone()),
            _ => warnings.push(ParseWarning::Unsupported {
                quest_id,
                key: key.to_string(),
                construct: "non-string response",
            }),
        }
    }
}
