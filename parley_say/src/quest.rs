//! Two-phase orchestration over a whole quest's say node.

use parley_data::ConversationSet;
use serde::{Deserialize, Serialize};

use crate::parse::{ParseWarning, parse_conversation};
use crate::serialize::serialize_conversation;
use crate::tree::{Node, SubNode};

/// Phase slot keys inside a quest's say node.
const START_PHASE: &str = "0";
const END_PHASE: &str = "1";

/// Both dialogue phases of one quest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestConversations {
    /// Spoken when the quest is offered.
    pub start: ConversationSet,
    /// Spoken when the quest is turned in.
    pub end: ConversationSet,
}

/// Parse both phases of a quest's say node.
///
/// Real game data sometimes ships without the start phase group; an absent
/// or non-group phase parses as an empty set with a [`ParseWarning::MissingPhase`]
/// warning instead of failing the quest.
pub fn parse_quest_say(say: &SubNode, quest_id: u32) -> (QuestConversations, Vec<ParseWarning>) {
    let mut warnings = Vec::new();
    let start = parse_phase(say, START_PHASE, quest_id, &mut warnings);
    let end = parse_phase(say, END_PHASE, quest_id, &mut warnings);
    (QuestConversations { start, end }, warnings)
}

fn parse_phase(
    say: &SubNode,
    key: &str,
    quest_id: u32,
    warnings: &mut Vec<ParseWarning>,
) -> ConversationSet {
    match say.get(key) {
        Some(Node::Sub(phase)) => {
            let (set, mut phase_warnings) = parse_conversation(phase, quest_id);
            warnings.append(&mut phase_warnings);
            set
        },
        _ => {
            warnings.push(ParseWarning::MissingPhase {
                quest_id,
                key: key.to_string(),
            });
            ConversationSet::default()
        },
    }
}

/// Build a fresh say node holding both phases, ready to replace the
/// persisted one.
///
/// When the quest's previous say node is supplied, each phase's old `stop`
/// subtree is carried into the serializer's merge mode so constructs the
/// model does not carry survive the save.
pub fn build_quest_say(conv: &QuestConversations, existing: Option<&SubNode>) -> SubNode {
    let mut say = SubNode::new();
    say.push(
        START_PHASE,
        Node::Sub(serialize_conversation(
            &conv.start,
            existing_stop(existing, START_PHASE),
        )),
    );
    say.push(
        END_PHASE,
        Node::Sub(serialize_conversation(
            &conv.end,
            existing_stop(existing, END_PHASE),
        )),
    );
    say
}

fn existing_stop(existing: Option<&SubNode>, phase: &str) -> Option<SubNode> {
    existing?
        .get(phase)?
        .as_sub()?
        .get("stop")?
        .as_sub()
        .cloned()
}
