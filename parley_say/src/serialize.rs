//! Conversation serialization back into the property tree shape.

use parley_data::{ConversationSet, LineKind};

use crate::tree::{Node, SubNode};

/// Serialize one phase back into a freshly built property group.
///
/// Line keys are re-indexed contiguously from `"0"`; original sparse
/// numbering is not preserved. Each line's `yes`/`no` groups are emitted as
/// siblings immediately after the line so a re-parse attaches them to the
/// same utterance. The top-level `ask` leaf is derived from the line texts,
/// never from a cached flag.
///
/// When `existing_stop` is supplied (the `stop` group from the previously
/// persisted node), matching condition-kind children are reused: the string
/// leaves this model owns are rewritten in place while unmodeled subtrees
/// stay untouched. Serializing the same set into the same node twice
/// therefore yields the same result as doing it once.
pub fn serialize_conversation(set: &ConversationSet, existing_stop: Option<SubNode>) -> SubNode {
    let mut out = SubNode::new();

    let mut has_ask = false;
    for (index, line) in set.lines.iter().enumerate() {
        out.push_str(index.to_string(), line.text.clone());
        if !line.yes_responses.is_empty() {
            out.push("yes", Node::Sub(indexed_strings(&line.yes_responses)));
        }
        if !line.no_responses.is_empty() {
            out.push("no", Node::Sub(indexed_strings(&line.no_responses)));
        }
        if line.kind() == LineKind::Ask {
            has_ask = true;
        }
    }
    if has_ask {
        out.push_int("ask", 1);
    }

    let mut stop = existing_stop.unwrap_or_default();
    for branch in &set.stop_branches {
        if branch.responses.is_empty() {
            continue;
        }
        let name = branch.condition_kind.name();
        match stop.get_mut(name) {
            Some(Node::Sub(group)) => rewrite_responses(group, &branch.responses),
            Some(other) => *other = Node::Sub(indexed_strings(&branch.responses)),
            None => stop.push(name, Node::Sub(indexed_strings(&branch.responses))),
        }
    }
    out.push("stop", Node::Sub(stop));

    out
}

/// Build a group of string leaves keyed `"0".."n"`.
fn indexed_strings(texts: &[String]) -> SubNode {
    let mut group = SubNode::new();
    for (index, text) in texts.iter().enumerate() {
        group.push_str(index.to_string(), text.clone());
    }
    group
}

/// Replace the integer-keyed string leaves of a reused stop branch, keeping
/// anything else (nested groups newer game versions put here) in place.
fn rewrite_responses(group: &mut SubNode, responses: &[String]) {
    group.retain(|key, node| !(key.parse::<i64>().is_ok() && matches!(node, Node::Str(_))));
    for (index, text) in responses.iter().enumerate() {
        group.push_str(index.to_string(), text.clone());
    }
}
