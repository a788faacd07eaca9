use parley_data::{ConditionKind, LineKind};
use parley_say::{Node, ParseWarning, SubNode, build_quest_say, parse_quest_say};

const QUEST_ID: u32 = 57106;

fn group(entries: &[&str]) -> Node {
    let mut sub = SubNode::new();
    for (index, text) in entries.iter().enumerate() {
        sub.push_str(index.to_string(), *text);
    }
    Node::Sub(sub)
}

fn sample_say() -> SubNode {
    let mut start = SubNode::new();
    start.push_str("0", "Please get #b20 #t4000331#s#k for my sister.");
    start.push("yes", group(&["Thank you!"]));
    start.push("no", group(&["Oh, okay..."]));

    let mut end_stop = SubNode::new();
    end_stop.push("item", group(&["You're still short on items."]));
    let mut end = SubNode::new();
    end.push_str("0", "Did you bring them all?");
    end.push("stop", Node::Sub(end_stop));

    let mut say = SubNode::new();
    say.push("0", Node::Sub(start));
    say.push("1", Node::Sub(end));
    say
}

#[test]
fn both_phases_parse_from_their_slots() {
    let (conv, warnings) = parse_quest_say(&sample_say(), QUEST_ID);
    assert!(warnings.is_empty());

    assert_eq!(conv.start.lines.len(), 1);
    assert_eq!(conv.start.lines[0].kind(), LineKind::YesNo);
    assert!(conv.start.stop_branches.is_empty());

    assert_eq!(conv.end.lines.len(), 1);
    assert_eq!(
        conv.end.stop_branch(ConditionKind::Item).unwrap().responses,
        vec!["You're still short on items.".to_string()]
    );
}

#[test]
fn missing_start_phase_warns_and_parses_empty() {
    let mut say = SubNode::new();
    let mut end = SubNode::new();
    end.push_str("0", "Done already?");
    say.push("1", Node::Sub(end));

    let (conv, warnings) = parse_quest_say(&say, QUEST_ID);
    assert!(conv.start.lines.is_empty());
    assert_eq!(conv.end.lines.len(), 1);
    assert_eq!(
        warnings,
        vec![ParseWarning::MissingPhase {
            quest_id: QUEST_ID,
            key: "0".to_string()
        }]
    );
}

#[test]
fn phase_slot_holding_a_leaf_counts_as_missing() {
    let mut say = SubNode::new();
    say.push_str("0", "not a group");
    say.push("1", Node::Sub(SubNode::new()));

    let (conv, warnings) = parse_quest_say(&say, QUEST_ID);
    assert!(conv.start.lines.is_empty());
    assert_eq!(
        warnings,
        vec![ParseWarning::MissingPhase {
            quest_id: QUEST_ID,
            key: "0".to_string()
        }]
    );
}

#[test]
fn build_round_trips_both_phases() {
    let (conv, _) = parse_quest_say(&sample_say(), QUEST_ID);
    let rebuilt = build_quest_say(&conv, None);

    let keys: Vec<&str> = rebuilt.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["0", "1"]);

    let (reparsed, warnings) = parse_quest_say(&rebuilt, QUEST_ID);
    assert!(warnings.is_empty());
    assert_eq!(reparsed, conv);
}

#[test]
fn build_with_existing_node_merges_each_phases_stop_subtree() {
    // The persisted end phase carries a nested group the model skips.
    let mut say = sample_say();
    let end_stop = say
        .get_mut("1")
        .and_then(Node::as_sub_mut)
        .and_then(|phase| phase.get_mut("stop"))
        .and_then(Node::as_sub_mut)
        .unwrap();
    let item = end_stop.get_mut("item").and_then(Node::as_sub_mut).unwrap();
    item.push("illustration", Node::Sub(SubNode::new()));

    let (mut conv, _) = parse_quest_say(&say, QUEST_ID);
    conv.end.stop_branch_mut(ConditionKind::Item).responses[0] = "Still two short.".to_string();

    let rebuilt = build_quest_say(&conv, Some(&say));
    let item = rebuilt
        .get("1")
        .and_then(Node::as_sub)
        .and_then(|phase| phase.get("stop"))
        .and_then(Node::as_sub)
        .and_then(|stop| stop.get("item"))
        .and_then(Node::as_sub)
        .unwrap();
    assert_eq!(item.get("0").and_then(Node::as_str), Some("Still two short."));
    assert!(item.get("illustration").is_some());

    // The start phase had no stop subtree to merge; it still serializes.
    let start_stop = rebuilt
        .get("0")
        .and_then(Node::as_sub)
        .and_then(|phase| phase.get("stop"))
        .and_then(Node::as_sub)
        .unwrap();
    assert!(start_stop.is_empty());
}
