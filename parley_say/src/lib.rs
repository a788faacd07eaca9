//! parley_say: parser and serializer for quest NPC conversation trees.
//!
//! Quest dialogue is persisted inside the game's asset container as an
//! ordered key/value property tree. This crate converts one phase of that
//! tree into the [`parley_data`] conversation model and back:
//!
//! - [`parse_conversation`] walks a phase group in declared order and builds
//!   a [`ConversationSet`](parley_data::ConversationSet). It never fails;
//!   malformed or unmodeled subtrees are skipped and reported as
//!   [`ParseWarning`]s for the editor to surface.
//! - [`serialize_conversation`] rebuilds a tree node from the model,
//!   re-indexing lines and responses contiguously. A previously persisted
//!   `stop` subtree can be merged into so constructs the model does not
//!   carry survive a save.
//! - [`parse_quest_say`] / [`build_quest_say`] handle a whole quest's say
//!   node, which holds the start phase under `"0"` and the end phase under
//!   `"1"`.
//!
//! The round-trip contract is semantic, not byte-identical: sparse line keys
//! are compacted and unsupported nested constructs are dropped (with a
//! warning on the way in, and preserved bytes when merge mode is used on the
//! way out).

pub mod parse;
pub mod quest;
pub mod serialize;
pub mod tree;

pub use parse::{ParseWarning, parse_conversation};
pub use quest::{QuestConversations, build_quest_say, parse_quest_say};
pub use serialize::serialize_conversation;
pub use tree::{Node, SubNode};
