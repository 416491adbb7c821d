mod node;
mod registry;
mod tree;

pub use {
    node::MenuNode,
    registry::{DispatchId, IdentifierRegistry, ItemKey, MAX_TRACKED_ITEMS},
    tree::{MenuEntry, MenuTree},
};
