use crate::{IdentifierRegistry, ItemKey, MenuNode};

/// A menu entry ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Horizontal separator line.
    Separator,
    /// Activatable leaf.
    Item {
        /// Display text.
        title: String,
        /// Whether the user can activate it.
        enabled: bool,
        /// Whether it shows a check mark.
        checked: bool,
        /// Native key, `None` for entries that never report clicks.
        key: Option<ItemKey>,
    },
    /// Nested menu.
    Submenu {
        /// Display text.
        title: String,
        /// Whether the submenu can be opened.
        enabled: bool,
        /// Child entries.
        entries: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    /// Disabled, untitled, non-dispatching leaf used in place of an empty menu.
    pub fn placeholder() -> Self {
        MenuEntry::Item {
            title: String::new(),
            enabled: false,
            checked: false,
            key: None,
        }
    }
}

/// A complete menu built from parent-supplied nodes.
///
/// Never empty: a menu with nothing but separators is replaced by a single
/// [`MenuEntry::placeholder`], since some native menu hosts reject menus
/// without items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    generation: u64,
    entries: Vec<MenuEntry>,
}

impl MenuTree {
    /// Build a tree from `nodes`, registering every leaf with `registry`.
    ///
    /// Leaves are registered in pre-order, siblings left to right, so a given
    /// input always yields the same dispatch ids.
    pub fn build(nodes: &[MenuNode], registry: &mut IdentifierRegistry) -> Self {
        let entries = build_entries(nodes, registry);
        let mut tree = Self {
            generation: registry.generation(),
            entries,
        };

        if tree.renders_empty() {
            tree.entries = vec![MenuEntry::placeholder()];
        }

        tree
    }

    /// Menu consisting of the placeholder entry only.
    pub fn placeholder(generation: u64) -> Self {
        Self {
            generation,
            entries: vec![MenuEntry::placeholder()],
        }
    }

    /// Top-level entries.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Registry generation this tree was built against.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Keys of all dispatching leaves, in registration order.
    pub fn item_keys(&self) -> Vec<ItemKey> {
        let mut keys = Vec::new();
        collect_keys(&self.entries, &mut keys);
        keys
    }

    fn renders_empty(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| matches!(entry, MenuEntry::Separator))
    }
}

fn build_entries(nodes: &[MenuNode], registry: &mut IdentifierRegistry) -> Vec<MenuEntry> {
    nodes
        .iter()
        .map(|node| {
            if node.separator {
                MenuEntry::Separator
            } else if node.is_submenu() {
                MenuEntry::Submenu {
                    title: node.title.clone(),
                    enabled: node.enabled,
                    entries: build_entries(&node.children, registry),
                }
            } else {
                let dispatch = registry.register(&node.id);
                MenuEntry::Item {
                    title: node.title.clone(),
                    enabled: node.enabled,
                    checked: node.checked,
                    key: Some(registry.key_for(dispatch)),
                }
            }
        })
        .collect()
}

fn collect_keys(entries: &[MenuEntry], keys: &mut Vec<ItemKey>) {
    for entry in entries {
        match entry {
            MenuEntry::Item { key: Some(key), .. } => keys.push(*key),
            MenuEntry::Submenu { entries, .. } => collect_keys(entries, keys),
            _ => {}
        }
    }
}
