//! Mapping between native menu item keys and protocol ids.

use std::{collections::HashMap, fmt};

use tracing::warn;

/// Maximum number of addressable leaves per menu.
///
/// Leaves past this bound are still rendered but never produce `clicked`.
pub const MAX_TRACKED_ITEMS: usize = 4096;

/// Numeric handle assigned to a leaf during menu construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DispatchId(u32);

impl DispatchId {
    /// Wrap a raw dispatch id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DispatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key attached to a native menu item: the menu generation it was built for
/// plus its dispatch id. Rendered as `"<generation>.<dispatch>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey {
    /// Generation of the registry that issued the dispatch id.
    pub generation: u64,
    /// Dispatch id within that generation.
    pub dispatch: DispatchId,
}

impl ItemKey {
    /// Parse a key previously produced by `to_string`.
    pub fn parse(text: &str) -> Option<Self> {
        let (generation, dispatch) = text.split_once('.')?;
        Some(Self {
            generation: generation.parse().ok()?,
            dispatch: DispatchId(dispatch.parse().ok()?),
        })
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.generation, self.dispatch)
    }
}

/// Tracks which protocol id each dispatch id of the live menu stands for.
///
/// Rebuilt from scratch for every menu. Each rebuild bumps the generation so
/// keys handed out for an older menu never resolve against a newer one.
#[derive(Debug, Clone)]
pub struct IdentifierRegistry {
    entries: HashMap<DispatchId, String>,
    next_id: u32,
    generation: u64,
    capacity: usize,
    overflowed: usize,
}

impl Default for IdentifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierRegistry {
    /// Empty registry with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_TRACKED_ITEMS)
    }

    /// Empty registry that tracks at most `capacity` leaves.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
            generation: 0,
            capacity,
            overflowed: 0,
        }
    }

    /// A fresh, already reset registry one generation after this one.
    ///
    /// Lets a new menu be built without disturbing the live registry until
    /// the new menu is in place.
    pub fn successor(&self) -> Self {
        let mut next = Self::with_capacity(self.capacity);
        next.generation = self.generation;
        next.reset();
        next
    }

    /// Forget every entry and restart dispatch ids at 1.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.next_id = 1;
        self.generation += 1;
        self.overflowed = 0;
    }

    /// Assign the next dispatch id to the leaf with protocol id `id`.
    ///
    /// The id is always assigned so numbering stays deterministic, but only
    /// the first `capacity` leaves are recorded for resolution.
    pub fn register(&mut self, id: &str) -> DispatchId {
        let dispatch = DispatchId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        if self.entries.len() < self.capacity {
            self.entries.insert(dispatch, id.to_string());
        } else {
            self.overflowed += 1;
            if self.overflowed == 1 {
                warn!(
                    capacity = self.capacity,
                    "Menu exceeds tracked item capacity, extra items will not report clicks"
                );
            }
        }

        dispatch
    }

    /// Protocol id recorded for `dispatch`, if any.
    pub fn resolve(&self, dispatch: DispatchId) -> Option<&str> {
        self.entries.get(&dispatch).map(String::as_str)
    }

    /// Resolve a native item key, rejecting keys from other generations.
    pub fn resolve_key(&self, key: ItemKey) -> Option<&str> {
        if key.generation != self.generation {
            return None;
        }
        self.resolve(key.dispatch)
    }

    /// Native key for `dispatch` in the current generation.
    pub fn key_for(&self, dispatch: DispatchId) -> ItemKey {
        ItemKey {
            generation: self.generation,
            dispatch,
        }
    }

    /// Current generation. Starts at 0 and grows with every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of resolvable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is resolvable.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Leaves registered past capacity since the last reset.
    pub fn overflowed(&self) -> usize {
        self.overflowed
    }
}
