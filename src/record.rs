//! The validated in-memory record model.
//!
//! A [`Record`] is one configured music-disc entry; a [`RecordSet`] is the
//! full loaded collection. Both are immutable after the single load pass —
//! every provider query reads them without locking.

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::ident::ResourceId;

// =============================================================================
// RecipeInput
// =============================================================================

/// The crafting ingredient configured for a record.
///
/// Present only when the config entry carries an `item` field; a record
/// without one is simply not craftable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeInput {
    /// Identifier of the ingredient item (e.g. `"minecraft:diamond"`).
    pub item: String,
    /// Item metadata. Defaults to 0 when the config omits `meta`.
    pub meta: i32,
}

// =============================================================================
// RecordItem
// =============================================================================

/// The host-facing item payload for one record.
///
/// Built at most once per record, on first demand, via [`Record::item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordItem {
    /// The sound this item triggers when played.
    pub sound: ResourceId,
    /// Track length in seconds.
    pub length_seconds: u32,
    /// Comparator output strength while the disc plays.
    pub comparator_value: u8,
    /// Maximum stack size; discs never stack.
    pub max_stack_size: u8,
}

// =============================================================================
// Record
// =============================================================================

/// One configured record, validated and immutable.
///
/// The `key` (the config's `filename` field) is the stable identity: it is
/// the map key in [`RecordSet`] and the file stem of every derived virtual
/// path. The sound identifier is always `<namespace>:<key>`.
#[derive(Debug)]
pub struct Record {
    key: String,
    display_name: String,
    length_seconds: u32,
    location: ResourceId,
    recipe: Option<RecipeInput>,
    item: OnceLock<Arc<RecordItem>>,
}

impl Record {
    /// Create a record. Only the config loader constructs these.
    pub(crate) fn new(
        key: String,
        display_name: String,
        length_seconds: u32,
        location: ResourceId,
        recipe: Option<RecipeInput>,
    ) -> Self {
        Self {
            key,
            display_name,
            length_seconds,
            location,
            recipe,
            item: OnceLock::new(),
        }
    }

    /// The stable file stem used for all derived paths.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The human-readable name shown to players.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Track length in seconds. Always positive.
    pub fn length_seconds(&self) -> u32 {
        self.length_seconds
    }

    /// The sound identifier, `<namespace>:<key>`.
    pub fn sound(&self) -> &ResourceId {
        &self.location
    }

    /// The crafting ingredient, if this record is craftable.
    pub fn recipe(&self) -> Option<&RecipeInput> {
        self.recipe.as_ref()
    }

    /// Get the item payload for this record, building it on first demand.
    ///
    /// Construction happens at most once; concurrent callers race on the
    /// cell and every winner/loser observes the same instance.
    pub fn item(&self) -> &Arc<RecordItem> {
        self.item.get_or_init(|| {
            debug!(key = %self.key, sound = %self.location, "building record item");
            Arc::new(RecordItem {
                sound: self.location.clone(),
                length_seconds: self.length_seconds,
                comparator_value: 1,
                max_stack_size: 1,
            })
        })
    }
}

// =============================================================================
// RecordSet
// =============================================================================

/// The loaded collection of records, keyed by [`Record::key`].
///
/// Iteration order is config source order — it determines entry order in the
/// synthesized aggregate files (sound manifest, translations) and in list
/// results.
#[derive(Debug, Default)]
pub struct RecordSet {
    entries: Vec<Record>,
    index: FxHashMap<String, usize>,
}

impl RecordSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, failing if the key is already present.
    ///
    /// Returns the rejected record on collision (first-wins policy).
    pub(crate) fn insert(&mut self, record: Record) -> Result<(), Record> {
        if self.index.contains_key(record.key()) {
            return Err(record);
        }
        self.index.insert(record.key().to_string(), self.entries.len());
        self.entries.push(record);
        Ok(())
    }

    /// Look up a record by key.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Look up a record by insertion index.
    pub fn get_index(&self, index: usize) -> Option<&Record> {
        self.entries.get(index)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter()
    }

    /// Iterate record keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Record::key)
    }

    /// Iterate sound identifiers in source order, one per record.
    pub fn sounds(&self) -> impl Iterator<Item = &ResourceId> {
        self.entries.iter().map(Record::sound)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
