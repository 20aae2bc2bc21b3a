//! One-shot host registration surfaces.
//!
//! Thin glue between the loaded record set and the host: the pack
//! descriptor for the host's pack-discovery mechanism, the enumerable sound
//! identifiers, and the lazy per-record item factories. The host supplies
//! the consumers; this module only walks the immutable record set.

use std::sync::Arc;

use tracing::{debug, info};

use crate::ident::ResourceId;
use crate::pack::{RecordPack, PACK_NAME};
use crate::record::{RecordItem, RecordSet};

// =============================================================================
// Pack registration
// =============================================================================

/// Where a pack is placed in the host's pack ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackPosition {
    /// Highest priority; overrides lower packs.
    Top,
    /// Lowest priority.
    Bottom,
}

/// Provenance tag attached to a registered pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackSource {
    /// Shipped as part of the program itself.
    BuiltIn,
    /// A user-installed pack.
    Default,
    /// Bundled with a world/save.
    World,
}

/// The descriptor handed to the host's pack-discovery mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackDescriptor {
    /// Stable identifier (the pack's namespace).
    pub id: String,
    /// Display name.
    pub title: String,
    /// Priority placement.
    pub position: PackPosition,
    /// Provenance tag.
    pub source: PackSource,
    /// Whether the pack is always enabled.
    pub required: bool,
}

/// Build the descriptor for a record pack.
///
/// Always top priority and tagged built-in: the synthesized files must win
/// over anything a user pack provides for the same paths.
pub fn pack_descriptor(pack: &RecordPack) -> PackDescriptor {
    PackDescriptor {
        id: pack.router().namespace().to_string(),
        title: PACK_NAME.to_string(),
        position: PackPosition::Top,
        source: PackSource::BuiltIn,
        required: true,
    }
}

/// Register the pack with the host's discovery mechanism.
///
/// One-shot: hands the descriptor and a shared handle to the pack to the
/// host-provided consumer.
pub fn register_pack<F>(pack: &Arc<RecordPack>, consumer: F)
where
    F: FnOnce(PackDescriptor, Arc<RecordPack>),
{
    let descriptor = pack_descriptor(pack);
    debug!(id = %descriptor.id, "registering record pack");
    consumer(descriptor, Arc::clone(pack));
}

// =============================================================================
// Sound registration
// =============================================================================

/// Hand every record's sound identifier to the host's sound registry.
///
/// One call per record, in source order.
pub fn register_sounds<F>(records: &RecordSet, mut register: F)
where
    F: FnMut(&ResourceId),
{
    for sound in records.sounds() {
        debug!(%sound, "initializing sound");
        register(sound);
    }
}

// =============================================================================
// Item registration
// =============================================================================

/// A lazy factory producing the host item for one record.
///
/// Calling it repeatedly returns the same memoized [`RecordItem`].
pub type ItemFactory = Box<dyn Fn() -> Arc<RecordItem> + Send + Sync>;

/// Build the record-key → item-factory map for the host's item registry.
///
/// Each factory defers construction to [`crate::record::Record::item`], so
/// the item object is built at most once per record, on first demand.
pub fn item_factories(records: &Arc<RecordSet>) -> Vec<(String, ItemFactory)> {
    info!(
        count = records.len(),
        "registering an item factory for every loaded record"
    );
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let set = Arc::clone(records);
            let factory: ItemFactory = Box::new(move || {
                let record = set
                    .get_index(index)
                    .expect("record set is immutable after load");
                Arc::clone(record.item())
            });
            (record.key().to_string(), factory)
        })
        .collect()
}
