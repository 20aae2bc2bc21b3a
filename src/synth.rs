//! On-demand synthesis of the virtual file contents.
//!
//! Four pure generators turn the loaded [`RecordSet`] into the bytes of the
//! derived files: the sound manifest, per-record item models, the
//! translation table, and per-record shaped recipes. Each is
//! byte-deterministic — the same input always yields identical output — and
//! nothing is cached: the record set is immutable, so recomputing per
//! request is cheap and correct.
//!
//! All output is compact JSON with keys in record source order
//! (serde_json's `preserve_order` feature keeps object insertion order).

use serde_json::{json, Map, Value as JsonValue};

use crate::record::{Record, RecordSet};

/// Filler material in the border slots of every synthesized recipe.
const RECIPE_BORDER_ITEM: &str = "minecraft:black_terracotta";

/// Placeholder returned if a recipe path is fetched for a record that has
/// no recipe. The router excludes such paths, so this is a safety net that
/// keeps the host's recipe scan tolerant.
pub const EMPTY_RECIPE: &[u8] = b"{}";

/// Serialize an in-memory JSON value to compact bytes.
fn to_bytes(value: &JsonValue) -> Vec<u8> {
    serde_json::to_vec(value).expect("serializing an in-memory JSON value cannot fail")
}

/// Synthesize the sound manifest (`sounds.json`).
///
/// One entry per record, keyed by the record key, describing a single
/// streamed sound in the generic playback category pointing at
/// `<namespace>:music/<key>`. An empty set yields `{}`.
///
/// ```json
/// {"stal":{"category":"record","sounds":[{"name":"customrecords:music/stal","stream":true}]}}
/// ```
pub fn sounds_json(records: &RecordSet) -> Vec<u8> {
    let mut manifest = Map::new();
    for record in records {
        let sound = record.sound();
        manifest.insert(
            sound.path().to_string(),
            json!({
                "category": "record",
                "sounds": [{
                    "name": format!("{}:music/{}", sound.namespace(), sound.path()),
                    "stream": true,
                }],
            }),
        );
    }
    to_bytes(&JsonValue::Object(manifest))
}

/// Synthesize the item model for one record key.
///
/// A fixed flat-icon skeleton whose single texture layer points at
/// `<namespace>:items/<key>`. Depends on nothing but the key.
pub fn model_json(namespace: &str, key: &str) -> Vec<u8> {
    to_bytes(&json!({
        "forge_marker": 1,
        "parent": "item/generated",
        "textures": {
            "layer0": format!("{namespace}:items/{key}"),
        },
    }))
}

/// Synthesize the translation table (`lang/en_us.json`).
///
/// Two entries per record: `item.<namespace>.<key>` carries the fixed
/// category label, and `item.<namespace>.<key>.desc` carries the record's
/// display name. The label/description split is deliberate and must not be
/// swapped — hosts render the `.desc` line as the track title.
pub fn lang_json(records: &RecordSet) -> Vec<u8> {
    let mut table = Map::new();
    for record in records {
        let base = format!("item.{}.{}", record.sound().namespace(), record.key());
        table.insert(base.clone(), json!("Music Disc"));
        table.insert(format!("{base}.desc"), json!(record.display_name()));
    }
    to_bytes(&JsonValue::Object(table))
}

/// Synthesize the shaped crafting recipe for one record.
///
/// Returns `None` when the record has no recipe input (not craftable, not
/// an error). The shape is fixed: border filler around the configured
/// ingredient, yielding this record's item.
///
/// The optional `data` tag carries the ingredient's meta value and is
/// emitted only when it is non-zero.
pub fn recipe_json(record: &Record) -> Option<Vec<u8>> {
    let input = record.recipe()?;

    let mut ingredient = Map::new();
    ingredient.insert("item".to_string(), json!(input.item));
    if input.meta != 0 {
        ingredient.insert("data".to_string(), json!(input.meta));
    }

    Some(to_bytes(&json!({
        "type": "minecraft:crafting_shaped",
        "pattern": [" B ", "BIB", " B "],
        "key": {
            "B": { "item": RECIPE_BORDER_ITEM },
            "I": JsonValue::Object(ingredient),
        },
        "result": {
            "item": record.sound().to_string(),
            "count": 1,
        },
    })))
}

/// Synthesize the pack metadata document (`pack.mcmeta`).
pub fn pack_meta_json() -> Vec<u8> {
    to_bytes(&json!({
        "pack": {
            "description": "record-pack's internal resource pack",
            "pack_format": 9,
        },
    }))
}
