//! # record-pack
//!
//! A virtual resource pack over a human-edited records config.
//!
//! An operator describes a set of music-disc-like records in one JSON file;
//! this crate validates them into an immutable [`RecordSet`] and exposes a
//! [`RecordPack`] that synthesizes every derived file on demand:
//!
//! - **Sound manifest** (`sounds.json`): one streamed entry per record
//! - **Item models**: a flat-icon model per record
//! - **Translation table** (`lang/en_us.json`): label + display name per record
//! - **Shaped recipes**: one per craftable record
//!
//! The backing audio (`.ogg`) and texture (`.png`) files are the only real
//! files involved — they are passed through from a records directory on
//! disk. Nothing synthesized is ever written to disk or cached: the record
//! set is immutable after load, so every fetch recomputes identical bytes.
//!
//! ## Quick Start
//!
//! ```
//! use record_pack::{load_records, PackConfig, PackResources, RecordPack};
//! use std::sync::Arc;
//!
//! let config = PackConfig::default();
//! let report = load_records(
//!     r#"{"stal_cover": {"name": "Stal (Cover)", "filename": "stal_cover",
//!         "length": 150, "item": "minecraft:diamond"}}"#,
//!     &config,
//! )?;
//!
//! let records = Arc::new(report.records);
//! let pack = RecordPack::new(Arc::clone(&records), config);
//!
//! assert!(pack.exists("assets/customrecords/sounds.json"));
//! assert!(pack.exists("data/customrecords/recipes/stal_cover.json"));
//! let manifest = pack.fetch("assets/customrecords/sounds.json")?;
//! # assert!(!manifest.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Host integration
//!
//! The [`registry`] module carries the one-shot registration surfaces: the
//! pack descriptor for the host's pack discovery, the sound identifiers for
//! its sound registry, and the lazy item factories for its item registry.
//!
//! ## Modules
//!
//! - [`config`]: pack configuration and the records config loader
//! - [`record`]: the validated record model
//! - [`synth`]: on-demand file content synthesis
//! - [`router`]: the virtual path table
//! - [`pack`]: the host-facing provider façade
//! - [`registry`]: host registration glue

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod ident;
pub mod pack;
pub mod record;
pub mod registry;
pub mod router;
pub mod synth;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use record_pack::prelude::*;
/// ```
pub mod prelude {
    // Re-export common items from the crate root
    // (avoids duplication - these are already exported at crate level)

    // Loading
    pub use crate::{load_records, load_records_file, LoadReport, PackConfig};

    // Model
    pub use crate::{RecipeInput, Record, RecordItem, RecordSet, ResourceId};

    // Provider
    pub use crate::{Category, PackError, PackResources, RecordPack};

    // Registration
    pub use crate::{item_factories, register_pack, register_sounds, PackDescriptor};
}

// =============================================================================
// High-Level API
// =============================================================================

pub use config::{
    load_records, load_records_file, LoadReport, PackConfig, SkipReason, SkippedEntry,
    DEFAULT_NAMESPACE, DEFAULT_RECORDS_DIR,
};
pub use pack::{PackResources, RecordPack, PACK_META_PATH, PACK_NAME};

// =============================================================================
// Model and routing
// =============================================================================

pub use ident::ResourceId;
pub use record::{RecipeInput, Record, RecordItem, RecordSet};
pub use router::{Category, PathRouter, Route};

// =============================================================================
// Errors
// =============================================================================

pub use error::{ConfigError, PackError};

// =============================================================================
// Registration glue
// =============================================================================

pub use registry::{
    item_factories, pack_descriptor, register_pack, register_sounds, ItemFactory, PackDescriptor,
    PackPosition, PackSource,
};
