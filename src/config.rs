//! Pack configuration and the records config loader.
//!
//! The config document is a single JSON object. Each top-level key is an
//! arbitrary user-chosen tag; each value describes one record:
//!
//! ```json
//! {
//!     "my_disc": {
//!         "name": "My Disc",
//!         "filename": "my_disc",
//!         "length": 185,
//!         "item": "minecraft:diamond",
//!         "meta": 0
//!     }
//! }
//! ```
//!
//! `name`, `filename` and `length` are required; `item` and `meta` are
//! optional. A malformed entry is warned about and skipped — it never aborts
//! the load ([`load_records`] reports skips in the returned [`LoadReport`]).

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::ident::ResourceId;
use crate::record::{RecipeInput, Record, RecordSet};

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "customrecords";

/// Directory searched for backing `.ogg`/`.png` files when none is configured.
pub const DEFAULT_RECORDS_DIR: &str = "config/customrecords";

// =============================================================================
// PackConfig
// =============================================================================

/// Static configuration for the pack.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// The namespace scoping every path this provider owns.
    pub namespace: String,
    /// Directory containing the backing audio/texture files,
    /// `<key>.ogg` and `<key>.png` per record.
    pub records_dir: PathBuf,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            records_dir: PathBuf::from(DEFAULT_RECORDS_DIR),
        }
    }
}

impl PackConfig {
    /// Create a configuration with an explicit namespace and records directory.
    pub fn new(namespace: impl Into<String>, records_dir: impl Into<PathBuf>) -> Self {
        Self {
            namespace: namespace.into(),
            records_dir: records_dir.into(),
        }
    }
}

// =============================================================================
// Load diagnostics
// =============================================================================

/// Why a config entry was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry's value is not a JSON object.
    NotAnObject,
    /// A required field is absent.
    MissingField(&'static str),
    /// A field is present but has the wrong type or an invalid value.
    InvalidField(&'static str),
    /// Another entry already claimed this record key (first wins).
    DuplicateKey(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "entry is not a JSON object"),
            Self::MissingField(field) => {
                write!(f, "missing the required '{field}' field")
            }
            Self::InvalidField(field) => write!(f, "invalid '{field}' field"),
            Self::DuplicateKey(key) => {
                write!(f, "record key '{key}' already used by an earlier entry")
            }
        }
    }
}

/// One skipped config entry: the offending tag and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// The top-level tag of the entry in the config document.
    pub tag: String,
    /// Why the entry was rejected.
    pub reason: SkipReason,
}

/// Result of a load pass: the assembled set plus per-entry diagnostics.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// The successfully loaded records, in source order.
    pub records: RecordSet,
    /// Entries rejected during the pass.
    pub skipped: Vec<SkippedEntry>,
}

impl LoadReport {
    /// Number of successfully loaded entries.
    pub fn loaded(&self) -> usize {
        self.records.len()
    }
}

// =============================================================================
// Loader
// =============================================================================

/// Load records from a config document string.
///
/// Never fails on a malformed individual entry — the entry is skipped with a
/// warning and reported in [`LoadReport::skipped`], and the remainder of the
/// document is still processed. Only an unparsable document or a non-object
/// top level is an error. An empty document loads an empty set.
pub fn load_records(text: &str, config: &PackConfig) -> Result<LoadReport, ConfigError> {
    if text.trim().is_empty() {
        return Ok(LoadReport::default());
    }

    let document: JsonValue = serde_json::from_str(text)?;
    if document.is_null() {
        return Ok(LoadReport::default());
    }
    let entries = document.as_object().ok_or(ConfigError::NotAnObject)?;

    let mut report = LoadReport::default();
    for (tag, value) in entries {
        match parse_entry(value, &config.namespace) {
            Ok(record) => {
                let key = record.key().to_string();
                match report.records.insert(record) {
                    Ok(()) => info!(%tag, %key, "loaded record"),
                    Err(_rejected) => {
                        warn!(
                            %tag,
                            %key,
                            "record key already used by an earlier entry, \
                             this record entry will be skipped"
                        );
                        report.skipped.push(SkippedEntry {
                            tag: tag.clone(),
                            reason: SkipReason::DuplicateKey(key),
                        });
                    }
                }
            }
            Err(reason) => {
                warn!(%tag, %reason, "this record entry will be skipped");
                report.skipped.push(SkippedEntry {
                    tag: tag.clone(),
                    reason,
                });
            }
        }
    }

    info!(loaded = report.loaded(), "finished loading records");
    debug!(records = ?report.records.keys().collect::<Vec<_>>());

    Ok(report)
}

/// Load records from a config file on disk.
///
/// A missing file is treated as an empty document (the pack simply has no
/// records yet); any other I/O failure is an error.
pub fn load_records_file(
    path: impl AsRef<Path>,
    config: &PackConfig,
) -> Result<LoadReport, ConfigError> {
    match fs::read_to_string(path.as_ref()) {
        Ok(text) => load_records(&text, config),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.as_ref().display(), "records config not found, loading no records");
            Ok(LoadReport::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Parse one entry into a record, or explain why it must be skipped.
///
/// All fields are validated before the record is built, so a half-formed
/// record is never observable.
fn parse_entry(value: &JsonValue, namespace: &str) -> Result<Record, SkipReason> {
    let entry = value.as_object().ok_or(SkipReason::NotAnObject)?;

    let display_name = match entry.get("name") {
        Some(v) => v.as_str().ok_or(SkipReason::InvalidField("name"))?,
        None => return Err(SkipReason::MissingField("name")),
    };

    let key = match entry.get("filename") {
        Some(v) => v.as_str().ok_or(SkipReason::InvalidField("filename"))?,
        None => return Err(SkipReason::MissingField("filename")),
    };
    if key.is_empty() {
        return Err(SkipReason::InvalidField("filename"));
    }

    let length = match entry.get("length") {
        Some(v) => as_integer(v).ok_or(SkipReason::InvalidField("length"))?,
        None => return Err(SkipReason::MissingField("length")),
    };
    let length: u32 = u32::try_from(length)
        .ok()
        .filter(|&l| l > 0)
        .ok_or(SkipReason::InvalidField("length"))?;

    let recipe = match entry.get("item") {
        Some(item) => {
            let item = item.as_str().ok_or(SkipReason::InvalidField("item"))?;
            let meta = match entry.get("meta") {
                Some(v) => {
                    let meta = as_integer(v).ok_or(SkipReason::InvalidField("meta"))?;
                    i32::try_from(meta).map_err(|_| SkipReason::InvalidField("meta"))?
                }
                None => {
                    debug!(key, "entry has no 'meta' field, assuming meta=0");
                    0
                }
            };
            Some(RecipeInput {
                item: item.to_string(),
                meta,
            })
        }
        None => {
            // Not an error, the record is just not craftable.
            warn!(
                key,
                "entry has no 'item' field, the record will not be craftable"
            );
            None
        }
    };

    Ok(Record::new(
        key.to_string(),
        display_name.to_string(),
        length,
        ResourceId::new(namespace, key),
        recipe,
    ))
}

/// Read an integer from a JSON number or a numeric string.
///
/// Config files in the wild quote numeric fields, so `"length": "185"` must
/// parse the same as `"length": 185`.
fn as_integer(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
