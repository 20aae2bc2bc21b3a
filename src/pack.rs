//! The pack provider façade.
//!
//! [`RecordPack`] is what the host queries: existence checks, content
//! fetches, and enumeration, all answered from the immutable record set.
//! Synthesized paths are generated on demand by [`crate::synth`];
//! passthrough paths are read from the records directory on disk.

use std::fs;
use std::sync::Arc;

use tracing::debug;

use crate::config::PackConfig;
use crate::error::PackError;
use crate::ident::ResourceId;
use crate::record::RecordSet;
use crate::router::{Category, PathRouter, Route};
use crate::synth;

/// Display name of the built-in pack.
pub const PACK_NAME: &str = "RecordPackInternalResources";

/// Path of the pack metadata document.
///
/// The host probes it directly without consulting `exists`, so it is
/// answered by `fetch` but is not part of the routed path set.
pub const PACK_META_PATH: &str = "pack.mcmeta";

// =============================================================================
// PackResources trait
// =============================================================================

/// Host-facing surface of a resource source.
///
/// [`RecordPack`] implements this, and it is also the type of the optional
/// fallback source a pack can defer unrecognized paths to.
pub trait PackResources: Send + Sync {
    /// Check whether this source can serve the given path.
    fn exists(&self, path: &str) -> bool;

    /// Fetch the content of a path.
    fn fetch(&self, path: &str) -> Result<Vec<u8>, PackError>;

    /// Enumerate identifiers under a path prefix.
    fn list(&self, category: Category, namespace: &str, prefix: &str) -> Vec<ResourceId>;

    /// The namespaces this source owns for a category.
    fn namespaces(&self, category: Category) -> Vec<String>;
}

// =============================================================================
// RecordPack
// =============================================================================

/// The virtual resource pack over a loaded record set.
///
/// All operations are pure reads over immutable state: the pack is safe to
/// share across threads, and synthesized bytes are recomputed per request
/// rather than cached.
///
/// # Example
///
/// ```
/// use record_pack::{load_records, PackConfig, PackResources, RecordPack};
/// use std::sync::Arc;
///
/// let config = PackConfig::default();
/// let report = load_records(
///     r#"{"d": {"name": "Disc", "filename": "disc", "length": 100}}"#,
///     &config,
/// ).unwrap();
///
/// let pack = RecordPack::new(Arc::new(report.records), config);
/// assert!(pack.exists("assets/customrecords/sounds.json"));
/// let manifest = pack.fetch("assets/customrecords/sounds.json").unwrap();
/// ```
pub struct RecordPack {
    records: Arc<RecordSet>,
    router: PathRouter,
    fallback: Option<Box<dyn PackResources>>,
}

impl RecordPack {
    /// Build a pack over the loaded record set.
    pub fn new(records: Arc<RecordSet>, config: PackConfig) -> Self {
        debug!(records = records.len(), "building record pack");
        let router = PathRouter::new(&records, &config);
        Self {
            records,
            router,
            fallback: None,
        }
    }

    /// Install a fallback source for paths this pack does not own.
    ///
    /// Unrecognized paths are logged at debug severity and deferred to the
    /// fallback instead of failing outright.
    pub fn with_fallback(mut self, fallback: impl PackResources + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// The loaded record set backing this pack.
    pub fn records(&self) -> &Arc<RecordSet> {
        &self.records
    }

    /// The path router over this pack's record set.
    pub fn router(&self) -> &PathRouter {
        &self.router
    }

    /// Serve a routed path.
    fn fetch_route(&self, route: &Route) -> Result<Vec<u8>, PackError> {
        match route {
            Route::SoundsManifest => Ok(synth::sounds_json(&self.records)),
            Route::Translations => Ok(synth::lang_json(&self.records)),
            Route::Model { key } => Ok(synth::model_json(self.router.namespace(), key)),
            Route::Recipe { key } => {
                // Routed recipes always have an input; if one slips through
                // anyway, the empty placeholder keeps the host's scan tolerant.
                Ok(self
                    .records
                    .get(key)
                    .and_then(synth::recipe_json)
                    .unwrap_or_else(|| synth::EMPTY_RECIPE.to_vec()))
            }
            Route::Audio { key } => Self::read_backing(self.router.audio_path(key)),
            Route::Texture { key } => Self::read_backing(self.router.texture_path(key)),
        }
    }

    /// Read a passthrough backing file, attaching the I/O cause on failure.
    fn read_backing(path: std::path::PathBuf) -> Result<Vec<u8>, PackError> {
        fs::read(&path).map_err(|source| PackError::Passthrough { path, source })
    }
}

impl PackResources for RecordPack {
    fn exists(&self, path: &str) -> bool {
        self.router.exists(path)
    }

    fn fetch(&self, path: &str) -> Result<Vec<u8>, PackError> {
        if path == PACK_META_PATH {
            return Ok(synth::pack_meta_json());
        }

        if let Some(route) = self.router.resolve(path) {
            return self.fetch_route(route);
        }

        debug!(path, "asked for a resource without a handler, deferring");
        match &self.fallback {
            Some(fallback) => fallback.fetch(path),
            None => Err(PackError::not_found(path)),
        }
    }

    fn list(&self, category: Category, namespace: &str, prefix: &str) -> Vec<ResourceId> {
        self.router.list(category, namespace, prefix)
    }

    fn namespaces(&self, _category: Category) -> Vec<String> {
        vec![self.router.namespace().to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_records;
    use serde_json::Value as JsonValue;
    use std::fs;
    use tempfile::TempDir;

    fn sample_pack(records_dir: &std::path::Path) -> RecordPack {
        let config = PackConfig::new("customrecords", records_dir);
        let report = load_records(
            r#"{
                "a": {"name": "Alpha", "filename": "alpha", "length": 10, "item": "minecraft:diamond", "meta": 3},
                "b": {"name": "Beta", "filename": "beta", "length": 20}
            }"#,
            &config,
        )
        .unwrap();
        RecordPack::new(Arc::new(report.records), config)
    }

    #[test]
    fn test_pack_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecordPack>();
    }

    #[test]
    fn test_fetch_synthesized_kinds() {
        let dir = TempDir::new().unwrap();
        let pack = sample_pack(dir.path());

        let manifest: JsonValue =
            serde_json::from_slice(&pack.fetch("assets/customrecords/sounds.json").unwrap())
                .unwrap();
        assert!(manifest.get("alpha").is_some());

        let lang: JsonValue =
            serde_json::from_slice(&pack.fetch("assets/customrecords/lang/en_us.json").unwrap())
                .unwrap();
        assert_eq!(lang["item.customrecords.alpha.desc"], "Alpha");

        let model: JsonValue = serde_json::from_slice(
            &pack.fetch("assets/customrecords/models/item/beta.json").unwrap(),
        )
        .unwrap();
        assert_eq!(model["textures"]["layer0"], "customrecords:items/beta");

        let recipe: JsonValue = serde_json::from_slice(
            &pack.fetch("data/customrecords/recipes/alpha.json").unwrap(),
        )
        .unwrap();
        assert_eq!(recipe["key"]["I"]["data"], 3);
    }

    #[test]
    fn test_fetch_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let pack = sample_pack(dir.path());
        let path = "assets/customrecords/sounds.json";
        assert_eq!(pack.fetch(path).unwrap(), pack.fetch(path).unwrap());
    }

    #[test]
    fn test_fetch_passthrough_reads_disk() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("alpha.ogg"), b"ogg bytes").unwrap();
        let pack = sample_pack(dir.path());

        let bytes = pack
            .fetch("assets/customrecords/sounds/music/alpha.ogg")
            .unwrap();
        assert_eq!(bytes, b"ogg bytes");
    }

    #[test]
    fn test_fetch_passthrough_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let pack = sample_pack(dir.path());

        // The path exists (it is in the routed set) but the backing file
        // does not: a fetch failure, never substituted bytes.
        let path = "assets/customrecords/textures/items/alpha.png";
        assert!(pack.exists(path));
        match pack.fetch(path).unwrap_err() {
            PackError::Passthrough { path, .. } => {
                assert_eq!(path, dir.path().join("alpha.png"));
            }
            other => panic!("expected a passthrough failure, got {other:?}"),
        }
    }

    #[test]
    fn test_recipe_route_without_input_yields_placeholder() {
        let dir = TempDir::new().unwrap();
        let pack = sample_pack(dir.path());

        // "beta" has no recipe input, so the router never routes its recipe
        // path; if such a route is reached anyway, the empty placeholder
        // keeps the host's recipe scan tolerant.
        assert!(!pack.exists("data/customrecords/recipes/beta.json"));
        let bytes = pack
            .fetch_route(&Route::Recipe { key: "beta".to_string() })
            .unwrap();
        assert_eq!(bytes, synth::EMPTY_RECIPE);
    }

    #[test]
    fn test_fetch_unknown_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        let pack = sample_pack(dir.path());
        let err = pack.fetch("assets/customrecords/bogus.json").unwrap_err();
        assert!(matches!(err, PackError::NotFound { .. }));
    }

    #[test]
    fn test_fetch_unknown_path_defers_to_fallback() {
        struct StaticSource;
        impl PackResources for StaticSource {
            fn exists(&self, path: &str) -> bool {
                path == "assets/other/file.json"
            }
            fn fetch(&self, path: &str) -> Result<Vec<u8>, PackError> {
                if self.exists(path) {
                    Ok(b"from fallback".to_vec())
                } else {
                    Err(PackError::not_found(path))
                }
            }
            fn list(&self, _: Category, _: &str, _: &str) -> Vec<ResourceId> {
                Vec::new()
            }
            fn namespaces(&self, _: Category) -> Vec<String> {
                Vec::new()
            }
        }

        let dir = TempDir::new().unwrap();
        let pack = sample_pack(dir.path()).with_fallback(StaticSource);
        assert_eq!(
            pack.fetch("assets/other/file.json").unwrap(),
            b"from fallback"
        );
    }

    #[test]
    fn test_pack_meta_bypasses_exists() {
        let dir = TempDir::new().unwrap();
        let pack = sample_pack(dir.path());

        assert!(!pack.exists(PACK_META_PATH));
        let meta: JsonValue = serde_json::from_slice(&pack.fetch(PACK_META_PATH).unwrap()).unwrap();
        assert_eq!(meta["pack"]["pack_format"], 9);
    }

    #[test]
    fn test_list_and_namespaces() {
        let dir = TempDir::new().unwrap();
        let pack = sample_pack(dir.path());

        let recipes = pack.list(Category::Data, "customrecords", "");
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].path(), "recipes/alpha.json");

        assert_eq!(pack.namespaces(Category::Assets), ["customrecords"]);
        assert_eq!(pack.namespaces(Category::Data), ["customrecords"]);
    }
}
