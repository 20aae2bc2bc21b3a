//! Virtual path routing.
//!
//! The router derives the closed, finite set of paths that exist for a
//! loaded [`RecordSet`] and maps each one to the handler that produces its
//! content. The table is computed once at construction — request handling
//! is a single map lookup, never a chain of string matches.
//!
//! Per record set the pack owns exactly:
//!
//! ```text
//! assets/<ns>/sounds.json                     synthesized, one per pack
//! assets/<ns>/lang/en_us.json                 synthesized, one per pack
//! assets/<ns>/models/item/<key>.json          synthesized, one per record
//! assets/<ns>/sounds/music/<key>.ogg          passthrough, one per record
//! assets/<ns>/textures/items/<key>.png        passthrough, one per record
//! data/<ns>/recipes/<key>.json                synthesized, records with a recipe
//! ```

use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::config::PackConfig;
use crate::ident::ResourceId;
use crate::record::RecordSet;

// =============================================================================
// Category and Route
// =============================================================================

/// Which side of the pack a path belongs to.
///
/// Hosts query client-facing assets and server-facing data through separate
/// pipelines, so enumeration is split along the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Client resources under `assets/`.
    Assets,
    /// Server data under `data/`.
    Data,
}

impl Category {
    /// The path prefix for this category.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Assets => "assets",
            Self::Data => "data",
        }
    }
}

/// The handler that produces a routed path's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The synthesized sound manifest.
    SoundsManifest,
    /// The synthesized translation table.
    Translations,
    /// A synthesized item model for one record.
    Model {
        /// The record key.
        key: String,
    },
    /// Passthrough to the record's backing audio file on disk.
    Audio {
        /// The record key.
        key: String,
    },
    /// Passthrough to the record's backing texture file on disk.
    Texture {
        /// The record key.
        key: String,
    },
    /// A synthesized shaped recipe for one record.
    Recipe {
        /// The record key.
        key: String,
    },
}

// =============================================================================
// PathRouter
// =============================================================================

/// Precomputed routing table over the loaded record set.
///
/// The record set never changes after load, so the table is built once and
/// every query is a pure lookup.
#[derive(Debug)]
pub struct PathRouter {
    namespace: String,
    records_dir: PathBuf,
    routes: FxHashMap<String, Route>,
    /// Recipe identifiers in record source order, for data enumeration.
    recipes: Vec<ResourceId>,
    /// Record keys in source order, for the disk-backed asset listing.
    keys: Vec<String>,
}

impl PathRouter {
    /// Build the routing table for a record set.
    pub fn new(records: &RecordSet, config: &PackConfig) -> Self {
        let ns = &config.namespace;
        let mut routes = FxHashMap::default();
        let mut recipes = Vec::new();
        let mut keys = Vec::new();

        routes.insert(format!("assets/{ns}/sounds.json"), Route::SoundsManifest);
        routes.insert(format!("assets/{ns}/lang/en_us.json"), Route::Translations);

        for record in records {
            let key = record.key();
            keys.push(key.to_string());

            routes.insert(
                format!("assets/{ns}/models/item/{key}.json"),
                Route::Model { key: key.to_string() },
            );
            routes.insert(
                format!("assets/{ns}/sounds/music/{key}.ogg"),
                Route::Audio { key: key.to_string() },
            );
            routes.insert(
                format!("assets/{ns}/textures/items/{key}.png"),
                Route::Texture { key: key.to_string() },
            );

            if record.recipe().is_some() {
                routes.insert(
                    format!("data/{ns}/recipes/{key}.json"),
                    Route::Recipe { key: key.to_string() },
                );
                recipes.push(ResourceId::new(ns, format!("recipes/{key}.json")));
            }
        }

        Self {
            namespace: ns.clone(),
            records_dir: config.records_dir.clone(),
            routes,
            recipes,
            keys,
        }
    }

    /// The namespace this router owns.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Check whether a path is in the pack's path set.
    pub fn exists(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// Map a path to the handler that produces it.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.get(path)
    }

    /// Number of paths in the set.
    pub fn path_count(&self) -> usize {
        self.routes.len()
    }

    /// The on-disk audio file backing a record's passthrough path.
    pub fn audio_path(&self, key: &str) -> PathBuf {
        self.records_dir.join(format!("{key}.ogg"))
    }

    /// The on-disk texture file backing a record's passthrough path.
    pub fn texture_path(&self, key: &str) -> PathBuf {
        self.records_dir.join(format!("{key}.png"))
    }

    /// The on-disk location backing a passthrough route.
    ///
    /// Returns `None` for synthesized routes.
    pub fn disk_path(&self, route: &Route) -> Option<PathBuf> {
        match route {
            Route::Audio { key } => Some(self.audio_path(key)),
            Route::Texture { key } => Some(self.texture_path(key)),
            _ => None,
        }
    }

    /// Rebuild the full path string for an identifier returned by [`list`].
    ///
    /// [`list`]: Self::list
    pub fn full_path(&self, category: Category, id: &ResourceId) -> String {
        format!("{}/{}/{}", category.prefix(), id.namespace(), id.path())
    }

    /// Enumerate identifiers under a path prefix.
    ///
    /// For [`Category::Data`] this returns the recipe identifiers in record
    /// source order: the host's recipe pipeline discovers files by recursive
    /// scan and must see every one. For [`Category::Assets`] only the
    /// passthrough files actually present on disk are listed — synthesized
    /// asset paths are found by direct lookup, not enumeration, matching how
    /// the host's asset pipeline resolves them.
    pub fn list(&self, category: Category, namespace: &str, prefix: &str) -> Vec<ResourceId> {
        if namespace != self.namespace {
            return Vec::new();
        }
        match category {
            Category::Data => self
                .recipes
                .iter()
                .filter(|id| id.path().starts_with(prefix))
                .cloned()
                .collect(),
            Category::Assets => self.list_disk_assets(prefix),
        }
    }

    /// Disk-backed listing of the passthrough records directory.
    fn list_disk_assets(&self, prefix: &str) -> Vec<ResourceId> {
        let mut found = Vec::new();
        for key in &self.keys {
            if self.records_dir.join(format!("{key}.ogg")).is_file() {
                found.push(ResourceId::new(
                    &self.namespace,
                    format!("sounds/music/{key}.ogg"),
                ));
            }
            if self.records_dir.join(format!("{key}.png")).is_file() {
                found.push(ResourceId::new(
                    &self.namespace,
                    format!("textures/items/{key}.png"),
                ));
            }
        }
        found.retain(|id| id.path().starts_with(prefix));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_records, PackConfig};
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> (RecordSet, PackConfig) {
        let config = PackConfig::default();
        let records = load_records(
            r#"{
                "a": {"name": "Alpha", "filename": "alpha", "length": 10, "item": "minecraft:diamond"},
                "b": {"name": "Beta", "filename": "beta", "length": 20},
                "c": {"name": "Gamma", "filename": "gamma", "length": 30, "item": "minecraft:dirt"}
            }"#,
            &config,
        )
        .unwrap()
        .records;
        (records, config)
    }

    #[test]
    fn test_path_set_is_closed() {
        let (records, config) = sample();
        let router = PathRouter::new(&records, &config);

        // 2 aggregates + 3 per record + 1 per recipe-bearing record.
        assert_eq!(router.path_count(), 2 + 3 * 3 + 2);

        assert!(router.exists("assets/customrecords/sounds.json"));
        assert!(router.exists("assets/customrecords/lang/en_us.json"));
        assert!(router.exists("assets/customrecords/models/item/alpha.json"));
        assert!(router.exists("assets/customrecords/sounds/music/beta.ogg"));
        assert!(router.exists("assets/customrecords/textures/items/gamma.png"));
        assert!(router.exists("data/customrecords/recipes/alpha.json"));
        assert!(router.exists("data/customrecords/recipes/gamma.json"));

        // No recipe for beta, and nothing outside the set.
        assert!(!router.exists("data/customrecords/recipes/beta.json"));
        assert!(!router.exists("assets/customrecords/models/item/delta.json"));
        assert!(!router.exists("assets/othernamespace/sounds.json"));
        assert!(!router.exists("pack.mcmeta"));
    }

    #[test]
    fn test_empty_set_has_only_aggregates() {
        let config = PackConfig::default();
        let router = PathRouter::new(&RecordSet::new(), &config);
        assert_eq!(router.path_count(), 2);
    }

    #[test]
    fn test_resolve_kinds() {
        let (records, config) = sample();
        let router = PathRouter::new(&records, &config);

        assert_eq!(
            router.resolve("assets/customrecords/sounds.json"),
            Some(&Route::SoundsManifest)
        );
        assert_eq!(
            router.resolve("assets/customrecords/models/item/alpha.json"),
            Some(&Route::Model { key: "alpha".to_string() })
        );
        assert_eq!(
            router.resolve("data/customrecords/recipes/gamma.json"),
            Some(&Route::Recipe { key: "gamma".to_string() })
        );
        assert_eq!(router.resolve("data/customrecords/recipes/beta.json"), None);
    }

    #[test]
    fn test_disk_path_for_passthrough_only() {
        let (records, config) = sample();
        let router = PathRouter::new(&records, &config);

        let audio = router.resolve("assets/customrecords/sounds/music/alpha.ogg").unwrap();
        assert_eq!(
            router.disk_path(audio),
            Some(config.records_dir.join("alpha.ogg"))
        );
        assert_eq!(router.disk_path(&Route::SoundsManifest), None);
    }

    #[test]
    fn test_list_data_roundtrips_through_exists() {
        let (records, config) = sample();
        let router = PathRouter::new(&records, &config);

        let listed = router.list(Category::Data, "customrecords", "");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].path(), "recipes/alpha.json");
        assert_eq!(listed[1].path(), "recipes/gamma.json");

        for id in &listed {
            let path = router.full_path(Category::Data, id);
            assert!(router.exists(&path));
            assert!(matches!(router.resolve(&path), Some(Route::Recipe { .. })));
        }
    }

    #[test]
    fn test_list_data_respects_namespace_and_prefix() {
        let (records, config) = sample();
        let router = PathRouter::new(&records, &config);

        assert!(router.list(Category::Data, "othernamespace", "").is_empty());
        assert!(router.list(Category::Data, "customrecords", "advancements").is_empty());
        assert_eq!(
            router.list(Category::Data, "customrecords", "recipes").len(),
            2
        );
    }

    #[test]
    fn test_list_assets_reflects_disk_only() {
        let dir = TempDir::new().unwrap();
        let config = PackConfig::new("customrecords", dir.path());
        let records = load_records(
            r#"{
                "a": {"name": "Alpha", "filename": "alpha", "length": 10},
                "b": {"name": "Beta", "filename": "beta", "length": 20}
            }"#,
            &config,
        )
        .unwrap()
        .records;
        let router = PathRouter::new(&records, &config);

        // Nothing on disk yet: synthesized assets are not enumerated.
        assert!(router.list(Category::Assets, "customrecords", "").is_empty());

        fs::write(dir.path().join("alpha.ogg"), b"ogg").unwrap();
        fs::write(dir.path().join("alpha.png"), b"png").unwrap();

        let listed = router.list(Category::Assets, "customrecords", "");
        let paths: Vec<_> = listed.iter().map(ResourceId::path).collect();
        assert_eq!(paths, ["sounds/music/alpha.ogg", "textures/items/alpha.png"]);

        let audio_only = router.list(Category::Assets, "customrecords", "sounds/");
        assert_eq!(audio_only.len(), 1);
    }
}
