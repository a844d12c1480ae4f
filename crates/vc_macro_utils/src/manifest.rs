use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locates the path under which the calling crate sees another workspace
/// crate.
///
/// Generated code must name `vc_meta` items with a path that resolves in the
/// crate invoking the macro, which may depend on `vc_meta` directly or only
/// on the `vc_graph` facade.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_meta"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested name begins with `vc_` and the caller depends on the
///    facade `vc_graph`, return `::vc_graph::short_name`
///    (e.g. `vc_meta` -> `::vc_graph::meta`).
/// 3. Repeat steps 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to `::crate_name`.
///
/// A crate referencing itself from its own tests should declare
/// `extern crate self as crate_name;` so that rule 4 resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vc_graph";
const WORKSPACE_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }
        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        if !deps.contains_key(FACADE_NAME) {
            return None;
        }
        let mut path = Self::parse_str::<syn::Path>(&format!("::{FACADE_NAME}"));
        path.segments.push(Self::parse_str(module));
        Some(path)
    }

    /// Returns the path of the package `name` as seen from the caller.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }
        Self::parse_str(&format!("::{name}"))
    }

    /// Runs `func` on the caller's manifest, read once per modification.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);
        result
    }
}

#[cfg(test)]
mod tests {
    use toml_edit::Document;

    use super::Manifest;

    fn resolve(toml: &str, name: &str) -> String {
        let manifest = Manifest {
            manifest: Document::parse(Box::from(toml)).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        };
        let path = manifest.get_crate_path(name);
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        format!("::{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let toml = "[dependencies]\nvc_meta = \"0.1\"\n";
        assert_eq!(resolve(toml, "vc_meta"), "::vc_meta");
    }

    #[test]
    fn through_the_facade() {
        let toml = "[dependencies]\nvc_graph = \"0.1\"\n";
        assert_eq!(resolve(toml, "vc_meta"), "::vc_graph::meta");

        let toml = "[dev-dependencies]\nvc_graph = \"0.1\"\n";
        assert_eq!(resolve(toml, "vc_meta"), "::vc_graph::meta");
    }

    #[test]
    fn fallback() {
        assert_eq!(resolve("[package]\nname = \"x\"\n", "vc_meta"), "::vc_meta");
        assert_eq!(resolve("[dependencies]\nvc_graph = \"0.1\"\n", "serde"), "::serde");
    }
}
