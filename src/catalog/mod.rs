//! Read-only sticker pack catalog.
//!
//! The catalog is loaded once at startup from an [`Archive`] and shared by all
//! sessions behind an `Arc`. Nothing in it is mutated after load, so
//! concurrent sessions read it without synchronization.

pub mod archive;

pub use archive::{Archive, DirArchive, MemoryArchive, ZipArchive, INDEX_MEMBER};

use crate::model::{CatalogError, PackDetail, PackId, PackSummary};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Open the catalog at `path`: a `.zip` file is read as a [`ZipArchive`],
/// anything else as a [`DirArchive`].
pub fn open(path: &Path) -> Result<Catalog, CatalogError> {
    let is_zip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
    if is_zip {
        info!(path = %path.display(), "Opening zip catalog");
        Catalog::load(ZipArchive::open(path)?)
    } else {
        info!(path = %path.display(), "Opening catalog directory");
        Catalog::load(DirArchive::new(path))
    }
}

/// The pack index plus lazy access to per-pack detail records.
pub struct Catalog {
    index: Vec<Arc<PackSummary>>,
    archive: Box<dyn Archive>,
}

impl Catalog {
    /// Load the index from `archive`.
    ///
    /// A missing index yields an empty catalog. Unreadable or malformed
    /// indexes are errors.
    pub fn load(archive: impl Archive + 'static) -> Result<Self, CatalogError> {
        let index = match archive.read_index()? {
            Some(packs) => packs,
            None => {
                warn!("Catalog index missing, starting with an empty catalog");
                Vec::new()
            }
        };
        info!(packs = index.len(), "Catalog loaded");

        Ok(Self {
            index: index.into_iter().map(Arc::new).collect(),
            archive: Box::new(archive),
        })
    }

    /// All packs in archive order.
    pub fn index(&self) -> &[Arc<PackSummary>] {
        &self.index
    }

    /// Number of packs in the index.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index lists no packs.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Fetch the full record of a pack.
    ///
    /// Not cached: every call reads the archive again.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] if the id is invalid or absent from the archive.
    pub fn detail(&self, id: &str) -> Result<PackDetail, CatalogError> {
        let pack_id = PackId::new(id).ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;
        self.archive.read_detail(&pack_id)
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("packs", &self.index.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{detail, summary};

    #[test]
    fn load_keeps_archive_order() {
        let archive = MemoryArchive::new(vec![summary("b", "Bee"), summary("a", "Ant")]);
        let catalog = Catalog::load(archive).expect("memory archive loads");

        let ids: Vec<&str> = catalog.index().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn missing_index_is_empty_catalog() {
        let catalog = Catalog::load(MemoryArchive::without_index()).expect("missing index is fine");
        assert!(catalog.is_empty());
    }

    #[test]
    fn detail_returns_stored_record() {
        let archive = MemoryArchive::new(vec![summary("a", "Ant")]).with_detail(detail("a", 3));
        let catalog = Catalog::load(archive).expect("memory archive loads");

        let pack = catalog.detail("a").expect("detail exists");
        assert_eq!(pack.id, "a");
        assert_eq!(pack.thumbs.len(), 3);
    }

    #[test]
    fn detail_absent_is_not_found() {
        let catalog = Catalog::load(MemoryArchive::new(vec![summary("a", "Ant")]))
            .expect("memory archive loads");

        let err = catalog.detail("a").expect_err("no detail stored");
        assert!(err.is_not_found());
    }

    #[test]
    fn detail_with_invalid_id_is_not_found() {
        let catalog = Catalog::load(MemoryArchive::new(vec![])).expect("memory archive loads");
        let err = catalog.detail("../etc/passwd").expect_err("invalid id");
        assert!(err.is_not_found());
    }

    #[test]
    fn open_picks_backend_from_extension() {
        let dir = std::env::temp_dir().join("stickerterm_catalog_open");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        std::fs::write(dir.join("packsinfo.json"), r#"[{"id":"a","title":"Ant","cover":"x"}]"#)
            .expect("write index");

        let from_dir = open(&dir).expect("directory catalog");
        assert_eq!(from_dir.len(), 1);

        let zip_path = dir.join("packs.ZIP");
        std::fs::write(&zip_path, "not a zip").expect("write file");
        let err = open(&zip_path).expect_err("zip backend chosen for .ZIP");
        assert!(matches!(err, CatalogError::Zip { .. }), "got {err:?}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
