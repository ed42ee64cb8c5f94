//! Catalog archive backends.
//!
//! An archive holds one index member listing every pack and one member per
//! pack id with its detail record, all JSON.

use crate::model::{CatalogError, PackDetail, PackId, PackSummary};
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::PathBuf;
use std::sync::Mutex;

/// Member name of the pack index inside an archive.
pub const INDEX_MEMBER: &str = "packsinfo";

/// Source of catalog records.
pub trait Archive: Send + Sync {
    /// Read the pack index. `Ok(None)` means the archive has no index.
    fn read_index(&self) -> Result<Option<Vec<PackSummary>>, CatalogError>;

    /// Read the detail record of one pack.
    fn read_detail(&self, id: &PackId) -> Result<PackDetail, CatalogError>;
}

// ===== DirArchive =====

/// Archive stored as a directory of `<member>.json` files.
#[derive(Debug, Clone)]
pub struct DirArchive {
    root: PathBuf,
}

impl DirArchive {
    /// Archive rooted at `root`. Nothing is read until the first lookup.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn member_path(&self, member: &str) -> PathBuf {
        self.root.join(format!("{member}.json"))
    }

    /// Read and parse one member. Missing members return `Ok(None)`.
    fn read_member<T: serde::de::DeserializeOwned>(
        &self,
        member: &str,
    ) -> Result<Option<T>, CatalogError> {
        let path = self.member_path(member);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CatalogError::Io { path, source }),
        };

        parse_member(path, &contents).map(Some)
    }
}

fn parse_member<T: serde::de::DeserializeOwned>(
    path: PathBuf,
    contents: &str,
) -> Result<T, CatalogError> {
    serde_json::from_str(contents).map_err(|source| CatalogError::Malformed { path, source })
}

impl Archive for DirArchive {
    fn read_index(&self) -> Result<Option<Vec<PackSummary>>, CatalogError> {
        self.read_member(INDEX_MEMBER)
    }

    fn read_detail(&self, id: &PackId) -> Result<PackDetail, CatalogError> {
        self.read_member(id.as_str())?
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }
}

// ===== ZipArchive =====

/// Archive stored as one zip file with a `<member>.json` entry per member,
/// the layout written by the catalog build pipeline.
///
/// The zip is opened once; reads from concurrent sessions take turns on it.
#[derive(Debug)]
pub struct ZipArchive {
    path: PathBuf,
    zip: Mutex<zip::ZipArchive<File>>,
}

impl ZipArchive {
    /// Open the zip at `path` and read its central directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        let zip = zip::ZipArchive::new(file).map_err(|source| CatalogError::Zip {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            zip: Mutex::new(zip),
        })
    }

    fn read_member<T: serde::de::DeserializeOwned>(
        &self,
        member: &str,
    ) -> Result<Option<T>, CatalogError> {
        let name = format!("{member}.json");
        let member_path = self.path.join(&name);
        let mut zip = self.zip.lock().map_err(|_| CatalogError::Io {
            path: self.path.clone(),
            source: std::io::Error::other("zip archive lock poisoned"),
        })?;

        let mut entry = match zip.by_name(&name) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(source) => {
                return Err(CatalogError::Zip {
                    path: member_path,
                    source,
                })
            }
        };
        let mut contents = String::new();
        entry
            .read_to_string(&mut contents)
            .map_err(|source| CatalogError::Io {
                path: member_path.clone(),
                source,
            })?;

        parse_member(member_path, &contents).map(Some)
    }
}

impl Archive for ZipArchive {
    fn read_index(&self) -> Result<Option<Vec<PackSummary>>, CatalogError> {
        self.read_member(INDEX_MEMBER)
    }

    fn read_detail(&self, id: &PackId) -> Result<PackDetail, CatalogError> {
        self.read_member(id.as_str())?
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }
}

// ===== MemoryArchive =====

/// Archive held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    index: Option<Vec<PackSummary>>,
    details: HashMap<String, PackDetail>,
}

impl MemoryArchive {
    /// An archive with `index` and no detail records yet.
    pub fn new(index: Vec<PackSummary>) -> Self {
        Self {
            index: Some(index),
            details: HashMap::new(),
        }
    }

    /// An archive whose index member is absent.
    pub fn without_index() -> Self {
        Self::default()
    }

    /// Add (or replace) the detail record stored under `detail.id`.
    pub fn with_detail(mut self, detail: PackDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }
}

impl Archive for MemoryArchive {
    fn read_index(&self) -> Result<Option<Vec<PackSummary>>, CatalogError> {
        Ok(self.index.clone())
    }

    fn read_detail(&self, id: &PackId) -> Result<PackDetail, CatalogError> {
        self.details
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }
}
