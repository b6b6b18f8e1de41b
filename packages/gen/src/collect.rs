//! Walk input directories and encode every file into a table entry.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use regex::Regex;

use assetfs_store::{AssetPath, AssetRecord, AssetTable, GzipBase64Codec, PayloadCodec};

use crate::Error;

/// Settings for a generator run.
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Files or directories to embed.
    pub inputs: Vec<PathBuf>,
    /// Removed from the front of each input-relative path before it becomes
    /// a logical path.
    pub strip_prefix: Option<String>,
    /// Prepended to every logical path.
    pub mount_prefix: Option<String>,
    /// Skip entries whose logical path matches.
    pub ignore: Option<Regex>,
    /// Only embed files whose logical path matches. Directories are kept.
    pub include: Option<Regex>,
    /// Use this Unix timestamp for every entry instead of the file mtimes.
    pub modtime: Option<i64>,
    /// Name of the generated static.
    pub name: String,
    /// gzip level (0-9); best compression when unset.
    pub level: Option<u32>,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            strip_prefix: None,
            mount_prefix: None,
            ignore: None,
            include: None,
            modtime: None,
            name: "ASSETS".to_string(),
            level: None,
        }
    }
}

impl GenOptions {
    pub fn new(inputs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    fn codec(&self) -> GzipBase64Codec {
        match self.level {
            Some(level) => GzipBase64Codec::with_level(level),
            None => GzipBase64Codec::new(),
        }
    }

    /// The logical path for a file found at `local`.
    fn logical_path(&self, local: &str) -> Result<AssetPath, Error> {
        let relative = match &self.strip_prefix {
            Some(prefix) => local.strip_prefix(prefix.as_str()).unwrap_or(local),
            None => local,
        };
        let path = AssetPath::parse(relative)?;
        Ok(match &self.mount_prefix {
            Some(mount) => AssetPath::parse(mount)?.join(&path),
            None => path,
        })
    }

    fn is_ignored(&self, path: &AssetPath) -> bool {
        self.ignore
            .as_ref()
            .is_some_and(|re| re.is_match(&path.to_string()))
    }

    fn is_included(&self, path: &AssetPath) -> bool {
        self.include
            .as_ref()
            .map_or(true, |re| re.is_match(&path.to_string()))
    }
}

/// One entry of the generated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEntry {
    pub path: AssetPath,
    pub local: String,
    pub size: u64,
    pub modtime: i64,
    pub is_dir: bool,
    pub compressed: String,
}

impl GeneratedEntry {
    /// The runtime record this entry turns into once compiled.
    pub fn to_record(&self) -> AssetRecord {
        let record = if self.is_dir {
            AssetRecord::dir(self.path.clone(), self.modtime)
        } else {
            AssetRecord::file(
                self.path.clone(),
                self.compressed.clone(),
                self.size,
                self.modtime,
            )
        };
        record.with_local(self.local.clone())
    }
}

/// Walk `options.inputs` and encode everything that passes the filters.
///
/// Entries come back sorted by logical path; when two inputs produce the
/// same logical path, the later input wins.
pub fn collect(options: &GenOptions) -> Result<Vec<GeneratedEntry>, Error> {
    let codec = options.codec();
    let mut entries: BTreeMap<AssetPath, GeneratedEntry> = BTreeMap::new();

    for input in &options.inputs {
        let walker = walkdir::WalkDir::new(input)
            .follow_links(true)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()))
            .into_iter()
            .filter_entry(|entry| {
                options
                    .logical_path(&slash_path(entry.path()))
                    .map(|p| !options.is_ignored(&p))
                    .unwrap_or(true)
            });

        for entry in walker {
            let entry = entry.map_err(|source| Error::Walk {
                path: input.clone(),
                source,
            })?;
            let local = slash_path(entry.path());
            let path = options.logical_path(&local)?;
            let metadata = entry
                .metadata()
                .map_err(|source| Error::Walk {
                    path: entry.path().to_path_buf(),
                    source,
                })?;
            let modtime = options.modtime.unwrap_or_else(|| unix_modtime(&metadata));

            let generated = if metadata.is_dir() {
                GeneratedEntry {
                    path: path.clone(),
                    local,
                    size: 0,
                    modtime,
                    is_dir: true,
                    compressed: String::new(),
                }
            } else {
                if !options.is_included(&path) {
                    continue;
                }
                log::debug!("Encoding {}...", entry.path().display());
                let data = fs::read(entry.path()).map_err(|e| Error::io(entry.path(), e))?;
                let compressed = codec.encode(&data).map_err(|e| Error::io(entry.path(), e))?;
                GeneratedEntry {
                    path: path.clone(),
                    local,
                    size: data.len() as u64,
                    modtime,
                    is_dir: false,
                    compressed,
                }
            };
            entries.insert(path, generated);
        }
    }

    Ok(entries.into_values().collect())
}

/// Build a table straight from collected entries, without compiling them in.
pub fn to_table(entries: &[GeneratedEntry]) -> AssetTable {
    entries
        .iter()
        .fold(AssetTable::new(), |table, entry| table.with_record(entry.to_record()))
}

fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn unix_modtime(metadata: &fs::Metadata) -> i64 {
    metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map_or(0, |d| d.as_secs() as i64)
}
