//! Discovers and parses the `stats_*.json` daily record files.

use crate::record::DailyRecord;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Naming convention for daily stats files inside the data directory.
const STATS_PREFIX: &str = "stats_";
const STATS_SUFFIX: &str = ".json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read data directory {dir}")]
    ReadDir {
        dir: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid daily record {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read every `stats_*.json` file in `dir` and return the records sorted
/// ascending by date.
///
/// Filenames are sorted before parsing and the date sort is stable, so two
/// files claiming the same date keep their filename order. Any file that
/// fails to parse aborts the whole load.
pub fn load_records(dir: &Path) -> Result<Vec<DailyRecord>, LoadError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|source| LoadError::ReadDir {
            dir: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_stats_file(path))
        .collect();
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let file = File::open(&path).map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;
        let record: DailyRecord = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| LoadError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!("loaded {} ({})", path.display(), record.date);
        records.push(record);
    }

    records.sort_by_key(|r| r.date);
    info!("loaded {} daily records from {}", records.len(), dir.display());
    Ok(records)
}

fn is_stats_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(STATS_PREFIX) && name.ends_with(STATS_SUFFIX))
}
