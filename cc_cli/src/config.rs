//! CLI configuration: the on-disk data directory layout.
//!
//! Consolidates the environment reads so the rest of the binary works with
//! resolved paths only. Precedence: CLI flag, then `CHESS_DATA_DIR`, then
//! the `data` directory next to the working directory.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Where club, tournament, and report files live on disk.
#[derive(Clone, Debug)]
pub struct DataDirs {
    pub root: PathBuf,
    pub clubs: PathBuf,
    pub tournaments: PathBuf,
    pub reports: PathBuf,
}

impl DataDirs {
    /// Resolve the directory layout from an optional CLI override.
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        let root = override_dir
            .or_else(|| std::env::var("CHESS_DATA_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("data"));
        Self {
            clubs: root.join("clubs"),
            tournaments: root.join("tournaments"),
            reports: root.join("reports"),
            root,
        }
    }

    /// Create any missing data directories.
    pub fn ensure(&self) -> io::Result<()> {
        for dir in [&self.clubs, &self.tournaments, &self.reports] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}
