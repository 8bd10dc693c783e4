use globwalk::GlobWalkerBuilder;
use serde::Serialize;
use std::path::Path;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::core::header;

/// Metadata for a single ROM file discovered in the scan directory.
///
/// Produced fresh on every scan and never persisted; the host keys
/// entries by `fullPath` alone.
#[derive(Serialize, Clone, Debug)]
pub struct RomEntry {
    pub name: String,
    #[serde(rename = "fullPath")]
    pub full_path: String,
    pub size: u64,
    pub title: String,
}

pub struct Scanner<'a> {
    config: &'a Config,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Scanner { config }
    }

    /// Enumerate ROM files in the configured directory.
    ///
    /// Never fails: a missing directory or an enumeration error yields an
    /// empty list, and individual files that cannot be processed are
    /// skipped. Entries appear in extension order, then directory order.
    pub async fn scan(&self) -> Vec<RomEntry> {
        let directory = &self.config.rom_directory;

        if !directory.exists() {
            warn!("ROM directory does not exist: {}", directory.display());
            return Vec::new();
        }

        let mut entries = Vec::new();
        for extension in &self.config.rom_extensions {
            match self.scan_extension(directory, extension).await {
                Ok(mut found) => entries.append(&mut found),
                Err(err) => {
                    error!("Failed to scan {} for .{}: {}", directory.display(), extension, err);
                }
            }
        }

        info!("Found {} ROM files in {}", entries.len(), directory.display());
        entries
    }

    async fn scan_extension(&self, directory: &Path, extension: &str) -> anyhow::Result<Vec<RomEntry>> {
        // max_depth(1) keeps the walk to direct children of the directory.
        // Matching is case-sensitive.
        let walker = GlobWalkerBuilder::new(directory, format!("*.{}", extension))
            .max_depth(1)
            .build()?;

        let mut found = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable directory entry: {}", err);
                    continue;
                }
            };
            if !entry.path().is_file() {
                continue;
            }
            match self.build_entry(entry.path()).await {
                Ok(rom) => {
                    info!("Found ROM: {} ({} bytes)", rom.name, rom.size);
                    found.push(rom);
                }
                Err(err) => {
                    error!("Error processing ROM file {}: {}", entry.path().display(), err);
                }
            }
        }
        Ok(found)
    }

    async fn build_entry(&self, path: &Path) -> anyhow::Result<RomEntry> {
        let name = path
            .file_name()
            .map(|os| os.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let metadata = tokio::fs::metadata(path).await?;
        let title = match header::extract_title(path).await {
            Some(title) => title,
            None => fallback_title(path),
        };

        Ok(RomEntry {
            name,
            full_path: path.display().to_string(),
            size: metadata.len(),
            title,
        })
    }
}

/// Uppercased filename stem, used when the header carries no title.
fn fallback_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> Config {
        Config {
            rom_directory: dir.path().to_path_buf(),
            rom_extensions: vec!["gb".to_string(), "gbc".to_string()],
        }
    }

    fn write_rom(dir: &Path, name: &str, title: &[u8]) -> PathBuf {
        let mut data = vec![0u8; 0x150];
        data[0x134..0x134 + title.len()].copy_from_slice(title);
        let path = dir.join(name);
        std::fs::write(&path, data).unwrap();
        path
    }

    #[tokio::test]
    async fn test_scan_missing_directory_returns_empty() {
        let config = Config {
            rom_directory: PathBuf::from("/definitely/not/a/real/rom/dir"),
            rom_extensions: vec!["gb".to_string()],
        };

        let entries = Scanner::new(&config).scan().await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_scan_includes_matching_files_with_sizes() {
        let dir = TempDir::new().unwrap();
        write_rom(dir.path(), "tetris.gb", b"TETRIS");
        write_rom(dir.path(), "zelda.gbc", b"ZELDA");

        let config = test_config(&dir);
        let entries = Scanner::new(&config).scan().await;

        assert_eq!(entries.len(), 2);
        // Extension order puts .gb before .gbc
        assert_eq!(entries[0].name, "tetris.gb");
        assert_eq!(entries[0].size, 0x150);
        assert_eq!(entries[0].title, "TETRIS");
        assert_eq!(entries[1].name, "zelda.gbc");
        assert_eq!(entries[1].title, "ZELDA");
    }

    #[tokio::test]
    async fn test_scan_excludes_other_extensions_and_subdirectories() {
        let dir = TempDir::new().unwrap();
        write_rom(dir.path(), "game.gb", b"GAME");
        std::fs::write(dir.path().join("notes.txt"), b"not a rom").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        write_rom(&nested, "hidden.gb", b"HIDDEN");

        let config = test_config(&dir);
        let entries = Scanner::new(&config).scan().await;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "game.gb");
    }

    #[tokio::test]
    async fn test_scan_never_descends_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("sub");
        std::fs::create_dir(&nested).unwrap();
        write_rom(&nested, "deep.gb", b"DEEP");

        let config = test_config(&dir);
        let entries = Scanner::new(&config).scan().await;

        assert!(entries.is_empty(), "nested file was scanned: {:?}", entries);
    }

    #[tokio::test]
    async fn test_title_falls_back_to_uppercased_stem() {
        let dir = TempDir::new().unwrap();
        // Too short to carry a header title
        std::fs::write(dir.path().join("mygame.gb"), vec![0u8; 32]).unwrap();

        let config = test_config(&dir);
        let entries = Scanner::new(&config).scan().await;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "MYGAME");
        assert_eq!(entries[0].size, 32);
    }

    #[tokio::test]
    async fn test_full_path_points_at_scanned_file() {
        let dir = TempDir::new().unwrap();
        let path = write_rom(dir.path(), "tetris.gb", b"TETRIS");

        let config = test_config(&dir);
        let entries = Scanner::new(&config).scan().await;

        assert_eq!(entries[0].full_path, path.display().to_string());
    }
}
