use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::LoadError;

pub struct Loader<'a> {
    config: &'a Config,
}

impl<'a> Loader<'a> {
    pub fn new(config: &'a Config) -> Self {
        Loader { config }
    }

    /// Read a ROM file and return its bytes verbatim.
    ///
    /// The request must resolve inside the configured ROM directory; the
    /// containment check runs on canonicalized paths so `..` segments and
    /// symlinks cannot escape it. Unlike the scanner, every failure here
    /// is surfaced to the caller.
    pub async fn load(&self, path: &Path) -> Result<Vec<u8>, LoadError> {
        let resolved = self.resolve_contained(path).await?;

        match fs::metadata(&resolved).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => {
                return Err(LoadError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(LoadError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(err) => {
                error!("Failed to stat ROM file {}: {}", resolved.display(), err);
                return Err(LoadError::Read {
                    path: resolved,
                    source: err,
                });
            }
        }

        let data = match fs::read(&resolved).await {
            Ok(data) => data,
            Err(err) => {
                error!("Failed to read ROM file {}: {}", resolved.display(), err);
                return Err(LoadError::Read {
                    path: resolved,
                    source: err,
                });
            }
        };

        let name = resolved
            .file_name()
            .map(|os| os.to_string_lossy().into_owned())
            .unwrap_or_else(|| resolved.display().to_string());
        info!("Loaded ROM: {} ({} bytes)", name, data.len());

        Ok(data)
    }

    /// Resolve a requested path and verify it stays inside the ROM
    /// directory. Containment is checked on resolved paths on both sides;
    /// a string-prefix comparison would accept sibling directories that
    /// merely share a name prefix.
    async fn resolve_contained(&self, path: &Path) -> Result<PathBuf, LoadError> {
        let root = normalize(&self.config.rom_directory).await;
        let resolved = normalize(path).await;

        if !resolved.starts_with(&root) {
            debug!(
                "Rejected ROM path outside {}: {}",
                root.display(),
                resolved.display()
            );
            return Err(LoadError::Security {
                path: path.to_path_buf(),
            });
        }

        Ok(resolved)
    }
}

/// Canonicalize when possible, otherwise clean the path lexically so that
/// traversal probes at nonexistent locations are still judged against the
/// root instead of short-circuiting to a not-found answer.
async fn normalize(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path).await {
        return resolved;
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}
