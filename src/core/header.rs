//! Game Boy cartridge header parsing
//!
//! The cartridge header stores the game title as a NUL-padded ASCII field
//! at a fixed offset. That field is the only part of the format read here.

use std::io::SeekFrom;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tracing::debug;

/// Byte offset of the title field in the cartridge header.
const TITLE_OFFSET: u64 = 0x134;

/// Maximum length of the title field in bytes.
const TITLE_LEN: u64 = 16;

/// Read the embedded title from a ROM file's header.
///
/// Returns `None` when the field is empty, the file is too short, or any
/// I/O error occurs. Title extraction must never fail a scan, so errors
/// are logged at debug level and swallowed.
pub async fn extract_title(path: &Path) -> Option<String> {
    match read_title_field(path).await {
        Ok(title) if !title.is_empty() => Some(title),
        Ok(_) => None,
        Err(error) => {
            debug!("Could not extract title from {}: {}", path.display(), error);
            None
        }
    }
}

async fn read_title_field(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path).await?;
    file.seek(SeekFrom::Start(TITLE_OFFSET)).await?;

    // Short reads are fine; a file smaller than the header yields fewer
    // bytes, not an error.
    let mut raw = Vec::with_capacity(TITLE_LEN as usize);
    file.take(TITLE_LEN).read_to_end(&mut raw).await?;

    // Drop non-ASCII bytes rather than failing, then strip the NUL padding.
    let title: String = raw.into_iter().filter(u8::is_ascii).map(char::from).collect();
    Ok(title.trim_end_matches('\0').to_string())
}
