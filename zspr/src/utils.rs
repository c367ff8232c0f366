use std::path::Path;

use crate::{
    constants::{
        AUTHOR_NAME_ROM_MAX_LENGTH, CHECKSUM_OFFSET, CHECKSUM_PLACEHOLDER, CHECKSUM_SIZE,
        ZSPR_EXTENSION,
    },
    error::ZsprError,
};

/// Unsigned byte sum truncated to 16 bits and its complement.
pub fn checksum(bytes: &[u8]) -> (u16, u16) {
    let sum = bytes
        .iter()
        .fold(0u32, |acc, b| acc.wrapping_add(*b as u32)) as u16;

    (sum, sum ^ 0xFFFF)
}

/// Fills in the checksum field of a complete file.
pub fn seal_checksum(bytes: &mut [u8]) {
    let field = CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_SIZE;

    bytes[field.clone()].copy_from_slice(&CHECKSUM_PLACEHOLDER);

    let (sum, complement) = checksum(bytes);

    bytes[field.start..field.start + 2].copy_from_slice(&sum.to_le_bytes());
    bytes[field.start + 2..field.end].copy_from_slice(&complement.to_le_bytes());
}

/// Compares both stored halves against the sum of the whole buffer.
pub fn verify_checksum(bytes: &[u8]) -> Result<(), ZsprError> {
    let Some(field) = bytes.get(CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_SIZE) else {
        return Err(ZsprError::TruncatedData {
            what: "checksum",
            length: bytes.len(),
        });
    };

    let stored = u16::from_le_bytes([field[0], field[1]]);
    let stored_complement = u16::from_le_bytes([field[2], field[3]]);
    let (computed, computed_complement) = checksum(bytes);

    if stored != computed || stored_complement != computed_complement {
        return Err(ZsprError::IntegrityFailure {
            stored,
            stored_complement,
            computed,
        });
    }

    Ok(())
}

/// ASCII only, at most 20 characters.
pub fn rom_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii())
        .take(AUTHOR_NAME_ROM_MAX_LENGTH)
        .collect()
}

pub fn name_from_path(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

pub fn has_zspr_extension(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ZSPR_EXTENSION))
}
