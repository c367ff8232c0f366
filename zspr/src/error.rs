#[derive(Debug, thiserror::Error)]
pub enum ZsprError {
    #[error("Obsolete or foreign file format (flag {flag:02X?}). Please convert to ZSPR v1.0")]
    FormatMismatch { flag: Vec<u8> },
    #[error("File is not a .zspr file: {}", path.display())]
    WrongExtension { path: std::path::PathBuf },
    #[error("The selected sprite is not a playable character sprite (type {sprite_type:#06x})")]
    UnsupportedVariant { sprite_type: u16 },
    #[error("Bad checksum, file may be corrupted. Stored ({stored:#06x}, {stored_complement:#06x}). Computed ({computed:#06x})")]
    IntegrityFailure {
        stored: u16,
        stored_complement: u16,
        computed: u16,
    },
    #[error("Truncated data: {what} runs past the end of a {length} byte buffer")]
    TruncatedData { what: &'static str, length: usize },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}
