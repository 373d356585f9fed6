/// Bytes read per backward chunk when no chunk size is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

pub const LF: u8 = b'\n';
pub const NUL: u8 = b'\0';

/// Lines printed by the CLI when `-n` is not given.
pub const DEFAULT_LINES: usize = 10;
