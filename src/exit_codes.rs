//! Standard exit codes for the presetwire binary

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Wire format error (unrecognized or corrupted share code)
pub const EXIT_FORMAT_ERROR: i32 = 102;

/// Integrity error (checksum mismatch, expired, rejected input)
pub const EXIT_INTEGRITY_ERROR: i32 = 103;

/// Validation error (out-of-range volumes or versions)
pub const EXIT_VALIDATION_ERROR: i32 = 104;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (preset file not found, permission denied)
pub const EXIT_IO_ERROR: i32 = 106;
