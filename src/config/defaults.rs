//! Default configuration values

/// One kibibyte
pub const KIB: u64 = 1024;

/// One mebibyte
pub const MIB: u64 = 1024 * KIB;

/// Cache size used when total memory cannot be determined
pub const FALLBACK_MEMORY_SIZE: u64 = 256 * MIB;

/// Upper bound for the derived cache size
pub const MAX_MEMORY_SIZE: u64 = 512 * MIB;

/// Divisor applied to total memory (20% of RAM)
pub const MEMORY_SIZE_DIVISOR: u64 = 5;

/// Cache size is floored to a multiple of this
pub const MEMORY_SIZE_ALIGNMENT: u64 = 4096;

/// Remote filesystem chunk size on a wired link
pub const WIRED_CHUNK_SIZE: u64 = MIB;

/// Remote filesystem chunk size otherwise
pub const WIRELESS_CHUNK_SIZE: u64 = 256 * KIB;

/// Read-ahead factor on a wired link
pub const WIRED_READ_FACTOR: u32 = 8;

/// Read-ahead factor otherwise
pub const WIRELESS_READ_FACTOR: u32 = 6;

/// Buffer mode 1: buffer all internet streams
pub const BUFFER_MODE: u32 = 1;

/// Curl client timeout (seconds)
pub const CURL_CLIENT_TIMEOUT: u32 = 20;

/// Curl low-speed timeout (seconds)
pub const CURL_LOW_SPEED_TIME: u32 = 10;

/// Number of network buffers
pub const NO_OF_BUFFERS: u32 = 4;

/// Thumbnail retention window (days)
pub const DEFAULT_RETENTION_DAYS: u64 = 60;

/// Seconds per day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Wired network interface probed for carrier state
pub const DEFAULT_INTERFACE: &str = "eth0";

/// Prefix for every log line emitted by the configurator
pub const LOG_PREFIX: &str = "[autoexec]";
