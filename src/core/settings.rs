//! Settings derivation
//!
//! Pure mapping from probed system facts to cache and network tuning.

use serde::Serialize;

use crate::config::defaults::{
    BUFFER_MODE, CURL_CLIENT_TIMEOUT, CURL_LOW_SPEED_TIME, FALLBACK_MEMORY_SIZE, MAX_MEMORY_SIZE,
    MEMORY_SIZE_ALIGNMENT, MEMORY_SIZE_DIVISOR, NO_OF_BUFFERS, WIRED_CHUNK_SIZE,
    WIRED_READ_FACTOR, WIRELESS_CHUNK_SIZE, WIRELESS_READ_FACTOR,
};

/// Tuning values written to `advancedsettings.xml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// `cache/buffermode`
    pub buffer_mode: u32,
    /// `cache/memorysize`, bytes, 4096-aligned
    pub memory_size: u64,
    /// `cache/readfactor`
    pub read_factor: u32,
    /// `network/curlclienttimeout`
    pub curl_client_timeout: u32,
    /// `network/curllowspeedtime`
    pub curl_low_speed_time: u32,
    /// `network/nfschunksize`
    pub nfs_chunk_size: u64,
    /// `network/smbchunksize`
    pub smb_chunk_size: u64,
    /// `network/noofbuffers`
    pub no_of_buffers: u32,
}

/// Cache size for a given amount of physical memory
///
/// 20% of RAM capped at 512 MiB, or 256 MiB when memory is unknown,
/// floored to a 4 KiB boundary.
pub fn memory_size_for(total_memory: u64) -> u64 {
    let size = if total_memory > 0 {
        (total_memory / MEMORY_SIZE_DIVISOR).min(MAX_MEMORY_SIZE)
    } else {
        FALLBACK_MEMORY_SIZE
    };
    size - size % MEMORY_SIZE_ALIGNMENT
}

/// Derive settings from link state and total memory
pub fn derive_settings(wired: bool, total_memory: u64) -> Settings {
    let (chunk_size, read_factor) = if wired {
        (WIRED_CHUNK_SIZE, WIRED_READ_FACTOR)
    } else {
        (WIRELESS_CHUNK_SIZE, WIRELESS_READ_FACTOR)
    };

    Settings {
        buffer_mode: BUFFER_MODE,
        memory_size: memory_size_for(total_memory),
        read_factor,
        curl_client_timeout: CURL_CLIENT_TIMEOUT,
        curl_low_speed_time: CURL_LOW_SPEED_TIME,
        // NFS and SMB share one chunk size
        nfs_chunk_size: chunk_size,
        smb_chunk_size: chunk_size,
        no_of_buffers: NO_OF_BUFFERS,
    }
}
