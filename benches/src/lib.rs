//! Shared fixtures for the TinyTEA benchmarks.

use bytes::Bytes;
use tinytea_cipher::TeaKey;

/// Key used by every benchmark.
pub const BENCH_KEY: TeaKey = [0x12345678, 0x9ABCDEF0, 0xFEDCBA98, 0x76543210];

/// Payload sizes, in bytes, exercised by the buffer benchmarks.
pub const PAYLOAD_SIZES: [usize; 4] = [8, 128, 4 * 1024, 64 * 1024];

/// Returns a deterministic, block-aligned payload of `len` bytes.
pub fn payload(len: usize) -> Bytes {
    (0..len).map(|index| (index * 31 % 251) as u8).collect()
}
