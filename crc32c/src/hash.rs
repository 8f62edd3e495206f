//! One-shot CRC32C 一次性 CRC32C

use crate::table::update;

/// Compute CRC32C with an explicit seed, continuing a previous checksum.
/// Seed 0 starts a fresh checksum; usable in const context.
/// 以显式种子计算 CRC32C，可续接之前的校验和；种子 0 表示全新计算，可在 const 上下文使用
#[inline]
#[must_use]
pub const fn crc32c_with_seed(data: &[u8], seed: u32) -> u32 {
  !update(!seed, data)
}

/// Compute CRC32C of a byte view
/// 计算字节视图的 CRC32C
#[inline]
#[must_use]
pub fn crc32c(data: impl AsRef<[u8]>) -> u32 {
  crc32c_with_seed(data.as_ref(), 0)
}

/// Verify CRC32C 验证 CRC32C
#[inline]
#[must_use]
pub fn verify(data: impl AsRef<[u8]>, expected: u32) -> bool {
  crc32c(data) == expected
}
