//! Incremental CRC32C 增量 CRC32C

use crate::table::update;

/// Incremental CRC32C state
/// 增量 CRC32C 状态
///
/// Feeding fragments in order yields the same digest as one pass over
/// their concatenation
/// 按顺序喂入片段与一次性处理其拼接结果得到相同摘要
#[derive(Clone, Debug)]
pub struct Crc32c {
  crc: u32, // complemented running register 取反后的运行寄存器
}

impl Default for Crc32c {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Crc32c {
  /// Start a fresh checksum 开始全新校验和
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self::with_seed(0)
  }

  /// Continue from a previous checksum value 从之前的校验和值续接
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u32) -> Self {
    Self { crc: !seed }
  }

  /// Fold the next fragment into the running state; empty fragments are no-ops
  /// 将下一个片段并入运行状态；空片段不改变状态
  #[inline]
  pub fn update(&mut self, data: impl AsRef<[u8]>) {
    self.crc = update(self.crc, data.as_ref());
  }

  /// Current checksum; reading neither consumes nor resets the state
  /// 当前校验和；读取不消耗也不重置状态
  #[inline]
  #[must_use]
  pub const fn digest(&self) -> u32 {
    !self.crc
  }
}
