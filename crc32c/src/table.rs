//! CRC32C lookup table, built at compile time
//! 编译期构建的 CRC32C 查找表

/// Castagnoli polynomial, bit-reflected form
/// Castagnoli 多项式（位反转形式）
const POLY: u32 = 0x82F6_3B78;

/// Per-byte remainder table: entry i is byte value i pushed through
/// 8 LSB-first polynomial division steps
/// 逐字节余数表：第 i 项是字节值 i 经过 8 步 LSB 优先多项式除法的结果
const fn make_table() -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0u32;
  while i < 256 {
    let mut crc = i;
    let mut j = 0;
    while j < 8 {
      if crc & 1 != 0 {
        crc = (crc >> 1) ^ POLY;
      } else {
        crc >>= 1;
      }
      j += 1;
    }
    table[i as usize] = crc;
    i += 1;
  }
  table
}

pub(crate) const TABLE: [u32; 256] = make_table();

const _: () = assert!(TABLE[0] == 0x0000_0000);
const _: () = assert!(TABLE[255] == 0xAD7D_5351);

/// Advance the raw register over `data` one byte at a time.
/// The register is already complemented; callers apply `!` on entry and exit.
/// 按字节推进原始寄存器；寄存器已取反，调用方负责进出时的取反
#[inline]
pub(crate) const fn update(mut crc: u32, data: &[u8]) -> u32 {
  let mut i = 0;
  while i < data.len() {
    crc = TABLE[((crc ^ data[i] as u32) & 0xFF) as usize] ^ (crc >> 8);
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_entries() {
    assert_eq!(TABLE[0], 0x0000_0000);
    assert_eq!(TABLE[255], 0xAD7D_5351);
    // 0x80 shifts right seven times to 1, then one division step leaves POLY
    // 0x80 右移七次得 1，再做一步除法即为 POLY
    assert_eq!(TABLE[128], POLY);
  }

  #[test]
  fn update_single_step() {
    // One byte b from register 0 must reduce to a plain table lookup
    // 寄存器为 0 时处理单字节 b 应退化为一次查表
    for b in 0..=255u8 {
      assert_eq!(update(0, &[b]), TABLE[b as usize]);
    }
  }
}
