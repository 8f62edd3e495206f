#![cfg_attr(docsrs, feature(doc_cfg))]

//! Table-driven CRC32C (Castagnoli) checksum
//! 基于查表的 CRC32C (Castagnoli) 校验和

mod hash;
mod hasher;
mod table;

pub use hash::{crc32c, crc32c_with_seed, verify};
pub use hasher::Crc32c;
