//! Reference toolchain oracle.
//!
//! The oracle turns assembly source into the machine code the reference
//! assembler emits, plus the length of every instruction in source order.
//! It is a trait so the pipeline can be driven without binutils installed.

pub mod gnu;
pub mod listing;

use serde::Serialize;

use crate::error::{AsmTestError, Result};

pub use gnu::GnuToolchain;

/// 汇编结果：`.text` 段的原始字节和逐条指令的长度
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assembled {
    pub bytes: Vec<u8>,
    pub lengths: Vec<usize>,
}

impl Assembled {
    /// Checks that the lengths tile the binary exactly.
    pub fn new(bytes: Vec<u8>, lengths: Vec<usize>) -> Result<Self> {
        let total: usize = lengths.iter().sum();
        if total != bytes.len() {
            return Err(AsmTestError::extraction(format!(
                "instruction lengths sum to {total} bytes but the binary has {}",
                bytes.len()
            )));
        }
        Ok(Self { bytes, lengths })
    }

    /// Byte slices, one per instruction.
    pub fn instructions(&self) -> Vec<&[u8]> {
        let mut offset = 0;
        self.lengths
            .iter()
            .map(|&len| {
                let slice = &self.bytes[offset..offset + len];
                offset += len;
                slice
            })
            .collect()
    }
}

pub trait Oracle {
    fn assemble(&mut self, source: &str) -> Result<Assembled>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_must_cover_the_binary() {
        assert!(Assembled::new(vec![0; 8], vec![4, 4]).is_ok());
        assert!(Assembled::new(vec![0; 8], vec![4]).is_err());
    }

    #[test]
    fn instructions_are_sliced_in_order() {
        let assembled = Assembled::new(vec![1, 2, 3, 4, 5, 6], vec![2, 4]).unwrap();
        assert_eq!(
            assembled.instructions(),
            vec![&[1u8, 2][..], &[3u8, 4, 5, 6][..]]
        );
    }
}
