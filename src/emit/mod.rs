//! Literal test-vector tables built from the generated instances and the
//! oracle's output.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::consts::aarch64::INSTRUCTION_WIDTH;
use crate::error::{AsmTestError, Result};
use crate::format::{Instruction, Shape};
use crate::operand::Notation;
use crate::toolchain::Assembled;

/// Instructions per row of the `insns[]` word table.
const WORDS_PER_ROW: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Cpp,
    Json,
}

/// 一条指令的测试向量
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorEntry {
    pub call: String,
    pub asm: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorTable {
    pub entries: Vec<VectorEntry>,
}

impl VectorTable {
    /// 将汇编结果按位置与指令实例一一对应
    pub fn build(instructions: &[&Instruction], assembled: &Assembled) -> Result<Self> {
        let slices = assembled.instructions();
        if slices.len() != instructions.len() {
            return Err(AsmTestError::extraction(format!(
                "{} instructions were generated but the toolchain produced {}",
                instructions.len(),
                slices.len()
            )));
        }

        let entries = instructions
            .iter()
            .zip(slices)
            .map(|(inst, bytes)| VectorEntry {
                call: inst.render(Notation::Call),
                asm: inst.render(Notation::Asm),
                bytes: bytes.to_vec(),
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Little-endian 32-bit words, when every instruction is one fixed-width
    /// AArch64 word.
    pub fn words(&self) -> Option<Vec<u32>> {
        self.entries
            .iter()
            .map(|entry| {
                let word: [u8; INSTRUCTION_WIDTH] = entry.bytes.as_slice().try_into().ok()?;
                Some(u32::from_le_bytes(word))
            })
            .collect()
    }

    pub fn to_cpp(&self) -> String {
        let mut out = String::new();

        out.push_str("  static const unsigned char insn_bytes[] =\n  {\n");
        for entry in &self.entries {
            let bytes: Vec<String> = entry.bytes.iter().map(|b| format!("0x{b:02x},")).collect();
            out.push_str(&format!(
                "    {:<40} // {}\n",
                bytes.join(" "),
                entry.asm.replace('\t', " ")
            ));
        }
        out.push_str("  };\n\n");

        out.push_str("  static const unsigned char insn_lengths[] =\n  {\n");
        for chunk in self.entries.chunks(16) {
            let lengths: Vec<String> = chunk.iter().map(|e| format!("{},", e.bytes.len())).collect();
            out.push_str(&format!("    {}\n", lengths.join(" ")));
        }
        out.push_str("  };\n\n");

        out.push_str("  static const char *insn_calls[] =\n  {\n");
        for entry in &self.entries {
            out.push_str(&format!("    {},\n", cpp_string(&entry.call)));
        }
        out.push_str("  };\n");

        if let Some(words) = self.words() {
            out.push_str("\n  static const unsigned int insns[] =\n  {\n");
            for row in words.chunks(WORDS_PER_ROW) {
                let row: Vec<String> = row.iter().map(|w| format!("0x{w:08x},")).collect();
                out.push_str(&format!("    {}\n", row.join("     ")));
            }
            out.push_str("  };\n");
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Cpp => Ok(self.to_cpp()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

/// 转义为 C 字符串字面量
fn cpp_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::system::SpecialCase;

    fn table() -> VectorTable {
        let a = Instruction::from(SpecialCase::new("__ nop();", "nop"));
        let b = Instruction::from(SpecialCase::new("__ add(r1, r2, r3);", "add\tx1, x2, x3"));
        let assembled = Assembled::new(
            vec![0x1f, 0x20, 0x03, 0xd5, 0x41, 0x00, 0x03, 0x8b],
            vec![4, 4],
        )
        .unwrap();
        VectorTable::build(&[&a, &b], &assembled).unwrap()
    }

    #[test]
    fn entries_line_up_with_instructions() {
        let table = table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries[1].call, "__ add(r1, r2, r3);");
        assert_eq!(table.entries[1].bytes, vec![0x41, 0x00, 0x03, 0x8b]);
        assert_eq!(table.words(), Some(vec![0xd503201f, 0x8b030041]));
    }

    #[test]
    fn count_mismatch_is_an_extraction_error() {
        let a = Instruction::from(SpecialCase::new("__ nop();", "nop"));
        let assembled = Assembled::new(vec![0; 8], vec![4, 4]).unwrap();
        assert!(matches!(
            VectorTable::build(&[&a], &assembled),
            Err(AsmTestError::Extraction { .. })
        ));
    }

    #[test]
    fn cpp_tables() {
        let cpp = table().to_cpp();
        assert!(cpp.contains("insn_bytes[]"));
        assert!(cpp.contains("    4, 4,\n"));
        assert!(cpp.contains("    \"__ add(r1, r2, r3);\",\n"));
        assert!(cpp.contains("0xd503201f,     0x8b030041,"));
    }

    #[test]
    fn cpp_byte_rows_carry_the_assembler_text() {
        let cpp = table().to_cpp();
        let row = format!("    {:<40} // add x1, x2, x3\n", "0x41, 0x00, 0x03, 0x8b,");
        assert!(cpp.contains(&row), "{cpp}");
        assert!(cpp.ends_with("  };\n"));
        assert_eq!(cpp.lines().filter(|l| l.ends_with("};")).count(), 4);
    }

    #[test]
    fn mixed_lengths_skip_the_word_table() {
        let a = Instruction::from(SpecialCase::new("__ a();", "a"));
        let b = Instruction::from(SpecialCase::new("__ b();", "b"));
        let assembled = Assembled::new(vec![0; 6], vec![2, 4]).unwrap();
        let table = VectorTable::build(&[&a, &b], &assembled).unwrap();
        assert_eq!(table.words(), None);
        assert!(!table.to_cpp().contains("insns[]"));
    }

    #[test]
    fn json_carries_the_same_data() {
        let json = table().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"][0]["asm"], "nop");
        assert_eq!(value["entries"][0]["bytes"][3], 0xd5);
    }
}
