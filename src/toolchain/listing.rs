use log::debug;
use regex::Regex;

use crate::error::{AsmTestError, Result};

/// `objdump -d` 指令行：地址、机器码字节组、可选的反汇编文本
const INSTRUCTION_LINE: &str = r"^\s*([0-9a-f]+):\t((?:[0-9a-f]{2,8} )+)\s*(.*)$";

/// 从 `objdump -d -z` 的输出中恢复每条指令的字节长度。
///
/// A line with machine code but no disassembly text continues the
/// previous instruction (long encodings wrap on some targets).
pub fn parse_lengths(listing: &str) -> Result<Vec<usize>> {
    let re = Regex::new(INSTRUCTION_LINE)
        .map_err(|e| AsmTestError::extraction(format!("bad listing pattern: {e}")))?;

    let mut lengths: Vec<usize> = Vec::new();
    for line in listing.lines() {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let size: usize = caps[2].split_whitespace().map(|group| group.len() / 2).sum();
        let text = caps[3].trim();

        if text.is_empty() {
            match lengths.last_mut() {
                Some(last) => *last += size,
                None => {
                    return Err(AsmTestError::extraction(format!(
                        "continuation line before any instruction: {line}"
                    )));
                }
            }
        } else {
            lengths.push(size);
        }
    }

    debug!("Recovered {} instruction lengths from listing", lengths.len());
    Ok(lengths)
}

/// 无反汇编器时按固定宽度切分
pub fn split_fixed_width(total: usize, width: usize) -> Result<Vec<usize>> {
    if width == 0 {
        return Err(AsmTestError::config("fixed instruction width must be non-zero"));
    }
    if total % width != 0 {
        return Err(AsmTestError::extraction(format!(
            "binary length {total} is not a multiple of the fixed width {width}"
        )));
    }
    Ok(vec![width; total / width])
}
