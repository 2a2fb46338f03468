use super::{ElementWidth, Notation};
use crate::consts::logical_imm;
use crate::error::{AsmTestError, Result};
use crate::random_asm::inst_generator::GenContext;

/// How an immediate is spelled in each notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImmStyle {
    /// `12` / `#12`
    Plain,
    /// `12u` / `#12`
    Unsigned,
    /// `4294901760ll` / `#0xffff0000`
    Logical,
    /// `12` / `12`, for assembler operands written without `#`.
    Bare,
    /// `255u` / `#0xff`, SVE bitmask immediates.
    Mask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Immediate {
    value: i64,
    style: ImmStyle,
}

impl Immediate {
    pub fn plain(value: i64) -> Self {
        Self {
            value,
            style: ImmStyle::Plain,
        }
    }

    pub fn unsigned(value: i64) -> Self {
        Self {
            value,
            style: ImmStyle::Unsigned,
        }
    }

    pub fn bare(value: i64) -> Self {
        Self {
            value,
            style: ImmStyle::Bare,
        }
    }

    pub fn logical(bits: u64) -> Self {
        Self {
            value: bits as i64,
            style: ImmStyle::Logical,
        }
    }

    pub fn mask(bits: u64) -> Self {
        Self {
            value: bits as i64,
            style: ImmStyle::Mask,
        }
    }

    /// 从对应元素宽度的逻辑立即数表中均匀选取
    pub fn pick_logical(width: ElementWidth, ctx: &mut GenContext) -> Result<Self> {
        let table = logical_imm::table_for(width).ok_or_else(|| {
            AsmTestError::instruction_generation(format!(
                "no logical immediate table for {}-bit elements",
                width.bits()
            ))
        })?;
        let value = ctx.choose(table);
        if !logical_imm::is_bitmask_immediate(value, width.bits()) {
            return Err(AsmTestError::instruction_generation(format!(
                "0x{value:x} is not a {}-bit logical immediate",
                width.bits()
            )));
        }
        Ok(Self::logical(value))
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Raw bit pattern, for logical immediates wider than `i64::MAX`.
    pub fn bits(&self) -> u64 {
        self.value as u64
    }

    pub fn style(&self) -> ImmStyle {
        self.style
    }

    pub fn render(&self, notation: Notation) -> String {
        match (self.style, notation) {
            (ImmStyle::Plain | ImmStyle::Bare, Notation::Call) => self.value.to_string(),
            (ImmStyle::Unsigned, Notation::Call) => format!("{}u", self.value),
            (ImmStyle::Logical, Notation::Call) => format!("{}ll", self.bits()),
            (ImmStyle::Mask, Notation::Call) => format!("{}u", self.bits()),
            (ImmStyle::Plain | ImmStyle::Unsigned, Notation::Asm) => format!("#{}", self.value),
            (ImmStyle::Logical | ImmStyle::Mask, Notation::Asm) => format!("#0x{:x}", self.bits()),
            (ImmStyle::Bare, Notation::Asm) => self.value.to_string(),
        }
    }
}
