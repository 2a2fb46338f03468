//! Operand model shared by every instruction shape.
//!
//! Each operand renders itself in two notations: the call notation of the
//! encoder API under test and the reference assembler's syntax. The
//! assembler rendering of a register depends on the surrounding instruction
//! (`x3` vs `w3`), which the caller passes in as a [`RegView`].

pub mod address;
pub mod immediate;
pub mod kinds;
pub mod register;

pub use address::{Address, AddressKind};
pub use immediate::Immediate;
pub use kinds::{
    AddrExtend, Arrangement, Barrier, Condition, DataWidth, ElementWidth, PcTarget, RegExtend,
    ShiftKind, SystemReg,
};
pub use register::{RegClass, Register};

use crate::error::{AsmTestError, Result};
use crate::random_asm::inst_generator::GenContext;

/// Which of the two parallel renderings is being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `__ add(r1, r2, r3);`
    Call,
    /// `add\tx1, x2, x3`
    Asm,
}

/// Register name prefix the assembler expects in an operand position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegView {
    X,
    W,
    B,
    H,
    S,
    D,
    Q,
    V,
}

impl RegView {
    pub fn prefix(self) -> char {
        match self {
            RegView::X => 'x',
            RegView::W => 'w',
            RegView::B => 'b',
            RegView::H => 'h',
            RegView::S => 's',
            RegView::D => 'd',
            RegView::Q => 'q',
            RegView::V => 'v',
        }
    }

    /// Maps an operand mode letter (`x`, `w`, `b`, `h`, `s`, `d`, `q`, `v`).
    pub fn from_mode(mode: char) -> Option<Self> {
        match mode {
            'x' => Some(RegView::X),
            'w' => Some(RegView::W),
            'b' => Some(RegView::B),
            'h' => Some(RegView::H),
            's' => Some(RegView::S),
            'd' => Some(RegView::D),
            'q' => Some(RegView::Q),
            'v' => Some(RegView::V),
            _ => None,
        }
    }

    /// General-register view for a 32-bit (`w`) or 64-bit (`x`) instruction.
    pub fn general(is_word: bool) -> Self {
        if is_word { RegView::W } else { RegView::X }
    }
}

/// A single operand of a generated instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Reg(Register),
    Imm(Immediate),
    Addr(Address),
    /// The `#0.0` operand of floating-point compares.
    FloatZero,
    Target(PcTarget),
}

impl Operand {
    /// Builds an operand from a catalog mode letter; `z` is the float zero,
    /// everything else a register of the role [`RegClass::for_mode`] names.
    pub fn from_mode(mode: char, ctx: &mut GenContext) -> Result<Self> {
        if mode == 'z' {
            return Ok(Operand::FloatZero);
        }
        let class = RegClass::for_mode(mode).ok_or_else(|| {
            AsmTestError::instruction_generation(format!("unknown operand mode '{mode}'"))
        })?;
        Ok(Operand::Reg(ctx.register(class)))
    }

    pub fn render(&self, notation: Notation, view: RegView) -> String {
        match self {
            Operand::Reg(reg) => reg.render(notation, view),
            Operand::Imm(imm) => imm.render(notation),
            Operand::Addr(addr) => addr.render(notation),
            Operand::FloatZero => match notation {
                Notation::Call => "0.0".to_string(),
                Notation::Asm => "#0.0".to_string(),
            },
            Operand::Target(target) => target.render(notation).to_string(),
        }
    }
}

impl From<Register> for Operand {
    fn from(reg: Register) -> Self {
        Operand::Reg(reg)
    }
}

impl From<Immediate> for Operand {
    fn from(imm: Immediate) -> Self {
        Operand::Imm(imm)
    }
}

impl From<Address> for Operand {
    fn from(addr: Address) -> Self {
        Operand::Addr(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_zero_renders_per_notation() {
        assert_eq!(Operand::FloatZero.render(Notation::Call, RegView::S), "0.0");
        assert_eq!(Operand::FloatZero.render(Notation::Asm, RegView::S), "#0.0");
    }

    #[test]
    fn mode_letters_map_to_views() {
        assert_eq!(RegView::from_mode('w'), Some(RegView::W));
        assert_eq!(RegView::from_mode('d').map(RegView::prefix), Some('d'));
        assert_eq!(RegView::from_mode('Z'), None);
        assert_eq!(RegView::general(true), RegView::W);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let mut ctx = GenContext::with_seed(0);
        assert!(Operand::from_mode('q', &mut ctx).is_err());
        assert!(matches!(
            Operand::from_mode('z', &mut ctx),
            Ok(Operand::FloatZero)
        ));
        assert!(matches!(
            Operand::from_mode('P', &mut ctx),
            Ok(Operand::Reg(r)) if r.class() == RegClass::GoverningPredicate && r.number() < 8
        ));
    }
}
