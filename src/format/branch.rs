//! Branches and pc-relative forms. Each of these is emitted once per
//! [`PcTarget`]: the current location, the backward label and the forward
//! label.

use enum_iterator::all;

use super::line::{Line, Mnemonic};
use super::Shape;
use crate::operand::{Condition, Immediate, Notation, PcTarget, RegClass, Register};
use crate::random_asm::inst_generator::GenContext;

fn every_target() -> Vec<PcTarget> {
    all::<PcTarget>().collect()
}

/// `b`/`bl` to a label.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsOp {
    mnemonic: Mnemonic,
    target: PcTarget,
}

impl AbsOp {
    pub fn generate(mnemonic: Mnemonic) -> Self {
        Self {
            mnemonic,
            target: PcTarget::Here,
        }
    }

    pub fn retarget(&self, target: PcTarget) -> Self {
        Self {
            target,
            ..self.clone()
        }
    }

    pub fn targets(&self) -> Vec<PcTarget> {
        every_target()
    }
}

impl Shape for AbsOp {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic)
            .arg(self.target.render(notation))
            .finish()
    }
}

/// Register plus label: `cbz`, `cbnz`, `adr`, `adrp`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegAndAbsOp {
    mnemonic: Mnemonic,
    reg: Register,
    target: PcTarget,
}

impl RegAndAbsOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        Self {
            mnemonic,
            reg: ctx.register(RegClass::General),
            target: PcTarget::Here,
        }
    }

    pub fn retarget(&self, target: PcTarget) -> Self {
        Self {
            target,
            ..self.clone()
        }
    }

    fn is_adrp(&self) -> bool {
        self.mnemonic.name() == "adrp"
    }

    /// Anything but `adrp .` would need a relocation in the object file.
    pub fn targets(&self) -> Vec<PcTarget> {
        if self.is_adrp() {
            vec![PcTarget::Here]
        } else {
            every_target()
        }
    }
}

impl Shape for RegAndAbsOp {
    fn render(&self, notation: Notation) -> String {
        let call = if self.is_adrp() {
            "_adrp"
        } else {
            self.mnemonic.call_name()
        };
        Line::new(notation, call, self.mnemonic.asm_name())
            .arg(self.reg.render(notation, self.mnemonic.view()))
            .arg(self.target.render(notation))
            .finish()
    }
}

/// Test-bit-and-branch: `tbz`/`tbnz`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegImmAbsOp {
    mnemonic: Mnemonic,
    reg: Register,
    bit: Immediate,
    target: PcTarget,
}

impl RegImmAbsOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let reg = ctx.register(RegClass::General);
        let high = if mnemonic.is_word() { 31 } else { 63 };
        Self {
            mnemonic,
            reg,
            bit: Immediate::plain(ctx.range(0, high)),
            target: PcTarget::Here,
        }
    }

    pub fn retarget(&self, target: PcTarget) -> Self {
        Self {
            target,
            ..self.clone()
        }
    }

    pub fn targets(&self) -> Vec<PcTarget> {
        every_target()
    }
}

impl Shape for RegImmAbsOp {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic)
            .arg(self.reg.render(notation, self.mnemonic.view()))
            .arg(self.bit.render(notation))
            .arg(self.target.render(notation))
            .finish()
    }
}

/// `b.cond`
#[derive(Debug, Clone, PartialEq)]
pub struct CondBranchOp {
    cond: Condition,
    target: PcTarget,
}

impl CondBranchOp {
    pub fn generate(cond: Condition) -> Self {
        Self {
            cond,
            target: PcTarget::Here,
        }
    }

    pub fn retarget(&self, target: PcTarget) -> Self {
        Self {
            target,
            ..self.clone()
        }
    }

    pub fn targets(&self) -> Vec<PcTarget> {
        every_target()
    }
}

impl Shape for CondBranchOp {
    fn render(&self, notation: Notation) -> String {
        let asm = format!("b.{}", self.cond.name());
        Line::new(notation, "br", &asm)
            .call_arg(self.cond.qualified())
            .arg(self.target.render(notation))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditional_branch_forms() {
        let op = CondBranchOp::generate(Condition::NE);
        assert_eq!(op.render(Notation::Call), "__ br(Assembler::NE, __ pc());");
        assert_eq!(op.render(Notation::Asm), "b.NE\t.");
        let back = op.retarget(PcTarget::Back);
        assert_eq!(back.render(Notation::Call), "__ br(Assembler::NE, back);");
        assert_eq!(back.render(Notation::Asm), "b.NE\tback");
        assert_eq!(op.targets().len(), 3);
    }

    #[test]
    fn adrp_has_a_single_form() {
        let mut ctx = GenContext::with_seed(0);
        let adrp = RegAndAbsOp::generate(Mnemonic::new("adrp"), &mut ctx);
        assert_eq!(adrp.targets(), vec![PcTarget::Here]);
        assert!(adrp.render(Notation::Call).starts_with("__ _adrp(r"));
        assert!(adrp.render(Notation::Asm).ends_with(", ."));
        let cbz = RegAndAbsOp::generate(Mnemonic::new("cbzw"), &mut ctx);
        assert_eq!(cbz.targets().len(), 3);
        assert!(cbz.retarget(PcTarget::Forth).render(Notation::Asm).starts_with("cbz\tw"));
    }

    #[test]
    fn test_bit_branch() {
        let op = RegImmAbsOp {
            mnemonic: Mnemonic::new("tbnz"),
            reg: Register::general(3),
            bit: Immediate::plain(40),
            target: PcTarget::Forth,
        };
        assert_eq!(op.render(Notation::Call), "__ tbnz(r3, 40, forth);");
        assert_eq!(op.render(Notation::Asm), "tbnz\tx3, #40, forth");
    }

    #[test]
    fn unconditional_branch() {
        let op = AbsOp::generate(Mnemonic::new("bl")).retarget(PcTarget::Back);
        assert_eq!(op.render(Notation::Call), "__ bl(back);");
        assert_eq!(op.render(Notation::Asm), "bl\tback");
    }
}
