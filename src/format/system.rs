use super::line::{Line, Mnemonic};
use super::Shape;
use crate::operand::{Barrier, Immediate, Notation, RegClass, Register, SystemReg};
use crate::random_asm::inst_generator::GenContext;

/// Exception generation with a 16-bit immediate: `svc`, `hvc`, `brk`, ...
#[derive(Debug, Clone, PartialEq)]
pub struct ImmOp {
    mnemonic: Mnemonic,
    imm: Immediate,
}

impl ImmOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        Self {
            mnemonic,
            imm: Immediate::plain(ctx.range(0, 0xffff)),
        }
    }
}

impl Shape for ImmOp {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic)
            .arg(self.imm.render(notation))
            .finish()
    }
}

/// No operands: hints, pointer authentication on fixed registers, `eret`.
#[derive(Debug, Clone, PartialEq)]
pub struct Op {
    mnemonic: Mnemonic,
}

impl Op {
    pub fn generate(mnemonic: Mnemonic) -> Self {
        Self { mnemonic }
    }
}

impl Shape for Op {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic).finish()
    }
}

/// Memory barriers: `dsb`, `dmb`.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemOp {
    mnemonic: Mnemonic,
    barrier: Barrier,
}

impl SystemOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        Self {
            mnemonic,
            barrier: ctx.variant::<Barrier>(),
        }
    }
}

impl Shape for SystemOp {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic)
            .call_arg(format!("Assembler::{}", self.barrier))
            .asm_arg(self.barrier.to_string())
            .finish()
    }
}

/// Single general register: indirect branches and pointer authentication.
#[derive(Debug, Clone, PartialEq)]
pub struct OneRegOp {
    mnemonic: Mnemonic,
    reg: Register,
}

impl OneRegOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        Self {
            mnemonic,
            reg: ctx.register(RegClass::General),
        }
    }
}

impl Shape for OneRegOp {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic)
            .arg(self.reg.render(notation, self.mnemonic.view()))
            .finish()
    }
}

/// Which way a system register move goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// `msr sysreg, xN`
    ToSystem,
    /// `mrs xN, sysreg`
    FromSystem,
}

/// `msr`/`mrs`. The encoder takes the raw (op1, CRn, CRm, op2) fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemRegOp {
    mnemonic: Mnemonic,
    system_reg: SystemReg,
    transfer: Transfer,
    reg: Register,
}

impl SystemRegOp {
    pub fn generate(
        mnemonic: Mnemonic,
        system_reg: SystemReg,
        transfer: Transfer,
        ctx: &mut GenContext,
    ) -> Self {
        Self {
            mnemonic,
            system_reg,
            transfer,
            reg: ctx.register(RegClass::General),
        }
    }
}

impl Shape for SystemRegOp {
    fn render(&self, notation: Notation) -> String {
        let reg = self.reg.render(notation, self.mnemonic.view());
        let line = Line::of(notation, &self.mnemonic);
        let line = match notation {
            Notation::Call => {
                let (op1, crn, crm, op2) = self.system_reg.encoding();
                line.args([op1, crn, crm, op2].map(|field| field.to_string()))
                    .arg(reg)
            }
            Notation::Asm => match self.transfer {
                Transfer::ToSystem => line.arg(self.system_reg.name()).arg(reg),
                Transfer::FromSystem => line.arg(reg).arg(self.system_reg.name()),
            },
        };
        line.finish()
    }
}

/// A fixed pair of renderings for corner encodings random generation
/// would rarely reach (zero register, stack pointer, immediate forms).
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialCase {
    call: &'static str,
    asm: &'static str,
}

impl SpecialCase {
    pub fn new(call: &'static str, asm: &'static str) -> Self {
        Self { call, asm }
    }
}

impl Shape for SpecialCase {
    fn render(&self, notation: Notation) -> String {
        match notation {
            Notation::Call => self.call.to_string(),
            Notation::Asm => self.asm.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_ops_and_postfix_exceptions() {
        let nop = Op::generate(Mnemonic::new("nop"));
        assert_eq!(nop.render(Notation::Call), "__ nop();");
        assert_eq!(nop.render(Notation::Asm), "nop");
        let wfi = Op::generate(Mnemonic::postfix("wfi"));
        assert_eq!(wfi.render(Notation::Asm), "wfi");
        let xpaci = OneRegOp {
            mnemonic: Mnemonic::postfix("xpaci"),
            reg: Register::general(4),
        };
        assert_eq!(xpaci.render(Notation::Asm), "xpaci\tx4");
    }

    #[test]
    fn barriers() {
        let dmb = SystemOp {
            mnemonic: Mnemonic::new("dmb"),
            barrier: Barrier::ISHLD,
        };
        assert_eq!(dmb.render(Notation::Call), "__ dmb(Assembler::ISHLD);");
        assert_eq!(dmb.render(Notation::Asm), "dmb\tISHLD");
    }

    #[test]
    fn system_register_moves() {
        let msr = SystemRegOp {
            mnemonic: Mnemonic::new("msr"),
            system_reg: SystemReg::Fpsr,
            transfer: Transfer::ToSystem,
            reg: Register::general(5),
        };
        assert_eq!(msr.render(Notation::Call), "__ msr(3, 4, 4, 1, r5);");
        assert_eq!(msr.render(Notation::Asm), "msr\tfpsr, x5");
        let mrs = SystemRegOp {
            mnemonic: Mnemonic::new("mrs"),
            system_reg: SystemReg::CtrEl0,
            transfer: Transfer::FromSystem,
            reg: Register::general(6),
        };
        assert_eq!(mrs.render(Notation::Call), "__ mrs(3, 0, 0, 1, r6);");
        assert_eq!(mrs.render(Notation::Asm), "mrs\tx6, ctr_el0");
    }

    #[test]
    fn exception_immediates_fit_sixteen_bits() {
        let mut ctx = GenContext::with_seed(9);
        for _ in 0..100 {
            let op = ImmOp::generate(Mnemonic::new("svc"), &mut ctx);
            assert!((0..=0xffff).contains(&op.imm.value()));
        }
    }
}
