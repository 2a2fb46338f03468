use super::line::Line;
use super::Shape;
use crate::error::Result;
use crate::operand::{Notation, Operand, RegClass, RegView, Register};
use crate::random_asm::inst_generator::GenContext;

/// Scalar floating-point operations. Each operand has its own mode letter
/// (`sss`, `ds`, `sz`, `xd`, ...), which decides both the register bank and
/// the assembler prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatOp {
    name: &'static str,
    asm_name: &'static str,
    modes: &'static str,
    operands: Vec<Operand>,
}

impl FloatOp {
    pub fn generate(
        name: &'static str,
        asm_name: Option<&'static str>,
        modes: &'static str,
        ctx: &mut GenContext,
    ) -> Result<Self> {
        let operands = modes
            .chars()
            .map(|mode| Operand::from_mode(mode, ctx))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name,
            asm_name: asm_name.unwrap_or_else(|| Self::strip_precision(name)),
            modes,
            operands,
        })
    }

    /// `fadds` -> `fadd`, `fcvtsh` -> `fcvt`.
    fn strip_precision(name: &'static str) -> &'static str {
        if name == "fcvtsh" || name == "fcvths" {
            &name[..name.len() - 2]
        } else if let Some(stem) = name.strip_suffix('s').or_else(|| name.strip_suffix('d')) {
            stem
        } else {
            name
        }
    }
}

impl Shape for FloatOp {
    fn render(&self, notation: Notation) -> String {
        Line::new(notation, self.name, self.asm_name)
            .args(self.operands.iter().zip(self.modes.chars()).map(|(op, mode)| {
                op.render(notation, RegView::from_mode(mode).unwrap_or(RegView::X))
            }))
            .finish()
    }
}

/// `fmov dN, #imm` over the 8-bit encodable constants.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatImmediateOp {
    reg: Register,
    value: &'static str,
}

impl FloatImmediateOp {
    pub fn generate(value: &'static str, ctx: &mut GenContext) -> Self {
        Self {
            reg: ctx.register(RegClass::Float),
            value,
        }
    }
}

impl Shape for FloatImmediateOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::new(notation, "fmovd", "fmov").arg(self.reg.render(notation, RegView::D));
        let line = match notation {
            Notation::Call => line.arg(self.value),
            Notation::Asm => line.arg(format!("#{}", self.value)),
        };
        line.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_suffix_is_stripped() {
        assert_eq!(FloatOp::strip_precision("fabds"), "fabd");
        assert_eq!(FloatOp::strip_precision("fnmaddd"), "fnmadd");
        assert_eq!(FloatOp::strip_precision("fcvtsh"), "fcvt");
        assert_eq!(FloatOp::strip_precision("fcvtd"), "fcvt");
    }

    #[test]
    fn compare_with_zero() {
        let mut ctx = GenContext::with_seed(0);
        let op = FloatOp::generate("fcmps", None, "sz", &mut ctx).unwrap();
        let call = op.render(Notation::Call);
        let asm = op.render(Notation::Asm);
        assert!(call.starts_with("__ fcmps(v") && call.ends_with(", 0.0);"), "{call}");
        assert!(asm.starts_with("fcmp\ts") && asm.ends_with(", #0.0"), "{asm}");
    }

    #[test]
    fn conversions_mix_register_banks() {
        let op = FloatOp {
            name: "fcvtzdw",
            asm_name: "fcvtzs",
            modes: "wd",
            operands: vec![Register::general(3).into(), Register::float(4).into()],
        };
        assert_eq!(op.render(Notation::Call), "__ fcvtzdw(r3, v4);");
        assert_eq!(op.render(Notation::Asm), "fcvtzs\tw3, d4");
    }

    #[test]
    fn float_immediates() {
        let op = FloatImmediateOp {
            reg: Register::float(0),
            value: "-0.1328125",
        };
        assert_eq!(op.render(Notation::Call), "__ fmovd(v0, -0.1328125);");
        assert_eq!(op.render(Notation::Asm), "fmov\td0, #-0.1328125");
    }
}
