//! Scalable vector forms. The call side prefixes every name with `sve_`.

use super::line::Line;
use super::Shape;
use crate::error::{AsmTestError, Result};
use crate::operand::{
    Condition, ElementWidth, Immediate, Notation, RegClass, RegView, Register,
};
use crate::random_asm::inst_generator::GenContext;

fn call_name(name: &str) -> String {
    format!("sve_{name}")
}

/// `z3.s`
fn sized(reg: Register, width: ElementWidth) -> String {
    format!("{}{}", reg.render(Notation::Asm, RegView::V), width.render(Notation::Asm))
}

fn draw_width(low: ElementWidth, high: ElementWidth, ctx: &mut GenContext) -> ElementWidth {
    ctx.choose(&ElementWidth::between(low, high))
}

/// Unpredicated immediate arithmetic: `add z0.b, z0.b, #0xc`. Destination
/// and first source are the same register.
#[derive(Debug, Clone, PartialEq)]
pub struct SveBinaryImmOp {
    name: &'static str,
    reg: Register,
    width: ElementWidth,
    imm: Immediate,
}

impl SveBinaryImmOp {
    pub fn generate(name: &'static str, ctx: &mut GenContext) -> Result<Self> {
        let reg = ctx.register(RegClass::SveVector);
        let width = draw_width(ElementWidth::B, ElementWidth::D, ctx);
        let imm = if is_logical_name(name) {
            Immediate::mask(Immediate::pick_logical(width, ctx)?.bits())
        } else {
            Immediate::mask(ctx.range(0, 255) as u64)
        };
        Ok(Self {
            name,
            reg,
            width,
            imm,
        })
    }

    /// `and`/`eor`/`orr` take a bitmask immediate; `add`/`sub` an unsigned byte.
    pub fn is_logical(&self) -> bool {
        is_logical_name(self.name)
    }

    pub fn width(&self) -> ElementWidth {
        self.width
    }

    pub fn immediate(&self) -> Immediate {
        self.imm
    }
}

fn is_logical_name(name: &str) -> bool {
    matches!(name, "and" | "eor" | "orr")
}

impl Shape for SveBinaryImmOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::new(notation, &call_name(self.name), self.name);
        let line = match notation {
            Notation::Call => line
                .arg(self.reg.render(notation, RegView::V))
                .arg(self.width.render(notation)),
            Notation::Asm => line
                .arg(sized(self.reg, self.width))
                .arg(sized(self.reg, self.width)),
        };
        line.arg(self.imm.render(notation)).finish()
    }
}

/// Vector operations described by an operand string: `Z` vector,
/// `P` governing predicate, `p` predicate. A `P` in second position makes
/// the form predicated with merging; `dn` forms repeat the destination as
/// the first source.
#[derive(Debug, Clone, PartialEq)]
pub struct SveVectorOp {
    name: &'static str,
    regs: Vec<Register>,
    width: ElementWidth,
    predicated: bool,
    destructive: bool,
}

impl SveVectorOp {
    pub fn generate(
        name: &'static str,
        operands: &'static str,
        destructive: bool,
        ctx: &mut GenContext,
    ) -> Result<Self> {
        let regs = operands
            .chars()
            .map(|mode| {
                RegClass::for_mode(mode)
                    .map(|class| ctx.register(class))
                    .ok_or_else(|| {
                        AsmTestError::instruction_generation(format!(
                            "sve_{name}: unknown operand mode '{mode}'"
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        if regs.len() < 2 {
            return Err(AsmTestError::instruction_generation(format!(
                "sve_{name}: needs at least two operands, got '{operands}'"
            )));
        }
        let predicated = !operands.starts_with('p') && operands[1..].starts_with('P');

        let width = if name.starts_with('f') {
            draw_width(ElementWidth::S, ElementWidth::D, ctx)
        } else if !predicated && Self::is_bitwise_name(name) {
            ElementWidth::D
        } else if name == "revb" {
            draw_width(ElementWidth::H, ElementWidth::D, ctx)
        } else {
            draw_width(ElementWidth::B, ElementWidth::D, ctx)
        };

        Ok(Self {
            name,
            regs,
            width,
            predicated,
            destructive,
        })
    }

    fn is_bitwise_name(name: &str) -> bool {
        matches!(name, "and" | "eor" | "orr" | "bic" | "eor3")
    }

    /// Unpredicated bitwise forms have no element size on the call side.
    fn is_bitwise(&self) -> bool {
        !self.predicated && Self::is_bitwise_name(self.name)
    }
}

impl Shape for SveVectorOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::new(notation, &call_name(self.name), self.name);
        let line = match notation {
            Notation::Call => {
                let line = line.arg(self.regs[0].render(notation, RegView::V));
                let line = if self.is_bitwise() {
                    line
                } else {
                    line.arg(self.width.render(notation))
                };
                line.args(self.regs[1..].iter().map(|r| r.render(notation, RegView::V)))
            }
            Notation::Asm => {
                let line = line.arg(sized(self.regs[0], self.width));
                if self.predicated {
                    let line = line.arg(format!("{}/m", self.regs[1].render(notation, RegView::V)));
                    let line = if self.destructive {
                        line.arg(sized(self.regs[0], self.width))
                    } else {
                        line
                    };
                    line.args(self.regs[2..].iter().map(|r| sized(*r, self.width)))
                } else {
                    // eor3 names its destination again as the first source
                    let first = if self.name == "eor3" { 0 } else { 1 };
                    line.args(self.regs[first..].iter().map(|r| sized(*r, self.width)))
                }
            }
        };
        line.finish()
    }
}

/// Predicated reductions to a scalar: `andv b0, p1, z2.b`.
#[derive(Debug, Clone, PartialEq)]
pub struct SveReductionOp {
    name: &'static str,
    dst: Register,
    pred: Register,
    src: Register,
    width: ElementWidth,
}

impl SveReductionOp {
    pub fn generate(name: &'static str, lowest: ElementWidth, ctx: &mut GenContext) -> Self {
        Self {
            name,
            dst: ctx.register(RegClass::Float),
            pred: ctx.register(RegClass::GoverningPredicate),
            src: ctx.register(RegClass::SveVector),
            width: draw_width(lowest, ElementWidth::D, ctx),
        }
    }
}

impl Shape for SveReductionOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::new(notation, &call_name(self.name), self.name);
        let line = match notation {
            Notation::Call => line
                .arg(self.dst.render(notation, RegView::V))
                .arg(self.width.render(notation))
                .arg(self.pred.render(notation, RegView::V))
                .arg(self.src.render(notation, RegView::V)),
            Notation::Asm => {
                // uaddv always widens to a doubleword
                let view = if self.name == "uaddv" {
                    RegView::D
                } else {
                    RegView::from_mode(self.width.letter()).unwrap_or(RegView::D)
                };
                let dst = self.dst.render(notation, view);
                let line = line.arg(dst.clone()).arg(self.pred.render(notation, view));
                let line = if self.name == "fadda" { line.arg(dst) } else { line };
                line.arg(sized(self.src, self.width))
            }
        };
        line.finish()
    }
}

/// `fcmXX p0.s, p1/z, z2.s, #0.0`
#[derive(Debug, Clone, PartialEq)]
pub struct SveCompareWithZero {
    cond: Condition,
    dst: Register,
    src: Register,
    width: ElementWidth,
    pred: Register,
}

impl SveCompareWithZero {
    pub fn generate(cond: Condition, ctx: &mut GenContext) -> Self {
        Self {
            cond,
            dst: ctx.register(RegClass::Predicate),
            src: ctx.register(RegClass::SveVector),
            width: draw_width(ElementWidth::S, ElementWidth::D, ctx),
            pred: ctx.register(RegClass::GoverningPredicate),
        }
    }
}

impl Shape for SveCompareWithZero {
    fn render(&self, notation: Notation) -> String {
        let asm = format!("fcm{}", self.cond.suffix());
        let line = Line::new(notation, "sve_fcm", &asm);
        let line = match notation {
            Notation::Call => line
                .arg(self.cond.qualified())
                .arg(self.dst.render(notation, RegView::V))
                .arg(self.width.render(notation))
                .arg(self.pred.render(notation, RegView::V))
                .arg(self.src.render(notation, RegView::V))
                .arg("0.0"),
            Notation::Asm => line
                .arg(sized(self.dst, self.width))
                .arg(format!("{}/z", self.pred.render(notation, RegView::V)))
                .arg(sized(self.src, self.width))
                .arg("#0.0"),
        };
        line.finish()
    }
}

/// `cmpXX p0.b, p1/z, z2.b, #imm`. Unsigned conditions take 0..=127,
/// signed ones -16..=15.
#[derive(Debug, Clone, PartialEq)]
pub struct SveCompareWithImm {
    cond: Condition,
    dst: Register,
    src: Register,
    width: ElementWidth,
    pred: Register,
    imm: i64,
}

impl SveCompareWithImm {
    pub fn generate(cond: Condition, ctx: &mut GenContext) -> Self {
        let imm = if cond.is_unsigned() {
            ctx.range(0, 127)
        } else {
            ctx.range(-16, 15)
        };
        Self {
            cond,
            dst: ctx.register(RegClass::Predicate),
            src: ctx.register(RegClass::SveVector),
            width: draw_width(ElementWidth::B, ElementWidth::D, ctx),
            pred: ctx.register(RegClass::GoverningPredicate),
            imm,
        }
    }
}

impl Shape for SveCompareWithImm {
    fn render(&self, notation: Notation) -> String {
        let asm = format!("cmp{}", self.cond.suffix());
        let line = Line::new(notation, "sve_cmp", &asm);
        let line = match notation {
            Notation::Call => line
                .arg(self.cond.qualified())
                .arg(self.dst.render(notation, RegView::V))
                .arg(self.width.render(notation))
                .arg(self.pred.render(notation, RegView::V))
                .arg(self.src.render(notation, RegView::V))
                .arg(self.imm.to_string()),
            Notation::Asm => line
                .arg(sized(self.dst, self.width))
                .arg(format!("{}/z", self.pred.render(notation, RegView::V)))
                .arg(sized(self.src, self.width))
                .arg(format!("#{}", self.imm)),
        };
        line.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::logical_imm;

    fn z(n: u8) -> Register {
        Register::new(RegClass::SveVector, n)
    }

    fn p(n: u8) -> Register {
        Register::new(RegClass::GoverningPredicate, n)
    }

    #[test]
    fn binary_immediates() {
        let op = SveBinaryImmOp {
            name: "add",
            reg: z(0),
            width: ElementWidth::B,
            imm: Immediate::mask(12),
        };
        assert_eq!(op.render(Notation::Call), "__ sve_add(z0, __ B, 12u);");
        assert_eq!(op.render(Notation::Asm), "add\tz0.b, z0.b, #0xc");
    }

    #[test]
    fn logical_binary_immediates_come_from_the_table() {
        let mut ctx = GenContext::with_seed(2);
        for _ in 0..100 {
            let op = SveBinaryImmOp::generate("eor", &mut ctx).unwrap();
            let table = logical_imm::table_for(op.width).unwrap();
            assert!(table.contains(&op.imm.bits()));
            let op = SveBinaryImmOp::generate("sub", &mut ctx).unwrap();
            assert!(op.imm.bits() <= 255);
        }
    }

    #[test]
    fn predicated_destructive_forms() {
        let op = SveVectorOp {
            name: "add",
            regs: vec![z(4), p(1), z(6)],
            width: ElementWidth::H,
            predicated: true,
            destructive: true,
        };
        assert_eq!(op.render(Notation::Call), "__ sve_add(z4, __ H, p1, z6);");
        assert_eq!(op.render(Notation::Asm), "add\tz4.h, p1/m, z4.h, z6.h");

        let op = SveVectorOp {
            name: "fmla",
            regs: vec![z(1), p(2), z(3), z(4)],
            width: ElementWidth::D,
            predicated: true,
            destructive: false,
        };
        assert_eq!(op.render(Notation::Asm), "fmla\tz1.d, p2/m, z3.d, z4.d");
    }

    #[test]
    fn unpredicated_bitwise_forms() {
        let mut ctx = GenContext::with_seed(4);
        let op = SveVectorOp::generate("eor3", "ZZZ", false, &mut ctx).unwrap();
        assert_eq!(op.width, ElementWidth::D);
        assert!(!op.predicated);

        let op = SveVectorOp {
            name: "eor3",
            regs: vec![z(1), z(2), z(3)],
            width: ElementWidth::D,
            predicated: false,
            destructive: false,
        };
        assert_eq!(op.render(Notation::Call), "__ sve_eor3(z1, z2, z3);");
        assert_eq!(op.render(Notation::Asm), "eor3\tz1.d, z1.d, z2.d, z3.d");

        let op = SveVectorOp {
            name: "uzp1",
            regs: vec![z(1), z(2), z(3)],
            width: ElementWidth::S,
            predicated: false,
            destructive: false,
        };
        assert_eq!(op.render(Notation::Call), "__ sve_uzp1(z1, __ S, z2, z3);");
        assert_eq!(op.render(Notation::Asm), "uzp1\tz1.s, z2.s, z3.s");
    }

    #[test]
    fn width_rules() {
        let mut ctx = GenContext::with_seed(8);
        for _ in 0..50 {
            let f = SveVectorOp::generate("fadd", "ZPZ", true, &mut ctx).unwrap();
            assert!(f.width >= ElementWidth::S && f.width <= ElementWidth::D);
            let revb = SveVectorOp::generate("revb", "ZPZ", false, &mut ctx).unwrap();
            assert!(revb.width >= ElementWidth::H);
            assert!(revb.regs[1].number() < 8);
        }
        assert!(SveVectorOp::generate("add", "Zq", false, &mut ctx).is_err());
    }

    #[test]
    fn reductions() {
        let mut op = SveReductionOp {
            name: "andv",
            dst: Register::float(0),
            pred: p(1),
            src: z(2),
            width: ElementWidth::B,
        };
        assert_eq!(op.render(Notation::Call), "__ sve_andv(v0, __ B, p1, z2);");
        assert_eq!(op.render(Notation::Asm), "andv\tb0, p1, z2.b");
        op.name = "uaddv";
        assert_eq!(op.render(Notation::Asm), "uaddv\td0, p1, z2.b");
        op.name = "fadda";
        op.width = ElementWidth::S;
        assert_eq!(op.render(Notation::Asm), "fadda\ts0, p1, s0, z2.s");
    }

    #[test]
    fn compares() {
        let op = SveCompareWithZero {
            cond: Condition::EQ,
            dst: Register::new(RegClass::Predicate, 0),
            src: z(2),
            width: ElementWidth::S,
            pred: p(1),
        };
        assert_eq!(
            op.render(Notation::Call),
            "__ sve_fcm(Assembler::EQ, p0, __ S, p1, z2, 0.0);"
        );
        assert_eq!(op.render(Notation::Asm), "fcmeq\tp0.s, p1/z, z2.s, #0.0");

        let mut ctx = GenContext::with_seed(5);
        for _ in 0..200 {
            let hi = SveCompareWithImm::generate(Condition::HI, &mut ctx);
            assert!((0..=127).contains(&hi.imm));
            let lt = SveCompareWithImm::generate(Condition::LT, &mut ctx);
            assert!((-16..=15).contains(&lt.imm));
            assert!(lt.render(Notation::Asm).starts_with("cmplt\tp"));
        }
    }
}
