//! 通用整数指令格式：移位寄存器、立即数、扩展寄存器、条件比较/选择、乘加等

use super::line::{Line, Mnemonic};
use super::Shape;
use crate::error::Result;
use crate::operand::{
    Condition, ElementWidth, Immediate, Notation, RegClass, RegExtend, RegView, Register,
    ShiftKind,
};
use crate::random_asm::inst_generator::GenContext;

/// Conditional compares and selects only take the first sixteen codes.
const SELECTABLE_CONDITIONS: usize = 16;

fn general_regs(ctx: &mut GenContext, count: usize) -> Vec<Register> {
    (0..count).map(|_| ctx.register(RegClass::General)).collect()
}

fn render_regs(regs: &[Register], notation: Notation, view: RegView) -> Vec<String> {
    regs.iter().map(|r| r.render(notation, view)).collect()
}

fn selectable_condition(ctx: &mut GenContext) -> Condition {
    let index = ctx.pick(SELECTABLE_CONDITIONS);
    enum_iterator::all::<Condition>()
        .nth(index)
        .unwrap_or(Condition::EQ)
}

/// Largest shift amount or bit position for the operand size.
fn max_bit(mnemonic: &Mnemonic) -> i64 {
    if mnemonic.is_word() { 31 } else { 63 }
}

/// Plain register-list forms: two-register, three-register and
/// add/sub with carry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegListOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
}

impl RegListOp {
    pub fn generate(mnemonic: Mnemonic, count: usize, ctx: &mut GenContext) -> Self {
        Self {
            mnemonic,
            regs: general_regs(ctx, count),
        }
    }
}

impl Shape for RegListOp {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic)
            .args(render_regs(&self.regs, notation, self.mnemonic.view()))
            .finish()
    }
}

/// Shifted-register arithmetic and logical operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ArithOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
    shift: ShiftKind,
    amount: i64,
}

impl ArithOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let regs = general_regs(ctx, 3);
        let shift = ctx.variant::<ShiftKind>();
        let amount = ctx.range(0, max_bit(&mnemonic));
        Self {
            mnemonic,
            regs,
            shift,
            amount,
        }
    }
}

impl Shape for ArithOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::of(notation, &self.mnemonic)
            .args(render_regs(&self.regs, notation, self.mnemonic.view()));
        let line = match notation {
            Notation::Call => line
                .arg(format!("Assembler::{}", self.shift))
                .arg(self.amount.to_string()),
            Notation::Asm => line.arg(format!("{} #{}", self.shift, self.amount)),
        };
        line.finish()
    }
}

/// Add/subtract with a 12-bit unsigned immediate.
#[derive(Debug, Clone, PartialEq)]
pub struct AddSubImmOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
    imm: Immediate,
}

impl AddSubImmOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let regs = general_regs(ctx, 2);
        let imm = Immediate::unsigned(ctx.range(0, 4095));
        Self {
            mnemonic,
            regs,
            imm,
        }
    }
}

impl Shape for AddSubImmOp {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic)
            .args(render_regs(&self.regs, notation, self.mnemonic.view()))
            .arg(self.imm.render(notation))
            .finish()
    }
}

/// Bitwise operations with a bitmask immediate from the precomputed tables.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalImmOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
    imm: Immediate,
}

impl LogicalImmOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Result<Self> {
        let regs = general_regs(ctx, 2);
        let imm = Immediate::pick_logical(Self::width_of(mnemonic), ctx)?;
        Ok(Self {
            mnemonic,
            regs,
            imm,
        })
    }

    fn width_of(mnemonic: Mnemonic) -> ElementWidth {
        if mnemonic.is_word() {
            ElementWidth::S
        } else {
            ElementWidth::D
        }
    }

    /// Element width the immediate is encoded for (the register width).
    pub fn width(&self) -> ElementWidth {
        Self::width_of(self.mnemonic)
    }

    pub fn immediate(&self) -> Immediate {
        self.imm
    }
}

impl Shape for LogicalImmOp {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic)
            .args(render_regs(&self.regs, notation, self.mnemonic.view()))
            .arg(self.imm.render(notation))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddSubExtendedOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
    extend: RegExtend,
    amount: i64,
}

impl AddSubExtendedOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let regs = general_regs(ctx, 3);
        let amount = ctx.range(1, 4);
        let extend = ctx.variant::<RegExtend>();
        Self {
            mnemonic,
            regs,
            extend,
            amount,
        }
    }
}

impl Shape for AddSubExtendedOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::of(notation, &self.mnemonic)
            .args(render_regs(&self.regs, notation, self.mnemonic.view()));
        let line = match notation {
            Notation::Call => line
                .arg(format!("ext::{}", self.extend))
                .arg(self.amount.to_string()),
            Notation::Asm => line.arg(format!("{} #{}", self.extend, self.amount)),
        };
        line.finish()
    }
}

/// `movn`/`movz`/`movk` with a 16-bit immediate and a halfword shift.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveWideImmOp {
    mnemonic: Mnemonic,
    reg: Register,
    imm: i64,
    shift: i64,
}

impl MoveWideImmOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let reg = ctx.register(RegClass::General);
        let imm = ctx.range(0, 0xffff);
        let halfwords = if mnemonic.is_word() { 2 } else { 4 };
        let shift = ctx.pick(halfwords) as i64 * 16;
        Self {
            mnemonic,
            reg,
            imm,
            shift,
        }
    }
}

impl Shape for MoveWideImmOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::of(notation, &self.mnemonic)
            .arg(self.reg.render(notation, self.mnemonic.view()));
        let line = match notation {
            Notation::Call => line.arg(self.imm.to_string()).arg(self.shift.to_string()),
            Notation::Asm => line
                .arg(format!("#{}", self.imm))
                .arg(format!("lsl {}", self.shift)),
        };
        line.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BitfieldOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
    immr: i64,
    imms: i64,
}

impl BitfieldOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let regs = general_regs(ctx, 2);
        let immr = ctx.range(0, 31);
        let imms = ctx.range(0, 31);
        Self {
            mnemonic,
            regs,
            immr,
            imms,
        }
    }
}

impl Shape for BitfieldOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::of(notation, &self.mnemonic)
            .args(render_regs(&self.regs, notation, self.mnemonic.view()));
        let line = match notation {
            Notation::Call => line.arg(self.immr.to_string()).arg(self.imms.to_string()),
            Notation::Asm => line
                .arg(format!("#{}", self.immr))
                .arg(format!("#{}", self.imms)),
        };
        line.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
    lsb: Immediate,
}

impl ExtractOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let regs = general_regs(ctx, 3);
        let lsb = Immediate::plain(ctx.range(0, max_bit(&mnemonic)));
        Self { mnemonic, regs, lsb }
    }
}

impl Shape for ExtractOp {
    fn render(&self, notation: Notation) -> String {
        Line::of(notation, &self.mnemonic)
            .args(render_regs(&self.regs, notation, self.mnemonic.view()))
            .arg(self.lsb.render(notation))
            .finish()
    }
}

/// `ccmn`/`ccmp` with a register second operand.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalCompareOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
    nzcv: Immediate,
    cond: Condition,
}

impl ConditionalCompareOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let regs = general_regs(ctx, 2);
        let cond = selectable_condition(ctx);
        let nzcv = Immediate::unsigned(ctx.range(0, 15));
        Self {
            mnemonic,
            regs,
            nzcv,
            cond,
        }
    }
}

impl Shape for ConditionalCompareOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::of(notation, &self.mnemonic)
            .args(render_regs(&self.regs, notation, self.mnemonic.view()))
            .arg(self.nzcv.render(notation));
        let line = match notation {
            Notation::Call => line.arg(self.cond.qualified()),
            Notation::Asm => line.arg(self.cond.name()),
        };
        line.finish()
    }
}

/// `ccmn`/`ccmp` with a 5-bit immediate second operand.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalCompareImmedOp {
    mnemonic: Mnemonic,
    reg: Register,
    imm: Immediate,
    nzcv: Immediate,
    cond: Condition,
}

impl ConditionalCompareImmedOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let reg = ctx.register(RegClass::General);
        let cond = selectable_condition(ctx);
        let nzcv = Immediate::plain(ctx.range(0, 15));
        let imm = Immediate::plain(ctx.range(0, 31));
        Self {
            mnemonic,
            reg,
            imm,
            nzcv,
            cond,
        }
    }
}

impl Shape for ConditionalCompareImmedOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::of(notation, &self.mnemonic)
            .arg(self.reg.render(notation, self.mnemonic.view()))
            .arg(self.imm.render(notation))
            .arg(self.nzcv.render(notation));
        let line = match notation {
            Notation::Call => line.arg(self.cond.qualified()),
            Notation::Asm => line.arg(self.cond.name()),
        };
        line.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalSelectOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
    cond: Condition,
}

impl ConditionalSelectOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        let regs = general_regs(ctx, 3);
        let cond = selectable_condition(ctx);
        Self {
            mnemonic,
            regs,
            cond,
        }
    }
}

impl Shape for ConditionalSelectOp {
    fn render(&self, notation: Notation) -> String {
        let line = Line::of(notation, &self.mnemonic)
            .args(render_regs(&self.regs, notation, self.mnemonic.view()));
        let line = match notation {
            Notation::Call => line.arg(self.cond.qualified()),
            Notation::Asm => line.arg(self.cond.name()),
        };
        line.finish()
    }
}

/// Multiply-add family. The long forms (`smaddl`, `umsubl`, ...) take
/// 32-bit multiplicands and 64-bit accumulator and destination.
#[derive(Debug, Clone, PartialEq)]
pub struct FourRegMulOp {
    mnemonic: Mnemonic,
    regs: Vec<Register>,
}

impl FourRegMulOp {
    pub fn generate(mnemonic: Mnemonic, ctx: &mut GenContext) -> Self {
        Self {
            mnemonic,
            regs: general_regs(ctx, 4),
        }
    }

    fn multiplicand_view(&self) -> RegView {
        let name = self.mnemonic.name();
        if name.starts_with("madd") || name.starts_with("msub") {
            self.mnemonic.view()
        } else {
            RegView::W
        }
    }
}

impl Shape for FourRegMulOp {
    fn render(&self, notation: Notation) -> String {
        let outer = self.mnemonic.view();
        let inner = self.multiplicand_view();
        let views = [outer, inner, inner, outer];
        Line::of(notation, &self.mnemonic)
            .args(
                self.regs
                    .iter()
                    .zip(views)
                    .map(|(reg, view)| reg.render(notation, view)),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(shape: &impl Shape) -> (String, String) {
        (shape.render(Notation::Call), shape.render(Notation::Asm))
    }

    #[test]
    fn three_register_add_renders_both_notations() {
        let op = RegListOp {
            mnemonic: Mnemonic::new("add"),
            regs: vec![Register::general(1), Register::general(2), Register::general(3)],
        };
        assert_eq!(
            both(&op),
            ("__ add(r1, r2, r3);".to_string(), "add\tx1, x2, x3".to_string())
        );
    }

    #[test]
    fn arith_shift_suffix() {
        let op = ArithOp {
            mnemonic: Mnemonic::new("addw"),
            regs: vec![Register::general(4), Register::general(5), Register::general(6)],
            shift: ShiftKind::ASR,
            amount: 12,
        };
        assert_eq!(
            both(&op),
            (
                "__ addw(r4, r5, r6, Assembler::ASR, 12);".to_string(),
                "add\tw4, w5, w6, ASR #12".to_string()
            )
        );
    }

    #[test]
    fn logical_immediate_uses_hex_and_ll() {
        let op = LogicalImmOp {
            mnemonic: Mnemonic::new("and"),
            regs: vec![Register::general(0), Register::general(1)],
            imm: Immediate::logical(0x1f80),
        };
        assert_eq!(
            both(&op),
            (
                "__ andr(r0, r1, 8064ll);".to_string(),
                "and\tx0, x1, #0x1f80".to_string()
            )
        );
    }

    #[test]
    fn conditional_compare_forms() {
        let op = ConditionalCompareOp {
            mnemonic: Mnemonic::new("ccmnw"),
            regs: vec![Register::general(7), Register::general(8)],
            nzcv: Immediate::unsigned(5),
            cond: Condition::EQ,
        };
        assert_eq!(
            both(&op),
            (
                "__ ccmnw(r7, r8, 5u, Assembler::EQ);".to_string(),
                "ccmn\tw7, w8, #5, EQ".to_string()
            )
        );
        let op = ConditionalCompareImmedOp {
            mnemonic: Mnemonic::new("ccmp"),
            reg: Register::general(9),
            imm: Immediate::plain(17),
            nzcv: Immediate::plain(3),
            cond: Condition::LT,
        };
        assert_eq!(
            both(&op),
            (
                "__ ccmp(r9, 17, 3, Assembler::LT);".to_string(),
                "ccmp\tx9, #17, #3, LT".to_string()
            )
        );
    }

    #[test]
    fn move_wide_and_bitfield() {
        let op = MoveWideImmOp {
            mnemonic: Mnemonic::new("movkw"),
            reg: Register::general(2),
            imm: 4660,
            shift: 16,
        };
        assert_eq!(
            both(&op),
            (
                "__ movkw(r2, 4660, 16);".to_string(),
                "movk\tw2, #4660, lsl 16".to_string()
            )
        );
        let op = BitfieldOp {
            mnemonic: Mnemonic::new("ubfmw"),
            regs: vec![Register::general(3), Register::general(4)],
            immr: 7,
            imms: 9,
        };
        assert_eq!(op.render(Notation::Asm), "ubfm\tw3, w4, #7, #9");
    }

    #[test]
    fn long_multiply_uses_word_multiplicands() {
        let regs = vec![
            Register::general(1),
            Register::general(2),
            Register::general(3),
            Register::general(4),
        ];
        let long = FourRegMulOp {
            mnemonic: Mnemonic::new("smaddl"),
            regs: regs.clone(),
        };
        assert_eq!(long.render(Notation::Asm), "smaddl\tx1, w2, w3, x4");
        let madd = FourRegMulOp {
            mnemonic: Mnemonic::new("madd"),
            regs,
        };
        assert_eq!(madd.render(Notation::Asm), "madd\tx1, x2, x3, x4");
    }

    #[test]
    fn generated_ranges_are_legal() {
        let mut ctx = GenContext::with_seed(1);
        for _ in 0..200 {
            let op = ArithOp::generate(Mnemonic::new("subsw"), &mut ctx);
            assert!((0..=31).contains(&op.amount));
            let op = MoveWideImmOp::generate(Mnemonic::new("movzw"), &mut ctx);
            assert!(op.shift == 0 || op.shift == 16);
            let op = ConditionalSelectOp::generate(Mnemonic::new("csel"), &mut ctx);
            assert!(!matches!(op.cond, Condition::AL | Condition::NV));
        }
    }
}
