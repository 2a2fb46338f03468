//! Advanced SIMD forms. Vector operands are consecutive registers starting
//! from one drawn register, so only the first one is stored.

use super::line::Line;
use super::Shape;
use crate::operand::{
    Address, AddressKind, Arrangement, Condition, DataWidth, Notation, RegClass, RegView,
    Register,
};
use crate::random_asm::inst_generator::GenContext;

/// `count` consecutive registers starting at `first`.
fn consecutive(first: Register, count: usize) -> Vec<Register> {
    std::iter::successors(Some(first), |r| Some(r.next()))
        .take(count)
        .collect()
}

/// `v3.4S`
fn lane_vector(reg: Register, arrangement: Arrangement) -> String {
    format!("{}.{}", reg.render(Notation::Asm, RegView::V), arrangement.name())
}

/// Structure loads `ld1`..`ld4` and their replicating `r` variants.
#[derive(Debug, Clone, PartialEq)]
pub struct LdStNeonOp {
    name: &'static str,
    count: usize,
    arrangement: Arrangement,
    first: Register,
    addr: Address,
}

impl LdStNeonOp {
    pub fn generate(
        name: &'static str,
        count: usize,
        arrangement: Arrangement,
        kind: AddressKind,
        ctx: &mut GenContext,
    ) -> Self {
        let mut addr = Address::generate(kind, DataWidth::Byte, ctx);
        let first = ctx.register(RegClass::Float);
        if kind == AddressKind::Post {
            // Immediate post-increment must equal the bytes transferred.
            let per_register = if name.ends_with('r') {
                arrangement.element_bytes()
            } else {
                arrangement.vector_bytes()
            };
            addr = addr.with_offset(count as i64 * per_register);
        }
        Self {
            name,
            count,
            arrangement,
            first,
            addr,
        }
    }
}

impl Shape for LdStNeonOp {
    fn render(&self, notation: Notation) -> String {
        let regs = consecutive(self.first, self.count);
        let line = Line::new(notation, self.name, self.name);
        let line = match notation {
            Notation::Call => line
                .args(regs.iter().map(|r| r.render(notation, RegView::V)))
                .arg(self.arrangement.call()),
            Notation::Asm => {
                let list: Vec<String> = regs
                    .iter()
                    .map(|r| lane_vector(*r, self.arrangement))
                    .collect();
                line.arg(format!("{{{}}}", list.join(", ")))
            }
        };
        line.arg(self.addr.render(notation)).finish()
    }
}

/// Across-lanes reductions: `addv`, `smaxv`, `fmaxp`, ...
#[derive(Debug, Clone, PartialEq)]
pub struct NeonReduceOp {
    name: &'static str,
    asm_name: &'static str,
    arrangement: Arrangement,
    dst: Register,
}

impl NeonReduceOp {
    pub fn generate(
        name: &'static str,
        asm_name: &'static str,
        arrangement: Arrangement,
        ctx: &mut GenContext,
    ) -> Self {
        Self {
            name,
            asm_name,
            arrangement,
            dst: ctx.register(RegClass::Float),
        }
    }

    fn is_pairwise(&self) -> bool {
        self.name == "fmaxp" || self.name == "fminp"
    }
}

impl Shape for NeonReduceOp {
    fn render(&self, notation: Notation) -> String {
        let src = self.dst.next();
        let line = Line::new(notation, self.name, self.asm_name);
        let line = match notation {
            Notation::Call if self.is_pairwise() => line
                .arg(self.dst.render(notation, RegView::V))
                .arg(src.render(notation, RegView::V))
                .arg(format!("__ {}", self.arrangement.element_suffix())),
            Notation::Call => line
                .arg(self.dst.render(notation, RegView::V))
                .arg(self.arrangement.call())
                .arg(src.render(notation, RegView::V)),
            Notation::Asm => {
                let scalar = RegView::from_mode(self.arrangement.element().letter())
                    .unwrap_or(RegView::V);
                line.arg(self.dst.render(notation, scalar))
                    .arg(lane_vector(src, self.arrangement))
            }
        };
        line.finish()
    }
}

/// Element-wise vector operations over two or three consecutive registers.
#[derive(Debug, Clone, PartialEq)]
pub struct NeonOp {
    name: &'static str,
    asm_name: &'static str,
    arrangement: Arrangement,
    count: usize,
    first: Register,
}

impl NeonOp {
    pub fn generate(
        name: &'static str,
        asm_name: &'static str,
        arrangement: Arrangement,
        count: usize,
        ctx: &mut GenContext,
    ) -> Self {
        Self {
            name,
            asm_name,
            arrangement,
            count,
            first: ctx.register(RegClass::Float),
        }
    }
}

impl Shape for NeonOp {
    fn render(&self, notation: Notation) -> String {
        let regs = consecutive(self.first, self.count);
        let line = Line::new(notation, self.name, self.asm_name);
        let line = match notation {
            Notation::Call => {
                let mut line = line.arg(self.first.render(notation, RegView::V));
                line = line.arg(self.arrangement.call());
                line.args(regs[1..].iter().map(|r| r.render(notation, RegView::V)))
            }
            Notation::Asm => line.args(regs.iter().map(|r| lane_vector(*r, self.arrangement))),
        };
        line.finish()
    }
}

/// `fcmXX vd.T, vn.T, #0.0`
#[derive(Debug, Clone, PartialEq)]
pub struct NeonFloatCompareWithZero {
    arrangement: Arrangement,
    cond: Condition,
    first: Register,
}

impl NeonFloatCompareWithZero {
    pub fn generate(arrangement: Arrangement, cond: Condition, ctx: &mut GenContext) -> Self {
        Self {
            arrangement,
            cond,
            first: ctx.register(RegClass::Float),
        }
    }
}

impl Shape for NeonFloatCompareWithZero {
    fn render(&self, notation: Notation) -> String {
        let src = self.first.next();
        let asm = format!("fcm{}", self.cond.suffix());
        let line = Line::new(notation, "fcm", &asm);
        let line = match notation {
            Notation::Call => line
                .arg(self.cond.qualified())
                .arg(self.first.render(notation, RegView::V))
                .arg(self.arrangement.call())
                .arg(src.render(notation, RegView::V)),
            Notation::Asm => line
                .arg(lane_vector(self.first, self.arrangement))
                .arg(lane_vector(src, self.arrangement))
                .arg("#0.0"),
        };
        line.finish()
    }
}

/// Register-register vector compares: `cmXX` and `fcmXX`.
#[derive(Debug, Clone, PartialEq)]
pub struct NeonVectorCompare {
    name: &'static str,
    arrangement: Arrangement,
    cond: Condition,
    first: Register,
}

impl NeonVectorCompare {
    pub fn generate(
        name: &'static str,
        arrangement: Arrangement,
        cond: Condition,
        ctx: &mut GenContext,
    ) -> Self {
        Self {
            name,
            arrangement,
            cond,
            first: ctx.register(RegClass::Float),
        }
    }
}

impl Shape for NeonVectorCompare {
    fn render(&self, notation: Notation) -> String {
        let regs = consecutive(self.first, 3);
        let asm = format!("{}{}", self.name, self.cond.suffix());
        let line = Line::new(notation, self.name, &asm);
        let line = match notation {
            Notation::Call => line
                .arg(self.cond.qualified())
                .arg(regs[0].render(notation, RegView::V))
                .arg(self.arrangement.call())
                .args(regs[1..].iter().map(|r| r.render(notation, RegView::V))),
            Notation::Asm => line.args(regs.iter().map(|r| lane_vector(*r, self.arrangement))),
        };
        line.finish()
    }
}

/// Multiply-accumulate by element: `fmla v0.2S, v1.2S, v2.S[1]`. The
/// indexed register is limited to v0-v15 for halfword elements, so the
/// whole chain is drawn from the low bank.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorScalarNeonOp {
    name: &'static str,
    asm_name: &'static str,
    arrangement: Arrangement,
    first: Register,
    index: usize,
}

impl VectorScalarNeonOp {
    pub fn generate(
        name: &'static str,
        asm_name: &'static str,
        arrangement: Arrangement,
        ctx: &mut GenContext,
    ) -> Self {
        let index = ctx.pick(arrangement.lanes());
        Self {
            name,
            asm_name,
            arrangement,
            first: ctx.register(RegClass::LowFloat),
            index,
        }
    }
}

impl Shape for VectorScalarNeonOp {
    fn render(&self, notation: Notation) -> String {
        let regs = consecutive(self.first, 3);
        let line = Line::new(notation, self.name, self.asm_name);
        let line = match notation {
            Notation::Call => line
                .arg(regs[0].render(notation, RegView::V))
                .arg(self.arrangement.call())
                .arg(regs[1].render(notation, RegView::V))
                .arg(regs[2].render(notation, RegView::V))
                .arg(self.index.to_string()),
            Notation::Asm => line
                .arg(lane_vector(regs[0], self.arrangement))
                .arg(lane_vector(regs[1], self.arrangement))
                .arg(format!(
                    "{}.{}[{}]",
                    regs[2].render(notation, RegView::V),
                    self.arrangement.element_suffix(),
                    self.index
                )),
        };
        line.finish()
    }
}

/// Widening add: `saddw v0.8H, v1.8H, v2.8B`.
#[derive(Debug, Clone, PartialEq)]
pub struct AddWideNeonOp {
    name: &'static str,
    asm_name: &'static str,
    wide: Arrangement,
    narrow: Arrangement,
    first: Register,
}

impl AddWideNeonOp {
    pub fn generate(
        name: &'static str,
        asm_name: &'static str,
        wide: Arrangement,
        narrow: Arrangement,
        ctx: &mut GenContext,
    ) -> Self {
        Self {
            name,
            asm_name,
            wide,
            narrow,
            first: ctx.register(RegClass::Float),
        }
    }
}

impl Shape for AddWideNeonOp {
    fn render(&self, notation: Notation) -> String {
        let regs = consecutive(self.first, 3);
        let line = Line::new(notation, self.name, self.asm_name);
        let line = match notation {
            Notation::Call => line
                .arg(regs[0].render(notation, RegView::V))
                .arg(regs[1].render(notation, RegView::V))
                .arg(self.wide.call())
                .arg(regs[2].render(notation, RegView::V))
                .arg(self.narrow.call()),
            Notation::Asm => line
                .arg(lane_vector(regs[0], self.wide))
                .arg(lane_vector(regs[1], self.wide))
                .arg(lane_vector(regs[2], self.narrow)),
        };
        line.finish()
    }
}

/// SHA3 extension: `bcax`, `eor3`, `rax1`, `xar`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sha3Op {
    name: &'static str,
    regs: Vec<Register>,
    imm6: Option<i64>,
}

impl Sha3Op {
    pub fn generate(name: &'static str, ctx: &mut GenContext) -> Self {
        let count = if name == "eor3" || name == "bcax" { 4 } else { 3 };
        let regs = (0..count).map(|_| ctx.register(RegClass::Float)).collect();
        let imm6 = (name == "xar").then(|| ctx.range(0, 63));
        Self { name, regs, imm6 }
    }

    fn arrangement(&self) -> Arrangement {
        if self.regs.len() == 4 {
            Arrangement::T16B
        } else {
            Arrangement::T2D
        }
    }
}

impl Shape for Sha3Op {
    fn render(&self, notation: Notation) -> String {
        let arrangement = self.arrangement();
        let line = Line::new(notation, self.name, self.name);
        let line = match notation {
            Notation::Call => line
                .arg(self.regs[0].render(notation, RegView::V))
                .arg(arrangement.call())
                .args(self.regs[1..].iter().map(|r| r.render(notation, RegView::V))),
            Notation::Asm => line.args(self.regs.iter().map(|r| lane_vector(*r, arrangement))),
        };
        let line = match (self.imm6, notation) {
            (Some(imm), Notation::Call) => line.arg(imm.to_string()),
            (Some(imm), Notation::Asm) => line.arg(format!("#{imm}")),
            (None, _) => line,
        };
        line.finish()
    }
}

/// SHA512 extension: `sha512h`, `sha512h2`, `sha512su0`, `sha512su1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sha512Op {
    name: &'static str,
    regs: Vec<Register>,
}

impl Sha512Op {
    pub fn generate(name: &'static str, ctx: &mut GenContext) -> Self {
        let count = if name == "sha512su0" { 2 } else { 3 };
        Self {
            name,
            regs: (0..count).map(|_| ctx.register(RegClass::Float)).collect(),
        }
    }

    /// The hash-update forms take their first two operands as Q scalars.
    fn is_hash(&self) -> bool {
        self.name == "sha512h" || self.name == "sha512h2"
    }
}

impl Shape for Sha512Op {
    fn render(&self, notation: Notation) -> String {
        let line = Line::new(notation, self.name, self.name);
        let line = match notation {
            Notation::Call => line
                .arg(self.regs[0].render(notation, RegView::V))
                .arg(Arrangement::T2D.call())
                .args(self.regs[1..].iter().map(|r| r.render(notation, RegView::V))),
            Notation::Asm => {
                let last = self.regs.len() - 1;
                line.args(self.regs.iter().enumerate().map(|(i, r)| {
                    if self.is_hash() && i < last {
                        r.render(notation, RegView::Q)
                    } else {
                        lane_vector(*r, Arrangement::T2D)
                    }
                }))
            }
        };
        line.finish()
    }
}
