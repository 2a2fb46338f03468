//! Loads, stores, exclusives and the LSE atomics.
//!
//! Writeback and exclusive forms are UNPREDICTABLE when a transfer register
//! aliases the base (or, for exclusives, the status register), so those
//! operands are drawn pairwise distinct.

use super::line::Line;
use super::Shape;
use crate::error::{AsmTestError, Result};
use crate::operand::{
    Address, AddressKind, DataWidth, Notation, RegClass, RegView, Register,
};
use crate::random_asm::inst_generator::GenContext;

/// Register view for a load/store transfer register given its mode letter.
fn transfer_view(mode: char) -> RegView {
    match mode {
        'x' => RegView::X,
        'd' => RegView::D,
        's' => RegView::S,
        _ => RegView::W,
    }
}

/// Encoder-side name: the mode letter is appended unless it is `x`.
fn moded_name(name: &str, mode: char) -> String {
    if mode == 'x' {
        name.to_string()
    } else {
        format!("{name}{mode}")
    }
}

fn is_float_mode(mode: char) -> bool {
    mode == 'd' || mode == 's'
}

/// Single-register load/store, including `prfm`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStoreOp {
    name: &'static str,
    asm_name: &'static str,
    mode: char,
    reg: Register,
    addr: Address,
}

impl LoadStoreOp {
    pub fn generate(
        name: &'static str,
        asm_name: &'static str,
        kind: AddressKind,
        mode: char,
        ctx: &mut GenContext,
    ) -> Result<Self> {
        let addr = Address::generate(kind, DataWidth::for_access(mode, asm_name), ctx);
        let float = is_float_mode(mode);
        let reg = if float {
            ctx.register(RegClass::Float)
        } else if kind.writes_back() {
            ctx.distinct_register(RegClass::General, &[addr.base().number()])?
        } else {
            ctx.register(RegClass::General)
        };
        Ok(Self {
            name,
            asm_name,
            mode,
            reg,
            addr,
        })
    }

    fn is_prefetch(&self) -> bool {
        self.name.starts_with("prfm")
    }

    pub fn register(&self) -> Register {
        self.reg
    }

    pub fn address(&self) -> &Address {
        &self.addr
    }

    pub fn width(&self) -> DataWidth {
        DataWidth::for_access(self.mode, self.asm_name)
    }
}

impl Shape for LoadStoreOp {
    fn render(&self, notation: Notation) -> String {
        let call = moded_name(self.name, self.mode);
        let line = Line::new(notation, &call, self.asm_name);
        let line = if self.is_prefetch() {
            line.asm_arg("PLDL1KEEP")
        } else {
            line.arg(self.reg.render(notation, transfer_view(self.mode)))
        };
        line.arg(self.addr.render(notation)).finish()
    }
}

/// Register-pair load/store with a scaled signed 7-bit offset.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStorePairOp {
    name: &'static str,
    asm_name: &'static str,
    kind: AddressKind,
    mode: char,
    regs: [Register; 2],
    base: Register,
    offset: i64,
}

impl LoadStorePairOp {
    pub fn generate(
        name: &'static str,
        asm_name: &'static str,
        kind: AddressKind,
        mode: char,
        ctx: &mut GenContext,
    ) -> Result<Self> {
        if !matches!(
            kind,
            AddressKind::BasePlusUnscaledOffset | AddressKind::Pre | AddressKind::Post
        ) {
            return Err(AsmTestError::instruction_generation(format!(
                "{name}: register pairs have no {kind} form"
            )));
        }
        let offset = ctx.range(-16, 15) << 4;
        let is_load = name.starts_with("ld");
        let class = RegClass::for_mode(mode).ok_or_else(|| {
            AsmTestError::instruction_generation(format!(
                "{name}: mode '{mode}' is not a register"
            ))
        })?;

        let first = ctx.register(class);
        let second = if is_load {
            ctx.distinct_register(class, &[first.number()])?
        } else {
            ctx.register(class)
        };
        let base = if kind.writes_back() && class == RegClass::General {
            ctx.distinct_register(RegClass::General, &[first.number(), second.number()])?
        } else {
            ctx.register(RegClass::General)
        };

        Ok(Self {
            name,
            asm_name,
            kind,
            mode,
            regs: [first, second],
            base,
            offset,
        })
    }

    pub fn registers(&self) -> [Register; 2] {
        self.regs
    }

    pub fn base(&self) -> Register {
        self.base
    }
}

impl Shape for LoadStorePairOp {
    fn render(&self, notation: Notation) -> String {
        let call = moded_name(self.name, self.mode);
        let view = transfer_view(self.mode);
        let base = self.base.render(notation, RegView::X);
        let off = self.offset;
        let addr = match (notation, self.kind) {
            (Notation::Call, AddressKind::Pre) => format!("Address(__ pre({base}, {off}))"),
            (Notation::Call, AddressKind::Post) => format!("Address(__ post({base}, {off}))"),
            (Notation::Call, _) => format!("Address({base}, {off})"),
            (Notation::Asm, AddressKind::Pre) => format!("[{base}, #{off}]!"),
            (Notation::Asm, AddressKind::Post) => format!("[{base}], #{off}"),
            (Notation::Asm, _) => format!("[{base}, #{off}]"),
        };
        Line::new(notation, &call, self.asm_name)
            .args(self.regs.iter().map(|r| r.render(notation, view)))
            .arg(addr)
            .finish()
    }
}

/// Exclusive and acquire/release accesses. The last register is the base;
/// all registers are distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStoreExclusiveOp {
    name: &'static str,
    mode: char,
    regs: Vec<Register>,
}

impl LoadStoreExclusiveOp {
    pub fn generate(
        name: &'static str,
        mode: char,
        count: usize,
        ctx: &mut GenContext,
    ) -> Result<Self> {
        let mut regs: Vec<Register> = Vec::with_capacity(count);
        for _ in 0..count {
            let taken: Vec<u8> = regs.iter().map(Register::number).collect();
            regs.push(ctx.distinct_register(RegClass::General, &taken)?);
        }
        Ok(Self { name, mode, regs })
    }

    pub fn registers(&self) -> &[Register] {
        &self.regs
    }

    fn asm_name(&self) -> String {
        if self.mode == 'b' || self.mode == 'h' {
            format!("{}{}", self.name, self.mode)
        } else {
            self.name.to_string()
        }
    }
}

impl Shape for LoadStoreExclusiveOp {
    fn render(&self, notation: Notation) -> String {
        let call = moded_name(self.name, self.mode);
        let asm = self.asm_name();
        let line = Line::new(notation, &call, &asm);
        let Some((base, transfer)) = self.regs.split_last() else {
            return line.finish();
        };
        let line = match notation {
            Notation::Call => line
                .args(transfer.iter().map(|r| r.render(notation, RegView::X)))
                .arg(base.render(notation, RegView::X)),
            Notation::Asm => {
                // A store's leading register is the 32-bit status result.
                let wide = self.mode == 'x';
                let data_first = self.name.starts_with("ld") || self.name.starts_with("stlr");
                let first_view = RegView::general(!(wide && data_first));
                let rest_view = RegView::general(!wide);
                let mut line = line;
                for (i, reg) in transfer.iter().enumerate() {
                    let view = if i == 0 { first_view } else { rest_view };
                    line = line.arg(reg.render(notation, view));
                }
                line.arg(format!("[{}]", base.render(notation, RegView::X)))
            }
        };
        line.finish()
    }
}

/// LSE atomic memory operations (`swp`, `ldadd`, ... with ordering suffix).
#[derive(Debug, Clone, PartialEq)]
pub struct LseOp {
    name: String,
    asm_name: String,
    size: char,
    source: Register,
    target: Register,
    base: Register,
}

impl LseOp {
    pub fn generate(
        name: &str,
        asm_name: &str,
        size: char,
        ordering: &str,
        ctx: &mut GenContext,
    ) -> Self {
        Self {
            name: format!("{name}{ordering}"),
            asm_name: format!("{asm_name}{ordering}"),
            size,
            source: ctx.register(RegClass::GeneralOrZr),
            target: ctx.register(RegClass::GeneralOrZr),
            base: ctx.register(RegClass::GeneralOrSp),
        }
    }
}

impl Shape for LseOp {
    fn render(&self, notation: Notation) -> String {
        let view = RegView::general(self.size == 'w');
        let line = Line::new(notation, &self.name, &self.asm_name);
        let line = match notation {
            Notation::Call => {
                let size = if self.size == 'x' {
                    "Assembler::xword"
                } else {
                    "Assembler::word"
                };
                line.arg(size)
                    .arg(self.source.render(notation, view))
                    .arg(self.target.render(notation, view))
                    .arg(self.base.render(notation, RegView::X))
            }
            Notation::Asm => line
                .arg(self.source.render(notation, view))
                .arg(self.target.render(notation, view))
                .arg(format!("[{}]", self.base.render(notation, RegView::X))),
        };
        line.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writeback_transfer_register_differs_from_base() {
        let mut ctx = GenContext::with_seed(5);
        for kind in [AddressKind::Pre, AddressKind::Post] {
            for _ in 0..300 {
                let op = LoadStoreOp::generate("ldr", "ldr", kind, 'x', &mut ctx).unwrap();
                assert_ne!(op.register().number(), op.address().base().number());
            }
        }
    }

    #[test]
    fn load_store_renders_sized_registers() {
        let mut ctx = GenContext::with_seed(2);
        let op = LoadStoreOp::generate("str", "strb", AddressKind::BaseOnly, 'b', &mut ctx).unwrap();
        let asm = op.render(Notation::Asm);
        assert!(asm.starts_with("strb\tw"), "{asm}");
        assert!(op.render(Notation::Call).starts_with("__ strb(r"));
        let op = LoadStoreOp::generate("ldr", "ldr", AddressKind::BaseOnly, 'd', &mut ctx).unwrap();
        assert!(op.render(Notation::Asm).starts_with("ldr\td"));
        assert!(op.render(Notation::Call).starts_with("__ ldrd(v"));
    }

    #[test]
    fn prefetch_has_no_transfer_register() {
        let mut ctx = GenContext::with_seed(2);
        let op = LoadStoreOp::generate("prfm", "prfm", AddressKind::BaseOnly, 'x', &mut ctx).unwrap();
        let call = op.render(Notation::Call);
        assert!(call.starts_with("__ prfm(Address(r"), "{call}");
        let asm = op.render(Notation::Asm);
        assert!(asm.starts_with("prfm\tPLDL1KEEP, [x"), "{asm}");
    }

    #[test]
    fn pair_registers_are_distinct() {
        let mut ctx = GenContext::with_seed(8);
        for kind in [AddressKind::BasePlusUnscaledOffset, AddressKind::Pre, AddressKind::Post] {
            for _ in 0..300 {
                let op = LoadStorePairOp::generate("ldp", "ldp", kind, 'x', &mut ctx).unwrap();
                let [a, b] = op.registers();
                assert_ne!(a.number(), b.number());
                if kind != AddressKind::BasePlusUnscaledOffset {
                    assert_ne!(op.base().number(), a.number());
                    assert_ne!(op.base().number(), b.number());
                }
                let st = LoadStorePairOp::generate("stp", "stp", kind, 'w', &mut ctx).unwrap();
                if kind != AddressKind::BasePlusUnscaledOffset {
                    let [a, b] = st.registers();
                    assert_ne!(st.base().number(), a.number());
                    assert_ne!(st.base().number(), b.number());
                }
            }
        }
    }

    #[test]
    fn pair_rejects_register_offsets() {
        let mut ctx = GenContext::with_seed(0);
        assert!(LoadStorePairOp::generate("ldp", "ldp", AddressKind::BasePlusReg, 'x', &mut ctx).is_err());
    }

    #[test]
    fn pair_rendering() {
        let op = LoadStorePairOp {
            name: "stp",
            asm_name: "stp",
            kind: AddressKind::Pre,
            mode: 'w',
            regs: [Register::general(1), Register::general(2)],
            base: Register::general(3),
            offset: -32,
        };
        assert_eq!(
            op.render(Notation::Call),
            "__ stpw(r1, r2, Address(__ pre(r3, -32)));"
        );
        assert_eq!(op.render(Notation::Asm), "stp\tw1, w2, [x3, #-32]!");
    }

    #[test]
    fn exclusive_registers_are_distinct_and_sized() {
        let mut ctx = GenContext::with_seed(4);
        for _ in 0..300 {
            let op = LoadStoreExclusiveOp::generate("stxp", 'x', 4, &mut ctx).unwrap();
            let mut numbers: Vec<u8> = op.registers().iter().map(Register::number).collect();
            numbers.sort_unstable();
            numbers.dedup();
            assert_eq!(numbers.len(), 4);
        }
        let op = LoadStoreExclusiveOp {
            name: "stxr",
            mode: 'x',
            regs: vec![Register::general(1), Register::general(2), Register::general(3)],
        };
        assert_eq!(op.render(Notation::Call), "__ stxr(r1, r2, r3);");
        assert_eq!(op.render(Notation::Asm), "stxr\tw1, x2, [x3]");
        let op = LoadStoreExclusiveOp {
            name: "ldar",
            mode: 'h',
            regs: vec![Register::general(4), Register::general(5)],
        };
        assert_eq!(op.render(Notation::Call), "__ ldarh(r4, r5);");
        assert_eq!(op.render(Notation::Asm), "ldarh\tw4, [x5]");
    }

    #[test]
    fn lse_zero_register_and_stack_pointer() {
        let op = LseOp {
            name: "ldaddal".to_string(),
            asm_name: "ldaddal".to_string(),
            size: 'w',
            source: Register::new(RegClass::GeneralOrZr, 31),
            target: Register::new(RegClass::GeneralOrZr, 2),
            base: Register::new(RegClass::GeneralOrSp, 31),
        };
        assert_eq!(
            op.render(Notation::Call),
            "__ ldaddal(Assembler::word, zr, r2, sp);"
        );
        assert_eq!(op.render(Notation::Asm), "ldaddal\twzr, w2, [sp]");
    }
}
