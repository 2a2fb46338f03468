use std::fmt;

use enum_iterator::Sequence;

use super::{AddrExtend, DataWidth, Notation, PcTarget, RegClass, RegView, Register};
use crate::random_asm::inst_generator::GenContext;

/// Addressing modes of the load/store forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum AddressKind {
    BasePlusUnscaledOffset,
    Pre,
    Post,
    BasePlusReg,
    BasePlusScaledOffset,
    PcRel,
    PostReg,
    BaseOnly,
}

impl AddressKind {
    pub fn name(self) -> &'static str {
        match self {
            AddressKind::BasePlusUnscaledOffset => "base_plus_unscaled_offset",
            AddressKind::Pre => "pre",
            AddressKind::Post => "post",
            AddressKind::BasePlusReg => "base_plus_reg",
            AddressKind::BasePlusScaledOffset => "base_plus_scaled_offset",
            AddressKind::PcRel => "pcrel",
            AddressKind::PostReg => "post_reg",
            AddressKind::BaseOnly => "base_only",
        }
    }

    /// Pre- and post-indexed forms write the base back.
    pub fn writes_back(self) -> bool {
        matches!(
            self,
            AddressKind::Pre | AddressKind::Post | AddressKind::PostReg
        )
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signed 9-bit range of unscaled and pre/post-indexed offsets.
const SIMM9_MIN: i64 = -256;
const SIMM9_MAX: i64 = 255;
/// Unsigned 12-bit range of scaled offsets, in units of the access size.
const UIMM12_MAX: i64 = 4095;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    kind: AddressKind,
    base: Register,
    index: Register,
    offset: i64,
    extend: AddrExtend,
    shift: u32,
    target: PcTarget,
}

impl Address {
    /// Draws an address of `kind` whose offset is legal for an access of
    /// `width`. Unscaled and indexed offsets are drawn for a doubleword access
    /// and shifted down to the access size; quadword accesses keep the full
    /// simm9 range.
    pub fn generate(kind: AddressKind, width: DataWidth, ctx: &mut GenContext) -> Self {
        let base = ctx.register(RegClass::General);
        let index = ctx.register(RegClass::General);
        let scale = width.shift();
        let drop = DataWidth::Double.shift().saturating_sub(scale);

        let mut target = PcTarget::Here;
        let offset = match kind {
            AddressKind::BasePlusUnscaledOffset => (ctx.range(SIMM9_MIN, SIMM9_MAX) | 1) >> drop,
            AddressKind::Pre | AddressKind::Post => ctx.range(SIMM9_MIN, SIMM9_MAX) >> drop,
            AddressKind::BasePlusScaledOffset => ctx.range(0, UIMM12_MAX) << scale,
            AddressKind::PcRel => {
                target = ctx.variant::<PcTarget>();
                0
            }
            AddressKind::BasePlusReg | AddressKind::PostReg | AddressKind::BaseOnly => 0,
        };
        let extend = ctx.variant::<AddrExtend>();
        let shift = ctx.pick(2) as u32 * scale;

        Self {
            kind,
            base,
            index,
            offset,
            extend,
            shift,
            target,
        }
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn base(&self) -> Register {
        self.base
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn shift(&self) -> u32 {
        self.shift
    }

    pub fn with_base(mut self, number: u8) -> Self {
        self.base = Register::general(number);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn render(&self, notation: Notation) -> String {
        let base = self.base.render(notation, RegView::X);
        let index = self.index.render(notation, RegView::X);
        let off = self.offset;
        match notation {
            Notation::Call => match self.kind {
                AddressKind::BasePlusUnscaledOffset | AddressKind::BasePlusScaledOffset => {
                    format!("Address({base}, {off})")
                }
                AddressKind::Pre => format!("Address(__ pre({base}, {off}))"),
                AddressKind::Post => format!("Address(__ post({base}, {off}))"),
                AddressKind::PostReg => format!("Address(__ post({base}, {index}))"),
                AddressKind::BaseOnly => format!("Address({base})"),
                AddressKind::PcRel => self.target.render(notation).to_string(),
                AddressKind::BasePlusReg => format!(
                    "Address({base}, {index}, Address::{}({}))",
                    self.extend.name(),
                    self.shift
                ),
            },
            Notation::Asm => match self.kind {
                AddressKind::BasePlusUnscaledOffset | AddressKind::BasePlusScaledOffset => {
                    format!("[{base}, {off}]")
                }
                AddressKind::Pre => format!("[{base}, {off}]!"),
                AddressKind::Post => format!("[{base}], {off}"),
                AddressKind::PostReg => format!("[{base}], {index}"),
                AddressKind::BaseOnly => format!("[{base}]"),
                AddressKind::PcRel => self.target.render(notation).to_string(),
                AddressKind::BasePlusReg => {
                    let view = RegView::general(self.extend.takes_word_index());
                    format!(
                        "[{base}, {}, {} #{}]",
                        self.index.render(notation, view),
                        self.extend.name(),
                        self.shift
                    )
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_asm::inst_generator::GenContext;

    fn fixed(kind: AddressKind, offset: i64) -> Address {
        Address {
            kind,
            base: Register::general(1),
            index: Register::general(2),
            offset,
            extend: AddrExtend::Sxtw,
            shift: 3,
            target: PcTarget::Back,
        }
    }

    #[test]
    fn renders_every_kind() {
        let cases = [
            (AddressKind::BasePlusUnscaledOffset, "Address(r1, -5)", "[x1, -5]"),
            (AddressKind::Pre, "Address(__ pre(r1, -5))", "[x1, -5]!"),
            (AddressKind::Post, "Address(__ post(r1, -5))", "[x1], -5"),
            (AddressKind::PostReg, "Address(__ post(r1, r2))", "[x1], x2"),
            (AddressKind::BaseOnly, "Address(r1)", "[x1]"),
            (AddressKind::PcRel, "back", "back"),
            (
                AddressKind::BasePlusReg,
                "Address(r1, r2, Address::sxtw(3))",
                "[x1, w2, sxtw #3]",
            ),
        ];
        for (kind, call, asm) in cases {
            let addr = fixed(kind, -5);
            assert_eq!(addr.render(Notation::Call), call, "{kind}");
            assert_eq!(addr.render(Notation::Asm), asm, "{kind}");
        }
    }

    #[test]
    fn offsets_stay_in_the_legal_range() {
        let mut ctx = GenContext::with_seed(3);
        for width in enum_iterator::all::<DataWidth>() {
            let size = 1i64 << width.shift();
            for _ in 0..200 {
                let scaled = Address::generate(AddressKind::BasePlusScaledOffset, width, &mut ctx);
                assert_eq!(scaled.offset() % size, 0);
                assert!((0..=UIMM12_MAX * size).contains(&scaled.offset()));

                let unscaled =
                    Address::generate(AddressKind::BasePlusUnscaledOffset, width, &mut ctx);
                assert!((SIMM9_MIN..=SIMM9_MAX).contains(&unscaled.offset()));

                let pre = Address::generate(AddressKind::Pre, width, &mut ctx);
                assert!((SIMM9_MIN..=SIMM9_MAX).contains(&pre.offset()));

                let reg = Address::generate(AddressKind::BasePlusReg, width, &mut ctx);
                assert!(reg.shift() == 0 || reg.shift() == width.shift());
            }
        }
    }

    #[test]
    fn quadword_offsets_scale_by_sixteen() {
        let mut ctx = GenContext::with_seed(5);
        for _ in 0..200 {
            let scaled = Address::generate(AddressKind::BasePlusScaledOffset, DataWidth::Quad, &mut ctx);
            assert_eq!(scaled.offset() % 16, 0);
            assert!((0..=UIMM12_MAX * 16).contains(&scaled.offset()));

            let post = Address::generate(AddressKind::Post, DataWidth::Quad, &mut ctx);
            assert!((SIMM9_MIN..=SIMM9_MAX).contains(&post.offset()));
        }
    }

    #[test]
    fn base_never_uses_the_platform_register() {
        let mut ctx = GenContext::with_seed(11);
        for _ in 0..500 {
            let addr = Address::generate(AddressKind::BaseOnly, DataWidth::Byte, &mut ctx);
            assert_ne!(addr.base().number(), 18);
        }
    }
}
