use std::fmt;

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use super::Notation;
use crate::consts::aarch64::{BACK_LABEL, FORTH_LABEL};

/// Condition codes, in encoding order. The first sixteen are the ones a
/// conditional compare or select may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
pub enum Condition {
    EQ,
    NE,
    HS,
    CS,
    LO,
    CC,
    MI,
    PL,
    VS,
    VC,
    HI,
    LS,
    GE,
    LT,
    GT,
    LE,
    AL,
    NV,
}

impl Condition {
    pub fn name(self) -> &'static str {
        match self {
            Condition::EQ => "EQ",
            Condition::NE => "NE",
            Condition::HS => "HS",
            Condition::CS => "CS",
            Condition::LO => "LO",
            Condition::CC => "CC",
            Condition::MI => "MI",
            Condition::PL => "PL",
            Condition::VS => "VS",
            Condition::VC => "VC",
            Condition::HI => "HI",
            Condition::LS => "LS",
            Condition::GE => "GE",
            Condition::LT => "LT",
            Condition::GT => "GT",
            Condition::LE => "LE",
            Condition::AL => "AL",
            Condition::NV => "NV",
        }
    }

    /// `Assembler::EQ`
    pub fn qualified(self) -> String {
        format!("Assembler::{}", self.name())
    }

    /// Lower-case form used as a mnemonic suffix (`cmpeq`, `fcmgt`).
    pub fn suffix(self) -> String {
        self.name().to_ascii_lowercase()
    }

    /// Unsigned comparisons take an unsigned 7-bit immediate in SVE compares.
    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            Condition::HI | Condition::HS | Condition::LO | Condition::LS
        )
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum ShiftKind {
    LSL,
    LSR,
    ASR,
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftKind::LSL => "LSL",
            ShiftKind::LSR => "LSR",
            ShiftKind::ASR => "ASR",
        };
        f.write_str(name)
    }
}

/// Register extend options of the add/sub (extended register) forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum RegExtend {
    Uxtb,
    Uxth,
    Uxtw,
    Uxtx,
    Sxtb,
    Sxth,
    Sxtw,
    Sxtx,
}

impl fmt::Display for RegExtend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegExtend::Uxtb => "uxtb",
            RegExtend::Uxth => "uxth",
            RegExtend::Uxtw => "uxtw",
            RegExtend::Uxtx => "uxtx",
            RegExtend::Sxtb => "sxtb",
            RegExtend::Sxth => "sxth",
            RegExtend::Sxtw => "sxtw",
            RegExtend::Sxtx => "sxtx",
        };
        f.write_str(name)
    }
}

/// Index-register extend of a register-offset address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum AddrExtend {
    Uxtw,
    Lsl,
    Sxtw,
    Sxtx,
}

impl AddrExtend {
    pub fn name(self) -> &'static str {
        match self {
            AddrExtend::Uxtw => "uxtw",
            AddrExtend::Lsl => "lsl",
            AddrExtend::Sxtw => "sxtw",
            AddrExtend::Sxtx => "sxtx",
        }
    }

    /// The 32-bit extends take a `w` index register.
    pub fn takes_word_index(self) -> bool {
        matches!(self, AddrExtend::Uxtw | AddrExtend::Sxtw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Barrier {
    OSHLD,
    OSHST,
    OSH,
    NSHLD,
    NSHST,
    NSH,
    ISHLD,
    ISHST,
    ISH,
    LD,
    ST,
    SY,
}

impl fmt::Display for Barrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Barrier::OSHLD => "OSHLD",
            Barrier::OSHST => "OSHST",
            Barrier::OSH => "OSH",
            Barrier::NSHLD => "NSHLD",
            Barrier::NSHST => "NSHST",
            Barrier::NSH => "NSH",
            Barrier::ISHLD => "ISHLD",
            Barrier::ISHST => "ISHST",
            Barrier::ISH => "ISH",
            Barrier::LD => "LD",
            Barrier::ST => "ST",
            Barrier::SY => "SY",
        };
        f.write_str(name)
    }
}

/// System registers reachable through `msr`/`mrs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum SystemReg {
    Fpsr,
    Nzcv,
    DczidEl0,
    CtrEl0,
}

impl SystemReg {
    pub fn name(self) -> &'static str {
        match self {
            SystemReg::Fpsr => "fpsr",
            SystemReg::Nzcv => "nzcv",
            SystemReg::DczidEl0 => "dczid_el0",
            SystemReg::CtrEl0 => "ctr_el0",
        }
    }

    /// (op1, CRn, CRm, op2)
    pub fn encoding(self) -> (u8, u8, u8, u8) {
        match self {
            SystemReg::Fpsr => (0b011, 0b0100, 0b0100, 0b001),
            SystemReg::Nzcv => (0b011, 0b0100, 0b0010, 0b000),
            SystemReg::DczidEl0 => (0b011, 0b0000, 0b0000, 0b111),
            SystemReg::CtrEl0 => (0b011, 0b0000, 0b0000, 0b001),
        }
    }
}

/// SIMD/SVE element size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum ElementWidth {
    B,
    H,
    S,
    D,
    Q,
}

impl ElementWidth {
    pub fn letter(self) -> char {
        match self {
            ElementWidth::B => 'b',
            ElementWidth::H => 'h',
            ElementWidth::S => 's',
            ElementWidth::D => 'd',
            ElementWidth::Q => 'q',
        }
    }

    pub fn bits(self) -> u32 {
        8 << (self as u32)
    }

    pub fn render(self, notation: Notation) -> String {
        match notation {
            Notation::Call => format!("__ {}", self.letter().to_ascii_uppercase()),
            Notation::Asm => format!(".{}", self.letter()),
        }
    }

    /// Every width from `low` to `high` inclusive.
    pub fn between(low: ElementWidth, high: ElementWidth) -> Vec<ElementWidth> {
        enum_iterator::all::<ElementWidth>()
            .filter(|w| *w >= low && *w <= high)
            .collect()
    }
}

/// NEON vector arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Arrangement {
    T8B,
    T16B,
    T4H,
    T8H,
    T2S,
    T4S,
    T1D,
    T2D,
}

impl Arrangement {
    /// `8B`, `16B`, ...
    pub fn name(self) -> &'static str {
        match self {
            Arrangement::T8B => "8B",
            Arrangement::T16B => "16B",
            Arrangement::T4H => "4H",
            Arrangement::T8H => "8H",
            Arrangement::T2S => "2S",
            Arrangement::T4S => "4S",
            Arrangement::T1D => "1D",
            Arrangement::T2D => "2D",
        }
    }

    pub fn lanes(self) -> usize {
        match self {
            Arrangement::T8B => 8,
            Arrangement::T16B => 16,
            Arrangement::T4H => 4,
            Arrangement::T8H => 8,
            Arrangement::T2S => 2,
            Arrangement::T4S => 4,
            Arrangement::T1D => 1,
            Arrangement::T2D => 2,
        }
    }

    pub fn element(self) -> ElementWidth {
        match self {
            Arrangement::T8B | Arrangement::T16B => ElementWidth::B,
            Arrangement::T4H | Arrangement::T8H => ElementWidth::H,
            Arrangement::T2S | Arrangement::T4S => ElementWidth::S,
            Arrangement::T1D | Arrangement::T2D => ElementWidth::D,
        }
    }

    pub fn element_bytes(self) -> i64 {
        i64::from(self.element().bits() / 8)
    }

    /// Total register bytes touched: 8 for a D-sized vector, 16 for Q.
    pub fn vector_bytes(self) -> i64 {
        self.lanes() as i64 * self.element_bytes()
    }

    /// `__ T8B` in call notation.
    pub fn call(self) -> String {
        format!("__ T{}", self.name())
    }

    /// Element-size letter as written after a scalar lane (`s` in `v1.s[0]`).
    pub fn element_suffix(self) -> &'static str {
        &self.name()[self.name().len() - 1..]
    }
}

/// Memory access size of a load/store; decides the offset scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum DataWidth {
    Byte,
    Half,
    Word,
    Double,
    Quad,
}

impl DataWidth {
    /// log2 of the access size in bytes.
    pub fn shift(self) -> u32 {
        match self {
            DataWidth::Byte => 0,
            DataWidth::Half => 1,
            DataWidth::Word => 2,
            DataWidth::Double => 3,
            DataWidth::Quad => 4,
        }
    }

    /// The access size is carried either by the register mode or by the
    /// assembler mnemonic (`ldrb`, `ldrsh`, `ldrsw`).
    pub fn for_access(mode: char, asm_name: &str) -> Self {
        if mode == 'q' {
            DataWidth::Quad
        } else if mode == 'b' || asm_name.ends_with('b') {
            DataWidth::Byte
        } else if mode == 'h' || asm_name.ends_with('h') {
            DataWidth::Half
        } else if mode == 'w' || mode == 's' || asm_name.ends_with('w') {
            DataWidth::Word
        } else {
            DataWidth::Double
        }
    }
}

/// Target of a pc-relative operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum PcTarget {
    Here,
    Back,
    Forth,
}

impl PcTarget {
    pub fn render(self, notation: Notation) -> &'static str {
        match (self, notation) {
            (PcTarget::Here, Notation::Call) => "__ pc()",
            (PcTarget::Here, Notation::Asm) => ".",
            (PcTarget::Back, _) => BACK_LABEL,
            (PcTarget::Forth, _) => FORTH_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_iterator::{all, cardinality};

    #[test]
    fn condition_table_matches_encoding_order() {
        let names: Vec<_> = all::<Condition>().map(Condition::name).collect();
        assert_eq!(names.len(), 18);
        assert_eq!(&names[..4], &["EQ", "NE", "HS", "CS"]);
        assert_eq!(names[16], "AL");
        assert_eq!(Condition::LE.qualified(), "Assembler::LE");
        assert_eq!(Condition::GE.suffix(), "ge");
    }

    #[test]
    fn element_width_ranges() {
        assert_eq!(
            ElementWidth::between(ElementWidth::S, ElementWidth::D),
            vec![ElementWidth::S, ElementWidth::D]
        );
        assert_eq!(ElementWidth::between(ElementWidth::B, ElementWidth::D).len(), 4);
        assert_eq!(ElementWidth::H.render(Notation::Call), "__ H");
        assert_eq!(ElementWidth::H.render(Notation::Asm), ".h");
        assert_eq!(ElementWidth::D.bits(), 64);
    }

    #[test]
    fn arrangement_geometry() {
        assert_eq!(Arrangement::T16B.vector_bytes(), 16);
        assert_eq!(Arrangement::T1D.vector_bytes(), 8);
        assert_eq!(Arrangement::T4S.element_bytes(), 4);
        assert_eq!(Arrangement::T8H.element_suffix(), "H");
        assert_eq!(Arrangement::T2D.call(), "__ T2D");
        assert_eq!(cardinality::<Arrangement>(), 8);
    }

    #[test]
    fn access_width_follows_mode_then_mnemonic() {
        assert_eq!(DataWidth::for_access('x', "ldr"), DataWidth::Double);
        assert_eq!(DataWidth::for_access('w', "ldr"), DataWidth::Word);
        assert_eq!(DataWidth::for_access('x', "ldrsb"), DataWidth::Byte);
        assert_eq!(DataWidth::for_access('x', "ldrsh"), DataWidth::Half);
        assert_eq!(DataWidth::for_access('x', "ldrsw"), DataWidth::Word);
        assert_eq!(DataWidth::for_access('s', "str"), DataWidth::Word);
        assert_eq!(DataWidth::for_access('d', "str"), DataWidth::Double);
        assert_eq!(DataWidth::for_access('q', "ldr"), DataWidth::Quad);
        assert_eq!(DataWidth::Quad.shift(), 4);
    }

    #[test]
    fn system_register_encodings() {
        assert_eq!(SystemReg::Fpsr.encoding(), (3, 4, 4, 1));
        assert_eq!(SystemReg::DczidEl0.name(), "dczid_el0");
        assert_eq!(AddrExtend::Sxtw.takes_word_index(), true);
        assert_eq!(AddrExtend::Sxtx.takes_word_index(), false);
    }

    #[test]
    fn pc_targets_render_labels() {
        assert_eq!(PcTarget::Here.render(Notation::Call), "__ pc()");
        assert_eq!(PcTarget::Here.render(Notation::Asm), ".");
        assert_eq!(PcTarget::Forth.render(Notation::Call), "forth");
    }
}
