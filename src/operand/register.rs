use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use super::{Notation, RegView};

/// Register roles. Each role has its own legal index range in the
/// register file configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RegClass {
    General,
    /// Index 31 names the zero register.
    GeneralOrZr,
    /// Index 31 names the stack pointer.
    GeneralOrSp,
    Float,
    /// v0-v15, for by-element forms that only encode four register bits.
    LowFloat,
    SveVector,
    Predicate,
    /// p0-p7
    GoverningPredicate,
}

impl RegClass {
    pub fn name(self) -> &'static str {
        match self {
            RegClass::General => "general",
            RegClass::GeneralOrZr => "general_or_zr",
            RegClass::GeneralOrSp => "general_or_sp",
            RegClass::Float => "float",
            RegClass::LowFloat => "low_float",
            RegClass::SveVector => "sve_vector",
            RegClass::Predicate => "predicate",
            RegClass::GoverningPredicate => "governing_predicate",
        }
    }

    /// Role drawn for a catalog mode letter: `x`/`w` general, `b`/`h`/`s`/`d`
    /// scalar float, `p` predicate, `P` governing predicate, `Z` SVE vector.
    pub fn for_mode(mode: char) -> Option<Self> {
        match mode {
            'x' | 'w' => Some(RegClass::General),
            'b' | 'h' | 's' | 'd' => Some(RegClass::Float),
            'p' => Some(RegClass::Predicate),
            'P' => Some(RegClass::GoverningPredicate),
            'Z' => Some(RegClass::SveVector),
            _ => None,
        }
    }

    /// Number of architectural register names in this role's bank.
    pub fn bank_size(self) -> u8 {
        match self {
            RegClass::General
            | RegClass::GeneralOrZr
            | RegClass::GeneralOrSp
            | RegClass::Float
            | RegClass::SveVector => 32,
            RegClass::LowFloat | RegClass::Predicate => 16,
            RegClass::GoverningPredicate => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register {
    class: RegClass,
    number: u8,
}

impl Register {
    pub fn new(class: RegClass, number: u8) -> Self {
        Self { class, number }
    }

    pub fn general(number: u8) -> Self {
        Self::new(RegClass::General, number)
    }

    pub fn float(number: u8) -> Self {
        Self::new(RegClass::Float, number)
    }

    pub fn class(&self) -> RegClass {
        self.class
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// The following register of a consecutive list, wrapping inside the bank.
    pub fn next(&self) -> Self {
        Self {
            class: self.class,
            number: (self.number + 1) % self.class.bank_size(),
        }
    }

    pub fn render(&self, notation: Notation, view: RegView) -> String {
        let n = self.number;
        match (notation, self.class) {
            (Notation::Call, RegClass::GeneralOrZr) if n == 31 => "zr".to_string(),
            (Notation::Call, RegClass::GeneralOrSp) if n == 31 => "sp".to_string(),
            (Notation::Call, RegClass::General | RegClass::GeneralOrZr | RegClass::GeneralOrSp) => {
                format!("r{n}")
            }
            (Notation::Call, RegClass::Float | RegClass::LowFloat) => format!("v{n}"),
            (_, RegClass::SveVector) => format!("z{n}"),
            (_, RegClass::Predicate | RegClass::GoverningPredicate) => format!("p{n}"),
            (Notation::Asm, RegClass::GeneralOrZr) if n == 31 => format!("{}zr", view.prefix()),
            (Notation::Asm, RegClass::GeneralOrSp) if n == 31 => "sp".to_string(),
            (Notation::Asm, _) => format!("{}{n}", view.prefix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_registers_follow_the_view() {
        let r = Register::general(5);
        assert_eq!(r.render(Notation::Call, RegView::W), "r5");
        assert_eq!(r.render(Notation::Asm, RegView::X), "x5");
        assert_eq!(r.render(Notation::Asm, RegView::W), "w5");
    }

    #[test]
    fn index_31_aliases() {
        let zr = Register::new(RegClass::GeneralOrZr, 31);
        assert_eq!(zr.render(Notation::Call, RegView::X), "zr");
        assert_eq!(zr.render(Notation::Asm, RegView::W), "wzr");
        let sp = Register::new(RegClass::GeneralOrSp, 31);
        assert_eq!(sp.render(Notation::Call, RegView::X), "sp");
        assert_eq!(sp.render(Notation::Asm, RegView::X), "sp");
        let x30 = Register::new(RegClass::GeneralOrSp, 30);
        assert_eq!(x30.render(Notation::Asm, RegView::X), "x30");
    }

    #[test]
    fn vector_banks() {
        let v = Register::float(3);
        assert_eq!(v.render(Notation::Call, RegView::D), "v3");
        assert_eq!(v.render(Notation::Asm, RegView::D), "d3");
        assert_eq!(v.render(Notation::Asm, RegView::V), "v3");
        let z = Register::new(RegClass::SveVector, 4);
        assert_eq!(z.render(Notation::Asm, RegView::X), "z4");
        let p = Register::new(RegClass::GoverningPredicate, 1);
        assert_eq!(p.render(Notation::Call, RegView::X), "p1");
    }

    #[test]
    fn next_wraps_inside_the_bank() {
        assert_eq!(Register::float(31).next().number(), 0);
        assert_eq!(Register::new(RegClass::LowFloat, 15).next().number(), 0);
        assert_eq!(Register::float(7).next().number(), 8);
    }
}
