//! Instruction shapes.
//!
//! An [`Entry`] is one row of the catalog: a shape plus its fixed
//! parameters (mnemonic, mode letter, arrangement, ...). Generating an entry
//! draws the random operands and yields an [`Instruction`], which renders
//! the same instance in both notations.

pub mod branch;
pub mod float;
pub mod integer;
pub mod line;
pub mod memory;
pub mod neon;
pub mod sve;
pub mod system;

use crate::error::Result;
use crate::operand::{AddressKind, Arrangement, Condition, ElementWidth, Notation, SystemReg};
use crate::random_asm::inst_generator::GenContext;

use branch::{AbsOp, CondBranchOp, RegAndAbsOp, RegImmAbsOp};
use float::{FloatImmediateOp, FloatOp};
use integer::{
    AddSubExtendedOp, AddSubImmOp, ArithOp, BitfieldOp, ConditionalCompareImmedOp,
    ConditionalCompareOp, ConditionalSelectOp, ExtractOp, FourRegMulOp, LogicalImmOp,
    MoveWideImmOp, RegListOp,
};
use line::Mnemonic;
use memory::{LoadStoreExclusiveOp, LoadStoreOp, LoadStorePairOp, LseOp};
use neon::{
    AddWideNeonOp, LdStNeonOp, NeonFloatCompareWithZero, NeonOp, NeonReduceOp,
    NeonVectorCompare, Sha3Op, Sha512Op, VectorScalarNeonOp,
};
use sve::{SveBinaryImmOp, SveCompareWithImm, SveCompareWithZero, SveReductionOp, SveVectorOp};
use system::{ImmOp, Op, OneRegOp, SpecialCase, SystemOp, SystemRegOp, Transfer};

/// Anything that renders in both notations.
pub trait Shape {
    fn render(&self, notation: Notation) -> String;
}

macro_rules! instruction_kinds {
    ($($variant:ident($shape:ty)),+ $(,)?) => {
        /// A generated instance of one of the shapes.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Instruction {
            $($variant($shape),)+
        }

        impl Shape for Instruction {
            fn render(&self, notation: Notation) -> String {
                match self {
                    $(Instruction::$variant(op) => op.render(notation),)+
                }
            }
        }

        $(
            impl From<$shape> for Instruction {
                fn from(op: $shape) -> Self {
                    Instruction::$variant(op)
                }
            }
        )+
    };
}

instruction_kinds! {
    RegList(RegListOp),
    Arith(ArithOp),
    AddSubImm(AddSubImmOp),
    LogicalImm(LogicalImmOp),
    AddSubExtended(AddSubExtendedOp),
    MoveWideImm(MoveWideImmOp),
    Bitfield(BitfieldOp),
    Extract(ExtractOp),
    ConditionalCompare(ConditionalCompareOp),
    ConditionalCompareImmed(ConditionalCompareImmedOp),
    ConditionalSelect(ConditionalSelectOp),
    FourRegMul(FourRegMulOp),
    Abs(AbsOp),
    RegAndAbs(RegAndAbsOp),
    RegImmAbs(RegImmAbsOp),
    CondBranch(CondBranchOp),
    Imm(ImmOp),
    Op(Op),
    System(SystemOp),
    OneReg(OneRegOp),
    SystemReg(SystemRegOp),
    LoadStore(LoadStoreOp),
    LoadStorePair(LoadStorePairOp),
    LoadStoreExclusive(LoadStoreExclusiveOp),
    Lse(LseOp),
    Float(FloatOp),
    FloatImmediate(FloatImmediateOp),
    LdStNeon(LdStNeonOp),
    NeonReduce(NeonReduceOp),
    NeonFloatCompareWithZero(NeonFloatCompareWithZero),
    Neon(NeonOp),
    VectorScalarNeon(VectorScalarNeonOp),
    NeonVectorCompare(NeonVectorCompare),
    AddWideNeon(AddWideNeonOp),
    Sha3(Sha3Op),
    Sha512(Sha512Op),
    SveBinaryImm(SveBinaryImmOp),
    SveVector(SveVectorOp),
    SveReduction(SveReductionOp),
    SveCompareWithZero(SveCompareWithZero),
    SveCompareWithImm(SveCompareWithImm),
    Special(SpecialCase),
}

impl Instruction {
    /// Branch shapes turn into one instance per pc-relative target; every
    /// other shape is a single instance.
    pub fn expand(self) -> Vec<Instruction> {
        match self {
            Instruction::Abs(op) => op.targets().into_iter().map(|t| op.retarget(t).into()).collect(),
            Instruction::RegAndAbs(op) => {
                op.targets().into_iter().map(|t| op.retarget(t).into()).collect()
            }
            Instruction::RegImmAbs(op) => {
                op.targets().into_iter().map(|t| op.retarget(t).into()).collect()
            }
            Instruction::CondBranch(op) => {
                op.targets().into_iter().map(|t| op.retarget(t).into()).collect()
            }
            other => vec![other],
        }
    }

    pub fn call(&self) -> String {
        self.render(Notation::Call)
    }

    pub fn asm(&self) -> String {
        self.render(Notation::Asm)
    }
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Two-register, three-register and add/sub-with-carry forms.
    RegList(Mnemonic, usize),
    Arith(Mnemonic),
    AddSubImm(Mnemonic),
    LogicalImm(Mnemonic),
    AddSubExtended(Mnemonic),
    MoveWideImm(Mnemonic),
    Bitfield(Mnemonic),
    Extract(Mnemonic),
    ConditionalCompare(Mnemonic),
    ConditionalCompareImmed(Mnemonic),
    ConditionalSelect(Mnemonic),
    FourRegMul(Mnemonic),
    Abs(Mnemonic),
    RegAndAbs(Mnemonic),
    RegImmAbs(Mnemonic),
    CondBranch(Condition),
    Imm(Mnemonic),
    Op(Mnemonic),
    System(Mnemonic),
    OneReg(Mnemonic),
    SystemReg {
        mnemonic: Mnemonic,
        system_reg: SystemReg,
        transfer: Transfer,
    },
    LoadStore {
        name: &'static str,
        asm_name: &'static str,
        kind: AddressKind,
        mode: char,
    },
    LoadStorePair {
        name: &'static str,
        asm_name: &'static str,
        kind: AddressKind,
        mode: char,
    },
    LoadStoreExclusive {
        name: &'static str,
        mode: char,
        count: usize,
    },
    Lse {
        name: &'static str,
        asm_name: &'static str,
        size: char,
        ordering: &'static str,
    },
    Float {
        name: &'static str,
        asm_name: Option<&'static str>,
        modes: &'static str,
    },
    FloatImmediate(&'static str),
    LdStNeon {
        name: &'static str,
        count: usize,
        arrangement: Arrangement,
        kind: AddressKind,
    },
    NeonReduce {
        name: &'static str,
        asm_name: &'static str,
        arrangement: Arrangement,
    },
    NeonFloatCompareWithZero(Arrangement, Condition),
    Neon {
        name: &'static str,
        asm_name: &'static str,
        arrangement: Arrangement,
        count: usize,
    },
    VectorScalarNeon {
        name: &'static str,
        asm_name: &'static str,
        arrangement: Arrangement,
    },
    NeonVectorCompare {
        name: &'static str,
        arrangement: Arrangement,
        cond: Condition,
    },
    AddWideNeon {
        name: &'static str,
        asm_name: &'static str,
        wide: Arrangement,
        narrow: Arrangement,
    },
    Sha3(&'static str),
    Sha512(&'static str),
    SveBinaryImm(&'static str),
    SveVector {
        name: &'static str,
        operands: &'static str,
        destructive: bool,
    },
    SveReduction(&'static str, ElementWidth),
    SveCompareWithZero(Condition),
    SveCompareWithImm(Condition),
    Special(SpecialCase),
}

impl Entry {
    pub fn generate(&self, ctx: &mut GenContext) -> Result<Instruction> {
        let instruction = match *self {
            Entry::RegList(m, count) => RegListOp::generate(m, count, ctx).into(),
            Entry::Arith(m) => ArithOp::generate(m, ctx).into(),
            Entry::AddSubImm(m) => AddSubImmOp::generate(m, ctx).into(),
            Entry::LogicalImm(m) => LogicalImmOp::generate(m, ctx)?.into(),
            Entry::AddSubExtended(m) => AddSubExtendedOp::generate(m, ctx).into(),
            Entry::MoveWideImm(m) => MoveWideImmOp::generate(m, ctx).into(),
            Entry::Bitfield(m) => BitfieldOp::generate(m, ctx).into(),
            Entry::Extract(m) => ExtractOp::generate(m, ctx).into(),
            Entry::ConditionalCompare(m) => ConditionalCompareOp::generate(m, ctx).into(),
            Entry::ConditionalCompareImmed(m) => {
                ConditionalCompareImmedOp::generate(m, ctx).into()
            }
            Entry::ConditionalSelect(m) => ConditionalSelectOp::generate(m, ctx).into(),
            Entry::FourRegMul(m) => FourRegMulOp::generate(m, ctx).into(),
            Entry::Abs(m) => AbsOp::generate(m).into(),
            Entry::RegAndAbs(m) => RegAndAbsOp::generate(m, ctx).into(),
            Entry::RegImmAbs(m) => RegImmAbsOp::generate(m, ctx).into(),
            Entry::CondBranch(cond) => CondBranchOp::generate(cond).into(),
            Entry::Imm(m) => ImmOp::generate(m, ctx).into(),
            Entry::Op(m) => Op::generate(m).into(),
            Entry::System(m) => SystemOp::generate(m, ctx).into(),
            Entry::OneReg(m) => OneRegOp::generate(m, ctx).into(),
            Entry::SystemReg {
                mnemonic,
                system_reg,
                transfer,
            } => SystemRegOp::generate(mnemonic, system_reg, transfer, ctx).into(),
            Entry::LoadStore {
                name,
                asm_name,
                kind,
                mode,
            } => LoadStoreOp::generate(name, asm_name, kind, mode, ctx)?.into(),
            Entry::LoadStorePair {
                name,
                asm_name,
                kind,
                mode,
            } => LoadStorePairOp::generate(name, asm_name, kind, mode, ctx)?.into(),
            Entry::LoadStoreExclusive { name, mode, count } => {
                LoadStoreExclusiveOp::generate(name, mode, count, ctx)?.into()
            }
            Entry::Lse {
                name,
                asm_name,
                size,
                ordering,
            } => LseOp::generate(name, asm_name, size, ordering, ctx).into(),
            Entry::Float {
                name,
                asm_name,
                modes,
            } => FloatOp::generate(name, asm_name, modes, ctx)?.into(),
            Entry::FloatImmediate(value) => FloatImmediateOp::generate(value, ctx).into(),
            Entry::LdStNeon {
                name,
                count,
                arrangement,
                kind,
            } => LdStNeonOp::generate(name, count, arrangement, kind, ctx).into(),
            Entry::NeonReduce {
                name,
                asm_name,
                arrangement,
            } => NeonReduceOp::generate(name, asm_name, arrangement, ctx).into(),
            Entry::NeonFloatCompareWithZero(arrangement, cond) => {
                NeonFloatCompareWithZero::generate(arrangement, cond, ctx).into()
            }
            Entry::Neon {
                name,
                asm_name,
                arrangement,
                count,
            } => NeonOp::generate(name, asm_name, arrangement, count, ctx).into(),
            Entry::VectorScalarNeon {
                name,
                asm_name,
                arrangement,
            } => VectorScalarNeonOp::generate(name, asm_name, arrangement, ctx).into(),
            Entry::NeonVectorCompare {
                name,
                arrangement,
                cond,
            } => NeonVectorCompare::generate(name, arrangement, cond, ctx).into(),
            Entry::AddWideNeon {
                name,
                asm_name,
                wide,
                narrow,
            } => AddWideNeonOp::generate(name, asm_name, wide, narrow, ctx).into(),
            Entry::Sha3(name) => Sha3Op::generate(name, ctx).into(),
            Entry::Sha512(name) => Sha512Op::generate(name, ctx).into(),
            Entry::SveBinaryImm(name) => SveBinaryImmOp::generate(name, ctx)?.into(),
            Entry::SveVector {
                name,
                operands,
                destructive,
            } => SveVectorOp::generate(name, operands, destructive, ctx)?.into(),
            Entry::SveReduction(name, lowest) => {
                SveReductionOp::generate(name, lowest, ctx).into()
            }
            Entry::SveCompareWithZero(cond) => SveCompareWithZero::generate(cond, ctx).into(),
            Entry::SveCompareWithImm(cond) => SveCompareWithImm::generate(cond, ctx).into(),
            Entry::Special(ref case) => case.clone().into(),
        };
        Ok(instruction)
    }
}

/// A titled run of catalog entries; the title becomes a comment line in both
/// outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub title: String,
    pub entries: Vec<Entry>,
}

impl Group {
    pub fn new(title: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branches_expand_to_every_target() {
        let mut ctx = GenContext::with_seed(0);
        let b = Entry::Abs(Mnemonic::new("b")).generate(&mut ctx).unwrap();
        let asm: Vec<String> = b.expand().iter().map(Instruction::asm).collect();
        assert_eq!(asm, ["b\t.", "b\tback", "b\tforth"]);

        let adrp = Entry::RegAndAbs(Mnemonic::new("adrp"))
            .generate(&mut ctx)
            .unwrap();
        assert_eq!(adrp.expand().len(), 1);

        let add = Entry::RegList(Mnemonic::new("udivw"), 3)
            .generate(&mut ctx)
            .unwrap();
        assert_eq!(add.expand().len(), 1);
    }

    #[test]
    fn special_cases_render_verbatim() {
        let entry = Entry::Special(SpecialCase::new(
            "__ ccmn(zr, zr, 3u, Assembler::LE);",
            "ccmn\txzr, xzr, #3, LE",
        ));
        let op = entry.generate(&mut GenContext::with_seed(0)).unwrap();
        assert_eq!(op.call(), "__ ccmn(zr, zr, 3u, Assembler::LE);");
        assert_eq!(op.asm(), "ccmn\txzr, xzr, #3, LE");
    }

    #[test]
    fn generation_errors_surface() {
        let mut ctx = GenContext::with_seed(0);
        let pair = Entry::LoadStorePair {
            name: "ldp",
            asm_name: "ldp",
            kind: AddressKind::BasePlusReg,
            mode: 'x',
        };
        assert!(pair.generate(&mut ctx).is_err());
        let float = Entry::Float {
            name: "fadds",
            asm_name: None,
            modes: "sqs",
        };
        assert!(float.generate(&mut ctx).is_err());
    }
}
