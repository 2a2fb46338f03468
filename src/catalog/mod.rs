//! The AArch64 instruction table: every group, in output order.

pub mod special;

use enum_iterator::all;

use crate::consts::aarch64::FLOAT_IMMEDIATES;
use crate::format::line::Mnemonic;
use crate::format::system::{SpecialCase, Transfer};
use crate::format::{Entry, Group};
use crate::operand::{AddressKind, Arrangement, Condition, ElementWidth, SystemReg};

use Arrangement::*;

fn mnemonics(names: &[&'static str], entry: fn(Mnemonic) -> Entry) -> Vec<Entry> {
    names.iter().map(|name| entry(Mnemonic::new(name))).collect()
}

fn group(title: impl Into<String>, entries: Vec<Entry>) -> Group {
    Group::new(title, entries)
}

fn integer_groups() -> Vec<Group> {
    vec![
        group(
            "ArithOp",
            mnemonics(
                &[
                    "add", "sub", "adds", "subs", "addw", "subw", "addsw", "subsw", "and", "orr",
                    "eor", "ands", "andw", "orrw", "eorw", "andsw", "bic", "orn", "eon", "bics",
                    "bicw", "ornw", "eonw", "bicsw",
                ],
                Entry::Arith,
            ),
        ),
        group(
            "AddSubImmOp",
            mnemonics(
                &["addw", "addsw", "subw", "subsw", "add", "adds", "sub", "subs"],
                Entry::AddSubImm,
            ),
        ),
        group(
            "LogicalImmOp",
            mnemonics(
                &["andw", "orrw", "eorw", "andsw", "and", "orr", "eor", "ands"],
                Entry::LogicalImm,
            ),
        ),
    ]
}

fn branch_groups() -> Vec<Group> {
    vec![
        group("AbsOp", mnemonics(&["b", "bl"], Entry::Abs)),
        group(
            "RegAndAbsOp",
            mnemonics(
                &["cbzw", "cbnzw", "cbz", "cbnz", "adr", "adrp"],
                Entry::RegAndAbs,
            ),
        ),
        group("RegImmAbsOp", mnemonics(&["tbz", "tbnz"], Entry::RegImmAbs)),
        group(
            "MoveWideImmOp",
            mnemonics(
                &["movnw", "movzw", "movkw", "movn", "movz", "movk"],
                Entry::MoveWideImm,
            ),
        ),
        group(
            "BitfieldOp",
            mnemonics(
                &["sbfm", "bfmw", "ubfmw", "sbfm", "bfm", "ubfm"],
                Entry::Bitfield,
            ),
        ),
        group("ExtractOp", mnemonics(&["extrw", "extr"], Entry::Extract)),
        group(
            "CondBranchOp",
            all::<Condition>().map(Entry::CondBranch).collect(),
        ),
    ]
}

fn system_groups() -> Vec<Group> {
    let mut groups = vec![
        group(
            "ImmOp",
            mnemonics(&["svc", "hvc", "smc", "brk", "hlt"], Entry::Imm),
        ),
        group(
            "Op",
            mnemonics(
                &[
                    "nop", "yield", "wfe", "sev", "sevl", "autia1716", "autiasp", "autiaz",
                    "autib1716", "autibsp", "autibz", "pacia1716", "paciasp", "paciaz",
                    "pacib1716", "pacibsp", "pacibz", "eret", "drps", "isb",
                ],
                Entry::Op,
            ),
        ),
        group(
            "PostfixExceptionOp",
            vec![
                Entry::Op(Mnemonic::postfix("wfi")),
                Entry::Op(Mnemonic::postfix("xpaclri")),
            ],
        ),
        group("SystemOp", mnemonics(&["dsb", "dmb"], Entry::System)),
        group(
            "OneRegOp",
            mnemonics(
                &[
                    "br", "blr", "paciza", "pacizb", "pacdza", "pacdzb", "autiza", "autizb",
                    "autdza", "autdzb", "xpacd", "braaz", "brabz", "blraaz", "blrabz",
                ],
                Entry::OneReg,
            ),
        ),
    ];

    for system_reg in [SystemReg::Fpsr, SystemReg::Nzcv] {
        groups.push(group(
            "SystemOneRegOp",
            vec![Entry::SystemReg {
                mnemonic: Mnemonic::new("msr"),
                system_reg,
                transfer: Transfer::ToSystem,
            }],
        ));
    }
    for system_reg in all::<SystemReg>() {
        groups.push(group(
            "OneRegSystemOp",
            vec![Entry::SystemReg {
                mnemonic: Mnemonic::new("mrs"),
                system_reg,
                transfer: Transfer::FromSystem,
            }],
        ));
    }

    groups.push(group(
        "PostfixExceptionOneRegOp",
        vec![Entry::OneReg(Mnemonic::postfix("xpaci"))],
    ));
    groups
}

fn exclusive(name: &'static str, mode: char, count: usize) -> Entry {
    Entry::LoadStoreExclusive { name, mode, count }
}

fn load_store(name: &'static str, asm_name: &'static str, kind: AddressKind, mode: char) -> Entry {
    Entry::LoadStore {
        name,
        asm_name,
        kind,
        mode,
    }
}

fn pair(name: &'static str, kind: AddressKind, mode: char) -> Entry {
    Entry::LoadStorePair {
        name,
        asm_name: name,
        kind,
        mode,
    }
}

fn memory_groups() -> Vec<Group> {
    let mut groups = Vec::new();

    for mode in ['x', 'w', 'h', 'b'] {
        groups.push(group(
            "LoadStoreExclusiveOp",
            vec![
                exclusive("stxr", mode, 3),
                exclusive("stlxr", mode, 3),
                exclusive("ldxr", mode, 2),
                exclusive("ldaxr", mode, 2),
                exclusive("stlr", mode, 2),
                exclusive("ldar", mode, 2),
            ],
        ));
    }
    for mode in ['x', 'w'] {
        groups.push(group(
            "LoadStoreExclusiveOp",
            vec![
                exclusive("ldxp", mode, 3),
                exclusive("ldaxp", mode, 3),
                exclusive("stxp", mode, 4),
                exclusive("stlxp", mode, 4),
            ],
        ));
    }

    for kind in all::<AddressKind>().take(6) {
        let entries = if kind == AddressKind::PcRel {
            vec![
                load_store("ldr", "ldr", kind, 'x'),
                load_store("ldr", "ldr", kind, 'w'),
            ]
        } else {
            vec![
                load_store("str", "str", kind, 'x'),
                load_store("str", "str", kind, 'w'),
                load_store("str", "strb", kind, 'b'),
                load_store("str", "strh", kind, 'h'),
                load_store("ldr", "ldr", kind, 'x'),
                load_store("ldr", "ldr", kind, 'w'),
                load_store("ldr", "ldrb", kind, 'b'),
                load_store("ldr", "ldrh", kind, 'h'),
                load_store("ldrsb", "ldrsb", kind, 'x'),
                load_store("ldrsh", "ldrsh", kind, 'x'),
                load_store("ldrsh", "ldrsh", kind, 'w'),
                load_store("ldrsw", "ldrsw", kind, 'x'),
                load_store("ldr", "ldr", kind, 'd'),
                load_store("ldr", "ldr", kind, 's'),
                load_store("str", "str", kind, 'd'),
                load_store("str", "str", kind, 's'),
            ]
        };
        groups.push(group(format!("LoadStoreOp ({kind})"), entries));
    }

    for kind in [
        AddressKind::BasePlusUnscaledOffset,
        AddressKind::PcRel,
        AddressKind::BasePlusReg,
        AddressKind::BasePlusScaledOffset,
    ] {
        groups.push(group(
            format!("LoadStoreOp ({kind})"),
            vec![load_store("prfm", "prfm", kind, 'x')],
        ));
    }
    groups
}

fn arithmetic_groups() -> Vec<Group> {
    vec![
        group(
            "AddSubCarryOp",
            ["adcw", "adcsw", "sbcw", "sbcsw", "adc", "adcs", "sbc", "sbcs"]
                .iter()
                .map(|name| Entry::RegList(Mnemonic::new(name), 3))
                .collect(),
        ),
        group(
            "AddSubExtendedOp",
            mnemonics(
                &["addw", "addsw", "sub", "subsw", "add", "adds", "sub", "subs"],
                Entry::AddSubExtended,
            ),
        ),
        group(
            "ConditionalCompareOp",
            mnemonics(
                &["ccmnw", "ccmpw", "ccmn", "ccmp"],
                Entry::ConditionalCompare,
            ),
        ),
        group(
            "ConditionalCompareImmedOp",
            mnemonics(
                &["ccmnw", "ccmpw", "ccmn", "ccmp"],
                Entry::ConditionalCompareImmed,
            ),
        ),
        group(
            "ConditionalSelectOp",
            mnemonics(
                &["cselw", "csincw", "csinvw", "csnegw", "csel", "csinc", "csinv", "csneg"],
                Entry::ConditionalSelect,
            ),
        ),
        group(
            "TwoRegOp",
            [
                "rbitw", "rev16w", "revw", "clzw", "clsw", "rbit", "rev16", "rev32", "rev", "clz",
                "cls", "pacia", "pacib", "pacda", "pacdb", "autia", "autib", "autda", "autdb",
                "braa", "brab", "blraa", "blrab",
            ]
            .iter()
            .map(|name| Entry::RegList(Mnemonic::new(name), 2))
            .collect(),
        ),
        group(
            "ThreeRegOp",
            [
                "udivw", "sdivw", "lslvw", "lsrvw", "asrvw", "rorvw", "udiv", "sdiv", "lslv",
                "lsrv", "asrv", "rorv", "umulh", "smulh",
            ]
            .iter()
            .map(|name| Entry::RegList(Mnemonic::new(name), 3))
            .collect(),
        ),
        group(
            "FourRegMulOp",
            mnemonics(
                &["maddw", "msubw", "madd", "msub", "smaddl", "smsubl", "umaddl", "umsubl"],
                Entry::FourRegMul,
            ),
        ),
    ]
}

fn float(name: &'static str, modes: &'static str) -> Entry {
    Entry::Float {
        name,
        asm_name: None,
        modes,
    }
}

fn float_convert(name: &'static str, asm_name: &'static str, modes: &'static str) -> Entry {
    Entry::Float {
        name,
        asm_name: Some(asm_name),
        modes,
    }
}

fn float_groups() -> Vec<Group> {
    let mut groups = vec![
        group(
            "ThreeRegFloatOp",
            vec![
                float("fabds", "sss"),
                float("fmuls", "sss"),
                float("fdivs", "sss"),
                float("fadds", "sss"),
                float("fsubs", "sss"),
                float("fabdd", "ddd"),
                float("fmuld", "ddd"),
                float("fdivd", "ddd"),
                float("faddd", "ddd"),
                float("fsubd", "ddd"),
            ],
        ),
        group(
            "FourRegFloatOp",
            vec![
                float("fmadds", "ssss"),
                float("fmsubs", "ssss"),
                float("fnmadds", "ssss"),
                float("fnmadds", "ssss"),
                float("fmaddd", "dddd"),
                float("fmsubd", "dddd"),
                float("fnmaddd", "dddd"),
                float("fnmaddd", "dddd"),
            ],
        ),
        group(
            "TwoRegFloatOp",
            vec![
                float("fmovs", "ss"),
                float("fabss", "ss"),
                float("fnegs", "ss"),
                float("fsqrts", "ss"),
                float("fcvts", "ds"),
                float("fcvtsh", "hs"),
                float("fcvths", "sh"),
                float("fmovd", "dd"),
                float("fabsd", "dd"),
                float("fnegd", "dd"),
                float("fsqrtd", "dd"),
                float("fcvtd", "sd"),
            ],
        ),
        group(
            "FloatConvertOp",
            vec![
                float_convert("fcvtzsw", "fcvtzs", "ws"),
                float_convert("fcvtzs", "fcvtzs", "xs"),
                float_convert("fcvtzdw", "fcvtzs", "wd"),
                float_convert("fcvtzd", "fcvtzs", "xd"),
                float_convert("scvtfws", "scvtf", "sw"),
                float_convert("scvtfs", "scvtf", "sx"),
                float_convert("scvtfwd", "scvtf", "dw"),
                float_convert("scvtfd", "scvtf", "dx"),
                float_convert("fcvtassw", "fcvtas", "ws"),
                float_convert("fcvtasd", "fcvtas", "xd"),
                float_convert("fcvtmssw", "fcvtms", "ws"),
                float_convert("fcvtmsd", "fcvtms", "xd"),
                float_convert("fmovs", "fmov", "ws"),
                float_convert("fmovd", "fmov", "xd"),
                float_convert("fmovs", "fmov", "sw"),
                float_convert("fmovd", "fmov", "dx"),
            ],
        ),
        group(
            "TwoRegFloatOp",
            vec![
                float("fcmps", "ss"),
                float("fcmpd", "dd"),
                float("fcmps", "sz"),
                float("fcmpd", "dz"),
            ],
        ),
    ];

    for kind in [
        AddressKind::BasePlusUnscaledOffset,
        AddressKind::Pre,
        AddressKind::Post,
    ] {
        groups.push(group(
            "LoadStorePairOp",
            vec![
                pair("stp", kind, 'w'),
                pair("ldp", kind, 'w'),
                pair("ldpsw", kind, 'x'),
                pair("stp", kind, 'x'),
                pair("ldp", kind, 'x'),
            ],
        ));
    }
    let unscaled = AddressKind::BasePlusUnscaledOffset;
    groups.push(group(
        "LoadStorePairOp",
        vec![
            pair("stnp", unscaled, 'w'),
            pair("ldnp", unscaled, 'w'),
            pair("stnp", unscaled, 'x'),
            pair("ldnp", unscaled, 'x'),
        ],
    ));
    groups
}

fn neon_ld(name: &'static str, count: usize, arrangement: Arrangement, kind: AddressKind) -> Entry {
    Entry::LdStNeon {
        name,
        count,
        arrangement,
        kind,
    }
}

fn reduce(name: &'static str, arrangement: Arrangement) -> Entry {
    Entry::NeonReduce {
        name,
        asm_name: name,
        arrangement,
    }
}

fn neon(name: &'static str, asm_name: &'static str, arrangements: &[Arrangement], count: usize) -> Vec<Entry> {
    arrangements
        .iter()
        .map(|&arrangement| Entry::Neon {
            name,
            asm_name,
            arrangement,
            count,
        })
        .collect()
}

fn by_element(name: &'static str, asm_name: &'static str, arrangement: Arrangement) -> Entry {
    Entry::VectorScalarNeon {
        name,
        asm_name,
        arrangement,
    }
}

fn add_wide(
    name: &'static str,
    asm_name: &'static str,
    wide: Arrangement,
    narrow: Arrangement,
) -> Entry {
    Entry::AddWideNeon {
        name,
        asm_name,
        wide,
        narrow,
    }
}

const INTEGER_ARRANGEMENTS: [Arrangement; 7] = [T8B, T16B, T4H, T8H, T2S, T4S, T2D];
const FLOAT_ARRANGEMENTS: [Arrangement; 3] = [T2S, T4S, T2D];

fn neon_groups() -> Vec<Group> {
    use AddressKind::{BaseOnly, Post, PostReg};

    let mut groups = vec![
        group(
            "LdStNEONOp",
            vec![
                neon_ld("ld1", 1, T8B, BaseOnly),
                neon_ld("ld1", 2, T16B, Post),
                neon_ld("ld1", 3, T1D, PostReg),
                neon_ld("ld1", 4, T8H, Post),
                neon_ld("ld1r", 1, T8B, BaseOnly),
                neon_ld("ld1r", 1, T4S, Post),
                neon_ld("ld1r", 1, T1D, PostReg),
                neon_ld("ld2", 2, T2D, BaseOnly),
                neon_ld("ld2", 2, T4H, Post),
                neon_ld("ld2r", 2, T16B, BaseOnly),
                neon_ld("ld2r", 2, T2S, Post),
                neon_ld("ld2r", 2, T2D, PostReg),
                neon_ld("ld3", 3, T4S, PostReg),
                neon_ld("ld3", 3, T2S, BaseOnly),
                neon_ld("ld3r", 3, T8H, BaseOnly),
                neon_ld("ld3r", 3, T4S, Post),
                neon_ld("ld3r", 3, T1D, PostReg),
                neon_ld("ld4", 4, T8H, Post),
                neon_ld("ld4", 4, T8B, PostReg),
                neon_ld("ld4r", 4, T8B, BaseOnly),
                neon_ld("ld4r", 4, T4H, Post),
                neon_ld("ld4r", 4, T2S, PostReg),
            ],
        ),
        group(
            "NEONReduceInstruction",
            vec![
                reduce("addv", T8B),
                reduce("addv", T16B),
                reduce("addv", T4H),
                reduce("addv", T8H),
                reduce("addv", T4S),
                reduce("smaxv", T8B),
                reduce("smaxv", T16B),
                reduce("smaxv", T4H),
                reduce("smaxv", T8H),
                reduce("smaxv", T4S),
                reduce("fmaxv", T4S),
                reduce("sminv", T8B),
                reduce("uminv", T8B),
                reduce("sminv", T16B),
                reduce("uminv", T16B),
                reduce("sminv", T4H),
                reduce("uminv", T4H),
                reduce("sminv", T8H),
                reduce("uminv", T8H),
                reduce("sminv", T4S),
                reduce("uminv", T4S),
                reduce("fminv", T4S),
                reduce("fmaxp", T2S),
                reduce("fmaxp", T2D),
                reduce("fminp", T2S),
                reduce("fminp", T2D),
            ],
        ),
    ];

    let mut compare_with_zero = Vec::new();
    for cond in [Condition::GT, Condition::GE, Condition::EQ, Condition::LT, Condition::LE] {
        for arrangement in FLOAT_ARRANGEMENTS {
            compare_with_zero.push(Entry::NeonFloatCompareWithZero(arrangement, cond));
        }
    }
    groups.push(group("NEONFloatCompareWithZero", compare_with_zero));

    let two_reg = [
        neon("absr", "abs", &INTEGER_ARRANGEMENTS, 2),
        neon("fabs", "fabs", &FLOAT_ARRANGEMENTS, 2),
        neon("fneg", "fneg", &FLOAT_ARRANGEMENTS, 2),
        neon("fsqrt", "fsqrt", &FLOAT_ARRANGEMENTS, 2),
        neon("notr", "not", &[T8B, T16B], 2),
    ];
    groups.push(group("TwoRegNEONOp", two_reg.concat()));

    let bytes = [T8B, T16B];
    let no_double = [T8B, T16B, T4H, T8H, T2S, T4S];
    let halves_and_words = [T4H, T8H, T2S, T4S];
    let three_reg = [
        neon("andr", "and", &bytes, 3),
        neon("orr", "orr", &bytes, 3),
        neon("eor", "eor", &bytes, 3),
        neon("addv", "add", &INTEGER_ARRANGEMENTS, 3),
        neon("fadd", "fadd", &FLOAT_ARRANGEMENTS, 3),
        neon("subv", "sub", &INTEGER_ARRANGEMENTS, 3),
        neon("fsub", "fsub", &FLOAT_ARRANGEMENTS, 3),
        neon("mulv", "mul", &no_double, 3),
        neon("fabd", "fabd", &FLOAT_ARRANGEMENTS, 3),
        neon("faddp", "faddp", &FLOAT_ARRANGEMENTS, 3),
        neon("fmul", "fmul", &FLOAT_ARRANGEMENTS, 3),
        neon("mlav", "mla", &halves_and_words, 3),
        neon("fmla", "fmla", &FLOAT_ARRANGEMENTS, 3),
        neon("mlsv", "mls", &halves_and_words, 3),
        neon("fmls", "fmls", &FLOAT_ARRANGEMENTS, 3),
        neon("fdiv", "fdiv", &FLOAT_ARRANGEMENTS, 3),
        neon("maxv", "smax", &no_double, 3),
        neon("smaxp", "smaxp", &no_double, 3),
        neon("fmax", "fmax", &FLOAT_ARRANGEMENTS, 3),
        neon("minv", "smin", &no_double, 3),
        neon("sminp", "sminp", &no_double, 3),
        neon("fmin", "fmin", &FLOAT_ARRANGEMENTS, 3),
        neon("facgt", "facgt", &FLOAT_ARRANGEMENTS, 3),
    ];
    groups.push(group("ThreeRegNEONOp", three_reg.concat()));

    groups.push(group(
        "VectorScalarNEONInstruction",
        vec![
            by_element("fmlavs", "fmla", T2S),
            by_element("mulvs", "mul", T4S),
            by_element("fmlavs", "fmla", T2D),
            by_element("fmlsvs", "fmls", T2S),
            by_element("mulvs", "mul", T4S),
            by_element("fmlsvs", "fmls", T2D),
            by_element("fmulxvs", "fmulx", T2S),
            by_element("mulvs", "mul", T4S),
            by_element("fmulxvs", "fmulx", T2D),
            by_element("mulvs", "mul", T4H),
            by_element("mulvs", "mul", T8H),
            by_element("mulvs", "mul", T2S),
            by_element("mulvs", "mul", T4S),
        ],
    ));

    let mut compares = Vec::new();
    for cond in [Condition::GT, Condition::GE, Condition::EQ, Condition::HI, Condition::HS] {
        for arrangement in INTEGER_ARRANGEMENTS {
            compares.push(Entry::NeonVectorCompare {
                name: "cm",
                arrangement,
                cond,
            });
        }
    }
    for cond in [Condition::EQ, Condition::GT, Condition::GE] {
        for arrangement in FLOAT_ARRANGEMENTS {
            compares.push(Entry::NeonVectorCompare {
                name: "fcm",
                arrangement,
                cond,
            });
        }
    }
    groups.push(group("NEONVectorCompare", compares));
    groups
}

fn sve_compare_groups() -> Vec<Group> {
    use Condition::*;
    vec![
        group(
            "SVEComparisonWithZero",
            [EQ, GT, GE, LT, LE, NE]
                .into_iter()
                .map(Entry::SveCompareWithZero)
                .collect(),
        ),
        group(
            "SVEComparisonWithImm",
            [EQ, GT, GE, LT, LE, NE, HS, HI, LS, LO]
                .into_iter()
                .map(Entry::SveCompareWithImm)
                .collect(),
        ),
    ]
}

fn special_cases() -> Group {
    group(
        "SpecialCases",
        special::SPECIAL_CASES
            .iter()
            .map(|&(call, asm)| Entry::Special(SpecialCase::new(call, asm)))
            .collect(),
    )
}

fn lse(size: char, ordering: &'static str) -> Vec<Entry> {
    [
        ("swp", "swp"),
        ("ldadd", "ldadd"),
        ("ldbic", "ldclr"),
        ("ldeor", "ldeor"),
        ("ldorr", "ldset"),
        ("ldsmin", "ldsmin"),
        ("ldsmax", "ldsmax"),
        ("ldumin", "ldumin"),
        ("ldumax", "ldumax"),
    ]
    .into_iter()
    .map(|(name, asm_name)| Entry::Lse {
        name,
        asm_name,
        size,
        ordering,
    })
    .collect()
}

fn sve_vector(name: &'static str, operands: &'static str, destructive: bool) -> Entry {
    Entry::SveVector {
        name,
        operands,
        destructive,
    }
}

fn extension_groups() -> Vec<Group> {
    let mut groups = vec![group(
        "FloatImmediateOp",
        FLOAT_IMMEDIATES
            .iter()
            .copied()
            .map(Entry::FloatImmediate)
            .collect(),
    )];

    for size in ['x', 'w'] {
        for ordering in ["", "a", "al", "l"] {
            groups.push(group("LSEOp", lse(size, ordering)));
        }
    }

    groups.push(group(
        "SHA3SIMDOp",
        ["bcax", "eor3", "rax1", "xar"].into_iter().map(Entry::Sha3).collect(),
    ));
    groups.push(group(
        "SHA512SIMDOp",
        ["sha512h", "sha512h2", "sha512su0", "sha512su1"]
            .into_iter()
            .map(Entry::Sha512)
            .collect(),
    ));

    for _ in 0..6 {
        groups.push(group(
            "SVEBinaryImmOp",
            ["add", "sub", "and", "eor", "orr"]
                .into_iter()
                .map(Entry::SveBinaryImm)
                .collect(),
        ));
    }

    let unary = |name| sve_vector(name, "ZPZ", false);
    let destructive = |name| sve_vector(name, "ZPZ", true);
    let fused = |name| sve_vector(name, "ZPZZ", false);
    let plain = |name| sve_vector(name, "ZZZ", false);
    groups.push(group(
        "SVEVectorOp",
        vec![
            plain("add"),
            plain("sub"),
            plain("fadd"),
            plain("fmul"),
            plain("fsub"),
            unary("abs"),
            destructive("add"),
            destructive("and"),
            destructive("asr"),
            destructive("bic"),
            unary("clz"),
            unary("cnt"),
            destructive("eor"),
            destructive("lsl"),
            destructive("lsr"),
            destructive("mul"),
            unary("neg"),
            unary("not"),
            destructive("orr"),
            unary("rbit"),
            unary("revb"),
            destructive("smax"),
            destructive("smin"),
            destructive("sub"),
            unary("fabs"),
            destructive("fadd"),
            destructive("fdiv"),
            destructive("fmax"),
            destructive("fmin"),
            destructive("fmul"),
            unary("fneg"),
            unary("frintm"),
            unary("frintn"),
            unary("frintp"),
            unary("fsqrt"),
            destructive("fsub"),
            fused("fmad"),
            fused("fmla"),
            fused("fmls"),
            fused("fmsb"),
            fused("fnmad"),
            fused("fnmsb"),
            fused("fnmla"),
            fused("fnmls"),
            fused("mla"),
            fused("mls"),
            plain("and"),
            plain("eor"),
            plain("orr"),
            plain("bic"),
            plain("uzp1"),
            plain("uzp2"),
            destructive("fabd"),
            plain("bext"),
            plain("bdep"),
            plain("eor3"),
        ],
    ));

    use ElementWidth::{B, S};
    groups.push(group(
        "SVEReductionOp",
        vec![
            Entry::SveReduction("andv", B),
            Entry::SveReduction("orv", B),
            Entry::SveReduction("eorv", B),
            Entry::SveReduction("smaxv", B),
            Entry::SveReduction("sminv", B),
            Entry::SveReduction("fminv", S),
            Entry::SveReduction("fmaxv", S),
            Entry::SveReduction("fadda", S),
            Entry::SveReduction("uaddv", B),
        ],
    ));

    groups.push(group(
        "AddWideNEONOp",
        vec![
            add_wide("saddwv", "saddw", T8H, T8B),
            add_wide("saddwv2", "saddw2", T8H, T16B),
            add_wide("saddwv", "saddw", T4S, T4H),
            add_wide("saddwv2", "saddw2", T4S, T8H),
            add_wide("saddwv", "saddw", T2D, T2S),
            add_wide("saddwv2", "saddw2", T2D, T4S),
            add_wide("uaddwv", "uaddw", T8H, T8B),
            add_wide("uaddwv2", "uaddw2", T8H, T16B),
            add_wide("uaddwv", "uaddw", T4S, T4H),
            add_wide("uaddwv2", "uaddw2", T4S, T8H),
            add_wide("uaddwv", "uaddw", T2D, T2S),
            add_wide("uaddwv2", "uaddw2", T2D, T4S),
        ],
    ));
    groups
}

/// The full table, in the order the listing and the assembly source follow.
pub fn aarch64_catalog() -> Vec<Group> {
    let mut catalog = Vec::new();
    catalog.extend(integer_groups());
    catalog.extend(branch_groups());
    catalog.extend(system_groups());
    catalog.extend(memory_groups());
    catalog.extend(arithmetic_groups());
    catalog.extend(float_groups());
    catalog.extend(neon_groups());
    catalog.extend(sve_compare_groups());
    catalog.push(special_cases());
    catalog.extend(extension_groups());
    catalog
}
