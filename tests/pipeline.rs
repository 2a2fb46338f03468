use aarch64_asmtest::config::{AppConfig, Coverage};
use aarch64_asmtest::consts::logical_imm::{
    IMMEDIATES8, IMMEDIATES16, IMMEDIATES32, IMMEDIATES64, is_bitmask_immediate, table_for,
};
use aarch64_asmtest::error::{AsmTestError, Result};
use aarch64_asmtest::format::{Entry, Group, Instruction, Shape};
use aarch64_asmtest::operand::{AddressKind, ElementWidth, Notation};
use aarch64_asmtest::pipeline::{Generated, extract_vectors, generate};
use aarch64_asmtest::random_asm::inst_generator::{GenContext, flatten, generate_instructions};
use aarch64_asmtest::toolchain::{Assembled, Oracle};
use proptest::prelude::*;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Emits one 4-byte word per instruction line, numbering them in order.
struct CountingOracle {
    calls: usize,
}

impl Oracle for CountingOracle {
    fn assemble(&mut self, source: &str) -> Result<Assembled> {
        self.calls += 1;
        let mut bytes = Vec::new();
        for (i, _) in source.lines().filter(|l| l.starts_with('\t')).enumerate() {
            bytes.extend_from_slice(&(i as u32).to_le_bytes());
        }
        let lengths = vec![4; bytes.len() / 4];
        Assembled::new(bytes, lengths)
    }
}

/// Rejects everything, like an assembler that does not know the extension.
struct RejectingOracle;

impl Oracle for RejectingOracle {
    fn assemble(&mut self, _source: &str) -> Result<Assembled> {
        Err(AsmTestError::toolchain("assembly", "unknown mnemonic"))
    }
}

fn seeded(seed: u64) -> AppConfig {
    AppConfig {
        seed,
        ..AppConfig::default()
    }
}

fn instructions(generated: &Generated) -> Vec<&Instruction> {
    flatten(&generated.groups)
}

#[test]
fn mock_oracle_lines_up_with_every_instance() {
    let generated = generate(&seeded(7)).unwrap();
    let mut oracle = CountingOracle { calls: 0 };
    let table = extract_vectors(&generated, &mut oracle).unwrap();

    assert_eq!(oracle.calls, 1);
    assert_eq!(table.len(), generated.instruction_count());
    let total: usize = table.entries.iter().map(|e| e.bytes.len()).sum();
    assert_eq!(total, 4 * table.len());

    let words = table.words().unwrap();
    assert_eq!(words[0], 0);
    assert_eq!(words[words.len() - 1] as usize, table.len() - 1);
    assert_eq!(table.entries[0].call, instructions(&generated)[0].call());
}

#[test]
fn toolchain_rejection_aborts_the_run() {
    let generated = generate(&seeded(0)).unwrap();
    let err = extract_vectors(&generated, &mut RejectingOracle).unwrap_err();
    assert!(matches!(err, AsmTestError::Toolchain { .. }));
}

#[test]
fn same_seed_same_output_end_to_end() {
    let a = generate(&seeded(1234)).unwrap();
    let b = generate(&seeded(1234)).unwrap();
    assert_eq!(a.listing, b.listing);
    assert_eq!(a.source, b.source);

    let ta = extract_vectors(&a, &mut CountingOracle { calls: 0 }).unwrap();
    let tb = extract_vectors(&b, &mut CountingOracle { calls: 0 }).unwrap();
    assert_eq!(ta.to_cpp(), tb.to_cpp());
    assert_eq!(ta.to_json().unwrap(), tb.to_json().unwrap());
}

#[test]
fn different_seeds_differ() {
    let a = generate(&seeded(1)).unwrap();
    let b = generate(&seeded(2)).unwrap();
    assert_ne!(a.listing, b.listing);
}

#[test]
fn listing_and_source_carry_the_same_instances() {
    let generated = generate(&seeded(3)).unwrap();
    let listed: Vec<&str> = generated
        .listing
        .lines()
        .filter_map(|l| l.split_once(" //\t").map(|(_, asm)| asm))
        .collect();
    let assembled: Vec<&str> = generated
        .source
        .lines()
        .filter_map(|l| l.strip_prefix('\t'))
        .collect();
    assert_eq!(listed, assembled);
    assert!(generated.source.starts_with("back:\n"));
    assert!(generated.source.ends_with("forth:\n"));
}

#[test]
fn exhaustive_coverage_produces_more_instances() {
    let sampled = generate(&seeded(5)).unwrap();
    let exhaustive = generate(&AppConfig {
        seed: 5,
        coverage: Coverage::Exhaustive,
        ..AppConfig::default()
    })
    .unwrap();
    assert!(exhaustive.instruction_count() > sampled.instruction_count());
}

#[test]
fn exhaustive_sve_logical_ops_reach_every_table_entry() {
    let catalog = vec![Group::new(
        "SVEBinaryImmOp",
        vec![Entry::SveBinaryImm("orr"), Entry::SveBinaryImm("eor")],
    )];
    let mut ctx = GenContext::with_seed(9).with_coverage(Coverage::Exhaustive);
    let groups = generate_instructions(&catalog, &mut ctx).unwrap();

    let mut seen: BTreeMap<ElementWidth, BTreeSet<u64>> = BTreeMap::new();
    for inst in flatten(&groups) {
        if let Instruction::SveBinaryImm(op) = inst {
            seen.entry(op.width()).or_default().insert(op.immediate().bits());
        }
    }
    for (width, table) in [
        (ElementWidth::B, IMMEDIATES8),
        (ElementWidth::H, IMMEDIATES16),
        (ElementWidth::S, IMMEDIATES32),
        (ElementWidth::D, IMMEDIATES64),
    ] {
        let expected: BTreeSet<u64> = table.iter().copied().collect();
        assert_eq!(seen.get(&width), Some(&expected), "{width:?}");
    }
}

fn numbers(re: &Regex, text: &str) -> Vec<u32> {
    re.captures_iter(text)
        .filter_map(|c| c[1].parse().ok())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn register_lists_render_the_same_operands(seed in any::<u64>()) {
        let generated = generate(&seeded(seed)).unwrap();
        let call_re = Regex::new(r"\br(\d+)\b").unwrap();
        let asm_re = Regex::new(r"\b[xw](\d+)\b").unwrap();
        for inst in instructions(&generated) {
            if let Instruction::RegList(_) | Instruction::Arith(_) | Instruction::FourRegMul(_) = inst {
                let call = inst.render(Notation::Call);
                let asm = inst.render(Notation::Asm);
                prop_assert_eq!(numbers(&call_re, &call), numbers(&asm_re, &asm), "{} / {}", call, asm);
            }
        }
    }

    #[test]
    fn logical_immediates_are_encodable_for_their_width(seed in any::<u64>()) {
        let generated = generate(&seeded(seed)).unwrap();
        let mut checked = 0;
        for inst in instructions(&generated) {
            let (width, bits) = match inst {
                Instruction::LogicalImm(op) => (op.width(), op.immediate().bits()),
                Instruction::SveBinaryImm(op) if op.is_logical() => (op.width(), op.immediate().bits()),
                _ => continue,
            };
            let table = table_for(width).unwrap();
            prop_assert!(table.contains(&bits), "{}", inst.asm());
            prop_assert!(is_bitmask_immediate(bits, width.bits()), "{}", inst.asm());
            checked += 1;
        }
        prop_assert!(checked > 0);
    }

    #[test]
    fn exclusive_and_pair_registers_are_distinct(seed in any::<u64>()) {
        let generated = generate(&seeded(seed)).unwrap();
        for inst in instructions(&generated) {
            match inst {
                Instruction::LoadStoreExclusive(op) => {
                    let regs: BTreeSet<u8> = op.registers().iter().map(|r| r.number()).collect();
                    prop_assert_eq!(regs.len(), op.registers().len(), "{}", inst.asm());
                }
                Instruction::LoadStorePair(op) if inst.asm().starts_with("ld") => {
                    let [a, b] = op.registers();
                    prop_assert_ne!(a.number(), b.number(), "{}", inst.asm());
                }
                _ => {}
            }
        }
    }

    #[test]
    fn memory_offsets_are_legal(seed in any::<u64>()) {
        let generated = generate(&seeded(seed)).unwrap();
        for inst in instructions(&generated) {
            if let Instruction::LoadStore(op) = inst {
                let addr = op.address();
                let offset = addr.offset();
                let size = 1i64 << op.width().shift();
                match addr.kind() {
                    AddressKind::BasePlusScaledOffset => {
                        prop_assert_eq!(offset % size, 0, "{}", inst.asm());
                        prop_assert!((0..=4095).contains(&(offset / size)), "{}", inst.asm());
                    }
                    AddressKind::BasePlusUnscaledOffset | AddressKind::Pre | AddressKind::Post => {
                        prop_assert!((-256..=255).contains(&offset), "{}", inst.asm());
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn vector_lengths_sum_to_the_binary(seed in any::<u64>()) {
        let generated = generate(&seeded(seed)).unwrap();
        let mut oracle = CountingOracle { calls: 0 };
        let assembled = oracle.assemble(&generated.source).unwrap();
        let table = extract_vectors(&generated, &mut oracle).unwrap();
        let total: usize = table.entries.iter().map(|e| e.bytes.len()).sum();
        prop_assert_eq!(total, assembled.bytes.len());
    }
}
