//! Run configuration: seed, coverage mode, toolchain commands and the
//! register file. Everything has a built-in AArch64 default; an optional
//! TOML file overrides it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use enum_iterator::all;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::consts::aarch64::{
    DEFAULT_ASSEMBLER, DEFAULT_ASSEMBLER_FLAGS, DEFAULT_OBJCOPY, DEFAULT_OBJDUMP,
    PLATFORM_REGISTER,
};
use crate::consts::logical_imm::IMMEDIATES32;
use crate::error::{AsmTestError, Result};
use crate::operand::RegClass;

/// Smallest general register set that still satisfies the four-way
/// distinctness of `stxp`/`stlxp`.
const MIN_GENERAL_REGISTERS: usize = 4;

/// 最大的逻辑立即数表（32 位）也要能整表遍历
const DEFAULT_SWEEP_LIMIT: usize = IMMEDIATES32.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Coverage {
    /// One instance per catalog entry.
    #[default]
    Sampled,
    /// Every enumerable operand slot walks its whole legal range.
    Exhaustive,
}

/// Legal index range of one register role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleRule {
    pub low: u8,
    pub high: u8,
    /// Indices that must never be emitted for this role.
    #[serde(default)]
    pub reserved: Vec<u8>,
    /// When set, a draw that lands on a reserved index is replaced by this
    /// one instead of being excluded from the draw.
    #[serde(default)]
    pub remap: Option<u8>,
}

impl RoleRule {
    pub fn range(low: u8, high: u8) -> Self {
        Self {
            low,
            high,
            reserved: Vec::new(),
            remap: None,
        }
    }

    fn reserving(mut self, index: u8, remap: u8) -> Self {
        self.reserved.push(index);
        self.remap = Some(remap);
        self
    }

    /// Indices a draw may produce.
    pub fn legal(&self) -> Vec<u8> {
        (self.low..=self.high)
            .filter(|n| !self.reserved.contains(n))
            .collect()
    }

    /// Number of raw draw outcomes; with a remap every index is drawn and
    /// reserved hits are redirected.
    pub fn draw_span(&self) -> usize {
        if self.remap.is_some() {
            usize::from(self.high - self.low) + 1
        } else {
            self.legal().len()
        }
    }

    fn validate(&self, class: RegClass) -> Result<()> {
        let role = class.name();
        if self.low > self.high {
            return Err(AsmTestError::config(format!(
                "register role '{role}': low {} is above high {}",
                self.low, self.high
            )));
        }
        if self.high >= class.bank_size() {
            return Err(AsmTestError::config(format!(
                "register role '{role}': index {} is outside the {}-register bank",
                self.high,
                class.bank_size()
            )));
        }
        let legal = self.legal();
        if legal.is_empty() {
            return Err(AsmTestError::config(format!(
                "register role '{role}' has no legal index"
            )));
        }
        if let Some(remap) = self.remap {
            if !legal.contains(&remap) {
                return Err(AsmTestError::config(format!(
                    "register role '{role}': remap target {remap} is not a legal index"
                )));
            }
        }
        if class == RegClass::General && legal.len() < MIN_GENERAL_REGISTERS {
            return Err(AsmTestError::config(format!(
                "register role '{role}' needs at least {MIN_GENERAL_REGISTERS} legal indices, found {}",
                legal.len()
            )));
        }
        Ok(())
    }
}

/// Per-role register rules, validated so that drawing never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    rules: BTreeMap<RegClass, RoleRule>,
    legal: BTreeMap<RegClass, Vec<u8>>,
}

impl RegisterFile {
    /// Builds from `[registers.<role>]` tables. Every role must be present.
    pub fn from_rules(mut named: BTreeMap<String, RoleRule>) -> Result<Self> {
        let mut rules = BTreeMap::new();
        for class in all::<RegClass>() {
            let rule = named.remove(class.name()).ok_or_else(|| {
                AsmTestError::config(format!(
                    "register file has no rule for role '{}'",
                    class.name()
                ))
            })?;
            rule.validate(class)?;
            rules.insert(class, rule);
        }
        if let Some(unknown) = named.keys().next() {
            return Err(AsmTestError::config(format!(
                "unknown register role '{unknown}'"
            )));
        }
        let legal = rules
            .iter()
            .map(|(class, rule)| (*class, rule.legal()))
            .collect();
        Ok(Self { rules, legal })
    }

    pub fn rule(&self, class: RegClass) -> &RoleRule {
        // from_rules guarantees every class is present
        &self.rules[&class]
    }

    pub fn legal(&self, class: RegClass) -> &[u8] {
        &self.legal[&class]
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        let p = PLATFORM_REGISTER;
        let rules = BTreeMap::from([
            (RegClass::General, RoleRule::range(0, 30).reserving(p, 17)),
            (RegClass::GeneralOrZr, RoleRule::range(0, 31).reserving(p, 16)),
            (RegClass::GeneralOrSp, RoleRule::range(0, 31).reserving(p, 15)),
            (RegClass::Float, RoleRule::range(0, 31)),
            (RegClass::LowFloat, RoleRule::range(0, 15)),
            (RegClass::SveVector, RoleRule::range(0, 31)),
            (RegClass::Predicate, RoleRule::range(0, 15)),
            (RegClass::GoverningPredicate, RoleRule::range(0, 7)),
        ]);
        let legal = rules
            .iter()
            .map(|(class, rule)| (*class, rule.legal()))
            .collect();
        Self { rules, legal }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    pub assembler: String,
    pub assembler_flags: Vec<String>,
    pub objcopy: String,
    /// Disassembler used to recover instruction boundaries.
    pub objdump: Option<String>,
    /// Fixed instruction width used instead of the disassembler.
    pub fixed_width: Option<usize>,
    /// Leave the scratch directory behind even on success.
    pub keep_temps: bool,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            assembler: DEFAULT_ASSEMBLER.to_string(),
            assembler_flags: DEFAULT_ASSEMBLER_FLAGS
                .iter()
                .map(|f| f.to_string())
                .collect(),
            objcopy: DEFAULT_OBJCOPY.to_string(),
            objdump: Some(DEFAULT_OBJDUMP.to_string()),
            fixed_width: None,
            keep_temps: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    seed: Option<u64>,
    coverage: Option<Coverage>,
    sweep_limit: Option<usize>,
    #[serde(default)]
    toolchain: ToolchainConfig,
    registers: Option<BTreeMap<String, RoleRule>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u64,
    pub coverage: Coverage,
    /// Operand slots with more outcomes than this stay random in
    /// exhaustive mode.
    pub sweep_limit: usize,
    pub toolchain: ToolchainConfig,
    pub registers: RegisterFile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            coverage: Coverage::Sampled,
            sweep_limit: DEFAULT_SWEEP_LIMIT,
            toolchain: ToolchainConfig::default(),
            registers: RegisterFile::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text)?;
        let registers = match raw.registers {
            Some(named) => RegisterFile::from_rules(named)?,
            None => RegisterFile::default(),
        };
        let sweep_limit = raw.sweep_limit.unwrap_or(DEFAULT_SWEEP_LIMIT);
        if sweep_limit == 0 {
            return Err(AsmTestError::config("sweep_limit must be positive"));
        }
        Ok(Self {
            seed: raw.seed.unwrap_or(0),
            coverage: raw.coverage.unwrap_or_default(),
            sweep_limit,
            toolchain: raw.toolchain,
            registers,
        })
    }

    /// Loads `path` if given, otherwise returns the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                let text = fs::read_to_string(path).map_err(|e| {
                    AsmTestError::file(format!("cannot read config {}: {}", path.display(), e))
                })?;
                Self::from_toml_str(&text)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REGISTERS: &str = r#"
[registers.general]
low = 0
high = 30
reserved = [18]
remap = 17

[registers.general_or_zr]
low = 0
high = 31
reserved = [18]

[registers.general_or_sp]
low = 0
high = 31
reserved = [18]

[registers.float]
low = 0
high = 31

[registers.low_float]
low = 0
high = 15

[registers.sve_vector]
low = 0
high = 31

[registers.predicate]
low = 0
high = 15

[registers.governing_predicate]
low = 0
high = 7
"#;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.toolchain.objdump.as_deref(), Some("objdump"));
    }

    #[test]
    fn default_sweep_covers_every_logical_table() {
        use crate::consts::logical_imm::{IMMEDIATES8, IMMEDIATES16, IMMEDIATES64};

        let limit = AppConfig::default().sweep_limit;
        for table in [IMMEDIATES8, IMMEDIATES16, IMMEDIATES32, IMMEDIATES64] {
            assert!(table.len() <= limit);
        }
    }

    #[test]
    fn scalar_fields_override_defaults() {
        let config = AppConfig::from_toml_str(
            "seed = 42\ncoverage = \"exhaustive\"\nsweep_limit = 8\n[toolchain]\nassembler = \"aarch64-linux-gnu-as\"\nkeep_temps = true\n",
        )
        .unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.coverage, Coverage::Exhaustive);
        assert_eq!(config.sweep_limit, 8);
        assert_eq!(config.toolchain.assembler, "aarch64-linux-gnu-as");
        assert!(config.toolchain.keep_temps);
        assert_eq!(config.toolchain.objcopy, "objcopy");
    }

    #[test]
    fn complete_register_file_is_accepted() {
        let config = AppConfig::from_toml_str(FULL_REGISTERS).unwrap();
        let general = config.registers.legal(RegClass::General);
        assert_eq!(general.len(), 30);
        assert!(!general.contains(&18));
        assert_eq!(config.registers.rule(RegClass::General).draw_span(), 31);
        assert_eq!(config.registers.rule(RegClass::GeneralOrZr).draw_span(), 31);
    }

    #[test]
    fn missing_role_is_fatal() {
        let text = FULL_REGISTERS.replace("[registers.predicate]", "[registers.unused]");
        let err = AppConfig::from_toml_str(&text).unwrap_err();
        assert!(err.to_string().contains("predicate"), "{err}");
    }

    #[test]
    fn undersized_general_role_is_fatal() {
        let text = FULL_REGISTERS.replacen("high = 30", "high = 2", 1);
        assert!(matches!(
            AppConfig::from_toml_str(&text),
            Err(AsmTestError::Config { .. })
        ));
    }

    #[test]
    fn remap_must_be_legal() {
        let text = FULL_REGISTERS.replacen("remap = 17", "remap = 18", 1);
        assert!(AppConfig::from_toml_str(&text).is_err());
    }

    #[test]
    fn default_register_file_excludes_platform_register() {
        let registers = RegisterFile::default();
        for class in all::<RegClass>() {
            assert!(!registers.legal(class).is_empty());
        }
        assert!(!registers.legal(RegClass::GeneralOrSp).contains(&18));
        assert_eq!(registers.legal(RegClass::GoverningPredicate).len(), 8);
    }
}
