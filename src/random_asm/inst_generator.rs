use enum_iterator::{Sequence, all};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

use crate::config::{AppConfig, Coverage, RegisterFile};
use crate::error::{AsmTestError, Result};
use crate::format::{Group, Instruction};
use crate::operand::{RegClass, Register};

/// 重新抽取的上限，超过后退化为按顺序挑选第一个未占用的寄存器
const MAX_REDRAWS: usize = 64;

/// 生成上下文：随机源、寄存器规则和覆盖模式
///
/// Every operand draw goes through [`GenContext::pick`]. In sampled mode it
/// is a uniform random index. In exhaustive mode a draw with at most
/// `sweep_limit` outcomes is walked instead. Draws are grouped by their
/// outcome count `n` and each group keeps its own counter within the current
/// entry, so a slot that is only reached under some other choice (the
/// 16-bit table behind an `.h` element width, say) still steps through its
/// whole range on the instances that reach it.
#[derive(Debug, Clone)]
pub struct GenContext {
    rng: StdRng,
    registers: RegisterFile,
    coverage: Coverage,
    sweep_limit: usize,
    sweeps: BTreeMap<usize, usize>,
}

impl GenContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            registers: config.registers.clone(),
            coverage: config.coverage,
            sweep_limit: config.sweep_limit,
            sweeps: BTreeMap::new(),
        }
    }

    /// Default register file, sampled coverage.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&AppConfig {
            seed,
            ..AppConfig::default()
        })
    }

    pub fn with_coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    /// Starts a new catalog entry.
    pub fn begin_entry(&mut self) {
        self.sweeps.clear();
    }

    /// True once every swept slot of the current entry has produced each of
    /// its values at least once.
    pub fn swept_all(&self) -> bool {
        self.sweeps.iter().all(|(&n, &drawn)| drawn >= n)
    }

    /// Upper bound on instances per entry in exhaustive mode.
    pub fn max_sweep_steps(&self) -> usize {
        self.sweep_limit.saturating_mul(self.sweep_limit).max(1)
    }

    /// An index in `0..n`; `0` when `n` is zero.
    pub fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        if self.coverage == Coverage::Exhaustive && n <= self.sweep_limit {
            let drawn = self.sweeps.entry(n).or_insert(0);
            let index = *drawn % n;
            *drawn += 1;
            index
        } else {
            self.rng.random_range(0..n)
        }
    }

    /// A value in `low..=high`.
    pub fn range(&mut self, low: i64, high: i64) -> i64 {
        let span = (high - low + 1).max(0) as usize;
        low + self.pick(span) as i64
    }

    /// 从非空切片中选取一个元素
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        let index = self.pick(items.len());
        items[index]
    }

    /// A variant of a closed enum.
    pub fn variant<T: Sequence + Copy>(&mut self) -> T {
        let values: Vec<T> = all::<T>().collect();
        self.choose(&values)
    }

    /// 按角色规则抽取寄存器。带 remap 的角色在整个区间内抽取，命中保留编号时替换为 remap 编号；
    /// 其余角色只在合法编号中抽取。
    pub fn register(&mut self, class: RegClass) -> Register {
        let rule = self.registers.rule(class);
        if let Some(remap) = rule.remap {
            let low = rule.low;
            let span = rule.draw_span();
            let reserved = rule.reserved.clone();
            let number = low + self.pick(span) as u8;
            let number = if reserved.contains(&number) {
                remap
            } else {
                number
            };
            Register::new(class, number)
        } else {
            let count = self.registers.legal(class).len();
            let index = self.pick(count);
            Register::new(class, self.registers.legal(class)[index])
        }
    }

    /// A register of `class` whose index is not in `taken`. Errors when the
    /// role has no legal index left.
    pub fn distinct_register(&mut self, class: RegClass, taken: &[u8]) -> Result<Register> {
        for _ in 0..MAX_REDRAWS {
            let reg = self.register(class);
            if !taken.contains(&reg.number()) {
                return Ok(reg);
            }
        }
        self.registers
            .legal(class)
            .iter()
            .copied()
            .find(|n| !taken.contains(n))
            .map(|number| Register::new(class, number))
            .ok_or_else(|| {
                AsmTestError::instruction_generation(format!(
                    "no {} register left besides {:?}",
                    class.name(),
                    taken
                ))
            })
    }
}

/// 一个目录分组生成出的全部指令实例
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedGroup {
    pub title: String,
    pub instructions: Vec<Instruction>,
}

/// 按目录顺序生成指令。采样模式下每个条目一个实例；穷举模式下重复到所有可遍历槽位都走完为止。
/// 多形式（分支）指令会展开成每个跳转目标一个实例。
pub fn generate_instructions(catalog: &[Group], ctx: &mut GenContext) -> Result<Vec<GeneratedGroup>> {
    let mut generated = Vec::with_capacity(catalog.len());

    for group in catalog {
        let mut instructions = Vec::new();
        for entry in &group.entries {
            ctx.begin_entry();
            instructions.extend(entry.generate(ctx)?.expand());
            if ctx.coverage() == Coverage::Exhaustive {
                let mut steps = 1;
                while !ctx.swept_all() && steps < ctx.max_sweep_steps() {
                    instructions.extend(entry.generate(ctx)?.expand());
                    steps += 1;
                }
            }
        }
        debug!(
            "Generated {} instructions for {}",
            instructions.len(),
            group.title
        );
        generated.push(GeneratedGroup {
            title: group.title.clone(),
            instructions,
        });
    }

    Ok(generated)
}

/// 按输出顺序展开所有分组中的指令
pub fn flatten(groups: &[GeneratedGroup]) -> Vec<&Instruction> {
    groups.iter().flat_map(|g| g.instructions.iter()).collect()
}
