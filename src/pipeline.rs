use log::info;
use std::time::Instant;

use crate::catalog::aarch64_catalog;
use crate::config::AppConfig;
use crate::emit::VectorTable;
use crate::error::Result;
use crate::random_asm::asm_maker::{format_listing, generate_assembly_source};
use crate::random_asm::inst_generator::{
    GenContext, GeneratedGroup, flatten, generate_instructions,
};
use crate::toolchain::Oracle;

/// 一次生成的全部产物：分组实例、双表示列表和汇编源文件
#[derive(Debug, Clone)]
pub struct Generated {
    pub groups: Vec<GeneratedGroup>,
    pub listing: String,
    pub source: String,
}

impl Generated {
    pub fn instruction_count(&self) -> usize {
        self.groups.iter().map(|g| g.instructions.len()).sum()
    }
}

/// Generates and renders the whole catalog. No toolchain involved.
pub fn generate(config: &AppConfig) -> Result<Generated> {
    let start = Instant::now();
    let mut ctx = GenContext::new(config);
    let groups = generate_instructions(&aarch64_catalog(), &mut ctx)?;
    let listing = format_listing(&groups);
    let source = generate_assembly_source(&groups);

    let generated = Generated {
        groups,
        listing,
        source,
    };
    info!(
        "✅ Generated {} instructions (seed {}, {:?} coverage) in {:.2}s",
        generated.instruction_count(),
        config.seed,
        config.coverage,
        start.elapsed().as_secs_f64()
    );
    Ok(generated)
}

/// 交给工具链汇编，并把结果与实例逐条对应
pub fn extract_vectors(generated: &Generated, oracle: &mut dyn Oracle) -> Result<VectorTable> {
    let assembled = oracle.assemble(&generated.source)?;
    let table = VectorTable::build(&flatten(&generated.groups), &assembled)?;
    info!("✅ Extracted {} test vectors", table.len());
    Ok(table)
}
