use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::Instant;

use log::{debug, error, info, warn};

use super::listing::{parse_lengths, split_fixed_width};
use super::{Assembled, Oracle};
use crate::config::ToolchainConfig;
use crate::error::{AsmTestError, Result};
use crate::utils::create_scratch_dir;

const SOURCE_FILE: &str = "aarch64ops.s";
const OBJECT_FILE: &str = "aarch64ops.o";
const BINARY_FILE: &str = "aarch64ops.bin";

/// GNU binutils 实现：`as` → `objcopy -O binary -j .text` → `objdump -d`
#[derive(Debug, Clone)]
pub struct GnuToolchain {
    config: ToolchainConfig,
    work_root: PathBuf,
}

impl GnuToolchain {
    pub fn new(config: ToolchainConfig, work_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            work_root: work_root.into(),
        }
    }

    fn assemble_in(&self, dir: &Path, source: &str) -> Result<Assembled> {
        let source_file = dir.join(SOURCE_FILE);
        let object_file = dir.join(OBJECT_FILE);
        let binary_file = dir.join(BINARY_FILE);
        fs::write(&source_file, source)?;
        debug!("Wrote assembly source {}", source_file.display());

        let mut args: Vec<OsString> = self
            .config
            .assembler_flags
            .iter()
            .map(OsString::from)
            .collect();
        args.push(source_file.into_os_string());
        args.push("-o".into());
        args.push(object_file.clone().into_os_string());
        run_tool("assembly", &self.config.assembler, &args)?;
        info!("✅ Assembly completed");

        let args: Vec<OsString> = vec![
            "-O".into(),
            "binary".into(),
            "-j".into(),
            ".text".into(),
            object_file.clone().into_os_string(),
            binary_file.clone().into_os_string(),
        ];
        run_tool("objcopy", &self.config.objcopy, &args)?;
        let bytes = fs::read(&binary_file)?;
        info!("✅ Extracted {} bytes of .text", bytes.len());

        let lengths = match (&self.config.objdump, self.config.fixed_width) {
            (Some(objdump), _) => {
                let args: Vec<OsString> =
                    vec!["-d".into(), "-z".into(), object_file.into_os_string()];
                let output = run_tool("disassembly", objdump, &args)?;
                let listing = String::from_utf8_lossy(&output.stdout);
                parse_lengths(&listing)?
            }
            (None, Some(width)) => split_fixed_width(bytes.len(), width)?,
            (None, None) => {
                return Err(AsmTestError::config(
                    "toolchain needs either an objdump or a fixed_width",
                ));
            }
        };

        Assembled::new(bytes, lengths)
    }
}

impl Oracle for GnuToolchain {
    fn assemble(&mut self, source: &str) -> Result<Assembled> {
        let total_start = Instant::now();
        let dir = create_scratch_dir(&self.work_root)?;

        let assembled = match self.assemble_in(&dir, source) {
            Ok(assembled) => assembled,
            Err(e) => {
                warn!("Toolchain files left in {} for inspection", dir.display());
                return Err(e);
            }
        };

        if self.config.keep_temps {
            info!("Keeping toolchain files in {}", dir.display());
        } else {
            fs::remove_dir_all(&dir)?;
            debug!("Removed scratch directory {}", dir.display());
        }

        info!(
            "✅ Toolchain run completed: {} instructions in {:.2}s",
            assembled.lengths.len(),
            total_start.elapsed().as_secs_f64()
        );
        Ok(assembled)
    }
}

fn run_tool(stage: &str, program: &str, args: &[OsString]) -> Result<Output> {
    debug!("Running {} {:?}", program, args);
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| AsmTestError::toolchain(stage, format!("cannot run {program}: {e}")))?;

    if !output.status.success() {
        error!("❌ {} failed", stage);
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().take(5) {
            error!("{} error: {}", stage, line);
        }
        return Err(AsmTestError::toolchain(stage, stderr));
    }
    Ok(output)
}
