use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::PathBuf;

use aarch64_asmtest::config::{AppConfig, Coverage};
use aarch64_asmtest::emit::OutputFormat;
use aarch64_asmtest::error::{AsmTestError, Result};
use aarch64_asmtest::pipeline::{extract_vectors, generate};
use aarch64_asmtest::toolchain::{GnuToolchain, Oracle};
use aarch64_asmtest::utils::{resolve_work_root, write_output};

#[derive(Parser)]
#[command(name = "aarch64-asmtest")]
#[command(about = "Generate AArch64 assembler test vectors checked against GNU binutils")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate instances, assemble them and emit the vector tables
    Generate {
        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Operand coverage mode
        #[arg(long, value_enum)]
        coverage: Option<Coverage>,
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format for the vector tables
        #[arg(short = 'f', long, value_enum, default_value = "cpp")]
        format: OutputFormat,
        /// Write the listing and tables here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Parent directory of the per-run scratch directory
        #[arg(long)]
        work_dir: Option<PathBuf>,
        /// Keep the toolchain's intermediate files
        #[arg(long)]
        keep_temps: bool,
    },
    /// Print the dual-notation listing without running the toolchain
    Listing {
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        coverage: Option<Coverage>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Also write the assembly source to this file
        #[arg(short, long)]
        assembly_file: Option<PathBuf>,
    },
    /// Assemble an existing source file and print each instruction's bytes
    Assemble {
        /// Path to assembly file (.s)
        #[arg(short, long)]
        assembly_file: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        work_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_environment();

    match cli.command {
        Commands::Generate {
            seed,
            coverage,
            config,
            format,
            output,
            work_dir,
            keep_temps,
        } => {
            let mut config = load_config(config, seed, coverage)?;
            config.toolchain.keep_temps |= keep_temps;
            info!("🎲 Generating test vectors with seed {}", config.seed);

            let generated = generate(&config)?;
            let mut oracle = GnuToolchain::new(config.toolchain.clone(), resolve_work_root(work_dir));
            let table = extract_vectors(&generated, &mut oracle)?;

            let tables = table.render(format)?;
            let body = match format {
                OutputFormat::Cpp => format!("{}\n{}", generated.listing, tables),
                OutputFormat::Json => tables,
            };
            write_output(output.as_deref(), &body)?;
            info!("✅ Done: {} vectors", table.len());
        }
        Commands::Listing {
            seed,
            coverage,
            config,
            assembly_file,
        } => {
            let config = load_config(config, seed, coverage)?;
            let generated = generate(&config)?;
            if let Some(path) = assembly_file {
                fs::write(&path, &generated.source)?;
                info!("📁 Assembly source written to {}", path.display());
            }
            write_output(None, &generated.listing)?;
        }
        Commands::Assemble {
            assembly_file,
            config,
            work_dir,
        } => {
            info!("📁 Assembling {:?}", assembly_file);
            if !assembly_file.exists() {
                return Err(AsmTestError::file(format!(
                    "Assembly file does not exist: {:?}",
                    assembly_file
                )));
            }
            let config = AppConfig::load(config.as_deref())?;
            let source = fs::read_to_string(&assembly_file)?;
            let mut oracle = GnuToolchain::new(config.toolchain, resolve_work_root(work_dir));
            let assembled = oracle.assemble(&source)?;

            let mut offset = 0;
            for bytes in assembled.instructions() {
                let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
                println!("{offset:6x}:  {}", hex.join(" "));
                offset += bytes.len();
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>, seed: Option<u64>, coverage: Option<Coverage>) -> Result<AppConfig> {
    let mut config = AppConfig::load(path.as_deref())?;
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(coverage) = coverage {
        config.coverage = coverage;
    }
    Ok(config)
}

fn setup_environment() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();
}
