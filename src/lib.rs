//! AArch64 assembler test-vector generator.
//!
//! Builds random but legal instances of every catalogued instruction shape,
//! renders each one both as an encoder call and as assembler syntax, and
//! uses the reference toolchain to extract the expected machine code.

pub mod catalog;
pub mod config;
pub mod consts;
pub mod emit;
pub mod error;
pub mod format;
pub mod operand;
pub mod pipeline;
pub mod random_asm;
pub mod toolchain;
pub mod utils;
