pub mod aarch64;
pub mod logical_imm;
