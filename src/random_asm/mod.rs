pub mod asm_maker;
pub mod inst_generator;
