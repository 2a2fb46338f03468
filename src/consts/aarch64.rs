// AArch64 目标相关常量

/// SVE/SVE2 are enabled by armv9-a; SHA3 and bitperm need explicit features.
pub const DEFAULT_ASSEMBLER_FLAGS: &[&str] = &["-march=armv9-a+sha3+sve2-bitperm"];

pub const DEFAULT_ASSEMBLER: &str = "as";
pub const DEFAULT_OBJCOPY: &str = "objcopy";
pub const DEFAULT_OBJDUMP: &str = "objdump";

/// 每条 AArch64 指令的固定编码宽度（字节）
pub const INSTRUCTION_WIDTH: usize = 4;

/// 位置相关分支的向后标签，位于汇编源文件开头
pub const BACK_LABEL: &str = "back";
/// 位置相关分支的向前标签，位于汇编源文件末尾
pub const FORTH_LABEL: &str = "forth";

/// The reserved platform register (x18) on the targets the encoder supports.
pub const PLATFORM_REGISTER: u8 = 18;

/// Values representable by the 8-bit `fmov` floating-point immediate.
pub const FLOAT_IMMEDIATES: &[&str] = &[
    "2.0", "2.125", "4.0", "4.25", "8.0", "8.5", "16.0", "17.0", "0.125", "0.1328125", "0.25",
    "0.265625", "0.5", "0.53125", "1.0", "1.0625", "-2.0", "-2.125", "-4.0", "-4.25", "-8.0",
    "-8.5", "-16.0", "-17.0", "-0.125", "-0.1328125", "-0.25", "-0.265625", "-0.5", "-0.53125",
    "-1.0", "-1.0625",
];
