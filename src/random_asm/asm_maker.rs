use crate::consts::aarch64::{BACK_LABEL, FORTH_LABEL};
use crate::format::Shape;
use crate::operand::Notation;
use crate::random_asm::inst_generator::GeneratedGroup;

/// Width the call-notation column is padded to in the listing.
const CALL_COLUMN: usize = 50;

/// 列表中的一行：调用形式左对齐 50 列，后接汇编形式注释
fn listing_line(call: &str, asm: &str) -> String {
    format!("    {call:<width$} //\t{asm}", width = CALL_COLUMN)
}

/// 生成双表示列表：
///
/// ```text
///     Label back, forth;
///     __ bind(back);
///
/// // ArithOp
///     __ add(r1, r2, r3);                                //	add	x1, x2, x3
/// ...
///     __ bind(forth);
/// ```
pub fn format_listing(groups: &[GeneratedGroup]) -> String {
    let mut out = String::new();
    out.push_str(&format!("    Label {BACK_LABEL}, {FORTH_LABEL};\n"));
    out.push_str(&format!("    __ bind({BACK_LABEL});\n"));

    for group in groups {
        out.push_str(&format!("\n// {}\n", group.title));
        for inst in &group.instructions {
            out.push_str(&listing_line(
                &inst.render(Notation::Call),
                &inst.render(Notation::Asm),
            ));
            out.push('\n');
        }
    }

    out.push_str(&format!("\n    __ bind({FORTH_LABEL});\n"));
    out
}

/// 生成交给汇编器的源文件，指令顺序与列表完全一致
pub fn generate_assembly_source(groups: &[GeneratedGroup]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{BACK_LABEL}:\n"));
    for group in groups {
        out.push_str(&format!("// {}\n", group.title));
        for inst in &group.instructions {
            out.push('\t');
            out.push_str(&inst.render(Notation::Asm));
            out.push('\n');
        }
    }
    out.push_str(&format!("{FORTH_LABEL}:\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::line::Mnemonic;
    use crate::format::{Entry, Group};
    use crate::random_asm::inst_generator::{GenContext, generate_instructions};

    fn sample() -> Vec<GeneratedGroup> {
        let catalog = vec![
            Group::new("ThreeRegOp", vec![Entry::RegList(Mnemonic::new("udiv"), 3)]),
            Group::new("AbsOp", vec![Entry::Abs(Mnemonic::new("bl"))]),
        ];
        generate_instructions(&catalog, &mut GenContext::with_seed(0)).unwrap()
    }

    #[test]
    fn listing_pads_the_call_column() {
        let line = listing_line("__ add(r1, r2, r3);", "add\tx1, x2, x3");
        assert_eq!(
            line,
            "    __ add(r1, r2, r3);                                //\tadd\tx1, x2, x3"
        );
    }

    #[test]
    fn listing_is_wrapped_in_labels() {
        let listing = format_listing(&sample());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "    Label back, forth;");
        assert_eq!(lines[1], "    __ bind(back);");
        assert!(listing.contains("\n// ThreeRegOp\n"));
        assert!(listing.contains("//\tbl\tforth"));
        assert_eq!(*lines.last().unwrap(), "    __ bind(forth);");
    }

    #[test]
    fn assembly_source_matches_listing_order() {
        let groups = sample();
        let source = generate_assembly_source(&groups);
        let body: Vec<&str> = source
            .lines()
            .filter(|l| l.starts_with('\t'))
            .map(|l| &l[1..])
            .collect();
        let listed: Vec<String> = groups
            .iter()
            .flat_map(|g| g.instructions.iter())
            .map(|i| i.render(Notation::Asm))
            .collect();
        assert_eq!(body, listed);
        assert!(source.starts_with("back:\n"));
        assert!(source.ends_with("forth:\n"));
        assert_eq!(body.len(), 4);
    }
}
