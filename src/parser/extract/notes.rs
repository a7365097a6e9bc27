use crate::parser::blocks::Block;
use crate::parser::sections::{Section, SectionKind};

/// The contribution boilerplate that closes every upstream recipe file.
const CONTRIBUTION_PREFIX: &str = "如果您遵循";

/// Additional notes: list lines of the 附加内容 section (kept verbatim,
/// marker included) plus the closing contribution boilerplate, which in
/// some files sits after the last heading without one of its own.
pub fn extract(sections: &[Section]) -> Vec<String> {
    let mut notes = Vec::new();

    for section in sections {
        for block in &section.blocks {
            match block {
                Block::ListItem { raw, .. } if section.kind == SectionKind::Notes => {
                    notes.push(raw.clone());
                }
                Block::Text(t) if t.starts_with(CONTRIBUTION_PREFIX) => {
                    notes.push(t.clone());
                }
                _ => {}
            }
        }
    }

    notes
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::blocks::classify_lines;
    use crate::parser::sections::cluster_sections;

    fn from_md(md: &str) -> Vec<String> {
        extract(&cluster_sections(&classify_lines(md)))
    }

    #[test]
    fn list_lines_kept_verbatim() {
        let md = "# 菜\n\n## 附加内容\n\n- 参考视频：https://example.com/v\n- 隔夜更入味\n";
        let notes = from_md(md);
        assert_eq!(
            notes,
            vec!["- 参考视频：https://example.com/v", "- 隔夜更入味"]
        );
    }

    #[test]
    fn boilerplate_without_section_heading() {
        let md = "# 菜\n\n## 操作\n\n- 开火\n\n如果您遵循本指南的制作流程而发现有问题或可以改进的流程，请提出 Issue 或 Pull request。\n";
        let notes = from_md(md);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].starts_with("如果您遵循"));
    }

    #[test]
    fn steps_are_not_notes() {
        let notes = from_md("# 菜\n\n## 操作\n\n- 切块\n- 下锅\n");
        assert!(notes.is_empty());
    }
}
