use crate::model::Step;
use crate::parser::blocks::Block;
use crate::parser::sections::{Section, SectionKind};

/// Cooking steps: every list line of the 操作 (or 计算和操作) section, in
/// source order, renumbered 1..N.
pub fn extract(sections: &[Section]) -> Vec<Step> {
    sections
        .iter()
        .filter(|s| s.kind == SectionKind::Steps)
        .flat_map(|s| &s.blocks)
        .filter_map(|b| match b {
            Block::ListItem { text, .. } if !text.is_empty() => Some(text.clone()),
            _ => None,
        })
        .enumerate()
        .map(|(i, description)| Step {
            step: i as u32 + 1,
            description,
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::blocks::classify_lines;
    use crate::parser::sections::cluster_sections;

    fn from_md(md: &str) -> Vec<Step> {
        extract(&cluster_sections(&classify_lines(md)))
    }

    #[test]
    fn two_steps_numbered_in_order() {
        let steps = from_md("# 菜\n\n## 操作\n\n- 切块\n- 下锅\n");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].step, 1);
        assert_eq!(steps[0].description, "切块");
        assert_eq!(steps[1].step, 2);
        assert_eq!(steps[1].description, "下锅");
    }

    #[test]
    fn source_numbering_is_stripped() {
        let steps = from_md("# 菜\n\n## 操作\n\n1. 热锅\n2. 倒油\n");
        assert_eq!(steps[0].description, "热锅");
        assert_eq!(steps[1].description, "倒油");
    }

    #[test]
    fn prose_between_steps_is_ignored() {
        let steps = from_md("# 菜\n\n## 操作\n\n先准备好所有材料。\n\n- 开火\n");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].step, 1);
    }

    #[test]
    fn combined_heading_counts_as_steps() {
        let steps = from_md("# 菜\n\n## 计算和操作\n\n- 一步到位\n");
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn no_steps_section() {
        assert!(from_md("# 菜\n\n## 计算\n\n- 盐 适量\n").is_empty());
    }
}
