use std::sync::LazyLock;

use regex::Regex;

use crate::parser::blocks::Block;
use crate::parser::sections::{find_section, Section, SectionKind};

static STAR_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"★+").unwrap());

const DIFFICULTY_PREFIX: &str = "预估烹饪难度：";

/// First level-1 heading in the file.
pub fn title(sections: &[Section]) -> Option<String> {
    sections
        .iter()
        .flat_map(|s| &s.blocks)
        .find_map(|b| match b {
            Block::Heading { level: 1, text } => Some(text.trim().to_string()),
            _ => None,
        })
}

/// Star rating: the longest ★ run anywhere in the file, clamped to 1–5.
/// None when the file carries no stars at all.
pub fn star_rating(content: &str) -> Option<u8> {
    STAR_RUN_RE
        .find_iter(content)
        .map(|m| m.as_str().chars().count())
        .max()
        .map(|n| n.clamp(1, 5) as u8)
}

/// Free text of the header section (between the title and the first
/// level-2 heading), with image lines dropped. When the recipe carries a
/// star rating, the 预估烹饪难度 line is appended unless the text already
/// ends with it.
pub fn description(sections: &[Section], rating: Option<u8>) -> String {
    let lines: Vec<String> = find_section(sections, SectionKind::Header)
        .into_iter()
        .flat_map(|s| &s.blocks)
        .filter_map(|b| match b {
            Block::Heading { level: 1, .. } | Block::Image { .. } => None,
            Block::Heading { level, text } => Some(format!("{} {}", "#".repeat(*level as usize), text)),
            Block::ListItem { raw, .. } => Some(raw.clone()),
            Block::Text(t) => Some(t.clone()),
            Block::Empty => Some(String::new()),
        })
        .collect();

    let mut desc = lines.join("\n").trim().to_string();

    if let Some(rating) = rating {
        let annotation = format!("{}{}", DIFFICULTY_PREFIX, "★".repeat(rating as usize));
        if !desc.ends_with(&annotation) {
            if !desc.is_empty() {
                desc.push_str("\n\n");
            }
            desc.push_str(&annotation);
        }
    }

    desc
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::blocks::classify_lines;
    use crate::parser::sections::cluster_sections;

    fn parse(md: &str) -> Vec<Section> {
        cluster_sections(&classify_lines(md))
    }

    #[test]
    fn title_from_heading() {
        let sections = parse("# 红烧肉的做法\n\n正文\n");
        assert_eq!(title(&sections).as_deref(), Some("红烧肉的做法"));
    }

    #[test]
    fn no_title() {
        let sections = parse("只有正文，没有标题\n");
        assert!(title(&sections).is_none());
    }

    #[test]
    fn four_stars() {
        assert_eq!(star_rating("预估烹饪难度：★★★★"), Some(4));
    }

    #[test]
    fn stars_without_prefix_still_count() {
        assert_eq!(star_rating("难度 ★★ 左右"), Some(2));
    }

    #[test]
    fn star_run_clamped_to_five() {
        assert_eq!(star_rating("★★★★★★★"), Some(5));
    }

    #[test]
    fn no_stars() {
        assert_eq!(star_rating("没有难度标记"), None);
    }

    #[test]
    fn description_appends_difficulty_line() {
        let sections = parse("# 菜\n\n一道家常菜。\n\n## 操作\n");
        let desc = description(&sections, Some(3));
        assert_eq!(desc, "一道家常菜。\n\n预估烹饪难度：★★★");
    }

    #[test]
    fn description_does_not_duplicate_difficulty_line() {
        let sections = parse("# 菜\n\n一道家常菜。\n\n预估烹饪难度：★★★\n\n## 操作\n");
        let desc = description(&sections, Some(3));
        assert_eq!(desc, "一道家常菜。\n\n预估烹饪难度：★★★");
    }

    #[test]
    fn description_skips_image_lines() {
        let sections = parse("# 菜\n\n![成品](./菜.jpg)\n\n家常做法。\n\n## 操作\n");
        let desc = description(&sections, None);
        assert_eq!(desc, "家常做法。");
    }
}
