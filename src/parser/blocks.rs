use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^!\[[^\]]*\]\(([^)]+)\)$").unwrap());
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").unwrap());
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s*[.、)]\s*(.*)$").unwrap());

#[derive(Debug, Clone)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    /// A bulleted or numbered list line. `text` has the marker stripped;
    /// `raw` is the trimmed source line (notes are carried over verbatim).
    ListItem {
        text: String,
        raw: String,
    },
    Image {
        path: String,
    },
    Text(String),
    Empty,
}

pub fn classify_lines(markdown: &str) -> Vec<Block> {
    if markdown.trim().is_empty() {
        return vec![Block::Empty];
    }

    let mut blocks = Vec::new();
    for raw_line in markdown.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            blocks.push(Block::Empty);
            continue;
        }

        // ── Heading: ## text ──
        if let Some(caps) = HEADING_RE.captures(line) {
            blocks.push(Block::Heading {
                level: caps[1].len() as u8,
                text: caps[2].trim().to_string(),
            });
            continue;
        }

        // ── Image line: ![alt](path) ──
        if let Some(caps) = IMAGE_RE.captures(line) {
            blocks.push(Block::Image {
                path: caps[1].to_string(),
            });
            continue;
        }

        // ── List item: "- text", "* text", "1. text" ──
        if let Some(caps) = BULLET_RE.captures(line).or_else(|| NUMBERED_RE.captures(line)) {
            blocks.push(Block::ListItem {
                text: caps[1].trim().to_string(),
                raw: line.to_string(),
            });
            continue;
        }

        blocks.push(Block::Text(line.to_string()));
    }

    blocks
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading() {
        let blocks = classify_lines("## 必备原料和工具");
        assert!(matches!(&blocks[0], Block::Heading { level: 2, text } if text == "必备原料和工具"));
    }

    #[test]
    fn title_heading() {
        let blocks = classify_lines("# 红烧肉的做法");
        assert!(matches!(&blocks[0], Block::Heading { level: 1, text } if text == "红烧肉的做法"));
    }

    #[test]
    fn bullet_item() {
        let blocks = classify_lines("- 肉蟹 300 g");
        assert!(matches!(&blocks[0], Block::ListItem { text, .. } if text == "肉蟹 300 g"));
    }

    #[test]
    fn star_item_keeps_raw() {
        let blocks = classify_lines("* 盐 适量");
        assert!(
            matches!(&blocks[0], Block::ListItem { text, raw } if text == "盐 适量" && raw == "* 盐 适量")
        );
    }

    #[test]
    fn numbered_item() {
        let blocks = classify_lines("1. 锅中倒油，烧热。");
        assert!(matches!(&blocks[0], Block::ListItem { text, .. } if text == "锅中倒油，烧热。"));
    }

    #[test]
    fn image_line() {
        let blocks = classify_lines("![成品](./红烧肉.jpg)");
        assert!(matches!(&blocks[0], Block::Image { path } if path == "./红烧肉.jpg"));
    }

    #[test]
    fn plain_text() {
        let blocks = classify_lines("预估烹饪难度：★★★");
        assert!(matches!(&blocks[0], Block::Text(t) if t == "预估烹饪难度：★★★"));
    }

    #[test]
    fn empty_string() {
        let blocks = classify_lines("");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], Block::Empty));
    }

    #[test]
    fn empty_line_between_paragraphs() {
        let blocks = classify_lines("text\n\nmore");
        assert!(matches!(&blocks[1], Block::Empty));
    }
}
