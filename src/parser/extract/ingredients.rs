use std::sync::LazyLock;

use regex::Regex;

use crate::model::Ingredient;
use crate::parser::blocks::Block;
use crate::parser::sections::{find_section, Section, SectionKind};

// Number (decimal or simple fraction) followed by one of the common units.
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d+(?:\.\d+)?(?:/\d+)?)\s*(g|kg|ml|l|斤|个|只|片|根|瓣|颗|块|勺|匙|小勺|大勺|克|毫升|升|两|钱)",
    )
    .unwrap()
});
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\s*[-~]\s*\d+").unwrap());
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"（[^）]*）|\([^)]*\)").unwrap());

/// Amount words that carry no number: the quantity stays null and the
/// token is preserved as text_quantity.
const VAGUE_AMOUNTS: &[&str] = &["适量", "少许", "若干", "按需"];

const SKIP_PREFIXES: &[&str] = &["注：", "注意", "WARNING"];

/// Ingredient list of a recipe: the 计算 section when present (it carries
/// the measured amounts), otherwise 必备原料和工具.
pub fn extract(sections: &[Section]) -> Vec<Ingredient> {
    let section = find_section(sections, SectionKind::Measures)
        .or_else(|| find_section(sections, SectionKind::Tools));
    let Some(section) = section else {
        return Vec::new();
    };

    section
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::ListItem { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .flat_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Vec<Ingredient> {
    if SKIP_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return Vec::new();
    }

    let (cleaned, notes) = strip_parenthetical(line);

    // "葱、姜、蒜" enumerates several ingredients on one line; a numeric
    // range ("2-3 个") means the separator belongs to one ingredient.
    if (cleaned.contains('、') || cleaned.contains('，')) && !RANGE_RE.is_match(&cleaned) {
        return cleaned
            .split(['、', '，'])
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .filter_map(|item| {
                parse_item(item, None).map(|mut ing| {
                    if ing.quantity.is_none() && ing.notes.is_none() {
                        ing.notes = Some("量未指定".to_string());
                    }
                    ing
                })
            })
            .collect();
    }

    parse_item(cleaned.trim(), notes).into_iter().collect()
}

fn parse_item(item: &str, notes: Option<String>) -> Option<Ingredient> {
    if item.is_empty() {
        return None;
    }

    if let Some(caps) = QUANTITY_RE.captures(item) {
        let m = caps.get(0).unwrap();
        let number = &caps[1];
        let unit = &caps[2];
        // Name sits on whichever side of the amount has text.
        let before = item[..m.start()].trim();
        let after = item[m.end()..].trim();
        let name = clean_name(if before.is_empty() { after } else { before });
        if name.is_empty() {
            return None;
        }
        return Some(Ingredient {
            name,
            quantity: parse_number(number),
            unit: Some(unit.to_string()),
            text_quantity: format!("{} {}", number, unit),
            notes,
        });
    }

    for token in VAGUE_AMOUNTS {
        if let Some(rest) = item.strip_suffix(token) {
            let name = clean_name(rest);
            if name.is_empty() {
                return None;
            }
            return Some(Ingredient {
                name,
                quantity: None,
                unit: None,
                text_quantity: token.to_string(),
                notes,
            });
        }
    }

    let name = clean_name(item);
    if name.is_empty() {
        return None;
    }
    Some(Ingredient {
        name,
        quantity: None,
        unit: None,
        text_quantity: item.to_string(),
        notes,
    })
}

/// Remove every parenthetical from the line; the first one becomes the
/// ingredient notes.
fn strip_parenthetical(line: &str) -> (String, Option<String>) {
    let notes = PAREN_RE.find(line).map(|m| {
        m.as_str()
            .trim_matches(['（', '）', '(', ')'])
            .trim()
            .to_string()
    });
    let cleaned = PAREN_RE.replace_all(line, "").trim().to_string();
    (cleaned, notes.filter(|n| !n.is_empty()))
}

fn clean_name(s: &str) -> String {
    s.trim().trim_matches(['：', ':']).trim().to_string()
}

fn parse_number(s: &str) -> Option<f64> {
    if let Some((num, den)) = s.split_once('/') {
        let n: f64 = num.trim().parse().ok()?;
        let d: f64 = den.trim().parse().ok()?;
        if d == 0.0 {
            return None;
        }
        return Some(n / d);
    }
    s.parse().ok()
}

// ── Tests ──
