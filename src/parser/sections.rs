use super::blocks::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Everything before the first level-2 heading: title, hero image,
    /// description prose, difficulty line.
    Header,
    /// 必备原料和工具 — ingredient and tool names, usually without amounts.
    Tools,
    /// 计算 — measured ingredient list; preferred over Tools when present.
    Measures,
    /// 操作 or 计算和操作 — the cooking steps.
    Steps,
    /// 附加内容 — trailing references and the contribution boilerplate.
    Notes,
    Other,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

/// Cluster a flat Vec<Block> into sections. Each level-2 heading opens a
/// new section whose kind is looked up from the heading text.
pub fn cluster_sections(blocks: &[Block]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current_blocks: Vec<Block> = Vec::new();
    let mut current_kind = SectionKind::Header;

    for block in blocks {
        if let Block::Heading { level: 2, text } = block {
            if !current_blocks.is_empty() {
                sections.push(Section {
                    kind: current_kind,
                    blocks: std::mem::take(&mut current_blocks),
                });
            }
            current_kind = kind_for_heading(text);
        }
        current_blocks.push(block.clone());
    }

    if !current_blocks.is_empty() {
        sections.push(Section {
            kind: current_kind,
            blocks: current_blocks,
        });
    }

    sections
}

fn kind_for_heading(text: &str) -> SectionKind {
    match text.trim() {
        "必备原料和工具" => SectionKind::Tools,
        "计算" => SectionKind::Measures,
        "操作" | "计算和操作" => SectionKind::Steps,
        "附加内容" => SectionKind::Notes,
        _ => SectionKind::Other,
    }
}

pub fn find_section<'a>(sections: &'a [Section], kind: SectionKind) -> Option<&'a Section> {
    sections.iter().find(|s| s.kind == kind)
}

// ── Tests ──
