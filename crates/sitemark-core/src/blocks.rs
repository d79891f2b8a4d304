//! Block segmentation and classification

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Block, BlockKind};

/// One or more blank lines. Lines holding only spaces or tabs count as blank.
static BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("valid blank line pattern"));

const CODE_FENCE: &str = "```";

/// Split a document into trimmed, non-empty blocks and classify each one.
pub fn segment(document: &str) -> Vec<Block> {
    BLANK_LINES
        .split(document)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let kind = classify(piece);
            tracing::debug!(?kind, len = piece.len(), "classified block");
            Block::new(piece, kind)
        })
        .collect()
}

/// Classify a block by its leading characters. First match wins.
///
/// Only the start of the block is inspected, so a block whose first line is
/// `1. item` is an ordered list even if later lines are numbered oddly.
pub fn classify(block: &str) -> BlockKind {
    if block.starts_with('#') {
        BlockKind::Heading(heading_level(block))
    } else if block.starts_with(CODE_FENCE) {
        BlockKind::Code
    } else if block.starts_with('>') {
        BlockKind::Quote
    } else if block.starts_with('-') {
        BlockKind::UnorderedList
    } else if block.starts_with("1.") {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

fn heading_level(block: &str) -> usize {
    block.chars().take_while(|&c| c == '#').count()
}
