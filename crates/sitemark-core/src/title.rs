//! Page title extraction

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{MarkdownError, Result};

/// A line holding a level-1 heading: optional indentation, one `#`,
/// whitespace, then text. Indentation is allowed because block segmentation
/// trims it and still produces an `h1`.
static H1_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#[ \t]+(\S.*)$").expect("valid title pattern"));

/// Return the trimmed text of the first level-1 heading line anywhere in the
/// document. `##` and deeper headings are not titles.
pub fn extract_title(markdown: &str) -> Result<String> {
    H1_LINE
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|title| title.as_str().trim().to_string())
        .ok_or(MarkdownError::NoTitleFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_title() {
        assert_eq!(extract_title("# Title").unwrap(), "Title");
        assert_eq!(extract_title("# Heading ").unwrap(), "Heading");
    }

    #[test]
    fn test_title_not_in_first_block() {
        assert_eq!(
            extract_title("This is a paragraph\n# Heading").unwrap(),
            "Heading"
        );
        assert_eq!(
            extract_title("Intro\n\n## Sub\n\n# Real Title\r\n\n# Second").unwrap(),
            "Real Title"
        );
    }

    #[test]
    fn test_no_title() {
        assert_eq!(extract_title(""), Err(MarkdownError::NoTitleFound));
        assert_eq!(
            extract_title("This is a paragraph"),
            Err(MarkdownError::NoTitleFound)
        );
    }

    #[test]
    fn test_deeper_headings_are_not_titles() {
        assert_eq!(
            extract_title("## Subtitle\n### Section"),
            Err(MarkdownError::NoTitleFound)
        );
    }

    #[test]
    fn test_indented_title() {
        assert_eq!(extract_title("  # Title").unwrap(), "Title");
        assert_eq!(extract_title("intro\n\t# Tabbed ").unwrap(), "Tabbed");
    }

    #[test]
    fn test_heading_needs_text() {
        assert_eq!(extract_title("#   \n#NoSpace"), Err(MarkdownError::NoTitleFound));
    }
}
