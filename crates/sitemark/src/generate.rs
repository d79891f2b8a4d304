//! Markdown page generation

use std::fs;
use std::path::{Path, PathBuf};

use sitemark_core::{extract_title, markdown_to_html};

use crate::template::{rewrite_base_path, Template};
use crate::{io_error, Result, SiteError};

/// Source file name converted in each content directory
pub const INDEX_MARKDOWN: &str = "index.md";

/// Output file name written for each converted page
pub const INDEX_HTML: &str = "index.html";

/// Convert one markdown document into a finished HTML page.
pub fn render_markdown_page(
    markdown: &str,
    template: &Template,
    base_path: &str,
) -> sitemark_core::Result<String> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    let page = template.render(&title, &content);
    Ok(rewrite_base_path(&page, base_path))
}

/// Convert the markdown file at `from` and write the page to `dest`,
/// creating parent directories as needed.
pub fn generate_page(from: &Path, template: &Template, dest: &Path, base_path: &str) -> Result<()> {
    tracing::info!(
        from = %from.display(),
        to = %dest.display(),
        "generating page"
    );

    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let html = render_markdown_page(&markdown, template, base_path).map_err(|source| {
        SiteError::Markdown {
            path: from.to_path_buf(),
            source,
        }
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, html).map_err(io_error(dest))?;

    Ok(())
}

/// Generate `index.html` for every directory under `content_dir` (itself
/// included) that holds an `index.md`, mirroring the directory layout under
/// `public_dir`.
///
/// Returns the written pages in sorted path order. The first page that fails
/// aborts the run.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    public_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingDirectory(content_dir.to_path_buf()));
    }

    let mut sources = Vec::new();
    find_index_files(content_dir, &mut sources)?;
    sources.sort();

    let mut generated = Vec::with_capacity(sources.len());
    for source in sources {
        let relative_dir = source
            .parent()
            .and_then(|dir| dir.strip_prefix(content_dir).ok())
            .unwrap_or_else(|| Path::new(""));
        let dest = public_dir.join(relative_dir).join(INDEX_HTML);

        generate_page(&source, template, &dest, base_path)?;
        generated.push(dest);
    }

    Ok(generated)
}

fn find_index_files(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(io_error(dir))?;

    for entry in entries {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();

        if path.is_dir() {
            find_index_files(&path, found)?;
        } else if entry.file_name() == INDEX_MARKDOWN {
            found.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sitemark_core::MarkdownError;

    fn template() -> Template {
        Template::new("<title>{{ Title }}</title>{{ Content }}")
    }

    #[test]
    fn test_render_markdown_page() {
        let html = render_markdown_page("# Hi\n\n![logo](/logo.png)", &template(), "/").unwrap();
        assert_eq!(
            html,
            r#"<title>Hi</title><div><h1>Hi</h1><p><img src="/logo.png" alt="logo"></img></p></div>"#
        );
    }

    #[test]
    fn test_render_markdown_page_with_base_path() {
        let html = render_markdown_page("# Hi\n\n[a](/a)", &template(), "/docs/").unwrap();
        assert!(html.contains(r#"href="/docs/a""#));
    }

    #[test]
    fn test_render_markdown_page_without_title() {
        let err = render_markdown_page("no title here", &template(), "/").unwrap_err();
        assert_eq!(err, MarkdownError::NoTitleFound);
    }

    #[test]
    fn test_generate_page_creates_parent_dirs() {
        let root = tempfile::tempdir().unwrap();
        let from = root.path().join("index.md");
        let dest = root.path().join("out/nested/index.html");
        fs::write(&from, "# Page\n\nBody").unwrap();

        generate_page(&from, &template(), &dest, "/").unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "<title>Page</title><div><h1>Page</h1><p>Body</p></div>"
        );
    }

    #[test]
    fn test_generate_page_reports_failing_file() {
        let root = tempfile::tempdir().unwrap();
        let from = root.path().join("index.md");
        fs::write(&from, "# Page\n\nbroken `code").unwrap();

        let err = generate_page(&from, &template(), &root.path().join("x.html"), "/").unwrap_err();
        match err {
            SiteError::Markdown { path, source } => {
                assert_eq!(path, from);
                assert!(matches!(source, MarkdownError::UnbalancedDelimiter { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_generate_pages_recursive() {
        let root = tempfile::tempdir().unwrap();
        let content = root.path().join("content");
        let public = root.path().join("public");

        fs::create_dir_all(content.join("blog/first")).unwrap();
        fs::create_dir_all(content.join("drafts")).unwrap();
        fs::write(content.join("index.md"), "# Home").unwrap();
        fs::write(content.join("blog/first/index.md"), "# First").unwrap();
        fs::write(content.join("drafts/notes.md"), "# Ignored").unwrap();

        let generated = generate_pages_recursive(&content, &template(), &public, "/").unwrap();

        assert_eq!(
            generated,
            vec![
                public.join("blog/first").join(INDEX_HTML),
                public.join(INDEX_HTML),
            ]
        );
        assert!(fs::read_to_string(public.join("blog/first/index.html"))
            .unwrap()
            .contains("<title>First</title>"));
        assert!(!public.join("drafts").exists());
    }

    #[test]
    fn test_generate_pages_missing_content_dir() {
        let root = tempfile::tempdir().unwrap();
        let err = generate_pages_recursive(
            &root.path().join("nope"),
            &template(),
            &root.path().join("public"),
            "/",
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::MissingDirectory(_)));
    }
}
