use std::fs;

use pretty_assertions::assert_eq;
use sitemark::{SiteConfig, SiteError, SiteGenerator};

const TEMPLATE: &str = "<!DOCTYPE html>
<html>
<head><title>{{ Title }}</title><link href=\"/index.css\" rel=\"stylesheet\"></head>
<body>{{ Content }}</body>
</html>";

fn site(root: &std::path::Path, base_path: &str) -> SiteConfig {
    SiteConfig {
        content_dir: root.join("content"),
        static_dir: root.join("static"),
        template: root.join("template.html"),
        output_dir: root.join("public"),
        base_path: base_path.to_string(),
    }
}

#[test]
fn builds_nested_site_under_base_path() {
    let root = tempfile::tempdir().unwrap();
    let config = site(root.path(), "/repo/");

    fs::create_dir_all(config.content_dir.join("blog/glorfindel")).unwrap();
    fs::create_dir_all(config.static_dir.join("images")).unwrap();
    fs::write(&config.template, TEMPLATE).unwrap();
    fs::write(config.static_dir.join("index.css"), "body { color: #000; }").unwrap();
    fs::write(config.static_dir.join("images/rivendell.png"), [0u8, 1, 2]).unwrap();
    fs::write(
        config.content_dir.join("index.md"),
        "# Tolkien Fan Club\n\n![Rivendell](/images/rivendell.png)\n\n- [Glorfindel](/blog/glorfindel)",
    )
    .unwrap();
    fs::write(
        config.content_dir.join("blog/glorfindel/index.md"),
        "Intro paragraph\n\n# Why Glorfindel is *underrated*\n\n> He fought a Balrog",
    )
    .unwrap();

    let report = SiteGenerator::with_config(config.clone()).build().unwrap();
    assert_eq!(report.files_copied, 2);
    assert_eq!(report.pages.len(), 2);

    let home = fs::read_to_string(config.output_dir.join("index.html")).unwrap();
    assert_eq!(
        home,
        "<!DOCTYPE html>
<html>
<head><title>Tolkien Fan Club</title><link href=\"/repo/index.css\" rel=\"stylesheet\"></head>
<body><div><h1>Tolkien Fan Club</h1><p><img src=\"/repo/images/rivendell.png\" alt=\"Rivendell\"></img></p><ul><li><a href=\"/repo/blog/glorfindel\">Glorfindel</a></li></ul></div></body>
</html>"
    );

    let post = fs::read_to_string(config.output_dir.join("blog/glorfindel/index.html")).unwrap();
    assert!(post.contains("<title>Why Glorfindel is *underrated*</title>"));
    assert!(post.contains("<h1>Why Glorfindel is <i>underrated</i></h1>"));
    assert!(post.contains("<blockquote>He fought a Balrog</blockquote>"));

    assert_eq!(
        fs::read(config.output_dir.join("images/rivendell.png")).unwrap(),
        vec![0u8, 1, 2]
    );
}

#[test]
fn page_without_title_fails_build() {
    let root = tempfile::tempdir().unwrap();
    let config = site(root.path(), "/");

    fs::create_dir_all(&config.content_dir).unwrap();
    fs::write(&config.template, TEMPLATE).unwrap();
    fs::write(config.content_dir.join("index.md"), "no heading at all").unwrap();

    let err = SiteGenerator::with_config(config).build().unwrap_err();
    assert!(matches!(err, SiteError::Markdown { .. }));
    assert!(err.to_string().contains("No title found"));
}
