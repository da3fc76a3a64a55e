//! Shared helpers for unit tests, plus whole-document scenarios that cut
//! across the converter's modules.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::export::PageExport;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn create_test_export_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

pub fn sample_export(title: &str, content: &str) -> PageExport {
    PageExport {
        title: title.to_string(),
        space: "DOCS".to_string(),
        updated: Some("2024-03-01T10:00:00Z".to_string()),
        content: content.to_string(),
    }
}

mod scenarios {
    use super::init_logging;
    use crate::{LinkResolver, convert};
    use pretty_assertions::assert_eq;

    #[test]
    fn readme_style_document() {
        init_logging();
        let md = "---\ntitle: Readme\n---\n# Project\n\nSee [[Setup]] and [docs](https://d.test).\n\n```sh\nmake && make install\n```\n\n| Flag | Meaning |\n|------|---------|\n| `-v` | verbose |\n\n- one\n- two\n";
        let links = LinkResolver::new("ENG").with_link("Setup", "7", "Setup Guide");

        let expected = [
            "<h1>Project</h1>",
            r#"<p>See <a href="/wiki/spaces/ENG/pages/7">Setup Guide</a> and <a href="https://d.test">docs</a>.</p>"#,
            concat!(
                r#"<ac:structured-macro ac:name="code"><ac:parameter ac:name="language">sh</ac:parameter>"#,
                "<ac:plain-text-body><![CDATA[make && make install]]></ac:plain-text-body></ac:structured-macro>"
            ),
            "<table><tbody><tr><th>Flag</th><th>Meaning</th></tr><tr><td><code>-v</code></td><td>verbose</td></tr></tbody></table>",
            "<ul><li>one</li></ul>",
            "<ul><li>two</li></ul>",
        ]
        .join("\n");

        assert_eq!(convert(md, Some(&links)), expected);
    }

    #[test]
    fn output_never_contains_placeholder_residue() {
        let md = "**bold `code` [l](u)** and *it `x`* and `**not bold**`";
        let html = convert(md, None);
        assert!(!crate::convert::inline::placeholder::has_tokens(&html));
        assert_eq!(
            html,
            r#"<p><strong>bold <code>code</code> <a href="u">l</a></strong> and <em>it <code>x</code></em> and <code>**not bold**</code></p>"#
        );
    }
}
