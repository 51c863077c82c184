//! PDF export - style-normalized print rendering.
//!
//! The exporter clones nothing from the editing surface: it renders the
//! document tree to a fixed APA-like print page (Times New Roman, 12pt,
//! double-spaced), drops every editing-only artifact (tips, editability
//! flags), keeps only the semantic kind tags as class names, and hands
//! the page to an external PDF facility behind [`PdfEngine`].

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use pulldown_cmark_escape::escape_html;

use crate::model::{DocumentTree, EditorSession, Node, NodeKind};

/// Fixed print typeface
pub const PRINT_FONT_STACK: &str = r#""Times New Roman", Times, serif"#;
/// Fixed print body size in points
pub const PRINT_FONT_SIZE_PT: u32 = 12;
/// Fixed title block size in points
pub const TITLE_FONT_SIZE_PT: u32 = 18;
/// Vertical page margin in points
pub const PAGE_MARGIN_Y_PT: f64 = 40.0;
/// Horizontal page margin in points
pub const PAGE_MARGIN_X_PT: f64 = 24.0;
/// Fallback filename stem when the title field is empty
pub const DEFAULT_FILENAME: &str = "document";

/// A prepared export: the print page plus its target filename
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub html: String,
    pub filename: String,
}

/// Build the export job for a session's current document and title field
pub fn build_job(session: &EditorSession) -> ExportJob {
    ExportJob {
        html: print_html(&session.document, &session.title),
        filename: sanitize_filename(&session.title),
    }
}

fn escape_into(out: &mut String, text: &str) {
    // Writing into a String cannot fail
    let _ = escape_html(&mut *out, text);
}

/// Render the document to a complete, print-styled HTML page.
///
/// The title block comes from the separate title field, not from the
/// tree; tip blocks are skipped; no editing attribute survives.
pub fn print_html(document: &DocumentTree, title: &str) -> String {
    let mut body = String::new();

    let title = title.trim();
    if !title.is_empty() {
        body.push_str("<div class=\"doc-title\">");
        escape_into(&mut body, title);
        body.push_str("</div>\n");
    }

    for node in &document.nodes {
        render_node(&mut body, node);
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
body {{
    font-family: {font};
    font-size: {size}pt;
    line-height: 2;
    color: #000;
    background: #fff;
    margin: 0;
    padding: 36px;
}}

.doc-title {{
    text-align: center;
    font-weight: 700;
    font-size: {title_size}pt;
    margin-bottom: 18px;
}}

.title {{
    text-align: center;
    font-weight: 700;
}}

.heading {{
    font-weight: 700;
}}

blockquote.quote {{
    margin: 0 0 0 0.5in;
}}
</style>
</head>
<body>
{body}</body>
</html>
"#,
        font = PRINT_FONT_STACK,
        size = PRINT_FONT_SIZE_PT,
        title_size = TITLE_FONT_SIZE_PT,
        body = body,
    )
}

fn render_node(out: &mut String, node: &Node) {
    let tag = match node.kind {
        // Editing-only hint, never part of the exported document
        NodeKind::Tip => return,
        NodeKind::Quote => "blockquote",
        NodeKind::Paragraph | NodeKind::Plain => "p",
        NodeKind::Title | NodeKind::Heading | NodeKind::Abstract | NodeKind::Reference => "div",
    };

    out.push_str("<");
    out.push_str(tag);
    out.push_str(" class=\"");
    out.push_str(node.kind.id());
    out.push_str("\">");

    if node.kind == NodeKind::Abstract {
        out.push_str("<strong>");
        escape_into(out, &node.text);
        out.push_str("</strong>");
    } else {
        escape_into(out, &node.text);
    }

    for child in &node.children {
        render_node(out, child);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

/// Derive a safe PDF filename from the title field.
///
/// Keeps letters, digits, spaces, dashes, and underscores; everything
/// else is dropped. An empty result falls back to the default name.
pub fn sanitize_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = stem.trim();
    if stem.is_empty() {
        format!("{}.pdf", DEFAULT_FILENAME)
    } else {
        format!("{}.pdf", stem)
    }
}

/// The external PDF facility the exporter delegates to
pub trait PdfEngine {
    /// Render a complete HTML page to PDF bytes
    fn render(&self, html: &str) -> Result<Vec<u8>>;
}

/// PDF rendering through headless Chrome's print-to-PDF
pub struct ChromiumEngine;

impl ChromiumEngine {
    fn print_options() -> PrintToPdfOptions {
        PrintToPdfOptions {
            landscape: Some(false),
            display_header_footer: Some(false),
            print_background: Some(false),
            scale: Some(1.0),
            // A4 portrait, dimensions in inches
            paper_width: Some(8.27),
            paper_height: Some(11.69),
            margin_top: Some(PAGE_MARGIN_Y_PT / 72.0),
            margin_bottom: Some(PAGE_MARGIN_Y_PT / 72.0),
            margin_left: Some(PAGE_MARGIN_X_PT / 72.0),
            margin_right: Some(PAGE_MARGIN_X_PT / 72.0),
            ..Default::default()
        }
    }
}

impl PdfEngine for ChromiumEngine {
    fn render(&self, html: &str) -> Result<Vec<u8>> {
        let browser = Browser::new(LaunchOptions {
            headless: true,
            ..Default::default()
        })
        .context("launching headless browser")?;

        // Stage the page on disk so the tab can navigate to it
        let mut page = tempfile::Builder::new()
            .prefix("folio-print-")
            .suffix(".html")
            .tempfile()
            .context("staging print HTML")?;
        page.write_all(html.as_bytes())
            .context("staging print HTML")?;

        let tab = browser.new_tab().context("opening render tab")?;
        tab.navigate_to(&format!("file://{}", page.path().display()))
            .context("loading print HTML")?
            .wait_until_navigated()
            .context("loading print HTML")?;

        tab.print_to_pdf(Some(Self::print_options()))
            .context("printing to PDF")
    }
}

/// Run an export job to completion, writing `<out_dir>/<filename>`.
///
/// Never panics: any engine or filesystem failure comes back as the
/// user-facing error string carried by `ExportMsg::Completed`.
pub fn run_export(
    engine: &dyn PdfEngine,
    job: &ExportJob,
    out_dir: &Path,
) -> std::result::Result<PathBuf, String> {
    let target = out_dir.join(&job.filename);
    let outcome = engine.render(&job.html).and_then(|bytes| {
        std::fs::write(&target, bytes)
            .with_context(|| format!("writing {}", target.display()))
    });
    match outcome {
        Ok(()) => Ok(target),
        Err(e) => Err(format!("{:#}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DocumentTree {
        let mut tree = DocumentTree::with_tip();
        tree.append(Node::new(NodeKind::Title, "Study <Results>"));
        tree.append(Node::new(NodeKind::Paragraph, "Body & text"));
        tree.append(Node::with_children(
            NodeKind::Abstract,
            "Abstract",
            vec![Node::new(NodeKind::Plain, "Summary")],
        ));
        tree
    }

    #[test]
    fn test_print_html_is_style_normalized() {
        let html = print_html(&sample_tree(), "My Paper");
        assert!(html.contains("Times New Roman"));
        assert!(html.contains("font-size: 12pt"));
        assert!(html.contains("line-height: 2"));
    }

    #[test]
    fn test_print_html_escapes_content() {
        let html = print_html(&sample_tree(), "");
        assert!(html.contains("Study &lt;Results&gt;"));
        assert!(html.contains("Body &amp; text"));
        assert!(!html.contains("Study <Results>"));
    }

    #[test]
    fn test_print_html_strips_editing_artifacts() {
        let html = print_html(&sample_tree(), "t");
        assert!(!html.contains("class=\"tip\""));
        assert!(!html.contains("editable"));
        // Semantic kind tags survive as class names
        assert!(html.contains("class=\"paragraph\""));
        assert!(html.contains("class=\"abstract\""));
    }

    #[test]
    fn test_title_block_from_separate_field() {
        let with_title = print_html(&DocumentTree::new(), "  Spaced Title  ");
        assert!(with_title.contains("<div class=\"doc-title\">Spaced Title</div>"));

        let without = print_html(&DocumentTree::new(), "   ");
        assert!(!without.contains("doc-title\">"));
    }

    #[test]
    fn test_abstract_renders_bold_label_and_body() {
        let html = print_html(&sample_tree(), "");
        assert!(html.contains("<strong>Abstract</strong>"));
        assert!(html.contains("Summary"));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("My Paper"), "My Paper.pdf");
        assert_eq!(sanitize_filename("a/b\\c:d"), "abcd.pdf");
        assert_eq!(sanitize_filename("  "), "document.pdf");
        assert_eq!(sanitize_filename("../../etc"), "etc.pdf");
    }

    struct FixedEngine(std::result::Result<Vec<u8>, String>);

    impl PdfEngine for FixedEngine {
        fn render(&self, _html: &str) -> Result<Vec<u8>> {
            match &self.0 {
                Ok(bytes) => Ok(bytes.clone()),
                Err(msg) => Err(anyhow::anyhow!("{}", msg)),
            }
        }
    }

    #[test]
    fn test_run_export_writes_target_file() {
        let dir = tempfile::tempdir().unwrap();
        let job = ExportJob {
            html: "<html></html>".to_string(),
            filename: "out.pdf".to_string(),
        };
        let engine = FixedEngine(Ok(b"%PDF-1.7".to_vec()));

        let path = run_export(&engine, &job, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("out.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn test_run_export_surfaces_engine_failure() {
        let dir = tempfile::tempdir().unwrap();
        let job = ExportJob {
            html: String::new(),
            filename: "out.pdf".to_string(),
        };
        let engine = FixedEngine(Err("renderer crashed".to_string()));

        let err = run_export(&engine, &job, dir.path()).unwrap_err();
        assert!(err.contains("renderer crashed"));
        assert!(!dir.path().join("out.pdf").exists());
    }
}
