//! Output formatting: canonical 4-space indentation and source reformatting.

use regex::Regex;
use std::sync::OnceLock;

/// Indentation unit per nesting level.
const INDENT: &str = "    ";

/// Re-indent an assembled document to canonical formatting.
///
/// A newline-insertion pass puts one tag per line, then a depth counter
/// drives the indentation: a closing tag decrements before it is emitted,
/// an opening tag (not self-closing, no inline close) increments after.
/// Blank lines are dropped and the depth never goes negative. Running the
/// pass over already-canonical output reproduces it unchanged.
pub fn pretty_print(document: &str) -> String {
    indent_lines(&document.replace("><", ">\n<"))
}

fn indent_lines(document: &str) -> String {
    let mut depth: usize = 0;
    let mut formatted = Vec::new();

    for line in document.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("</") {
            depth = depth.saturating_sub(1);
        }

        formatted.push(format!("{}{line}", INDENT.repeat(depth)));

        if line.starts_with('<')
            && !line.starts_with("</")
            && !line.ends_with("/>")
            && !line.contains("</")
        {
            depth += 1;
        }
    }

    formatted.join("\n")
}

/// Collapse an exported SVG to one tag per line with canonical indentation.
///
/// Design tools emit source documents as a single compressed line; this is
/// only used to echo that source back in a readable form.
pub fn reformat_svg(svg: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let ws = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));

    let compact = ws
        .replace_all(svg.trim(), " ")
        .replace("> <", "><")
        .replace(" >", ">")
        .replace(" />", "/>");

    pretty_print(&compact)
}
