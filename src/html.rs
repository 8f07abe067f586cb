//! HTML body normalization
//!
//! Turns an HTML results table into tab-separated lines so the same table
//! scanner handles both plain text and HTML messages. This is pure tag
//! removal, not an HTML parser.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());

static HEADER_CELL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</th>\s*<th[^>]*>").unwrap());

static DATA_CELL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</td>\s*<td[^>]*>").unwrap());

static ROW_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</tr>").unwrap());

static ROW_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<tr[^>]*>").unwrap());

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static DECIMAL_ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#(\d+);").unwrap());

static HEX_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#[xX]([0-9a-fA-F]+);").unwrap());

/// Tab-bearing runs and runs of two or more spaces. A lone space is part of
/// a cell value ("Kevin Ruiz", "1244 (+44)") and is kept.
static INLINE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\t[ \t]*| {2,}").unwrap());

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Convert HTML markup into tab/newline delimited text
#[must_use]
pub fn extract_text_from_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = STYLE_BLOCK.replace_all(html, "");
    let text = SCRIPT_BLOCK.replace_all(&text, "");

    let text = HEADER_CELL_BOUNDARY.replace_all(&text, "\t");
    let text = DATA_CELL_BOUNDARY.replace_all(&text, "\t");

    let text = ROW_CLOSE.replace_all(&text, "\n");
    let text = ROW_OPEN.replace_all(&text, "");

    let text = ANY_TAG.replace_all(&text, "");

    let text = decode_entities(&text);

    let text = INLINE_SPACE.replace_all(&text, "\t");
    let text = BLANK_LINES.replace_all(&text, "\n");

    text.trim().to_string()
}

/// Decode the entities venue mail actually uses.
///
/// `&amp;` is decoded before `&lt;`/`&gt;`, so `&amp;lt;` yields `<`.
fn decode_entities(text: &str) -> String {
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");

    let text = DECIMAL_ENTITY.replace_all(&text, |caps: &Captures| {
        decode_code_point(&caps[0], caps[1].parse().ok())
    });
    HEX_ENTITY
        .replace_all(&text, |caps: &Captures| {
            decode_code_point(&caps[0], u32::from_str_radix(&caps[1], 16).ok())
        })
        .into_owned()
}

/// Unknown or invalid code points stay as written
fn decode_code_point(original: &str, code: Option<u32>) -> String {
    code.and_then(char::from_u32)
        .map_or_else(|| original.to_string(), String::from)
}
