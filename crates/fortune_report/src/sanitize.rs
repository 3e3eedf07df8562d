//! Stripping active content from generated reports before rendering.
//!
//! JSON payloads keep their structure: only script/style blocks, inline
//! event handlers and `javascript:` URLs are cut. Prose loses every tag,
//! handler, `@import` rule and blocklisted keyword, then has its whitespace
//! collapsed.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::shape::{ReportShape, detect_shape};

const SCRIPT_BLOCK: &str = r"(?is)<script\b[^>]*>.*?</script\s*>";
const STYLE_BLOCK: &str = r"(?is)<style\b[^>]*>.*?</style\s*>";
// Quoted values may be JSON-escaped; bare values stop before a quote so a
// closing JSON string delimiter survives.
const EVENT_HANDLER: &str = r#"(?i)\s+on[a-z]+\s*=\s*(?:\\?"[^"\\]*\\?"|'[^']*'|[^\s>"]+)"#;
const JS_URL: &str = r"(?i)javascript\s*:";
const ANY_TAG: &str = r"<[^>]*>";
const CSS_IMPORT: &str = r#"(?i)@import\s+[^;\n]*;?"#;
const BLOCKLIST: &str = r"(?i)javascript\s*:|vbscript\s*:|data\s*:\s*text/html|expression\s*\(|eval\s*\(|document\s*\.\s*(?:cookie|write)|window\s*\.\s*location";

fn compile_one(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(pattern, error = %e, "skipping sanitizer pattern");
            None
        }
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| compile_one(p)).collect()
}

static JSON_RULES: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[SCRIPT_BLOCK, STYLE_BLOCK, EVENT_HANDLER, JS_URL]));

static TEXT_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[SCRIPT_BLOCK, STYLE_BLOCK, EVENT_HANDLER, ANY_TAG, CSS_IMPORT, BLOCKLIST])
});

static HSPACE: Lazy<Option<Regex>> = Lazy::new(|| compile_one(r"[ \t]+"));
static EDGE_SPACE: Lazy<Option<Regex>> = Lazy::new(|| compile_one(r"(?m)^ +| +$"));
static BLANK_RUNS: Lazy<Option<Regex>> = Lazy::new(|| compile_one(r"\n{3,}"));

fn strip_all(rules: &[Regex], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

fn replace(re: &Option<Regex>, text: String, with: &str) -> String {
    match re {
        Some(re) => re.replace_all(&text, with).into_owned(),
        None => text,
    }
}

/// Sanitized JSON payload; braces and quotes outside removed markup stay.
pub fn cleanse_json(text: &str) -> String {
    strip_all(&JSON_RULES, text)
}

/// Sanitized prose with whitespace collapsed.
pub fn cleanse_markdown(text: &str) -> String {
    let stripped = strip_all(&TEXT_RULES, &text.replace("\r\n", "\n"));
    let collapsed = replace(&HSPACE, stripped, " ");
    let trimmed = replace(&EDGE_SPACE, collapsed, "");
    replace(&BLANK_RUNS, trimmed, "\n\n").trim().to_string()
}

/// Sanitize a generated report, choosing the JSON or prose path by shape.
pub fn cleanse_text(text: &str) -> String {
    match detect_shape(text) {
        ReportShape::Json => cleanse_json(text),
        ReportShape::Text => cleanse_markdown(text),
    }
}
