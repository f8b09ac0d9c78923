/// Literal marker tokens the workflow templates embed in assistant output.
/// They are scanned as plain substrings anywhere in the text.
pub const NO_CHAIN_DIRECTIVE: &str = "<!-- chain:off -->";
pub const SKIP_DISCUSS_DIRECTIVE: &str = "<!-- chain:skip-discuss -->";
pub const KEEP_DISCUSS_DIRECTIVE: &str = "<!-- chain:keep-discuss -->";

pub fn chain_suppressed(text: &str) -> bool {
    text.contains(NO_CHAIN_DIRECTIVE)
}

/// Directive layer of the skip-discuss resolution. The skip token is checked
/// first; when both tokens appear in one text the skip wins.
pub fn skip_discuss_directive(text: &str) -> Option<bool> {
    if text.contains(SKIP_DISCUSS_DIRECTIVE) {
        return Some(true);
    }
    if text.contains(KEEP_DISCUSS_DIRECTIVE) {
        return Some(false);
    }
    None
}
