use crate::chain::lexicon::{command_at, command_with_argument, find_command_from};

/// Last-resort matches must sit within this many bytes after the anchor.
pub const PROXIMITY_WINDOW_CHARS: usize = 500;

const ANCHOR_PHRASE: &str = "next up";

/// Locates a "Next Up" anchor section in loosely formatted assistant output
/// and returns the command suggested inside it, or `None` when nothing is
/// there to chain. Never an error: a miss only means "nothing to chain."
pub fn extract_next_command(text: &str) -> Option<String> {
    let section = locate_anchor_section(text)?;

    let sub_matchers: &[fn(&str) -> Option<String>] = &[
        fenced_token,
        line_start_token,
        numbered_token,
        colon_token,
        anywhere_token,
    ];
    for matcher in sub_matchers {
        if let Some(candidate) = matcher(section.body) {
            return Some(strip_explanation(&candidate));
        }
    }

    // Nothing inside the section itself. One last scan of the whole text,
    // accepted only close after the anchor.
    let found = find_command_from(text, section.anchor_offset)?;
    if found.offset - section.anchor_offset > PROXIMITY_WINDOW_CHARS {
        return None;
    }
    Some(command_with_argument(text, &found))
}

struct AnchorSection<'a> {
    anchor_offset: usize,
    body: &'a str,
}

/// Ordered anchor matchers, most specific first; the first one that matches
/// anywhere in the text wins.
fn locate_anchor_section(text: &str) -> Option<AnchorSection<'_>> {
    let matchers: &[fn(&str) -> bool] = &[
        is_decorated_heading,
        is_quote_marker,
        is_plain_heading,
        is_bare_phrase,
    ];
    for matcher in matchers {
        for (offset, line) in lines_with_offsets(text) {
            if matcher(line) {
                // The section starts at the marker itself, so a command on
                // the anchor line is still inside it; the boundary search
                // starts on the following line.
                let after_anchor = next_line_start(text, offset, line);
                let body_end = section_end(text, after_anchor);
                return Some(AnchorSection {
                    anchor_offset: offset,
                    body: &text[offset..body_end],
                });
            }
        }
    }
    None
}

fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |chunk| {
        let start = offset;
        offset += chunk.len();
        (start, chunk.trim_end_matches(['\n', '\r']))
    })
}

fn next_line_start(text: &str, line_offset: usize, line: &str) -> usize {
    let mut pos = line_offset + line.len();
    while pos < text.len() && matches!(text.as_bytes()[pos], b'\r' | b'\n') {
        pos += 1;
        if pos > line_offset + line.len() + 1 {
            break;
        }
    }
    pos
}

/// The section runs to the next heading-like line or end of text.
fn section_end(text: &str, body_start: usize) -> usize {
    for (offset, line) in lines_with_offsets(&text[body_start..]) {
        if line.trim_start().starts_with('#') {
            return body_start + offset;
        }
    }
    text.len()
}

fn contains_anchor_phrase(line: &str) -> bool {
    line.to_ascii_lowercase().contains(ANCHOR_PHRASE)
}

/// `## ▶ Next Up` or `## ▸ Next Up` — heading marker, then one of the two
/// arrow glyphs the templates alternate between.
fn is_decorated_heading(line: &str) -> bool {
    let Some(rest) = strip_heading_marker(line) else {
        return false;
    };
    let rest = rest.trim_start();
    let Some(rest) = rest
        .strip_prefix('\u{25B6}')
        .or_else(|| rest.strip_prefix('\u{25B8}'))
    else {
        return false;
    };
    contains_anchor_phrase(rest)
}

/// `> **Next Up** ...`
fn is_quote_marker(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('>') && contains_anchor_phrase(trimmed)
}

/// `## Next Up`
fn is_plain_heading(line: &str) -> bool {
    match strip_heading_marker(line) {
        Some(rest) => contains_anchor_phrase(rest),
        None => false,
    }
}

/// A line that is nothing but the phrase, give or take emphasis marks and a
/// trailing colon.
fn is_bare_phrase(line: &str) -> bool {
    let stripped = line.trim().trim_matches(['*', '_', ':', ' ']);
    stripped.eq_ignore_ascii_case(ANCHOR_PHRASE)
}

fn strip_heading_marker(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes == 0 {
        return None;
    }
    Some(&trimmed[hashes..])
}

/// `` `/gsd-execute-phase 08` `` or `"/gsd-execute-phase 08"`. Inside a
/// fence the whole delimited content is the command, so word arguments
/// survive here and only here.
fn fenced_token(body: &str) -> Option<String> {
    for delim in ['`', '"'] {
        let mut search = 0;
        while let Some(open) = body[search..].find(delim) {
            let start = search + open + delim.len_utf8();
            let Some(close) = body[start..].find(delim) else {
                break;
            };
            let inner = body[start..start + close].trim();
            if command_at(inner, 0).is_some() {
                return Some(inner.to_string());
            }
            search = start + close + delim.len_utf8();
        }
    }
    None
}

/// A line beginning with the token.
fn line_start_token(body: &str) -> Option<String> {
    for (_, line) in lines_with_offsets(body) {
        let trimmed = line.trim_start();
        if let Some(found) = command_at(trimmed, 0) {
            return Some(command_with_argument(trimmed, &found));
        }
    }
    None
}

/// A token followed by a bare number, anywhere in the section.
fn numbered_token(body: &str) -> Option<String> {
    let mut from = 0;
    while let Some(found) = find_command_from(body, from) {
        let candidate = command_with_argument(body, &found);
        if candidate.len() > found.name.len() {
            return Some(candidate);
        }
        from = found.name_end();
    }
    None
}

/// A token directly after a colon, e.g. `Run: /gsd-verify-work`.
fn colon_token(body: &str) -> Option<String> {
    let mut search = 0;
    while let Some(idx) = body[search..].find(':') {
        let after_colon = search + idx + 1;
        let rest = &body[after_colon..];
        let skipped = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        if let Some(found) = command_at(body, after_colon + skipped) {
            return Some(command_with_argument(body, &found));
        }
        search = after_colon;
    }
    None
}

/// Any token at all, the most permissive sub-matcher.
fn anywhere_token(body: &str) -> Option<String> {
    let found = find_command_from(body, 0)?;
    Some(command_with_argument(body, &found))
}

/// Drops a trailing " — explanation" clause at the first em-dash-style
/// separator.
fn strip_explanation(candidate: &str) -> String {
    let cut = candidate
        .find('\u{2014}')
        .into_iter()
        .chain(candidate.find('\u{2013}'))
        .min();
    match cut {
        Some(idx) => candidate[..idx].trim().to_string(),
        None => candidate.trim().to_string(),
    }
}
