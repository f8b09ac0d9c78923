/// The fixed family of workflow slash commands a "next up" suggestion may
/// name. Matching requires a word boundary after the name, so no entry can
/// shadow another.
pub const COMMAND_LEXICON: &[&str] = &[
    "/gsd-plan-phase",
    "/gsd-execute-phase",
    "/gsd-discuss-phase",
    "/gsd-audit-milestone",
    "/gsd-complete-milestone",
    "/gsd-add-phase",
    "/gsd-insert-phase",
    "/gsd-verify-work",
    "/gsd-new-project",
    "/gsd-new-milestone",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandMatch {
    /// Byte offset of the leading slash.
    pub offset: usize,
    pub name: &'static str,
}

impl CommandMatch {
    pub fn name_end(&self) -> usize {
        self.offset + self.name.len()
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Lexicon entry starting exactly at `offset`, with a word boundary after
/// the name.
pub fn command_at(text: &str, offset: usize) -> Option<CommandMatch> {
    let rest = text.get(offset..)?;
    for name in COMMAND_LEXICON {
        if let Some(after) = rest.strip_prefix(name) {
            if after.chars().next().is_none_or(|c| !is_ident_char(c)) {
                return Some(CommandMatch { offset, name });
            }
        }
    }
    None
}

/// First lexicon token at or after `from`.
pub fn find_command_from(text: &str, from: usize) -> Option<CommandMatch> {
    let mut search = from.min(text.len());
    while let Some(idx) = text[search..].find('/') {
        let offset = search + idx;
        if let Some(found) = command_at(text, offset) {
            return Some(found);
        }
        search = offset + 1;
    }
    None
}

/// Bare numeric argument on the same line after the command name: digits
/// with at most one dot (`08`, `3`, `2.1`), bounded by a non-identifier
/// character or end of text.
pub fn numeric_argument_after(text: &str, name_end: usize) -> Option<&str> {
    let rest = text.get(name_end..)?;
    let spaces = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    if spaces == 0 {
        return None;
    }
    let arg_start = name_end + spaces;
    let candidate = &text[arg_start..];
    let mut len = 0;
    let mut seen_dot = false;
    for c in candidate.chars() {
        match c {
            '0'..='9' => len += 1,
            '.' if !seen_dot && len > 0 => {
                seen_dot = true;
                len += 1;
            }
            _ => break,
        }
    }
    if len == 0 {
        return None;
    }
    let mut arg = &candidate[..len];
    // a trailing dot is sentence punctuation, not part of the argument
    arg = arg.trim_end_matches('.');
    if arg.is_empty() {
        return None;
    }
    if candidate[arg.len()..]
        .chars()
        .next()
        .is_some_and(is_ident_char)
    {
        return None;
    }
    Some(arg)
}

/// Command name plus its numeric argument, when one follows.
pub fn command_with_argument(text: &str, found: &CommandMatch) -> String {
    match numeric_argument_after(text, found.name_end()) {
        Some(arg) => format!("{} {arg}", found.name),
        None => found.name.to_string(),
    }
}
