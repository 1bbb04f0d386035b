//! Compilation of ignore-list lines into pattern descriptors.
//! Each raw line becomes an immutable [`Pattern`]; malformed syntax never
//! aborts the list, it compiles to a pattern that matches nothing.

/// One character position inside a `[...]` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    ranges: Vec<(char, char)>,
    negated: bool,
}

impl CharClass {
    /// Inclusive ranges; single members are stored as `(c, c)`.
    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn accepts(&self, c: char) -> bool {
        let member = self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        member != self.negated
    }
}

/// A single unit of an in-segment glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    /// `*`: zero or more characters within the segment
    AnyChars,
    /// `?`: exactly one character
    AnyChar,
    Class(CharClass),
}

/// Matcher for one `/`-delimited component of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// A whole-segment `*`
    Wildcard,
    /// A whole-segment `**`, spanning zero or more path segments
    DoubleWildcard,
    Glob(Vec<Token>),
}

/// Matching strategy selected at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// Never matches: empty or malformed line
    Inert,
    /// Exactly `*.<ext>`
    Extension(String),
    /// Literal with no slash, matched against any path segment
    Name,
    /// Literal anchored at the root, matched on segment boundaries
    Path,
    /// Anything carrying `*`, `**`, `?` or a class
    Glob,
}

/// A compiled ignore rule derived from one line of an ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    body: String,
    negated: bool,
    directory_only: bool,
    anchored_at_root: bool,
    segments: Vec<Segment>,
    kind: PatternKind,
}

impl Pattern {
    /// The line as read, without its line terminator.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The pattern with negation, anchoring and directory markers removed.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_directory_only(&self) -> bool {
        self.directory_only
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored_at_root
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    pub fn is_inert(&self) -> bool {
        self.kind == PatternKind::Inert
    }

    fn inert(raw: String, negated: bool, directory_only: bool) -> Self {
        Self {
            raw,
            body: String::new(),
            negated,
            directory_only,
            anchored_at_root: false,
            segments: Vec::new(),
            kind: PatternKind::Inert,
        }
    }
}

/// Compiles one raw ignore-list line.
///
/// # Arguments
/// * `raw_line` - A single line of an ignore file, with or without its line terminator
///
/// # Returns
/// * `Pattern` - The compiled descriptor; an inert pattern if the line is empty or malformed
///
/// # Example
/// ```
/// use ingestify::pattern::{compile, PatternKind};
///
/// let pattern = compile("!build/");
/// assert!(pattern.is_negated());
/// assert!(pattern.is_directory_only());
/// assert_eq!(pattern.kind(), &PatternKind::Name);
/// ```
pub fn compile(raw_line: &str) -> Pattern {
    // Only the newline goes; a `\r` left by CRLF files stays part of the pattern.
    let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
    let raw = line.to_string();

    // A lone "!" stays a literal so it never becomes an empty negation.
    let (negated, rest) = match line.strip_prefix('!') {
        Some(rest) if !rest.is_empty() => (true, rest),
        _ => (false, line),
    };

    let trimmed = rest.trim_end_matches('/');
    let directory_only = trimmed.len() != rest.len();

    let (rooted, body) = if let Some(stripped) = trimmed.strip_prefix("./") {
        (true, stripped)
    } else if let Some(stripped) = trimmed.strip_prefix('/') {
        (true, stripped)
    } else {
        (false, trimmed)
    };

    if body.is_empty() {
        return Pattern::inert(raw, negated, directory_only);
    }

    let mut segments = Vec::new();
    for part in body.split('/') {
        match compile_segment(part) {
            Some(segment) => segments.push(segment),
            None => return Pattern::inert(raw, negated, directory_only),
        }
    }

    let floating = segments.first() == Some(&Segment::DoubleWildcard);
    let anchored_at_root = !floating && (rooted || segments.len() > 1);

    let literal = segments.iter().all(|s| matches!(s, Segment::Literal(_)));
    let kind = if literal {
        if anchored_at_root {
            PatternKind::Path
        } else {
            PatternKind::Name
        }
    } else {
        match extension_filter(body) {
            Some(ext) if !anchored_at_root => PatternKind::Extension(ext.to_string()),
            _ => PatternKind::Glob,
        }
    };

    Pattern {
        raw,
        body: body.to_string(),
        negated,
        directory_only,
        anchored_at_root,
        segments,
        kind,
    }
}

fn has_wildcard(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Returns the extension when `body` is exactly `*.<ext>` with a plain extension.
fn extension_filter(body: &str) -> Option<&str> {
    let ext = body.strip_prefix("*.")?;
    if ext.is_empty() || ext.contains(['.', '/']) || has_wildcard(ext) {
        return None;
    }
    Some(ext)
}

fn compile_segment(part: &str) -> Option<Segment> {
    match part {
        "**" => Some(Segment::DoubleWildcard),
        "*" => Some(Segment::Wildcard),
        _ if has_wildcard(part) => compile_glob(part).map(Segment::Glob),
        _ => Some(Segment::Literal(part.to_string())),
    }
}

fn compile_glob(part: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = part.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                // Runs of stars inside a segment collapse to one.
                if tokens.last() != Some(&Token::AnyChars) {
                    tokens.push(Token::AnyChars);
                }
                i += 1;
            }
            '?' => {
                tokens.push(Token::AnyChar);
                i += 1;
            }
            '[' => {
                let (class, next) = compile_class(&chars, i + 1)?;
                tokens.push(Token::Class(class));
                i = next;
            }
            c => {
                tokens.push(Token::Literal(c));
                i += 1;
            }
        }
    }

    Some(tokens)
}

/// Parses a class body starting just after `[`; returns the class and the
/// index after the closing `]`, or `None` if the class is never closed.
fn compile_class(chars: &[char], start: usize) -> Option<(CharClass, usize)> {
    let mut i = start;
    let negated = matches!(chars.get(i), Some('!') | Some('^'));
    if negated {
        i += 1;
    }

    let mut ranges = Vec::new();
    let mut first = true;
    loop {
        let c = *chars.get(i)?;
        if c == ']' && !first {
            return Some((CharClass { ranges, negated }, i + 1));
        }
        first = false;

        match (chars.get(i + 1), chars.get(i + 2)) {
            (Some('-'), Some(&hi)) if hi != ']' => {
                ranges.push((c, hi));
                i += 3;
            }
            _ => {
                ranges.push((c, c));
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_bang_is_literal() {
        let pattern = compile("!");
        assert!(!pattern.is_negated());
        assert_eq!(pattern.kind(), &PatternKind::Name);
        assert_eq!(pattern.segments(), &[Segment::Literal("!".into())]);
    }

    #[test]
    fn class_with_leading_bracket_and_dash() {
        let Some(Segment::Glob(tokens)) = compile_segment("[]-a]") else {
            panic!("expected glob segment");
        };
        let Token::Class(class) = &tokens[0] else {
            panic!("expected class token");
        };
        assert_eq!(class.ranges(), &[(']', 'a')]);

        let Some(Segment::Glob(tokens)) = compile_segment("[a-]") else {
            panic!("expected glob segment");
        };
        let Token::Class(class) = &tokens[0] else {
            panic!("expected class token");
        };
        assert_eq!(class.ranges(), &[('a', 'a'), ('-', '-')]);
    }

    #[test]
    fn stars_collapse_within_segment() {
        assert_eq!(
            compile_glob("a**b"),
            Some(vec![
                Token::Literal('a'),
                Token::AnyChars,
                Token::Literal('b')
            ])
        );
    }

    #[test]
    fn unterminated_class_is_rejected() {
        assert_eq!(compile_glob("debug[0-9"), None);
        assert_eq!(compile_glob("[!"), None);
    }

    #[test]
    fn extension_filter_requires_plain_extension() {
        assert_eq!(extension_filter("*.log"), Some("log"));
        assert_eq!(extension_filter("*.tar.gz"), None);
        assert_eq!(extension_filter("*."), None);
        assert_eq!(extension_filter("*.l?g"), None);
        assert_eq!(extension_filter("a*.log"), None);
    }
}
