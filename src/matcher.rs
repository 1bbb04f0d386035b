//! Evaluation of compiled ignore patterns against candidate paths.
//!
//! A candidate path is a normalized, `/`-separated relative path with no
//! leading `./` and no trailing `/`. Patterns are applied in list order and
//! the last one that matches decides the verdict; a negated pattern turns a
//! match into "keep".
//!
//! A pattern that matches an ancestor directory of the candidate also matches
//! the candidate itself, which is how "this directory and its contents" is
//! expressed.

use crate::path::file_extension;
use crate::pattern::{compile, Pattern, PatternKind, Segment, Token};

/// Ordered, read-only list of compiled patterns for a single traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    patterns: Vec<Pattern>,
}

impl IgnoreList {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Compiles every line, keeping their order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(lines.into_iter().map(|l| compile(l.as_ref())).collect())
    }

    /// Compiles ignore-file text, one pattern per `\n`-terminated line.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.split_terminator('\n'))
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Verdict for a path whose entry kind is unknown. Directory-only
    /// patterns may then match the final segment as well.
    pub fn is_ignored(&self, path: &str) -> bool {
        verdict(&self.patterns, path, None)
    }

    /// Verdict for a walked entry whose kind is known. A directory-only
    /// pattern never matches the final segment of a regular file.
    pub fn is_ignored_entry(&self, path: &str, is_dir: bool) -> bool {
        verdict(&self.patterns, path, Some(is_dir))
    }

    /// The pattern that decided the verdict, if any pattern matched.
    pub(crate) fn deciding_pattern(&self, path: &str, is_dir: Option<bool>) -> Option<&Pattern> {
        last_match(&self.patterns, path, is_dir)
    }
}

/// Decides whether `path` is excluded by `patterns`.
///
/// # Arguments
/// * `patterns` - Compiled patterns in ignore-file order
/// * `path` - Normalized relative path (`a/b/c.txt`)
///
/// # Returns
/// * `bool` - `true` if the last matching pattern is a positive one
///
/// # Notes
/// - An empty pattern list or an empty path always yields `false`
/// - A later pattern overrides an earlier one, in both directions
pub fn is_ignored(patterns: &[Pattern], path: &str) -> bool {
    verdict(patterns, path, None)
}

fn verdict(patterns: &[Pattern], path: &str, is_dir: Option<bool>) -> bool {
    last_match(patterns, path, is_dir).is_some_and(|p| !p.is_negated())
}

fn last_match<'p>(patterns: &'p [Pattern], path: &str, is_dir: Option<bool>) -> Option<&'p Pattern> {
    if patterns.is_empty() || path.is_empty() {
        return None;
    }

    let candidate = Candidate::new(path, is_dir);
    let mut decided = None;
    for pattern in patterns {
        if candidate.matches(pattern) {
            decided = Some(pattern);
        }
    }
    decided
}

struct Candidate<'a> {
    path: &'a str,
    segments: Vec<&'a str>,
    is_dir: Option<bool>,
}

impl<'a> Candidate<'a> {
    fn new(path: &'a str, is_dir: Option<bool>) -> Self {
        Self {
            path,
            segments: path.split('/').collect(),
            is_dir,
        }
    }

    /// Whether a directory-only pattern may stop after `count` segments.
    /// Any proper prefix is an ancestor directory; the whole path only
    /// qualifies when it is not known to be a file.
    fn may_end_at(&self, pattern: &Pattern, count: usize) -> bool {
        count < self.segments.len() || !pattern.is_directory_only() || self.is_dir != Some(false)
    }

    fn matches(&self, pattern: &Pattern) -> bool {
        match pattern.kind() {
            PatternKind::Inert => false,
            PatternKind::Extension(ext) => self.any_segment(pattern, |segment| {
                file_extension(segment) == Some(ext.as_str())
            }),
            PatternKind::Name => self.any_segment(pattern, |segment| segment == pattern.body()),
            PatternKind::Path => self.matches_literal_prefix(pattern),
            PatternKind::Glob => self.matches_segments(pattern),
        }
    }

    fn any_segment<F>(&self, pattern: &Pattern, accept: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        self.segments
            .iter()
            .enumerate()
            .any(|(i, &segment)| accept(segment) && self.may_end_at(pattern, i + 1))
    }

    /// Root-anchored literal: the path equals the pattern, or continues it
    /// right after a `/`.
    fn matches_literal_prefix(&self, pattern: &Pattern) -> bool {
        match self.path.strip_prefix(pattern.body()) {
            Some("") => self.may_end_at(pattern, self.segments.len()),
            Some(rest) => rest.starts_with('/'),
            None => false,
        }
    }

    /// Segment-wise evaluation for wildcard patterns.
    ///
    /// `reach[j]` is true when the pattern segments consumed so far can
    /// cover exactly the first `j` path segments. An unanchored pattern may
    /// start at any segment.
    fn matches_segments(&self, pattern: &Pattern) -> bool {
        let n = self.segments.len();
        let mut reach = vec![false; n + 1];
        if pattern.is_anchored() {
            reach[0] = true;
        } else {
            reach[..n].fill(true);
        }

        for segment in pattern.segments() {
            if let Segment::DoubleWildcard = segment {
                let mut seen = false;
                for slot in reach.iter_mut() {
                    seen |= *slot;
                    *slot = seen;
                }
            } else {
                for j in (0..n).rev() {
                    reach[j + 1] = reach[j] && segment_matches(segment, self.segments[j]);
                }
                reach[0] = false;
            }
            if !reach.contains(&true) {
                return false;
            }
        }

        (1..=n).any(|count| reach[count] && self.may_end_at(pattern, count))
    }
}

fn segment_matches(segment: &Segment, name: &str) -> bool {
    match segment {
        Segment::Literal(literal) => literal == name,
        Segment::Wildcard | Segment::DoubleWildcard => true,
        Segment::Glob(tokens) => wildmatch(tokens, name),
    }
}

/// Matches one path segment against glob tokens, backtracking only to the
/// most recent `*`.
fn wildmatch(tokens: &[Token], text: &str) -> bool {
    let mut t = 0;
    let mut pos = 0;
    let mut star: Option<(usize, usize)> = None;

    loop {
        if let Some(token) = tokens.get(t) {
            if let Token::AnyChars = token {
                star = Some((t + 1, pos));
                t += 1;
                continue;
            }
            if let Some(c) = text[pos..].chars().next() {
                if token_accepts(token, c) {
                    t += 1;
                    pos += c.len_utf8();
                    continue;
                }
            }
        } else if pos == text.len() {
            return true;
        }

        // Let the last star swallow one more character and retry.
        let Some((resume, from)) = star else {
            return false;
        };
        let Some(c) = text[from..].chars().next() else {
            return false;
        };
        let from = from + c.len_utf8();
        star = Some((resume, from));
        t = resume;
        pos = from;
    }
}

fn token_accepts(token: &Token, c: char) -> bool {
    match token {
        Token::Literal(literal) => *literal == c,
        Token::AnyChars | Token::AnyChar => true,
        Token::Class(class) => class.accepts(c),
    }
}
