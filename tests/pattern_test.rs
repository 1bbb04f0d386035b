use ingestify::is_ignored;
use ingestify::pattern::{compile, PatternKind, Segment, Token};

#[test]
fn test_negation_is_stripped() {
    let pattern = compile("!important.log");
    assert!(pattern.is_negated());
    assert_eq!(pattern.body(), "important.log");
    assert_eq!(pattern.raw(), "!important.log");
    assert_eq!(pattern.kind(), &PatternKind::Name);
}

#[test]
fn test_directory_only_marker() {
    let pattern = compile("logs/");
    assert!(pattern.is_directory_only());
    assert!(!pattern.is_anchored());
    assert_eq!(pattern.segments(), &[Segment::Literal("logs".into())]);

    let pattern = compile("logs//");
    assert!(pattern.is_directory_only());
    assert_eq!(pattern.body(), "logs");
}

#[test]
fn test_line_terminator_is_stripped() {
    assert_eq!(compile("target\n").raw(), "target");
    assert_eq!(compile("target\n"), compile("target"));
}

#[test]
fn test_carriage_return_is_kept() {
    let pattern = compile("target\r\n");
    assert_eq!(pattern.raw(), "target\r");
    assert_eq!(pattern.body(), "target\r");
    assert!(is_ignored(&[compile("a\r")], "a\r"));
    assert!(!is_ignored(&[compile("a\r")], "a"));
}

#[test]
fn test_anchoring() {
    assert!(!compile("logs").is_anchored());
    assert!(!compile("*.log").is_anchored());
    assert!(compile("/logs").is_anchored());
    assert!(compile("./logs").is_anchored());
    assert!(compile("src/gen").is_anchored());
    assert!(compile("src/**/gen").is_anchored());
    assert!(!compile("**/gen").is_anchored());
    assert!(!compile("/**/gen").is_anchored());
}

#[test]
fn test_kinds() {
    assert_eq!(compile("*.log").kind(), &PatternKind::Extension("log".into()));
    assert_eq!(compile("*.tar.gz").kind(), &PatternKind::Glob);
    assert_eq!(compile("/*.log").kind(), &PatternKind::Glob);
    assert_eq!(compile("build").kind(), &PatternKind::Name);
    assert_eq!(compile("/build").kind(), &PatternKind::Path);
    assert_eq!(compile("src/build").kind(), &PatternKind::Path);
    assert_eq!(compile("debug?.log").kind(), &PatternKind::Glob);
    assert_eq!(compile("**/logs/").kind(), &PatternKind::Glob);
}

#[test]
fn test_double_wildcard_segments() {
    let pattern = compile("a/**/b");
    assert_eq!(
        pattern.segments(),
        &[
            Segment::Literal("a".into()),
            Segment::DoubleWildcard,
            Segment::Literal("b".into()),
        ]
    );

    let pattern = compile("src/*");
    assert_eq!(
        pattern.segments(),
        &[Segment::Literal("src".into()), Segment::Wildcard]
    );
}

#[test]
fn test_character_class() {
    let pattern = compile("debug[!0-9a].log");
    let [Segment::Glob(tokens)] = pattern.segments() else {
        panic!("expected one glob segment");
    };
    let Token::Class(class) = &tokens[5] else {
        panic!("expected a class at position 5");
    };
    assert!(class.is_negated());
    assert_eq!(class.ranges(), &[('0', '9'), ('a', 'a')]);
    assert!(class.accepts('b'));
    assert!(!class.accepts('5'));
    assert_eq!(tokens.len(), 10);

    let pattern = compile("file[^x]");
    let [Segment::Glob(tokens)] = pattern.segments() else {
        panic!("expected one glob segment");
    };
    assert!(matches!(&tokens[4], Token::Class(c) if c.is_negated()));
}

#[test]
fn test_inert_patterns() {
    for raw in ["", "/", "!/", "debug[0-9.log", "a/[b", "[!"] {
        let pattern = compile(raw);
        assert!(pattern.is_inert(), "{raw:?} should be inert");
        assert!(pattern.segments().is_empty());
    }
}

#[test]
fn test_lone_bang_is_not_negation() {
    let pattern = compile("!");
    assert!(!pattern.is_negated());
    assert!(!pattern.is_inert());
    assert_eq!(pattern.body(), "!");
}

#[test]
fn test_compile_is_deterministic() {
    for raw in ["*.log", "!keep/", "a/**/b[0-9]?", "", "[x"] {
        assert_eq!(compile(raw), compile(raw));
    }
}
