//! Disable comments.
//!
//! Supported directives, each optionally followed by a comma-separated rule
//! list (no list means every rule) and a `-- description`:
//!
//! - `stylint-disable` until the matching `stylint-enable` or end of file
//! - `stylint-enable`
//! - `stylint-disable-line`
//! - `stylint-disable-next-line`

use super::scanner::Comment;
use crate::result::{ALL_RULES, DisabledRange};

const DISABLE: &str = "stylint-disable";
const ENABLE: &str = "stylint-enable";
const DISABLE_LINE: &str = "stylint-disable-line";
const DISABLE_NEXT_LINE: &str = "stylint-disable-next-line";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Disable,
    Enable,
    DisableLine,
    DisableNextLine,
}

#[derive(Debug, PartialEq, Eq)]
struct Directive {
    kind: Kind,
    rules: Vec<String>,
}

impl Directive {
    fn parse(text: &str) -> Option<Self> {
        let text = text.split(" -- ").next().unwrap_or(text).trim();
        let (keyword, rest) = match text.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest),
            None => (text, ""),
        };

        let kind = match keyword {
            DISABLE => Kind::Disable,
            ENABLE => Kind::Enable,
            DISABLE_LINE => Kind::DisableLine,
            DISABLE_NEXT_LINE => Kind::DisableNextLine,
            _ => return None,
        };

        let mut rules: Vec<String> = rest
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();
        if rules.is_empty() {
            rules.push(ALL_RULES.to_string());
        }

        Some(Self { kind, rules })
    }
}

/// Collects the ranges disabled by the comments, in comment order.
pub fn disabled_ranges(comments: &[Comment]) -> Vec<DisabledRange> {
    let mut ranges: Vec<DisabledRange> = Vec::new();

    for comment in comments {
        let Some(directive) = Directive::parse(&comment.text) else {
            continue;
        };
        let line = comment.start.line;

        match directive.kind {
            Kind::Disable => {
                for rule in directive.rules {
                    ranges.push(DisabledRange::new(rule, line, None));
                }
            }
            Kind::DisableLine => {
                for rule in directive.rules {
                    ranges.push(DisabledRange::new(rule, line, Some(line)));
                }
            }
            Kind::DisableNextLine => {
                let next = comment.end_line + 1;
                for rule in directive.rules {
                    ranges.push(DisabledRange::new(rule, next, Some(next)));
                }
            }
            Kind::Enable => {
                let all = directive.rules.iter().any(|r| r == ALL_RULES);
                for range in ranges
                    .iter_mut()
                    .filter(|r| r.end.is_none())
                    .filter(|r| all || directive.rules.contains(&r.rule))
                {
                    range.end = Some(line);
                }
            }
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_engine::scanner::Position;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn comment(text: &str, line: u32) -> Comment {
        Comment {
            text: text.to_string(),
            start: Position::new(line, 1),
            end_line: line,
        }
    }

    #[rstest]
    #[case(" stylint-disable ", Some((Kind::Disable, vec!["all"])))]
    #[case("stylint-enable block-no-empty", Some((Kind::Enable, vec!["block-no-empty"])))]
    #[case(
        "stylint-disable-line block-no-empty, color-no-invalid-hex",
        Some((Kind::DisableLine, vec!["block-no-empty", "color-no-invalid-hex"]))
    )]
    #[case(
        "stylint-disable-next-line color-no-invalid-hex -- legacy palette",
        Some((Kind::DisableNextLine, vec!["color-no-invalid-hex"]))
    )]
    #[case("stylint-disabled", None)]
    #[case("just a comment", None)]
    fn test_directive_parse(#[case] text: &str, #[case] expected: Option<(Kind, Vec<&str>)>) {
        let expected = expected.map(|(kind, rules)| Directive {
            kind,
            rules: rules.into_iter().map(String::from).collect(),
        });
        assert_eq!(Directive::parse(text), expected);
    }

    #[test]
    fn test_disable_enable_pairs() {
        let ranges = disabled_ranges(&[
            comment("stylint-disable", 2),
            comment("stylint-enable", 5),
            comment("stylint-disable block-no-empty", 8),
        ]);

        assert_eq!(
            ranges,
            vec![
                DisabledRange::new(ALL_RULES, 2, Some(5)),
                DisabledRange::new("block-no-empty", 8, None),
            ]
        );
    }

    #[test]
    fn test_enable_only_closes_named_rules() {
        let ranges = disabled_ranges(&[
            comment("stylint-disable block-no-empty, color-no-invalid-hex", 1),
            comment("stylint-enable color-no-invalid-hex", 3),
        ]);

        assert_eq!(
            ranges,
            vec![
                DisabledRange::new("block-no-empty", 1, None),
                DisabledRange::new("color-no-invalid-hex", 1, Some(3)),
            ]
        );
    }

    #[test]
    fn test_line_directives() {
        let mut multiline = comment("stylint-disable-next-line", 4);
        multiline.end_line = 6;

        let ranges = disabled_ranges(&[comment("stylint-disable-line block-no-empty", 2), multiline]);

        assert_eq!(
            ranges,
            vec![
                DisabledRange::new("block-no-empty", 2, Some(2)),
                DisabledRange::new(ALL_RULES, 7, Some(7)),
            ]
        );
    }
}
