//! Structural scanner for CSS source.
//!
//! Walks the source once, tracking line and column through comments, strings
//! and braces, and collects what the rules and disable comments need.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::SyntaxError;

/// Name reported for structural errors.
pub const SYNTAX_ERROR_NAME: &str = "CssSyntaxError";

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A `/* ... */` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Text between the delimiters.
    pub text: String,
    pub start: Position,
    /// Line of the closing `*/`.
    pub end_line: u32,
}

/// A `#` token found in a declaration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexToken {
    /// The token including the leading `#`.
    pub value: String,
    pub position: Position,
}

#[derive(Debug, Default)]
pub struct Scan {
    pub comments: Vec<Comment>,
    /// Opening brace of every block holding only whitespace and comments.
    pub empty_blocks: Vec<Position>,
    pub hex_tokens: Vec<HexToken>,
}

struct OpenBlock {
    position: Position,
    has_content: bool,
}

struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn next(&mut self) -> Option<(char, Position)> {
        let c = self.chars.next()?;
        let position = Position::new(self.line, self.column);
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some((c, position))
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }
}

/// Scans `source`, failing on the first structural error.
pub fn scan(source: &str) -> Result<Scan, SyntaxError> {
    let mut scan = Scan::default();
    let mut blocks: Vec<OpenBlock> = Vec::new();
    let mut in_value = false;
    let mut cursor = Cursor::new(source);

    while let Some((c, position)) = cursor.next() {
        match c {
            '/' if cursor.peek() == Some('*') => {
                cursor.next();
                let mut text = String::new();
                loop {
                    match cursor.next() {
                        Some(('*', _)) if cursor.peek() == Some('/') => {
                            cursor.next();
                            break;
                        }
                        Some((c, _)) => text.push(c),
                        None => return Err(syntax_error("Unclosed comment", position)),
                    }
                }
                scan.comments.push(Comment {
                    text,
                    start: position,
                    end_line: cursor.line,
                });
            }
            '"' | '\'' => {
                mark_content(&mut blocks);
                loop {
                    match cursor.next() {
                        Some(('\\', _)) => {
                            cursor.next();
                        }
                        Some((q, _)) if q == c => break,
                        Some(('\n', _)) | None => {
                            return Err(syntax_error("Unclosed string", position));
                        }
                        Some(_) => {}
                    }
                }
            }
            '{' => {
                mark_content(&mut blocks);
                blocks.push(OpenBlock {
                    position,
                    has_content: false,
                });
                in_value = false;
            }
            '}' => {
                let Some(block) = blocks.pop() else {
                    return Err(syntax_error("Unexpected }", position));
                };
                if !block.has_content {
                    scan.empty_blocks.push(block.position);
                }
                in_value = false;
            }
            ';' => {
                mark_content(&mut blocks);
                in_value = false;
            }
            ':' if !blocks.is_empty() => {
                mark_content(&mut blocks);
                in_value = true;
            }
            '#' => {
                mark_content(&mut blocks);
                let mut value = String::from('#');
                while let Some(next) = cursor.peek().filter(|c| c.is_ascii_alphanumeric()) {
                    value.push(next);
                    cursor.next();
                }
                if in_value && value.len() > 1 {
                    scan.hex_tokens.push(HexToken { value, position });
                }
            }
            c if c.is_whitespace() => {}
            _ => mark_content(&mut blocks),
        }
    }

    if let Some(block) = blocks.last() {
        return Err(syntax_error("Unclosed block", block.position));
    }

    Ok(scan)
}

fn mark_content(blocks: &mut [OpenBlock]) {
    if let Some(block) = blocks.last_mut() {
        block.has_content = true;
    }
}

fn syntax_error(reason: &str, position: Position) -> SyntaxError {
    SyntaxError::new(SYNTAX_ERROR_NAME, reason, position.line, position.column)
}
