use crate::Tree;
use derive_more::{Display, Error};
use std::str::FromStr;

/// The reason a tree failed to parse, with the byte offset it failed at.
#[derive(Debug, Display, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParseError {
    /// A label was required but missing, e.g. `()`, `,,`, or empty input.
    #[display(fmt = "expected a label at byte {}", at)]
    ExpectedLabel { at: usize },

    /// A character that is neither alphanumeric, a delimiter, a comma, nor
    /// whitespace.
    #[display(fmt = "unexpected character {:?} at byte {}", ch, at)]
    UnexpectedChar { ch: char, at: usize },

    /// A `)` or `]` with no matching opening delimiter.
    #[display(fmt = "unmatched closing delimiter at byte {}", at)]
    UnmatchedClose { at: usize },

    /// A `)` closing a `[`, or a `]` closing a `(`.
    #[display(fmt = "mismatched closing delimiter at byte {}", at)]
    MismatchedClose { at: usize },

    /// A `(` or `[` that was never closed.
    #[display(fmt = "unclosed delimiter opened at byte {}", at)]
    Unclosed { at: usize },

    /// A second top-level tree; a [Tree] has a single root.
    #[display(fmt = "second root at byte {}", at)]
    SecondRoot { at: usize },
}

/// Parses the nested-parenthesis tree notation, e.g. `f(d(a,c(b)),e)`.
///
/// A tree is a label optionally followed by a parenthesized, comma-separated
/// list of child trees. Labels are maximal runs of ASCII alphanumeric
/// characters; `()` and `[]` are interchangeable delimiter pairs, though each
/// closer must match its opener; whitespace is insignificant. Children end up
/// in the arena in reading order, which is the order the edit distance is
/// defined over.
///
/// The parser scans bytes with an explicit stack of open parents, so deeply
/// nested input cannot overflow the call stack.
impl FromStr for Tree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let mut tree = Tree::default();

        // Open delimiters, as (parent node, byte offset, opener byte).
        let mut parents: Vec<(usize, usize, u8)> = Vec::new();

        // The most recently completed node; the parent adopted by `(`.
        let mut last = None;

        // Whether a label must still appear before the next `,`, `)` or the
        // end of input; true initially and after every `(` and `,`.
        let mut pending = true;

        let mut at = 0;
        while at < bytes.len() {
            match bytes[at] {
                b if b.is_ascii_whitespace() => at += 1,

                open @ (b'(' | b'[') => {
                    let parent = last.take().ok_or(ParseError::ExpectedLabel { at })?;
                    parents.push((parent, at, open));
                    pending = true;
                    at += 1;
                }

                close @ (b')' | b']') => {
                    if pending {
                        return Err(ParseError::ExpectedLabel { at });
                    }

                    let (_, _, open) = parents.pop().ok_or(ParseError::UnmatchedClose { at })?;
                    if (open == b'(') != (close == b')') {
                        return Err(ParseError::MismatchedClose { at });
                    }

                    // A closed node cannot adopt further children.
                    last = None;
                    at += 1;
                }

                b',' => {
                    if pending {
                        return Err(ParseError::ExpectedLabel { at });
                    }

                    last = None;
                    pending = true;
                    at += 1;
                }

                b if b.is_ascii_alphanumeric() => {
                    let start = at;
                    while at < bytes.len() && bytes[at].is_ascii_alphanumeric() {
                        at += 1;
                    }

                    let parent = parents.last().map(|&(p, _, _)| p);
                    if parent.is_none() && tree.root().is_some() {
                        return Err(ParseError::SecondRoot { at: start });
                    }

                    last = Some(tree.push(&s[start..at], parent));
                    pending = false;
                }

                _ => {
                    let ch = s[at..].chars().next().unwrap_or_default();
                    return Err(ParseError::UnexpectedChar { ch, at });
                }
            }
        }

        if let Some(&(_, at, _)) = parents.last() {
            return Err(ParseError::Unclosed { at });
        }

        if pending {
            // Covers empty input and a trailing comma alike.
            return Err(ParseError::ExpectedLabel { at });
        }

        Ok(tree)
    }
}
