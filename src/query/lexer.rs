use super::tokens::*;

use std::iter::Enumerate;
use std::str::CharIndices;

#[cfg(test)]
mod tests;

/// Lazy scanner over a query string.
///
/// Walks the query one character at a time. Outside a brace capture it
/// recognizes groups and operators, inside one it only waits for `}`.
/// Keyword spellings are matched at every position without word boundaries,
/// so `oror` yields two `Or` symbols and `color` yields one.
pub struct Scanner<'a> {
    src: &'a str,
    chars: Enumerate<CharIndices<'a>>,
    // (byte offset, column) of the opening brace
    capture_start: Option<(usize, usize)>,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Scanner<'a> {
        Scanner {
            src,
            chars: src.char_indices().enumerate(),
            capture_start: None,
        }
    }

    /// Column of a `{` still waiting for its `}`.
    pub fn pending_literal(&self) -> Option<usize> {
        self.capture_start.map(|(_, column)| column)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Symbol<'a>;

    fn next(&mut self) -> Option<Symbol<'a>> {
        while let Some((index, (offset, char))) = self.chars.next() {
            let column = index + 1;

            if let Some((start, start_column)) = self.capture_start {
                if char == '}' {
                    self.capture_start = None;

                    let literal = &self.src[start..offset + 1];
                    return Some(Symbol::new(
                        SKind::Literal(literal),
                        start_column,
                        column - start_column + 1,
                    ));
                }

                continue;
            }

            match char {
                '{' => self.capture_start = Some((offset, column)),
                ')' => return Some(Symbol::new(SKind::GroupClose, column, 1)),
                '(' => return Some(Symbol::new(SKind::GroupOpen, column, 1)),
                _ => {
                    if let Some((op, len)) = guess_operator(char, &self.src[offset..]) {
                        return Some(Symbol::new(SKind::Op(op), column, len));
                    }
                },
            }
        }

        None
    }
}

pub fn scan(src: &str) -> Scanner<'_> {
    Scanner::new(src)
}

/// Collects every symbol of `src`, for inspection.
pub fn extract_symbols(src: &str) -> Vec<Symbol<'_>> {
    scan(src).collect()
}

fn guess_operator(char: char, rest: &str) -> Option<(Operator, usize)> {
    OPERATORS.iter().find_map(|op| {
        let (symbol, word) = op.spellings();

        if char == symbol {
            return Some((*op, 1));
        }

        match rest.get(..word.len()) {
            Some(candidate) if candidate.eq_ignore_ascii_case(word) => Some((*op, word.len())),
            _ => None,
        }
    })
}
