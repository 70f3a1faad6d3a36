pub use Operator as Op;
pub use SymbolKind as SKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Not,
    And,
    Or,
}

impl Operator {
    pub fn spellings(&self) -> (char, &'static str) {
        match self {
            Operator::Not => ('!', "not"),
            Operator::Or => ('|', "or"),
            Operator::And => ('&', "and"),
        }
    }
}

/// Value kept on the evaluation stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackItem {
    Bool(bool),
    Op(Operator),
    GroupOpen,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol<'a> {
    kind: SymbolKind<'a>,
    column: usize,
    len: usize,
}

impl<'a> Symbol<'a> {
    pub(super) fn new(kind: SymbolKind<'a>, column: usize, len: usize) -> Symbol<'a> {
        Symbol { kind, column, len }
    }

    pub fn get_kind(&self) -> &SymbolKind<'a> {
        &self.kind
    }

    /// 1-based column of the first character.
    pub fn get_column(&self) -> usize {
        self.column
    }

    /// Length in characters.
    pub fn get_len(&self) -> usize {
        self.len
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolKind<'a> {
    /// Brace-wrapped tag literal, braces included.
    Literal(&'a str),
    GroupOpen,
    GroupClose,
    Op(Operator),
}

pub const OPERATORS: [Operator; 3] = [Operator::Not, Operator::Or, Operator::And];
