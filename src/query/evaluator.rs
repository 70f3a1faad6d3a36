use super::tokens::*;

use thiserror::Error;
use tracing::trace;


/// Structural problems found while reducing a query.
///
/// Columns are 1-based character positions in the query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("missing operand near column {column}")]
    StackUnderflow { column: usize },

    #[error("`)` at column {column} does not close any group")]
    UnbalancedGroup { column: usize },

    #[error("operator at column {column} has no operand")]
    DanglingOperator { column: usize },

    #[error("group opened at column {column} is never closed")]
    UnclosedGroup { column: usize },

    #[error("query contains no tag literal")]
    EmptyQuery,
}

impl EvalError {
    pub fn column(&self) -> Option<usize> {
        match self {
            EvalError::StackUnderflow { column }
            | EvalError::UnbalancedGroup { column }
            | EvalError::DanglingOperator { column }
            | EvalError::UnclosedGroup { column } => Some(*column),
            EvalError::EmptyQuery => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    item: StackItem,
    column: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Stop { group_column: usize },
}

/// Stack machine matching one query against one item.
///
/// Symbols are fed in scan order. A `)` collapses the innermost group at
/// once and [`Evaluator::finish`] folds whatever is left. Each reduction
/// takes the most recently pushed operator, so a flat `a & b | c` is read
/// as `a & (b | c)`.
pub struct Evaluator<'a> {
    item_text: &'a str,
    stack: Vec<Entry>,
}

impl<'a> Evaluator<'a> {
    pub fn new(item_text: &'a str) -> Evaluator<'a> {
        Evaluator {
            item_text,
            stack: vec![],
        }
    }

    pub fn feed(&mut self, symbol: &Symbol) -> Result<(), EvalError> {
        let column = symbol.get_column();

        match symbol.get_kind() {
            SKind::Literal(literal) => {
                let found = self.item_text.contains(literal);
                trace!(literal, found, "literal");
                self.push(StackItem::Bool(found), column);
            },
            SKind::GroupOpen => self.push(StackItem::GroupOpen, column),
            SKind::Op(op) => self.push(StackItem::Op(*op), column),
            SKind::GroupClose => self.close_group(column)?,
        }

        Ok(())
    }

    /// Folds the remaining stack into the final value.
    ///
    /// `end_column` is reported when the stack runs out of operands.
    pub fn finish(mut self, end_column: usize) -> Result<bool, EvalError> {
        while self.stack.len() > 1 {
            if let Some(Entry { item: StackItem::GroupOpen, column }) = self.stack.last() {
                return Err(EvalError::UnclosedGroup { column: *column });
            }

            if let Step::Stop { group_column } = self.reduce_one(end_column)? {
                return Err(EvalError::UnclosedGroup { column: group_column });
            }
        }

        match self.stack.pop() {
            Some(Entry { item: StackItem::Bool(value), .. }) => Ok(value),
            Some(Entry { item: StackItem::Op(_), column }) => {
                Err(EvalError::DanglingOperator { column })
            },
            Some(Entry { item: StackItem::GroupOpen, column }) => {
                Err(EvalError::UnclosedGroup { column })
            },
            None => Err(EvalError::EmptyQuery),
        }
    }

    fn push(&mut self, item: StackItem, column: usize) {
        trace!(?item, column, depth = self.stack.len() + 1, "push");
        self.stack.push(Entry { item, column });
    }

    fn close_group(&mut self, column: usize) -> Result<(), EvalError> {
        let open = self.stack.iter().any(|entry| entry.item == StackItem::GroupOpen);
        if !open {
            return Err(EvalError::UnbalancedGroup { column });
        }

        while let Step::Continue = self.reduce_one(column)? {}

        Ok(())
    }

    fn reduce_one(&mut self, at: usize) -> Result<Step, EvalError> {
        let right = match self.stack.pop() {
            Some(Entry { item: StackItem::Bool(value), .. }) => value,
            Some(Entry { item: StackItem::Op(_), column }) => {
                return Err(EvalError::DanglingOperator { column });
            },
            Some(Entry { item: StackItem::GroupOpen, column }) => {
                return Err(EvalError::StackUnderflow { column });
            },
            None => return Err(EvalError::StackUnderflow { column: at }),
        };

        let op = match self.stack.pop() {
            Some(entry) => entry,
            None => return Err(EvalError::StackUnderflow { column: at }),
        };

        let result = match op.item {
            StackItem::GroupOpen => {
                trace!(value = right, column = op.column, "group closed");
                self.stack.push(Entry { item: StackItem::Bool(right), column: op.column });
                return Ok(Step::Stop { group_column: op.column });
            },
            StackItem::Op(Op::Not) => !right,
            StackItem::Op(Op::And) => self.pop_left(op.column)? && right,
            StackItem::Op(Op::Or) => self.pop_left(op.column)? || right,
            StackItem::Bool(_) => return Err(EvalError::StackUnderflow { column: op.column }),
        };

        trace!(op = ?op.item, result, "reduced");
        self.stack.push(Entry { item: StackItem::Bool(result), column: op.column });

        Ok(Step::Continue)
    }

    fn pop_left(&mut self, column: usize) -> Result<bool, EvalError> {
        match self.stack.pop() {
            Some(Entry { item: StackItem::Bool(value), .. }) => Ok(value),
            _ => Err(EvalError::StackUnderflow { column }),
        }
    }
}
