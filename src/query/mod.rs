pub mod evaluator;
pub mod lexer;
pub mod tokens;

pub use evaluator::{EvalError, Evaluator};
pub use lexer::{extract_symbols, scan, Scanner};
pub use tokens::{Op, Operator, StackItem, Symbol, SymbolKind};

use tracing::debug;

/// Query that matches every item without being scanned.
pub const ALL_ITEMS: &str = "{{All Fonts}}";

/// Evaluates `query` against `item_text`, reporting malformed queries.
pub fn evaluate(item_text: &str, query: &str) -> Result<bool, EvalError> {
    if query == ALL_ITEMS {
        return Ok(true);
    }

    let mut evaluator = Evaluator::new(item_text);
    for symbol in scan(query) {
        evaluator.feed(&symbol)?;
    }

    evaluator.finish(query.chars().count() + 1)
}

/// Returns whether the item with searchable text `item_text` satisfies `query`.
///
/// A malformed query matches nothing, so a query still being typed simply
/// hides every item until it becomes well-formed.
pub fn matches(item_text: &str, query: &str) -> bool {
    match evaluate(item_text, query) {
        Ok(matched) => matched,
        Err(error) => {
            debug!(query, %error, "malformed query treated as no match");
            false
        },
    }
}
