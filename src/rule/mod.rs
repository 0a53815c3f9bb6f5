//! Filter-rule expression compilation
//!
//! This module turns an infix boolean filter expression for selecting log
//! records into postfix (Reverse Polish) notation, which downstream rule
//! evaluators consume without needing parentheses or precedence logic.
//!
//! # Syntax
//!
//! ```text
//! FIELD op VALUE          field comparison, e.g. LEVEL == ERROR
//! expr && expr            both sides must match
//! expr || expr            either side matches
//! ! expr                  negation
//! ( expr )                grouping
//! 'multi word value'      single quotes keep spaces inside one operand
//! ```
//!
//! Operators: `!`, `!=`, `==`, `~=`, `||`, `&&`, `like`, `exists`, `<`,
//! `>`, `<=`, `>=` (case-insensitive). Comparisons and `!` bind tighter
//! than `&&` / `||`; same-tier chains evaluate left to right.
//!
//! Operators glued directly onto operands are split without requiring
//! spaces (`LEVEL==INFO`), and recognized field names end their token as
//! soon as they are complete.
//!
//! # Examples
//!
//! ```text
//! LEVEL == ERROR                          ->  LEVEL ERROR ==
//! LEVEL == ERROR && MSG ~= 'time out'     ->  LEVEL ERROR == MSG 'time out' ~= &&
//! ( LEVEL == WARN || LEVEL == ERROR ) && LOGGER like 'org.*'
//!                                         ->  LEVEL WARN == LEVEL ERROR == || LOGGER 'org.*' like &&
//! ```
//!
//! The compiler is deliberately lenient: unknown tokens pass through as
//! operands and unbalanced input produces a best-effort result instead of
//! an error. Validation is the evaluator's job.

pub mod converter;
pub mod operators;
pub mod tokenizer;

pub use converter::{convert, split_postfix};
pub use operators::{OPERATORS, is_operand, precedes};
pub use tokenizer::ExpressionTokenizer;
