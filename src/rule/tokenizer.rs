use std::collections::VecDeque;

use super::operators::OPERATORS;
use crate::fields::{FieldResolver, PROP_FIELD};

/// Splits a filter expression into tokens.
///
/// Tokens are normally separated by single spaces, but the scanner also
/// splits operators and parentheses glued directly onto an operand
/// (`LEVEL==INFO`, `(a`), and keeps a single-quoted literal together across
/// interior spaces. The whole input is scanned up front; tokens are then
/// popped destructively, front to back, with no lookahead or rewind.
pub struct ExpressionTokenizer {
    tokens: VecDeque<String>,
}

impl ExpressionTokenizer {
    pub fn new(input: &str, resolver: &dyn FieldResolver) -> Self {
        Self {
            tokens: scan(input, resolver),
        }
    }

    pub fn has_more_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Removes and returns the next token.
    pub fn next_token(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }
}

fn is_property_name(buffer: &str) -> bool {
    buffer.to_uppercase().starts_with(PROP_FIELD)
}

/// Single left-to-right pass over the input with one accumulation buffer.
///
/// Outside a quoted literal, every appended character is followed by a
/// cascade of ordered guard clauses on the buffer; the first clause that
/// fires flushes the buffer and the scan moves on.
fn scan(input: &str, resolver: &dyn FieldResolver) -> VecDeque<String> {
    let mut tokens = VecDeque::new();
    let mut buffer = String::new();
    let mut in_quote = false;

    for ch in input.chars() {
        if in_quote {
            buffer.push(ch);
            if ch == '\'' {
                // Closing quote: the literal, quotes included, is one token.
                in_quote = false;
                tokens.push_back(std::mem::take(&mut buffer));
            }
        } else if ch == '\'' {
            in_quote = true;
            buffer.push(ch);
        } else if ch == ' ' {
            // Only the space character separates tokens; the separator
            // itself is discarded.
            if !buffer.trim().is_empty() {
                tokens.push_back(std::mem::take(&mut buffer));
            } else {
                buffer.clear();
            }
        } else {
            buffer.push(ch);
            if resolver.is_field(&buffer) && !is_property_name(&buffer) {
                // A complete non-property field name ends its token even
                // with no whitespace after it.
                tokens.push_back(std::mem::take(&mut buffer));
            } else if is_property_name(&buffer) {
                flush_property_buffer(&mut tokens, &mut buffer);
            } else {
                flush_plain_buffer(&mut tokens, &mut buffer);
            }
        }
    }

    if !buffer.is_empty() {
        tokens.push_back(buffer);
    }
    tokens
}

/// Guard cascade for a buffer that is building a property field name.
///
/// Property names may contain arbitrary characters, so the name only ends
/// at an operator suffix, a `!`, or a parenthesis. There is no
/// exact-operator clause here: the buffer starts with the property prefix.
fn flush_property_buffer(tokens: &mut VecDeque<String>, buffer: &mut String) {
    if split_operator_suffix(tokens, buffer, true) {
        return;
    }
    if split_bang(tokens, buffer) {
        return;
    }
    split_paren_suffix(tokens, buffer);
}

/// Guard cascade for an ordinary (non-field, non-property) buffer.
fn flush_plain_buffer(tokens: &mut VecDeque<String>, buffer: &mut String) {
    if split_operator_suffix(tokens, buffer, false) {
        return;
    }
    if split_bang(tokens, buffer) {
        return;
    }
    if emit_exact_operator(tokens, buffer) {
        return;
    }
    split_paren_suffix(tokens, buffer);
}

/// Splits a trailing operator off the buffer.
///
/// Scans the operator table in its fixed order and cuts at the first
/// occurrence of the matched operator, emitting the leading operand (when
/// not blank) and then the operator. `!` is skipped so it cannot shadow
/// `!=`; [`split_bang`] handles it afterwards. When `split_exact` is false
/// a buffer that is exactly an operator is left for the exact-match clause.
fn split_operator_suffix(
    tokens: &mut VecDeque<String>,
    buffer: &mut String,
    split_exact: bool,
) -> bool {
    for op in OPERATORS {
        if op == "!" {
            continue;
        }
        if !split_exact && buffer.as_str() == op {
            continue;
        }
        if buffer.ends_with(op) {
            if let Some(idx) = buffer.find(op) {
                let prefix = &buffer[..idx];
                if !prefix.trim().is_empty() {
                    tokens.push_back(prefix.to_string());
                }
                tokens.push_back(op.to_string());
                buffer.clear();
                return true;
            }
        }
    }
    false
}

/// Disambiguates `!` glued between two operands.
///
/// When the second-to-last character is `!` and the buffer does not end in
/// `!=`, the `!` is an operator: emit the operand before the first `!`,
/// emit `!`, and re-seed the buffer with the trailing character so it is
/// not lost. Looking only one character past the `!` is a deliberate
/// heuristic carried over from the original filter DSL; it can misread
/// operands that legitimately contain `!` (covered by the quirk tests).
fn split_bang(tokens: &mut VecDeque<String>, buffer: &mut String) -> bool {
    if buffer.chars().count() <= 2 || buffer.ends_with("!=") {
        return false;
    }
    let mut rev = buffer.chars().rev();
    let last = rev.next();
    if rev.next() != Some('!') {
        return false;
    }
    if let (Some(idx), Some(tail)) = (buffer.find('!'), last) {
        tokens.push_back(buffer[..idx].to_string());
        tokens.push_back("!".to_string());
        buffer.clear();
        buffer.push(tail);
        return true;
    }
    false
}

/// Emits a buffer that is exactly a (non-`!`) operator.
fn emit_exact_operator(tokens: &mut VecDeque<String>, buffer: &mut String) -> bool {
    for op in OPERATORS {
        if op == "!" {
            continue;
        }
        if buffer.as_str() == op {
            tokens.push_back(std::mem::take(buffer));
            return true;
        }
    }
    false
}

/// Splits a trailing `(` or `)` off the buffer, emitting the leading
/// operand first when not blank.
fn split_paren_suffix(tokens: &mut VecDeque<String>, buffer: &mut String) {
    for paren in ['(', ')'] {
        if buffer.ends_with(paren) {
            if let Some(idx) = buffer.find(paren) {
                let prefix = &buffer[..idx];
                if !prefix.trim().is_empty() {
                    tokens.push_back(prefix.to_string());
                }
                tokens.push_back(paren.to_string());
                buffer.clear();
            }
        }
    }
}
