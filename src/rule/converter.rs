use super::operators::{is_operand, precedes};
use super::tokenizer::ExpressionTokenizer;
use crate::fields::FieldResolver;

/// Converts an infix filter expression to postfix (Reverse Polish) form.
///
/// The output is a single string of tokens separated by one space, with a
/// trailing space after the final token; downstream postfix parsers split
/// it on whitespace. Conversion never fails: unknown tokens pass through
/// as operands, an unmatched `)` ends its group early, and an unmatched
/// `(` absorbs the rest of the expression. Structural validation belongs
/// to whatever evaluates the postfix stream.
pub fn convert(expression: &str, resolver: &dyn FieldResolver) -> String {
    let mut tokenizer = ExpressionTokenizer::new(expression, resolver);
    convert_scope(&mut tokenizer)
}

/// One conversion scope: the top level, or the inside of one parenthesis
/// pair. Scopes share the tokenizer cursor but each owns its operator
/// stack, so a `)` terminates exactly the innermost open scope.
fn convert_scope(tokenizer: &mut ExpressionTokenizer) -> String {
    let mut postfix = String::new();
    let mut stack: Vec<String> = Vec::new();

    while let Some(mut token) = tokenizer.next_token() {
        // Re-assemble a single-quoted literal in case tokenization split
        // it across whitespace anyway.
        if token.starts_with('\'') && !token.ends_with('\'') {
            while !token.ends_with('\'') && tokenizer.has_more_tokens() {
                if let Some(next) = tokenizer.next_token() {
                    token.push(' ');
                    token.push_str(&next);
                }
            }
        }

        if token == "(" {
            // A group's postfix form is computed in full, then spliced in
            // place as an already-emitted operand. A non-empty group ends
            // with its own trailing space.
            postfix.push_str(&convert_scope(tokenizer));
        } else if token == ")" {
            while let Some(op) = stack.pop() {
                postfix.push_str(&op);
                postfix.push(' ');
            }
            return postfix;
        } else if is_operand(&token) {
            postfix.push_str(&token);
            postfix.push(' ');
        } else {
            // Operator: pop anything that binds at least as tight, then
            // push. Equal tiers pop too, which keeps same-tier chains
            // left associative.
            while stack.last().is_some_and(|top| !precedes(top, &token)) {
                if let Some(op) = stack.pop() {
                    postfix.push_str(&op);
                    postfix.push(' ');
                }
            }
            stack.push(token);
        }
    }

    while let Some(op) = stack.pop() {
        postfix.push_str(&op);
        postfix.push(' ');
    }
    postfix
}

/// Splits a postfix string back into tokens, re-joining the fragments of
/// a single-quoted literal. This is the whitespace-splitting contract the
/// postfix output is written for, packaged for downstream consumers.
pub fn split_postfix(postfix: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut literal: Option<String> = None;

    for part in postfix.split_whitespace() {
        match literal.as_mut() {
            Some(buf) => {
                buf.push(' ');
                buf.push_str(part);
                if part.ends_with('\'') {
                    if let Some(done) = literal.take() {
                        tokens.push(done);
                    }
                }
            }
            None => {
                if part.starts_with('\'') && !part.ends_with('\'') {
                    literal = Some(part.to_string());
                } else {
                    tokens.push(part.to_string());
                }
            }
        }
    }

    // Unterminated literal: keep whatever was gathered.
    if let Some(rest) = literal {
        tokens.push(rest);
    }
    tokens
}
