use std::collections::HashMap;
use std::sync::LazyLock;

/// The recognized operators, in the order the tokenizer scans for suffixes.
///
/// The order is part of the tokenization contract for unspaced input: the
/// first operator that matches a buffer suffix wins, so `<` shadows `<=`
/// (see the known-quirk tests in `tokenizer.rs`).
pub const OPERATORS: [&str; 12] = [
    "!", "!=", "==", "~=", "||", "&&", "like", "exists", "<", ">", "<=", ">=",
];

static PRECEDENCE: LazyLock<HashMap<&'static str, u8>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for op in ["<", ">", "<=", ">=", "!", "!=", "==", "~=", "like", "exists"] {
        map.insert(op, 3);
    }
    map.insert("||", 2);
    map.insert("&&", 2);
    map
});

/// Returns true if `s` is not one of the recognized operators.
///
/// Case-insensitive, so `LIKE`, `Like` and `like` all classify as the
/// operator. Anything else, including parentheses and quoted literals, is
/// an operand.
pub fn is_operand(s: &str) -> bool {
    let symbol = s.to_lowercase();
    !OPERATORS.contains(&symbol.as_str())
}

/// Returns true if `a` binds looser than `b`, i.e. `a` may stay on the
/// operator stack while `b` is pushed on top of it.
///
/// Symbols missing from the precedence table never precede anything, and
/// equal tiers never precede each other in either direction, which keeps
/// same-tier chains left associative.
pub fn precedes(a: &str, b: &str) -> bool {
    let tier_a = PRECEDENCE.get(a.to_lowercase().as_str());
    let tier_b = PRECEDENCE.get(b.to_lowercase().as_str());
    match (tier_a, tier_b) {
        (Some(ta), Some(tb)) => ta < tb,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIER_THREE: [&str; 10] = [
        "<", ">", "<=", ">=", "!", "!=", "==", "~=", "like", "exists",
    ];
    const TIER_TWO: [&str; 2] = ["||", "&&"];

    #[test]
    fn test_operators_are_not_operands() {
        for op in OPERATORS {
            assert!(!is_operand(op), "{op} should not classify as operand");
        }
    }

    #[test]
    fn test_operand_check_is_case_insensitive() {
        assert!(!is_operand("LIKE"));
        assert!(!is_operand("Like"));
        assert!(!is_operand("like"));
        assert!(!is_operand("EXISTS"));
        assert!(!is_operand("eXiStS"));
    }

    #[test]
    fn test_non_operators_are_operands() {
        for token in ["LEVEL", "INFO", "'hello world'", "(", ")", "=", "123"] {
            assert!(is_operand(token), "{token} should classify as operand");
        }
    }

    #[test]
    fn test_operand_check_is_pure() {
        assert_eq!(is_operand("like"), is_operand("like"));
        assert_eq!(is_operand("LEVEL"), is_operand("LEVEL"));
    }

    #[test]
    fn test_equal_tiers_never_precede() {
        for a in TIER_THREE {
            for b in TIER_THREE {
                assert!(!precedes(a, b), "{a} should not precede {b}");
            }
        }
        for a in TIER_TWO {
            for b in TIER_TWO {
                assert!(!precedes(a, b), "{a} should not precede {b}");
            }
        }
    }

    #[test]
    fn test_logical_operators_precede_comparisons() {
        for a in TIER_TWO {
            for b in TIER_THREE {
                assert!(precedes(a, b), "{a} should precede {b}");
                assert!(!precedes(b, a), "{b} should not precede {a}");
            }
        }
    }

    #[test]
    fn test_unknown_symbols_never_precede() {
        assert!(!precedes("LEVEL", "&&"));
        assert!(!precedes("&&", "LEVEL"));
        assert!(!precedes("", "||"));
    }

    #[test]
    fn test_precedes_is_case_insensitive() {
        assert!(precedes("&&", "LIKE"));
        assert!(precedes("||", "Exists"));
    }
}
