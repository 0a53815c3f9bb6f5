use log_rule::{ExpressionTokenizer, FieldResolver, LogEventFields};

fn tokenize(input: &str) -> Vec<String> {
    let fields = LogEventFields::new();
    let mut tokenizer = ExpressionTokenizer::new(input, &fields);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token() {
        tokens.push(token);
    }
    tokens
}

#[test]
fn test_operator_glued_to_recognized_field() {
    assert_eq!(tokenize("LEVEL==INFO"), ["LEVEL", "==", "INFO"]);
}

#[test]
fn test_field_recognition_is_destructive_and_ordered() {
    let fields = LogEventFields::new();
    let mut tokenizer = ExpressionTokenizer::new("LEVEL == ERROR", &fields);
    assert_eq!(tokenizer.next_token().as_deref(), Some("LEVEL"));
    assert_eq!(tokenizer.next_token().as_deref(), Some("=="));
    assert_eq!(tokenizer.next_token().as_deref(), Some("ERROR"));
    assert_eq!(tokenizer.next_token(), None);
    assert!(!tokenizer.has_more_tokens());
}

#[test]
fn test_quoted_literal_keeps_interior_spaces() {
    assert_eq!(
        tokenize("MSG == 'connection timed out'"),
        ["MSG", "==", "'connection timed out'"]
    );
}

#[test]
fn test_parens_need_no_spaces() {
    assert_eq!(
        tokenize("(LEVEL==WARN)||(LEVEL==ERROR)"),
        ["(", "LEVEL", "==", "WARN", ")", "||", "(", "LEVEL", "==", "ERROR", ")"]
    );
}

#[test]
fn test_property_fields_accumulate_arbitrary_characters() {
    assert_eq!(
        tokenize("PROP.my-app/region!=eu"),
        ["PROP.my-app/region", "!=", "eu"]
    );
}

#[test]
fn test_custom_resolver_controls_field_cut() {
    struct OneField;
    impl FieldResolver for OneField {
        fn is_field(&self, name: &str) -> bool {
            name == "HOST"
        }
    }
    let mut tokenizer = ExpressionTokenizer::new("HOST==web1", &OneField);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token() {
        tokens.push(token);
    }
    assert_eq!(tokens, ["HOST", "==", "web1"]);
}
