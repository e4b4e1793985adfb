use super::*;

#[test]
fn finds_param_with_leading_question_mark() {
    assert_eq!(non_empty_param("?token=abc123", "token"), Some("abc123".to_owned()));
}

#[test]
fn finds_param_without_leading_question_mark() {
    assert_eq!(non_empty_param("token=abc123", "token"), Some("abc123".to_owned()));
}

#[test]
fn finds_param_among_others() {
    assert_eq!(
        non_empty_param("?state=xyz&error=access_denied&token=abc", "error"),
        Some("access_denied".to_owned())
    );
}

#[test]
fn missing_param_is_none() {
    assert_eq!(non_empty_param("?token=abc", "error"), None);
}

#[test]
fn empty_value_counts_as_absent() {
    assert_eq!(non_empty_param("?error=&token=abc", "error"), None);
}

#[test]
fn bare_key_without_equals_counts_as_absent() {
    assert_eq!(non_empty_param("?error&token=abc", "error"), None);
}

#[test]
fn empty_query_is_none() {
    assert_eq!(non_empty_param("", "token"), None);
    assert_eq!(non_empty_param("?", "token"), None);
}

#[test]
fn percent_decodes_values() {
    assert_eq!(
        non_empty_param("?error=server%20error%2Ftry%20again", "error"),
        Some("server error/try again".to_owned())
    );
}

#[test]
fn first_occurrence_wins() {
    assert_eq!(non_empty_param("?token=first&token=second", "token"), Some("first".to_owned()));
}
