use super::*;

#[test]
fn validate_signup_input_trims_name_and_email() {
    assert_eq!(
        validate_signup_input("  Jane  ", " jane@example.com ", "hunter2"),
        Ok(("Jane".to_owned(), "jane@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(
        validate_signup_input("", "jane@example.com", "hunter2"),
        Err("Please fill in all fields.")
    );
    assert_eq!(validate_signup_input("Jane", "  ", "hunter2"), Err("Please fill in all fields."));
    assert_eq!(
        validate_signup_input("Jane", "jane@example.com", ""),
        Err("Please fill in all fields.")
    );
}

#[test]
fn validate_signup_input_keeps_password_verbatim() {
    let (_, _, password) = validate_signup_input("Jane", "jane@example.com", " p w ").unwrap();
    assert_eq!(password, " p w ");
}
