use super::*;

#[test]
fn accepts_matching_passwords_of_minimum_length() {
    assert_eq!(validate_change_password("old-pw", "secret", "secret"), Ok(()));
}

#[test]
fn requires_every_field() {
    assert_eq!(
        validate_change_password("", "secret", "secret"),
        Err("Please fill in all password fields.")
    );
    assert_eq!(
        validate_change_password("old-pw", "", ""),
        Err("Please fill in all password fields.")
    );
}

#[test]
fn rejects_mismatched_confirmation() {
    assert_eq!(
        validate_change_password("old-pw", "secret", "secres"),
        Err("New passwords do not match")
    );
}

#[test]
fn rejects_short_new_password() {
    assert_eq!(
        validate_change_password("old-pw", "five5", "five5"),
        Err("Password must be at least 6 characters")
    );
}
