use portfolio_wasm::contact::Submission;
use portfolio_wasm::modal::ModalState;

#[test]
fn confirmation_quotes_name_and_email() {
    let submission = Submission::from_fields("Alex", "a@b.com").unwrap();
    assert_eq!(
        submission.confirmation(),
        "Thanks Alex! I'll get back to you at a@b.com soon."
    );
}

#[test]
fn either_empty_field_is_a_silent_no_op() {
    assert_eq!(Submission::from_fields("", "a@b.com"), None);
    assert_eq!(Submission::from_fields("Alex", ""), None);
    assert_eq!(Submission::from_fields("", ""), None);
}

#[test]
fn no_format_validation_beyond_presence() {
    let submission = Submission::from_fields(" ", "not-an-email").unwrap();
    assert_eq!(submission.email, "not-an-email");
}

#[test]
fn modal_states_map_to_display_values() {
    assert_eq!(ModalState::Open.display(), "flex");
    assert_eq!(ModalState::Closed.display(), "none");
    assert_eq!(ModalState::from_display("flex"), ModalState::Open);
    assert_eq!(ModalState::from_display(""), ModalState::Closed);
    assert_eq!(ModalState::from_display("block"), ModalState::Closed);
}
