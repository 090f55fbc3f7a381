use docent::application::services::ChatSession;
use docent::domain::Turn;

#[test]
fn given_new_session_when_created_then_has_no_document_or_history() {
    let session = ChatSession::new();

    assert!(session.document_name().is_none());
    assert_eq!(session.extracted_text(), "");
    assert!(session.history().is_empty());
}

#[test]
fn given_empty_history_when_undoing_then_history_stays_empty() {
    let mut session = ChatSession::new();

    let removed = session.undo();

    assert!(removed.is_none());
    assert!(session.history().is_empty());
}

#[test]
fn given_two_turns_when_undoing_then_only_last_pair_is_removed() {
    let mut session = ChatSession::new();
    session.record_turn("q1", "a1");
    session.record_turn("q2", "a2");

    let removed = session.undo();

    assert_eq!(removed, Some(Turn::new("q2", "a2")));
    assert_eq!(session.history().turns(), &[Turn::new("q1", "a1")]);
}

#[test]
fn given_history_and_document_when_clearing_then_history_is_empty_and_document_kept() {
    let mut session = ChatSession::new();
    session.set_document("invoice.pdf", "Invoice total: $42".to_string());
    session.record_turn("q1", "a1");

    session.clear();

    assert!(session.history().is_empty());
    assert_eq!(session.extracted_text(), "Invoice total: $42");
}

#[test]
fn given_loaded_document_when_resetting_then_text_and_name_are_cleared() {
    let mut session = ChatSession::new();
    session.set_document("invoice.pdf", "Invoice total: $42".to_string());
    let before = session.updated_at();

    session.reset_document();

    assert!(session.document_name().is_none());
    assert_eq!(session.extracted_text(), "");
    assert!(session.updated_at() >= before);
}
