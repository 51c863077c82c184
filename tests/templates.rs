//! Template and reset tests

mod common;

use common::test_session;
use folio::messages::{DocumentMsg, HistoryMsg, Msg};
use folio::model::NodeKind;
use folio::update::update;

#[test]
fn test_fresh_session_plus_simple_template() {
    let mut session = test_session();
    update(
        &mut session,
        Msg::Document(DocumentMsg::ApplyTemplate("simple".to_string())),
    );

    // One checkpoint beyond the seed snapshot
    assert_eq!(session.history.len(), 2);
    assert!(session.can_undo());
    assert!(!session.can_redo());
    assert!(session.controls.undo_enabled);
    assert!(!session.controls.redo_enabled);
}

#[test]
fn test_template_replaces_placeholder_document() {
    let mut session = test_session();
    assert!(session.document.has_tip());

    update(
        &mut session,
        Msg::Document(DocumentMsg::ApplyTemplate("lab".to_string())),
    );

    assert!(!session.document.has_tip());
    let headings: Vec<&str> = session
        .document
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Heading)
        .map(|n| n.text.as_str())
        .collect();
    assert_eq!(
        headings,
        vec!["Introduction", "Method", "Results", "References"]
    );
}

#[test]
fn test_unknown_template_gives_placeholder() {
    let mut session = test_session();
    update(
        &mut session,
        Msg::Document(DocumentMsg::ApplyTemplate("thesis".to_string())),
    );

    assert!(session.document.has_tip());
    assert_eq!(session.document.len(), 1);
}

#[test]
fn test_template_application_is_undoable() {
    let mut session = test_session();
    update(
        &mut session,
        Msg::Document(DocumentMsg::ApplyTemplate("simple".to_string())),
    );

    update(&mut session, Msg::History(HistoryMsg::Undo));
    // The seed snapshot is the tip placeholder; sanitation strips the
    // tip on restore, leaving the document empty of content blocks
    assert!(!session.document.has_tip());
    assert!(session
        .document
        .nodes
        .iter()
        .all(|n| n.kind != NodeKind::Title));

    update(&mut session, Msg::History(HistoryMsg::Redo));
    assert!(session
        .document
        .nodes
        .iter()
        .any(|n| n.kind == NodeKind::Title));
}

#[test]
fn test_reset_returns_to_initial_state() {
    let mut session = test_session();
    update(
        &mut session,
        Msg::Document(DocumentMsg::SetTitle("Draft".to_string())),
    );
    update(
        &mut session,
        Msg::Document(DocumentMsg::ApplyTemplate("lab".to_string())),
    );

    update(&mut session, Msg::Document(DocumentMsg::Reset));

    assert!(session.title.is_empty());
    assert!(session.document.has_tip());
    assert_eq!(session.history.len(), 1);
    assert!(!session.controls.undo_enabled);
    assert!(!session.controls.redo_enabled);
}

#[test]
fn test_set_title_is_not_a_checkpoint() {
    let mut session = test_session();
    let len = session.history.len();

    update(
        &mut session,
        Msg::Document(DocumentMsg::SetTitle("My Paper".to_string())),
    );

    assert_eq!(session.title, "My Paper");
    assert_eq!(session.history.len(), len);
}
