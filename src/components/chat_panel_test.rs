use super::*;

// =============================================================
// entry_keys
// =============================================================

#[test]
fn entry_keys_follow_log_order_and_mark_placeholders() {
    let mut state = ChatState::default();
    let user = state.push_user("hi");
    let typing = state.insert_placeholder(1.0);
    assert_eq!(entry_keys(&state), vec![(user, false), (typing, true)]);
}

#[test]
fn entry_keys_ignore_input_and_scroll() {
    let mut state = ChatState::default();
    state.push_user("hi");
    let bot = state.push_bot_pending("hello", None);
    let before = entry_keys(&state);

    state.input = "next question".to_owned();
    state.scroll.note_manual_scroll(42.0);
    assert_eq!(entry_keys(&state), before);

    state.reveal_next(&bot);
    state.finish_reveal(&bot);
    assert_eq!(entry_keys(&state), before);
}

#[test]
fn revealing_one_reply_leaves_other_rows_unchanged() {
    let mut state = ChatState::default();
    let earlier = state.push_bot_pending("**done**", None);
    while state.reveal_next(&earlier) == crate::state::chat::RevealStep::Advanced {}
    state.finish_reveal(&earlier);
    let current = state.push_bot_pending("new", None);

    let version = |state: &ChatState, id: &str| state.message(id).map(ChatMessage::render_version);
    let earlier_before = version(&state, &earlier);
    let current_before = version(&state, &current);

    state.reveal_next(&current);
    assert_eq!(version(&state, &earlier), earlier_before);
    assert_ne!(version(&state, &current), current_before);
}
