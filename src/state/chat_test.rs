use super::*;

// =============================================================
// Transcript
// =============================================================

#[test]
fn default_transcript_seeds_one_bot_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].author, Author::Bot);
    assert_eq!(state.messages[0].content, GREETING);
}

#[test]
fn push_user_message_ignores_blank_input() {
    let mut state = ChatState::default();
    assert!(!state.push_user_message(""));
    assert!(!state.push_user_message("   "));
    assert!(!state.push_user_message("\n\t"));
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn push_user_message_appends_exactly_one_entry() {
    let mut state = ChatState::default();
    assert!(state.push_user_message("show me the map"));
    assert_eq!(state.messages.len(), 2);
    let last = state.messages.last().unwrap();
    assert_eq!(last.author, Author::User);
    assert_eq!(last.content, "show me the map");
}

#[test]
fn transcript_preserves_insertion_order() {
    let mut state = ChatState::default();
    state.push_user_message("first");
    state.push_bot_reply("second");
    state.push_user_message("third");
    let contents: Vec<&str> = state.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec![GREETING, "first", "second", "third"]);
}

// =============================================================
// Reply selection priority
// =============================================================

#[test]
fn dataset_keywords_win_over_everything_later() {
    // "dataset" and "video" both present; dataset is checked first.
    let reply = select_reply("Tell me about a dataset and a video");
    assert!(reply.contains("BHUVAN"));
    assert!(reply.contains("MOSDAC"));
}

#[test]
fn map_keyword_beats_help_keyword() {
    // "how" and "map" both present; map/location is checked before help/how.
    let reply = select_reply("how do I use the map");
    assert!(reply.contains("WMS layers"));
    assert!(!reply.contains("I'm here to help"));
}

#[test]
fn video_keywords_select_the_workflow_reply() {
    assert!(select_reply("I want an ANIMATION").contains("interpolation settings"));
    assert!(select_reply("make a video please").contains("RIFE"));
}

#[test]
fn help_keywords_select_the_capability_summary() {
    assert!(select_reply("help!").starts_with("I'm here to help!"));
    assert!(select_reply("how does this work").starts_with("I'm here to help!"));
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(select_reply("DATASET"), select_reply("dataset"));
}

#[test]
fn unmatched_input_gets_the_generic_fallback() {
    let reply = select_reply("tell me a joke");
    assert!(reply.starts_with("That's an interesting question!"));
}
