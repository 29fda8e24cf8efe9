//! Assistant chat panel: transcript, quick actions, and input row.
//!
//! Replies are synthesized by keyword matching and appended after a fixed
//! one-second delay. The deferred reply is tied to the panel's lifetime: an
//! alive flag flipped in `on_cleanup` keeps a pending timer from appending
//! into a torn-down panel.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::types::Author;
use crate::state::app::AppState;
use crate::state::chat::{ChatState, select_reply};

/// Delay before a synthesized reply lands in the transcript.
#[cfg(feature = "hydrate")]
const REPLY_DELAY: std::time::Duration = std::time::Duration::from_secs(1);

const QUICK_ACTIONS: [&str; 4] = [
    "Show available datasets",
    "Create a new video project",
    "Help with map tools",
    "AI processing options",
];

/// Chat panel showing the transcript and an input for new messages.
#[component]
pub fn ChatBot() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let alive = StoredValue::new(Arc::new(AtomicBool::new(true)));
    on_cleanup(move || alive.get_value().store(false, Ordering::Relaxed));

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }

        chat.update(|c| {
            c.push_user_message(&text);
        });
        input.set(String::new());

        let reply = select_reply(&text);
        #[cfg(feature = "hydrate")]
        {
            let alive_flag = alive.get_value();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(REPLY_DELAY).await;
                if !alive_flag.load(Ordering::Relaxed) {
                    return;
                }
                chat.update(|c| c.push_bot_reply(reply));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = reply;
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-bot">
            <div class="chat-bot__header">
                <div>
                    <h3>"AI Assistant"</h3>
                    <p class="chat-bot__status">"Online"</p>
                </div>
                <button
                    class="btn chat-bot__close"
                    on:click=move |_| app.update(|a| a.set_chat_open(false))
                    title="Close assistant"
                >
                    "✕"
                </button>
            </div>

            <div class="chat-bot__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let from_user = msg.author == Author::User;
                            let content = msg.content.clone();
                            view! {
                                <div
                                    class="chat-bot__message"
                                    class:chat-bot__message--user=from_user
                                >
                                    <p class="chat-bot__text">{content}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat-bot__quick-actions">
                <p class="chat-bot__quick-label">"Quick actions:"</p>
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button
                                class="chat-bot__quick-action"
                                on:click=move |_| input.set(action.to_owned())
                            >
                                {action}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chat-bot__input-row">
                <input
                    class="chat-bot__input"
                    type="text"
                    placeholder="Ask me anything..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-bot__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
