//! Chat card: transcript, question input, agent-mode toggle and Back action.

use leptos::prelude::*;

use crate::state::session::{Message, Sender};
use crate::util::format::{Segment, format_message};

/// Transcript plus input row. Owns no state beyond the scroll container.
#[component]
pub fn ChatView(
    #[prop(into)] messages: Signal<Vec<Message>>,
    #[prop(into)] question: Signal<String>,
    #[prop(into)] awaiting_reply: Signal<bool>,
    #[prop(into)] use_agent: Signal<bool>,
    #[prop(into)] can_approve: Signal<bool>,
    on_question: Callback<String>,
    on_send: Callback<()>,
    on_toggle_agent: Callback<bool>,
    on_approve: Callback<()>,
    on_back: Callback<()>,
) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = messages.with(Vec::len);
        let _ = awaiting_reply.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="chat-card slide-up">
            <div class="chat-header">
                <button class="back-btn" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <h2>"Repo Doc Bot"</h2>
                <label class="agent-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || use_agent.get()
                        on:change=move |ev| on_toggle_agent.run(event_target_checked(&ev))
                    />
                    "Agent mode"
                </label>
            </div>

            <div class="chat-box" node_ref=messages_ref>
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message/> })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    awaiting_reply
                        .get()
                        .then(|| view! { <div class="chat bot chat--pending">"Thinking..."</div> })
                }}
            </div>

            <Show when=move || can_approve.get()>
                <div class="chat-actions">
                    <button
                        class="btn secondary"
                        disabled=move || awaiting_reply.get()
                        on:click=move |_| on_approve.run(())
                    >
                        "Approve changes"
                    </button>
                </div>
            </Show>

            <div class="chat-input">
                <input
                    class="input"
                    type="text"
                    placeholder="Ask about repository..."
                    prop:value=move || question.get()
                    on:input=move |ev| on_question.run(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn primary"
                    disabled=move || awaiting_reply.get()
                    on:click=move |_| on_send.run(())
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// One transcript entry. User text is shown verbatim; bot replies go through
/// [`format_message`].
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    match message.sender {
        Sender::User => view! { <div class="chat user">{message.text}</div> }.into_any(),
        Sender::Bot => {
            let body = format_message(&message.text)
                .into_iter()
                .map(|segment| match segment {
                    Segment::Code(code) => view! {
                        <pre class="code-block">
                            <code>{code}</code>
                        </pre>
                    }
                    .into_any(),
                    Segment::Paragraph(line) => view! { <p class="chat-text">{line}</p> }.into_any(),
                })
                .collect::<Vec<_>>();
            view! { <div class="chat bot">{body}</div> }.into_any()
        }
    }
}
