//! Chat page. Messages are session-local; the seller side is a canned reply
//! sent one second after each message so the thread feels alive.

use dioxus::prelude::*;
use store::ItemId;
use ui::Navbar;

use crate::data;
use crate::views::Protected;

#[derive(Clone, PartialEq)]
struct ChatMessage {
    from_me: bool,
    text: String,
    time: String,
}

/// Wall-clock "HH:MM" for message stamps. Native builds have no browser
/// clock to format against, so they fall back to a fixed label.
fn stamp() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "Just now".to_string()
    }
}

async fn reply_delay() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(1_000).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
}

#[component]
pub fn Chat(id: String) -> Element {
    let drafts = ui::use_drafts();

    let title = {
        let wanted: ItemId = match id.parse::<u64>() {
            Ok(n) => ItemId::Number(n),
            Err(_) => ItemId::Text(id.clone()),
        };
        data::all_products()
            .into_iter()
            .find(|p| p.id == wanted)
            .map(|p| p.title)
            .or_else(|| {
                drafts
                    .read()
                    .listings()
                    .iter()
                    .find(|l| l.id == id)
                    .map(|l| l.title.clone())
            })
            .unwrap_or_else(|| "this item".to_string())
    };

    let greeting = format!("Hi! Are you interested in {title}?");
    let mut messages = use_signal(move || {
        vec![ChatMessage {
            from_me: false,
            text: greeting,
            time: stamp(),
        }]
    });
    let mut input = use_signal(String::new);

    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let text = input().trim().to_string();
        if text.is_empty() {
            return;
        }
        input.set(String::new());
        messages.write().push(ChatMessage {
            from_me: true,
            text,
            time: stamp(),
        });

        spawn(async move {
            reply_delay().await;
            messages.write().push(ChatMessage {
                from_me: false,
                text: "Thanks for your message! I'll get back to you soon.".to_string(),
                time: stamp(),
            });
        });
    };

    rsx! {
        Protected {
            div { class: "page",
                Navbar {}

                main { class: "container narrow chat-page",
                    h1 { "Chat about {title}" }

                    div { class: "chat-thread",
                        for (index, message) in messages.read().iter().enumerate() {
                            div {
                                key: "{index}",
                                class: if message.from_me { "chat-bubble mine" } else { "chat-bubble" },
                                p { "{message.text}" }
                                span { class: "chat-time", "{message.time}" }
                            }
                        }
                    }

                    form { class: "chat-compose", onsubmit: send,
                        input {
                            r#type: "text",
                            placeholder: "Type a message...",
                            value: input(),
                            oninput: move |evt| input.set(evt.value()),
                        }
                        button { class: "primary-button", r#type: "submit", "Send" }
                    }
                }
            }
        }
    }
}
