use leptos::{html, prelude::*};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const WHATSAPP_NUMBER: &str = "8801842299275";
const DEFAULT_MESSAGE: &str = "Hi! I found your portfolio and would like to discuss a project.";

/// Prefill deep link into the WhatsApp chat with [`WHATSAPP_NUMBER`].
pub fn whatsapp_link(message: &str) -> String {
    let encoded = utf8_percent_encode(message, NON_ALPHANUMERIC);
    format!("https://wa.me/{WHATSAPP_NUMBER}?text={encoded}")
}

/// Floating chat widget: a fixed button toggling a small message composer
/// that hands off to WhatsApp in a new browsing context.
#[component]
pub fn WhatsAppButton() -> impl IntoView {
    let (open, set_open) = signal(false);
    let message_ref = NodeRef::<html::Textarea>::new();

    let send = move |_| {
        let message = message_ref
            .get_untracked()
            .map(|el| el.value())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
        let _ = window().open_with_url_and_target(&whatsapp_link(&message), "_blank");
        set_open.set(false);
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50">
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                aria-expanded=move || open.get().to_string()
                aria-label=move || {
                    if open.get() { "Close WhatsApp chat" } else { "Open WhatsApp chat" }
                }
                class="w-14 h-14 rounded-full bg-green text-background shadow-lg flex items-center justify-center hover:scale-110 transition-transform duration-200"
            >
                {move || if open.get() { "✕" } else { "💬" }}
            </button>
        </div>
        {move || {
            open.get()
                .then(|| {
                    view! {
                        <div class="fixed bottom-24 right-6 z-50 w-80 max-w-[calc(100vw-3rem)] bg-background border border-muted/30 rounded-xl shadow-xl overflow-hidden toast-enter">
                            <div class="bg-green/90 text-background px-4 py-3">
                                <p class="font-bold">"Live Chat"</p>
                                <p class="text-sm">"Usually replies within a day"</p>
                            </div>
                            <div class="p-4 space-y-3">
                                <p class="text-sm bg-secondary rounded-md p-3">
                                    "👋 Hi there! I'm Amamul Ahasan. How can I help you today?"
                                </p>
                                <textarea
                                    node_ref=message_ref
                                    rows=3
                                    class="w-full px-3 py-2 rounded-md border border-muted/30 bg-secondary/50 text-sm focus:outline-none focus:ring-2 focus:ring-green"
                                    placeholder="Type your message..."
                                >
                                    {DEFAULT_MESSAGE}
                                </textarea>
                                <button
                                    on:click=send
                                    class="w-full bg-green text-background font-semibold py-2.5 rounded-md hover:bg-green/90 transition-colors duration-200"
                                >
                                    "Start Conversation"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link("Hi! Let's talk?");
        assert!(link.starts_with("https://wa.me/8801842299275?text="));
        assert!(link.contains("Hi%21%20Let%27s%20talk%3F"));
        // nothing past the template is left unencoded
        assert!(!link.contains(' '));
        assert_eq!(link.matches('?').count(), 1);
    }

    #[test]
    fn test_whatsapp_link_default_message_roundtrip() {
        let link = whatsapp_link(DEFAULT_MESSAGE);
        assert!(link.contains("Hi%21%20I%20found%20your%20portfolio"));
    }
}
