use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;
#[cfg(feature = "hydrate")]
use serde::{Deserialize, Serialize};

use super::motion::{AnimatedItem, AnimatedSection, HeroSection, PageTransition, StaggerContainer};
use super::toast::use_toasts;
use super::whatsapp::whatsapp_link;

const FAQ: &[(&str, &str)] = &[
    (
        "What's your typical project timeline?",
        "A landing page takes one to two weeks; a full web application usually runs six to twelve weeks depending on scope. You'll get a concrete estimate after we talk through the requirements.",
    ),
    (
        "Do you work with clients outside Bangladesh?",
        "Yes — most of my work is remote. I overlap with European mornings and American evenings and keep everything async-friendly.",
    ),
    (
        "What happens after launch?",
        "Every project includes a handover period with bug fixes. After that I offer ongoing maintenance plans for upgrades, monitoring, and small features.",
    ),
    (
        "Can you take over an existing codebase?",
        "Usually, yes. I'll review the code first and tell you honestly whether improving it or rebuilding it is the cheaper path.",
    ),
];

/// Simulated delivery delay until a real mail backend exists.
const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Seam for actual message delivery. Currently a stub that reports success
/// after [`SUBMIT_DELAY`]; swapping in a server function later only touches
/// this.
fn submit_message(on_done: impl FnOnce() + 'static) {
    set_timeout(on_done, SUBMIT_DELAY);
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ContactDraft {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = use_toasts();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    #[cfg(feature = "hydrate")]
    let (draft, set_draft, _) =
        use_local_storage::<ContactDraft, JsonSerdeWasmCodec>("contact_draft");

    // restore an unfinished draft once, then keep it in sync as the user types
    #[cfg(feature = "hydrate")]
    {
        Effect::watch(
            || (),
            move |_, _, _| {
                let d = draft.get_untracked();
                if d != ContactDraft::default() {
                    set_name(d.name);
                    set_email(d.email);
                    set_subject(d.subject);
                    set_message(d.message);
                }
            },
            true,
        );
        Effect::new(move |prev: Option<()>| {
            let current = ContactDraft {
                name: name.get(),
                email: email.get(),
                subject: subject.get(),
                message: message.get(),
            };
            // skip the first run; it fires before the restore effect
            if prev.is_some() {
                set_draft.set(current);
            }
        });
    }

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let n = name.get_untracked();
        let e = email.get_untracked();
        let s = subject.get_untracked();
        let m = message.get_untracked();
        if n.trim().is_empty() || e.trim().is_empty() || s.trim().is_empty() || m.trim().is_empty()
        {
            toasts.show("Please fill in all fields.", None);
            return;
        }
        if !e.contains('@') {
            toasts.show("Please enter a valid email address.", None);
            return;
        }
        set_submitting(true);
        submit_message(move || {
            set_submitting(false);
            set_name(String::new());
            set_email(String::new());
            set_subject(String::new());
            set_message(String::new());
            toasts.show(
                "Message sent!",
                Some("Thanks for reaching out. I'll get back to you soon.".to_string()),
            );
        });
    };

    let input_class = "w-full px-4 py-2.5 rounded-md border border-muted/30 bg-secondary/50 focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan placeholder-muted transition-all duration-200";

    view! {
        <Title text="Contact" />
        <PageTransition>
            <section class="mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 py-16">
                <HeroSection class="text-center mb-12">
                    <h1 class="font-bold text-3xl lg:text-4xl mb-4">
                        "Get In " <span class="text-cyan">"Touch"</span>
                    </h1>
                    <p class="text-lg text-muted max-w-2xl mx-auto">
                        "Have a project or a question? Send a message and I'll reply within a day."
                    </p>
                </HeroSection>
                <div class="grid grid-cols-1 lg:grid-cols-[1fr_320px] gap-10">
                    <AnimatedSection>
                        <form class="glass-card p-6 sm:p-8 space-y-5" on:submit=submit>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                                <div>
                                    <label for="contact_name" class="block text-sm font-medium mb-1.5">
                                        "Name"
                                    </label>
                                    <input
                                        id="contact_name"
                                        class=input_class
                                        placeholder="Your name"
                                        prop:value=name
                                        on:input=move |ev| set_name(event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label for="contact_email" class="block text-sm font-medium mb-1.5">
                                        "Email"
                                    </label>
                                    <input
                                        id="contact_email"
                                        type="email"
                                        class=input_class
                                        placeholder="you@example.com"
                                        prop:value=email
                                        on:input=move |ev| set_email(event_target_value(&ev))
                                    />
                                </div>
                            </div>
                            <div>
                                <label for="contact_subject" class="block text-sm font-medium mb-1.5">
                                    "Subject"
                                </label>
                                <input
                                    id="contact_subject"
                                    class=input_class
                                    placeholder="What's this about?"
                                    prop:value=subject
                                    on:input=move |ev| set_subject(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label for="contact_message" class="block text-sm font-medium mb-1.5">
                                    "Message"
                                </label>
                                <textarea
                                    id="contact_message"
                                    rows=6
                                    class=input_class
                                    placeholder="Tell me about your project..."
                                    prop:value=message
                                    on:input=move |ev| set_message(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                disabled=submitting
                                class="w-full bg-cyan text-background font-semibold py-3 rounded-md hover:bg-cyan/90 disabled:opacity-60 disabled:cursor-not-allowed transition-all duration-200"
                            >
                                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </AnimatedSection>
                    <AnimatedSection delay=0.1>
                        <div class="space-y-4">
                            <div class="glass-card p-6">
                                <h2 class="font-semibold mb-1">"Email"</h2>
                                <a
                                    href="mailto:amamulahasanmizan71@gmail.com"
                                    class="text-sm text-muted hover:text-cyan transition-colors break-words"
                                >
                                    "amamulahasanmizan71@gmail.com"
                                </a>
                            </div>
                            <div class="glass-card p-6">
                                <h2 class="font-semibold mb-1">"Location"</h2>
                                <p class="text-sm text-muted">"Chittagong, Bangladesh"</p>
                                <p class="text-sm text-muted">"Available for remote work worldwide"</p>
                            </div>
                            <div class="glass-card p-6">
                                <h2 class="font-semibold mb-1">"Prefer chat?"</h2>
                                <p class="text-sm text-muted mb-3">
                                    "Message me on WhatsApp for a faster reply."
                                </p>
                                <a
                                    href=whatsapp_link(
                                        "Hi! I found your portfolio and would like to discuss a project.",
                                    )
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-block bg-green/20 text-green px-4 py-2 rounded-md text-sm font-medium border border-green/30 hover:bg-green/30 transition-all duration-200"
                                >
                                    "Open WhatsApp"
                                </a>
                            </div>
                        </div>
                    </AnimatedSection>
                </div>
                <AnimatedSection class="text-center mt-20 mb-10">
                    <h2 class="font-bold text-2xl">
                        "Frequently Asked " <span class="text-cyan">"Questions"</span>
                    </h2>
                </AnimatedSection>
                <StaggerContainer class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {FAQ
                        .iter()
                        .map(|&(question, answer)| {
                            view! {
                                <AnimatedItem class="glass-card p-6">
                                    <h3 class="font-semibold mb-2">{question}</h3>
                                    <p class="text-sm text-muted leading-relaxed">{answer}</p>
                                </AnimatedItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
            </section>
        </PageTransition>
    }
}
