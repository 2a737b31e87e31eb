use std::time::Duration;

use leptos::prelude::*;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: usize,
    pub title: String,
    pub body: Option<String>,
}

/// Handle for raising notifications from anywhere under [`provide_toasts`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: ReadSignal<Vec<Toast>>,
    set_items: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<usize>,
}

impl Toasts {
    pub fn show(&self, title: impl Into<String>, body: Option<String>) {
        let id = self
            .next_id
            .try_update_value(|i| {
                *i += 1;
                *i
            })
            .unwrap_or(0);
        let _ = self.set_items.try_update(|items| {
            items.push(Toast {
                id,
                title: title.into(),
                body,
            })
        });
        let set_items = self.set_items;
        set_timeout(
            move || {
                let _ = set_items.try_update(|items| items.retain(|t| t.id != id));
            },
            DISMISS_AFTER,
        );
    }
}

pub fn provide_toasts() {
    let (items, set_items) = signal(Vec::new());
    provide_context(Toasts {
        items,
        set_items,
        next_id: StoredValue::new(0),
    });
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed bottom-6 left-1/2 -translate-x-1/2 z-[60] flex flex-col gap-2 items-center pointer-events-none">
            <For each=move || toasts.items.get() key=|t| t.id let:toast>
                <div class="toast-enter pointer-events-auto bg-secondary border border-muted/30 rounded-lg shadow-lg px-5 py-3 max-w-sm">
                    <p class="font-medium">{toast.title}</p>
                    {toast.body.map(|body| view! { <p class="text-sm text-muted mt-1">{body}</p> })}
                </div>
            </For>
        </div>
    }
}
