//! One-shot reveal animations driven by viewport visibility.
//!
//! Elements render in their hidden/offset state and transition to the resting
//! state the first time they enter the viewport. The transition is monotonic:
//! once revealed, an element never animates again for its lifetime, no matter
//! how often it scrolls out and back or re-renders.

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Reveal fires when the element crosses 100px above the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
/// Extra delay applied to the first child of a stagger cascade.
const STAGGER_LEAD_IN: f64 = 0.1;

/// Whether an animated element has played its entrance yet.
///
/// Modeled as an explicit two-state value so the monotonic transition is
/// testable on its own: `NotRevealed -> Revealed`, never backward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

impl RevealState {
    /// Records a viewport entry. Returns `true` only for the entry that
    /// performed the transition; every later call is a no-op.
    pub fn on_enter(&mut self) -> bool {
        match self {
            RevealState::NotRevealed => {
                *self = RevealState::Revealed;
                true
            }
            RevealState::Revealed => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Observe `target` and flip the returned signal to `true` the first time it
/// intersects the viewport (with `root_margin` applied). Subsequent
/// intersection events are ignored; the observer is torn down with the owning
/// scope, so an element that unmounts before ever revealing simply never
/// animates.
pub fn use_reveal(target: NodeRef<html::Div>, root_margin: &str) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let state = StoredValue::new(RevealState::default());
    let _ = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let entered = entries.iter().any(|e| e.is_intersecting());
            if entered && state.try_update_value(RevealState::on_enter).unwrap_or(false) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(root_margin.to_string()),
    );
    revealed
}

fn reveal_class(base: &str, extra: &str, revealed: bool) -> String {
    let state = if revealed { " is-revealed" } else { "" };
    if extra.is_empty() {
        format!("{base}{state}")
    } else {
        format!("{base} {extra}{state}")
    }
}

/// Fade-and-rise wrapper for a whole page section.
#[component]
pub fn AnimatedSection(
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay: f64,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target, REVEAL_ROOT_MARGIN);
    view! {
        <div
            node_ref=target
            class=move || reveal_class("reveal-up", &class, revealed.get())
            style:transition-delay=format!("{delay}s")
        >
            {children()}
        </div>
    }
}

#[derive(Clone, Copy)]
struct StaggerContext {
    revealed: ReadSignal<bool>,
    step: f64,
    next_index: StoredValue<usize>,
}

/// Container whose [`AnimatedItem`] children cascade in one after another
/// once the container itself first becomes visible. Items pick up their slot
/// in the cascade in construction order, i.e. document order.
#[component]
pub fn StaggerContainer(
    #[prop(optional, into)] class: String,
    #[prop(default = 0.1)] stagger_delay: f64,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target, REVEAL_ROOT_MARGIN);
    provide_context(StaggerContext {
        revealed,
        step: stagger_delay,
        next_index: StoredValue::new(0),
    });
    view! {
        <div node_ref=target class=class>
            {children()}
        </div>
    }
}

/// One entry of a [`StaggerContainer`] cascade.
#[component]
pub fn AnimatedItem(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let ctx = expect_context::<StaggerContext>();
    let index = ctx
        .next_index
        .try_update_value(|i| {
            let slot = *i;
            *i += 1;
            slot
        })
        .unwrap_or(0);
    let delay = STAGGER_LEAD_IN + index as f64 * ctx.step;
    let revealed = ctx.revealed;
    view! {
        <div
            class=move || reveal_class("reveal-up", &class, revealed.get())
            style:transition-delay=format!("{delay}s")
        >
            {children()}
        </div>
    }
}

/// Above-the-fold wrapper: plays on mount rather than waiting for a scroll,
/// since hero content is already in view when the page loads.
#[component]
pub fn HeroSection(
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay: f64,
    children: Children,
) -> impl IntoView {
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        // let the hidden state paint first so the transition actually runs
        request_animation_frame(move || set_revealed.set(true));
    });
    view! {
        <div
            class=move || reveal_class("reveal-up", &class, revealed.get())
            style:transition-delay=format!("{delay}s")
        >
            {children()}
        </div>
    }
}

/// Route-entry wrapper; plays a CSS keyframe animation once per navigation.
#[component]
pub fn PageTransition(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = if class.is_empty() {
        "page-enter".to_string()
    } else {
        format!("page-enter {class}")
    };
    view! { <div class=class>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_state_is_one_shot() {
        let mut state = RevealState::default();
        assert!(!state.is_revealed());
        assert!(state.on_enter());
        assert!(state.is_revealed());
        // simulate scroll out / scroll back in cycles
        for _ in 0..5 {
            assert!(!state.on_enter());
            assert!(state.is_revealed());
        }
    }

    #[test]
    fn test_reveal_class_variants() {
        assert_eq!(reveal_class("reveal-up", "", false), "reveal-up");
        assert_eq!(reveal_class("reveal-up", "", true), "reveal-up is-revealed");
        assert_eq!(
            reveal_class("reveal-up", "mb-4", true),
            "reveal-up mb-4 is-revealed"
        );
    }
}
