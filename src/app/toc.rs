//! Table of contents with scroll-spy highlighting.
//!
//! An intersection observer watches every section heading anchor; the stream
//! of (id, is-intersecting) events is folded into a single active section id.
//! The fold is sticky: when nothing intersects the active band (fast scrolls,
//! gaps between sections), the previous id is kept rather than flickering to
//! "none".

use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::blog::PostSection;

/// Active band: 100px below the viewport top down to the upper third. A
/// section heading inside this band is the one the reader is looking at.
pub const ACTIVE_BAND_ROOT_MARGIN: &str = "-100px 0px -66% 0px";
/// Gap kept between the viewport top and a section scrolled into place,
/// leaving room for the fixed navbar.
pub const SCROLL_OFFSET_PX: f64 = 100.0;

/// Fold a batch of intersection events into the active section id. The most
/// recent intersecting entry wins; with no intersecting entry the previous
/// state carries over. At most one id is ever active.
fn fold_active<I>(current: Option<String>, events: I) -> Option<String>
where
    I: IntoIterator<Item = (String, bool)>,
{
    events
        .into_iter()
        .fold(current, |active, (id, intersecting)| {
            if intersecting {
                Some(id)
            } else {
                active
            }
        })
}

/// Smooth-scroll so the element with `id` sits [`SCROLL_OFFSET_PX`] below the
/// viewport top. A missing element is a silent no-op; the section simply
/// isn't rendered yet.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let Ok(scroll_y) = window().scroll_y() else {
        return;
    };
    let top = el.get_bounding_client_rect().top() + scroll_y - SCROLL_OFFSET_PX;
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn TableOfContents(sections: Vec<PostSection>) -> impl IntoView {
    let (active, set_active) = signal(None::<String>);
    let (targets, set_targets) = signal_local(Vec::<web_sys::Element>::new());

    let ids: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();
    Effect::new(move |_| {
        let doc = document();
        set_targets.set(ids.iter().filter_map(|id| doc.get_element_by_id(id)).collect());
    });

    let _ = use_intersection_observer_with_options(
        targets,
        move |entries, _| {
            let events = entries
                .iter()
                .map(|e| (e.target().id(), e.is_intersecting()));
            let next = fold_active(active.get_untracked(), events);
            if next != active.get_untracked() {
                set_active.set(next);
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(ACTIVE_BAND_ROOT_MARGIN.to_string()),
    );

    view! {
        <nav class="glass-card p-6 sticky top-24">
            <h3 class="font-semibold mb-4">"Table of Contents"</h3>
            <ul class="space-y-2">
                {sections
                    .into_iter()
                    .map(|section| {
                        let id = section.id.clone();
                        let target = section.id;
                        view! {
                            <li>
                                <button
                                    on:click=move |_| scroll_to_section(&target)
                                    class=move || {
                                        if active.get().as_deref() == Some(id.as_str()) {
                                            "toc-link toc-link-active"
                                        } else {
                                            "toc-link"
                                        }
                                    }
                                >
                                    {section.title}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(id: &str, intersecting: bool) -> (String, bool) {
        (id.to_string(), intersecting)
    }

    #[test]
    fn test_fold_active_last_intersecting_wins() {
        let next = fold_active(None, [ev("intro", true), ev("setup", true)]);
        assert_eq!(next.as_deref(), Some("setup"));
    }

    #[test]
    fn test_fold_active_is_sticky_when_nothing_intersects() {
        let current = Some("setup".to_string());
        let next = fold_active(current.clone(), [ev("intro", false), ev("setup", false)]);
        assert_eq!(next, current);
    }

    #[test]
    fn test_fold_active_starts_null_and_stays_null_without_entries() {
        assert_eq!(fold_active(None, []), None);
        assert_eq!(fold_active(None, [ev("intro", false)]), None);
    }

    #[test]
    fn test_fold_active_single_winner_across_batches() {
        // simulate scrolling down through three sections
        let mut active = None;
        for batch in [
            vec![ev("intro", true)],
            vec![ev("intro", false), ev("setup", true)],
            vec![ev("setup", false)],
            vec![ev("usage", true)],
        ] {
            active = fold_active(active, batch);
            // never more than one active id by construction
            assert!(active.is_some());
        }
        assert_eq!(active.as_deref(), Some("usage"));
    }
}
