use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/skills", "Skills"),
    ("/projects", "Projects"),
    ("/services", "Services"),
    ("/experience", "Experience"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

/// Whether a nav entry should render highlighted for the current path.
/// Detail routes light up their listing entry, so `/blog/some-post` keeps
/// "Blog" active and `/project/x` keeps "Projects" active.
fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    if pathname == href {
        return true;
    }
    if let Some(rest) = pathname.strip_prefix(href) {
        return rest.starts_with('/');
    }
    // project details live under the singular path
    href == "/projects" && pathname.starts_with("/project/")
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;

    let link_class = move |href: &'static str| {
        let pathname = pathname.get();
        if is_active(&pathname, href) {
            "px-4 py-2 text-sm font-medium text-cyan transition-colors duration-200"
        } else {
            "px-4 py-2 text-sm font-medium text-muted hover:text-foreground transition-colors duration-200"
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-xl border-b border-muted/20 shadow-lg">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 md:h-20">
                    <A href="/" attr:class="flex items-center gap-2 font-bold text-lg">
                        "Ahasan" <span class="text-cyan">"."</span>
                    </A>
                    <nav class="hidden md:flex items-center gap-1" aria-label="Main navigation">
                        {NAV_LINKS
                            .iter()
                            .map(|&(href, name)| {
                                view! {
                                    <A href=href attr:class=move || link_class(href)>
                                        {name}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <A
                        href="/contact"
                        attr:class="hidden md:block bg-cyan/20 hover:bg-cyan/30 text-cyan px-4 py-2 rounded-md text-sm font-medium border border-cyan/30 transition-all duration-200"
                    >
                        "Hire Me"
                    </A>
                    <button
                        class="md:hidden p-2 text-xl"
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                        aria-expanded=move || menu_open.get().to_string()
                        aria-label=move || {
                            if menu_open.get() { "Close navigation menu" } else { "Open navigation menu" }
                        }
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <nav
                                class="md:hidden bg-background/95 backdrop-blur-2xl border-t border-muted/20 px-6 py-6 flex flex-col gap-4 items-center"
                                aria-label="Mobile navigation"
                            >
                                {NAV_LINKS
                                    .iter()
                                    .map(|&(href, name)| {
                                        view! {
                                            <A
                                                href=href
                                                attr:class="text-lg font-semibold text-muted hover:text-cyan transition-colors"
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {name}
                                            </A>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        }
                    })
            }}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_exact_and_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/about", "/"));
        assert!(is_active("/about", "/about"));
        assert!(!is_active("/about", "/blog"));
    }

    #[test]
    fn test_is_active_detail_routes_highlight_listing() {
        assert!(is_active("/blog/vuejs-3-composition-api", "/blog"));
        assert!(is_active("/project/laravel-ecommerce-platform", "/projects"));
        assert!(!is_active("/projectile", "/projects"));
        assert!(!is_active("/blogging", "/blog"));
    }
}
