use leptos::prelude::*;
use leptos_router::components::*;

const BUILD_TIME: &str = env!("BUILD_TIME");

const FOOTER_LINKS: &[(&str, &str)] = &[
    ("/about", "About"),
    ("/skills", "Skills"),
    ("/projects", "Projects"),
    ("/services", "Services"),
    ("/contact", "Contact"),
];

const FOOTER_SERVICES: &[&str] = &[
    "Web Development",
    "API Development",
    "Database Design",
    "UI/UX Implementation",
];

#[component]
pub fn Footer() -> impl IntoView {
    // BUILD_TIME is rfc3339, year-first
    let year = &BUILD_TIME[..4];

    view! {
        <footer class="border-t border-muted/20 bg-secondary/30 mt-16">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    <div class="lg:col-span-2">
                        <p class="font-bold text-lg mb-2">
                            "Ahasan" <span class="text-cyan">"."</span>
                            <span class="block text-xs text-cyan font-medium">
                                "Full Stack Developer"
                            </span>
                        </p>
                        <p class="text-sm text-muted leading-relaxed max-w-sm mb-4">
                            "Passionate about building scalable web applications with clean code and modern technologies."
                        </p>
                        <div class="flex gap-3">
                            <a
                                href="https://github.com/Ahasan39"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub"
                                class="text-muted hover:text-foreground text-xl transition-colors"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href="https://www.linkedin.com/in/amamul-ahasn"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn"
                                class="text-muted hover:text-blue text-xl transition-colors"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                        </div>
                    </div>
                    <nav aria-label="Footer navigation">
                        <h4 class="font-semibold text-sm uppercase tracking-wider mb-4">"Links"</h4>
                        <ul class="space-y-2">
                            {FOOTER_LINKS
                                .iter()
                                .map(|&(href, name)| {
                                    view! {
                                        <li>
                                            <A
                                                href=href
                                                attr:class="text-sm text-muted hover:text-cyan transition-colors"
                                            >
                                                {name}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                    <div>
                        <h4 class="font-semibold text-sm uppercase tracking-wider mb-4">
                            "Services"
                        </h4>
                        <ul class="space-y-2">
                            {FOOTER_SERVICES
                                .iter()
                                .map(|s| view! { <li class="text-sm text-muted">{*s}</li> })
                                .collect_view()}
                        </ul>
                        <h4 class="font-semibold text-sm uppercase tracking-wider mt-6 mb-2">
                            "Contact"
                        </h4>
                        <a
                            href="mailto:amamulahasanmizan71@gmail.com"
                            class="text-sm text-muted hover:text-cyan transition-colors break-words"
                        >
                            "amamulahasanmizan71@gmail.com"
                        </a>
                        <p class="text-sm text-muted mt-1">"Chittagong, Bangladesh"</p>
                    </div>
                </div>
                <div class="mt-10 pt-6 border-t border-muted/20 flex flex-col md:flex-row items-center justify-between gap-2 text-sm text-muted">
                    <p>"© " {year.to_string()} " Amamul Ahasan. All rights reserved."</p>
                    <p>"Crafted with ❤ using Rust & Leptos"</p>
                </div>
            </div>
        </footer>
    }
}
