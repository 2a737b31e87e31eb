use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::motion::{AnimatedItem, AnimatedSection, HeroSection, PageTransition, StaggerContainer};

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    includes: &'static [&'static str],
}

static SERVICES: &[Service] = &[
    Service {
        icon: "🌐",
        title: "Web Application Development",
        description: "Complete web applications built on Laravel and Vue.js, from a blank repository to a deployed product.",
        includes: &[
            "Requirements analysis & planning",
            "Database schema design",
            "Admin dashboards",
            "Deployment & handover",
        ],
    },
    Service {
        icon: "🔌",
        title: "API Development",
        description: "Clean, documented REST APIs ready for your mobile app or frontend team, with authentication and rate limiting built in.",
        includes: &[
            "RESTful endpoint design",
            "Token authentication (Sanctum)",
            "API documentation",
            "Automated test coverage",
        ],
    },
    Service {
        icon: "🗄️",
        title: "Database Design & Optimization",
        description: "Normalized schemas that stay fast as your data grows, plus rescue work for slow existing queries.",
        includes: &[
            "Schema design & migrations",
            "Query optimization & indexing",
            "N+1 elimination",
            "Data migration planning",
        ],
    },
    Service {
        icon: "🎨",
        title: "UI/UX Implementation",
        description: "Pixel-faithful, responsive implementations of your designs with Tailwind CSS and accessible markup.",
        includes: &[
            "Design-to-code conversion",
            "Responsive layouts",
            "Interactive components",
            "Accessibility basics",
        ],
    },
    Service {
        icon: "🛠️",
        title: "Maintenance & Support",
        description: "Ongoing care for existing Laravel and Vue.js applications: upgrades, bug fixes, and small features.",
        includes: &[
            "Framework & dependency upgrades",
            "Bug fixing",
            "Performance monitoring",
            "Feature additions",
        ],
    },
    Service {
        icon: "🚀",
        title: "Performance Optimization",
        description: "Faster load times and better Core Web Vitals for sites that feel sluggish.",
        includes: &[
            "Frontend bundle trimming",
            "Caching strategy",
            "Image & asset optimization",
            "Lighthouse audits",
        ],
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text="Services" />
        <PageTransition>
            <section class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-16">
                <HeroSection class="text-center mb-12">
                    <h1 class="font-bold text-3xl lg:text-4xl mb-4">
                        "What I " <span class="text-cyan">"Offer"</span>
                    </h1>
                    <p class="text-lg text-muted max-w-2xl mx-auto">
                        "From one-page sites to full platforms — here's how I can help your project."
                    </p>
                </HeroSection>
                <StaggerContainer class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {SERVICES
                        .iter()
                        .map(|s| {
                            view! {
                                <AnimatedItem class="glass-card p-6 flex flex-col hover:border-cyan/40 transition-colors duration-300">
                                    <p class="text-3xl mb-4">{s.icon}</p>
                                    <h2 class="font-bold text-lg mb-2">{s.title}</h2>
                                    <p class="text-sm text-muted leading-relaxed mb-4 flex-grow">
                                        {s.description}
                                    </p>
                                    <ul class="space-y-1.5">
                                        {s
                                            .includes
                                            .iter()
                                            .map(|&item| {
                                                view! {
                                                    <li class="text-sm text-muted flex gap-2">
                                                        <span class="text-cyan">"✓"</span>
                                                        <span>{item}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </AnimatedItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
                <AnimatedSection class="text-center">
                    <p class="text-muted mb-6">"Not sure which service fits? Let's talk it through."</p>
                    <A
                        href="/contact"
                        attr:class="inline-block bg-cyan text-background px-8 py-3 rounded-md font-semibold hover:bg-cyan/90 transition-all duration-200"
                    >
                        "Start a Conversation"
                    </A>
                </AnimatedSection>
            </section>
        </PageTransition>
    }
}
