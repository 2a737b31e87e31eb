use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::motion::{AnimatedItem, AnimatedSection, HeroSection, PageTransition, StaggerContainer};

const STATS: &[(&str, &str)] = &[
    ("3+", "Years of Experience"),
    ("20+", "Projects Delivered"),
    ("15+", "Happy Clients"),
    ("6", "Technologies Mastered"),
];

const VALUES: &[(&str, &str)] = &[
    (
        "Clean Code",
        "Readable, tested code that the next developer (often future me) can pick up without archaeology.",
    ),
    (
        "Clear Communication",
        "Weekly updates, honest estimates, and no surprises. Clients always know where their project stands.",
    ),
    (
        "Ownership",
        "I treat every project as my own product, from the first wireframe to post-launch support.",
    ),
    (
        "Continuous Learning",
        "The web moves fast. I set aside time every week to learn new tools and sharpen old ones.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <PageTransition>
            <section class="mx-auto max-w-4xl px-4 sm:px-6 lg:px-8 py-16">
                <HeroSection class="text-center mb-12">
                    <h1 class="font-bold text-3xl lg:text-4xl mb-4">
                        "About " <span class="text-cyan">"Me"</span>
                    </h1>
                    <p class="text-lg text-muted">
                        "The person behind the keyboard."
                    </p>
                </HeroSection>
                <AnimatedSection class="prose prose-invert max-w-none mb-12">
                    <p>
                        "I'm Amamul Ahasan, a freelance full-stack developer based in Chittagong, "
                        "Bangladesh. I started building websites as a student and never stopped; "
                        "what began as curiosity about how the web works turned into a career "
                        "shipping production software for clients across retail, education, and "
                        "hospitality."
                    </p>
                    <p>
                        "My home turf is the Laravel and Vue.js ecosystem: REST APIs, database "
                        "design, authentication flows, and the responsive frontends that sit on "
                        "top of them. I care as much about the parts users never see — migrations, "
                        "queues, test suites — as the pixels they do."
                    </p>
                    <p>
                        "When I'm not coding for clients I'm usually writing about what I've "
                        "learned on the blog, or experimenting with tools outside my daily stack."
                    </p>
                </AnimatedSection>
                <StaggerContainer class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-16">
                    {STATS
                        .iter()
                        .map(|&(value, label)| {
                            view! {
                                <AnimatedItem class="glass-card p-6 text-center">
                                    <p class="text-3xl font-bold text-cyan">{value}</p>
                                    <p class="text-sm text-muted mt-1">{label}</p>
                                </AnimatedItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
                <AnimatedSection class="text-center mb-10">
                    <h2 class="font-bold text-2xl">
                        "How I " <span class="text-cyan">"Work"</span>
                    </h2>
                </AnimatedSection>
                <StaggerContainer class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-16">
                    {VALUES
                        .iter()
                        .map(|&(title, body)| {
                            view! {
                                <AnimatedItem class="glass-card p-6">
                                    <h3 class="font-semibold text-lg mb-2">{title}</h3>
                                    <p class="text-sm text-muted leading-relaxed">{body}</p>
                                </AnimatedItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
                <AnimatedSection class="text-center">
                    <A
                        href="/contact"
                        attr:class="inline-block bg-cyan text-background px-8 py-3 rounded-md font-semibold hover:bg-cyan/90 transition-all duration-200"
                    >
                        "Work With Me"
                    </A>
                </AnimatedSection>
            </section>
        </PageTransition>
    }
}
