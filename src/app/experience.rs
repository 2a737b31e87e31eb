use leptos::prelude::*;
use leptos_meta::Title;

use super::motion::{AnimatedItem, AnimatedSection, HeroSection, PageTransition, StaggerContainer};

struct Entry {
    period: &'static str,
    title: &'static str,
    place: &'static str,
    points: &'static [&'static str],
}

static WORK: &[Entry] = &[
    Entry {
        period: "2023 — Present",
        title: "Freelance Full Stack Developer",
        place: "Self-employed · Remote",
        points: &[
            "Designed and shipped full-stack web applications for clients in retail, education, and hospitality",
            "Built REST APIs with Laravel and reactive frontends with Vue.js 3",
            "Handled the full project lifecycle: requirements, estimates, delivery, and post-launch support",
        ],
    },
    Entry {
        period: "2022 — 2023",
        title: "Junior Web Developer",
        place: "Local Software Agency · Chittagong",
        points: &[
            "Implemented features and fixed bugs across several client Laravel codebases",
            "Converted design mockups into responsive Tailwind CSS layouts",
            "Wrote database migrations and seeders for new modules",
        ],
    },
];

static EDUCATION: &[Entry] = &[
    Entry {
        period: "2019 — 2023",
        title: "B.Sc. in Computer Science & Engineering",
        place: "University of Chittagong",
        points: &[
            "Thesis: a repository management system adopted by the department",
            "Coursework in databases, software engineering, and web technologies",
        ],
    },
];

fn timeline(entries: &'static [Entry]) -> impl IntoView {
    view! {
        <StaggerContainer class="relative border-l border-muted/30 ml-3 space-y-10 mb-16">
            {entries
                .iter()
                .map(|e| {
                    view! {
                        <AnimatedItem class="relative pl-8">
                            <span class="absolute -left-[7px] top-1.5 w-3 h-3 rounded-full bg-cyan"></span>
                            <p class="text-sm text-cyan font-medium mb-1">{e.period}</p>
                            <h3 class="font-bold text-lg">{e.title}</h3>
                            <p class="text-sm text-muted mb-3">{e.place}</p>
                            <ul class="space-y-1.5">
                                {e
                                    .points
                                    .iter()
                                    .map(|&p| {
                                        view! {
                                            <li class="text-sm text-muted leading-relaxed flex gap-2">
                                                <span class="text-cyan">"▹"</span>
                                                <span>{p}</span>
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
    }
}

#[component]
pub fn ExperiencePage() -> impl IntoView {
    view! {
        <Title text="Experience" />
        <PageTransition>
            <section class="mx-auto max-w-3xl px-4 sm:px-6 lg:px-8 py-16">
                <HeroSection class="text-center mb-12">
                    <h1 class="font-bold text-3xl lg:text-4xl mb-4">
                        "My " <span class="text-cyan">"Journey"</span>
                    </h1>
                    <p class="text-lg text-muted">
                        "Where I've worked and what I've studied."
                    </p>
                </HeroSection>
                <AnimatedSection class="mb-6">
                    <h2 class="font-bold text-xl">"Work Experience"</h2>
                </AnimatedSection>
                {timeline(WORK)}
                <AnimatedSection class="mb-6">
                    <h2 class="font-bold text-xl">"Education"</h2>
                </AnimatedSection>
                {timeline(EDUCATION)}
            </section>
        </PageTransition>
    }
}
