use leptos::prelude::*;
use leptos_meta::Title;

use super::motion::{AnimatedItem, AnimatedSection, HeroSection, PageTransition, StaggerContainer};

struct SkillGroup {
    title: &'static str,
    skills: &'static [Skill],
}

struct Skill {
    name: &'static str,
    icon: &'static str,
    level: u8,
}

const fn skill(name: &'static str, icon: &'static str, level: u8) -> Skill {
    Skill { name, icon, level }
}

static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Backend",
        skills: &[
            skill("Laravel", "devicon-laravel-original", 95),
            skill("PHP", "devicon-php-plain", 90),
            skill("Node.js", "devicon-nodejs-plain", 70),
            skill("REST APIs", "devicon-fastapi-plain", 90),
        ],
    },
    SkillGroup {
        title: "Frontend",
        skills: &[
            skill("Vue.js", "devicon-vuejs-plain", 90),
            skill("JavaScript", "devicon-javascript-plain", 88),
            skill("Tailwind CSS", "devicon-tailwindcss-original", 92),
            skill("HTML & CSS", "devicon-html5-plain", 95),
        ],
    },
    SkillGroup {
        title: "Database & Tools",
        skills: &[
            skill("MySQL", "devicon-mysql-plain", 88),
            skill("Git", "devicon-git-plain", 85),
            skill("Docker", "devicon-docker-plain", 65),
            skill("Linux", "devicon-linux-plain", 75),
        ],
    },
];

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <Title text="Skills" />
        <PageTransition>
            <section class="mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 py-16">
                <HeroSection class="text-center mb-12">
                    <h1 class="font-bold text-3xl lg:text-4xl mb-4">
                        "Skills & " <span class="text-cyan">"Technologies"</span>
                    </h1>
                    <p class="text-lg text-muted max-w-2xl mx-auto">
                        "The tools I reach for every day, and how comfortable I am with each."
                    </p>
                </HeroSection>
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <AnimatedSection class="mb-6">
                                <h2 class="font-bold text-xl mb-4">{group.title}</h2>
                            </AnimatedSection>
                            <StaggerContainer class="grid grid-cols-1 sm:grid-cols-2 gap-4 mb-12">
                                {group
                                    .skills
                                    .iter()
                                    .map(|s| {
                                        view! {
                                            <AnimatedItem class="glass-card p-5">
                                                <div class="flex items-center gap-3 mb-3">
                                                    <i class=format!("{} text-2xl text-cyan", s.icon)></i>
                                                    <span class="font-medium">{s.name}</span>
                                                    <span class="ml-auto text-sm text-muted">
                                                        {format!("{}%", s.level)}
                                                    </span>
                                                </div>
                                                <div class="h-2 bg-secondary rounded-full overflow-hidden">
                                                    <div
                                                        class="h-full bg-cyan rounded-full transition-all duration-700"
                                                        style:width=format!("{}%", s.level)
                                                    ></div>
                                                </div>
                                            </AnimatedItem>
                                        }
                                    })
                                    .collect_view()}
                            </StaggerContainer>
                        }
                    })
                    .collect_view()}
            </section>
        </PageTransition>
    }
}
