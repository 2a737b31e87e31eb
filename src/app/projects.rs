use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_params_map};

use crate::projects::{categories, get_project, related_projects, Project, PROJECTS};

use super::motion::{AnimatedItem, AnimatedSection, HeroSection, PageTransition, StaggerContainer};

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <AnimatedItem class="glass-card overflow-hidden group hover:border-cyan/40 transition-all duration-300">
            <A href=format!("/project/{}", project.slug)>
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-44 object-cover group-hover:scale-105 transition-transform duration-300"
                />
                <div class="p-5">
                    <p class="text-xs text-cyan mb-2">{project.category}</p>
                    <h2 class="font-bold text-lg mb-2 group-hover:text-cyan transition-colors">
                        {project.title}
                    </h2>
                    <p class="text-sm text-muted leading-relaxed mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-1">
                        {project
                            .tech
                            .iter()
                            .map(|&t| {
                                view! {
                                    <span class="bg-secondary text-muted px-2 py-1 rounded text-xs">
                                        {t}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </A>
        </AnimatedItem>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<&'static str>);

    view! {
        <Title text="Projects" />
        <PageTransition>
            <section class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-16">
                <HeroSection class="text-center mb-10">
                    <h1 class="font-bold text-3xl lg:text-4xl mb-4">
                        "My " <span class="text-cyan">"Projects"</span>
                    </h1>
                    <p class="text-lg text-muted max-w-2xl mx-auto">
                        "A selection of the platforms, tools, and sites I've built for clients and myself."
                    </p>
                </HeroSection>
                <div class="flex flex-wrap justify-center gap-2 mb-10">
                    <button
                        on:click=move |_| set_selected.set(None)
                        class=move || filter_class(selected.get().is_none())
                    >
                        "All"
                    </button>
                    {categories()
                        .into_iter()
                        .map(|cat| {
                            view! {
                                <button
                                    on:click=move |_| set_selected.set(Some(cat))
                                    class=move || filter_class(selected.get() == Some(cat))
                                >
                                    {cat}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let cat = selected.get();
                    let shown: Vec<&'static Project> = PROJECTS
                        .iter()
                        .filter(|p| cat.is_none_or(|c| p.category == c))
                        .collect();
                    view! {
                        <StaggerContainer class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {shown.into_iter().map(project_card).collect_view()}
                        </StaggerContainer>
                    }
                }}
            </section>
        </PageTransition>
    }
}

fn filter_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-full text-sm bg-cyan text-background font-medium"
    } else {
        "px-4 py-2 rounded-full text-sm bg-secondary text-muted hover:text-foreground transition-colors"
    }
}

#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    view! {
        <PageTransition>
            {move || match get_project(&slug()) {
                Some(project) => project_view(project).into_any(),
                None => {
                    view! {
                        <Title text="Project Not Found" />
                        <div class="text-center py-24 px-4">
                            <h1 class="text-2xl font-bold mb-2">"Project not found"</h1>
                            <p class="text-muted mb-8">
                                "This project doesn't exist or has been removed."
                            </p>
                            <A
                                href="/projects"
                                attr:class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30 transition-all duration-200"
                            >
                                "Back to Projects"
                            </A>
                        </div>
                    }
                        .into_any()
                }
            }}
        </PageTransition>
    }
}

fn project_view(project: &'static Project) -> impl IntoView {
    let (lightbox, set_lightbox) = signal(None::<usize>);
    let related = related_projects(project.slug, project.category, 3);

    view! {
        <Title text=project.title />
        <article class="mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 py-16">
            <HeroSection class="mb-10">
                <A
                    href="/projects"
                    attr:class="text-sm text-muted hover:text-cyan transition-colors"
                >
                    "← All projects"
                </A>
                <p class="text-sm text-cyan mt-6 mb-2">{project.category}</p>
                <h1 class="font-bold text-3xl lg:text-4xl mb-4">{project.title}</h1>
                <p class="text-lg text-muted leading-relaxed mb-6">{project.long_description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech
                        .iter()
                        .map(|&t| {
                            view! {
                                <span class="bg-cyan/20 text-cyan px-3 py-1 rounded-full text-sm">
                                    {t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.demo
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-cyan text-background px-5 py-2.5 rounded-md font-semibold hover:bg-cyan/90 transition-all duration-200"
                    >
                        "Live Demo"
                    </a>
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="border border-muted/40 px-5 py-2.5 rounded-md font-semibold hover:border-cyan/40 hover:text-cyan transition-all duration-200"
                    >
                        "Source Code"
                    </a>
                </div>
            </HeroSection>

            <AnimatedSection class="mb-12">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full rounded-xl border border-muted/20"
                />
            </AnimatedSection>

            <AnimatedSection class="mb-12">
                <h2 class="font-bold text-xl mb-4">"Key Features"</h2>
                <ul class="grid grid-cols-1 sm:grid-cols-2 gap-2">
                    {project
                        .features
                        .iter()
                        .map(|&f| {
                            view! {
                                <li class="text-sm text-muted flex gap-2">
                                    <span class="text-cyan">"✓"</span>
                                    <span>{f}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </AnimatedSection>

            {project
                .sections
                .iter()
                .map(|section| {
                    view! {
                        <AnimatedSection class="mb-12">
                            <h2 class="font-bold text-xl mb-4">{section.title}</h2>
                            <p class="text-muted leading-relaxed">{section.content}</p>
                            {section
                                .code
                                .map(|code| {
                                    view! {
                                        <div class="mt-4 rounded-lg overflow-hidden border border-muted/20">
                                            <div class="bg-secondary px-4 py-2 text-xs text-muted">
                                                {section.code_language}
                                            </div>
                                            <pre class="bg-black/40 p-4 overflow-x-auto text-sm">
                                                <code>{code}</code>
                                            </pre>
                                        </div>
                                    }
                                })}
                        </AnimatedSection>
                    }
                })
                .collect_view()}

            {(!project.screenshots.is_empty())
                .then(|| {
                    view! {
                        <AnimatedSection class="mb-12">
                            <h2 class="font-bold text-xl mb-4">"Screenshots"</h2>
                            <StaggerContainer class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {project
                                    .screenshots
                                    .iter()
                                    .enumerate()
                                    .map(|(i, shot)| {
                                        view! {
                                            <AnimatedItem>
                                                <button
                                                    on:click=move |_| set_lightbox.set(Some(i))
                                                    class="block w-full text-left group"
                                                >
                                                    <img
                                                        src=shot.image
                                                        alt=shot.title
                                                        loading="lazy"
                                                        class="w-full h-36 object-cover rounded-lg border border-muted/20 group-hover:border-cyan/40 transition-colors"
                                                    />
                                                    <p class="text-sm font-medium mt-2">{shot.title}</p>
                                                    <p class="text-xs text-muted">{shot.description}</p>
                                                </button>
                                            </AnimatedItem>
                                        }
                                    })
                                    .collect_view()}
                            </StaggerContainer>
                        </AnimatedSection>
                    }
                })}

            <AnimatedSection class="mb-12 grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="glass-card p-6">
                    <h2 class="font-bold text-lg mb-4">"Challenges"</h2>
                    <ul class="space-y-2">
                        {project
                            .challenges
                            .iter()
                            .map(|&c| {
                                view! {
                                    <li class="text-sm text-muted flex gap-2">
                                        <span class="text-yellow">"!"</span>
                                        <span>{c}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="glass-card p-6">
                    <h2 class="font-bold text-lg mb-4">"Solutions"</h2>
                    <ul class="space-y-2">
                        {project
                            .solutions
                            .iter()
                            .map(|&s| {
                                view! {
                                    <li class="text-sm text-muted flex gap-2">
                                        <span class="text-green">"✓"</span>
                                        <span>{s}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </AnimatedSection>

            {(!related.is_empty())
                .then(|| {
                    view! {
                        <section class="pt-8 border-t border-muted/20">
                            <h2 class="font-bold text-xl mb-6">"Related Projects"</h2>
                            <StaggerContainer class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                {related.into_iter().map(project_card).collect_view()}
                            </StaggerContainer>
                        </section>
                    }
                })}
        </article>

        {move || {
            lightbox
                .get()
                .and_then(|i| project.screenshots.get(i).map(|shot| (i, shot)))
                .map(|(i, shot)| {
                    let last = project.screenshots.len() - 1;
                    view! {
                        <div
                            class="fixed inset-0 z-[70] bg-black/80 backdrop-blur-sm flex items-center justify-center p-4"
                            on:click=move |_| set_lightbox.set(None)
                        >
                            <div
                                class="max-w-4xl w-full"
                                on:click=move |ev| ev.stop_propagation()
                            >
                                <img
                                    src=shot.image
                                    alt=shot.title
                                    class="w-full max-h-[70vh] object-contain rounded-lg"
                                />
                                <div class="flex items-center justify-between mt-4 text-sm">
                                    <button
                                        class="px-3 py-1.5 rounded-md border border-muted/40 disabled:opacity-40"
                                        disabled=(i == 0)
                                        on:click=move |_| set_lightbox.set(Some(i.saturating_sub(1)))
                                    >
                                        "← Prev"
                                    </button>
                                    <div class="text-center">
                                        <p class="font-medium">{shot.title}</p>
                                        <p class="text-muted">{shot.description}</p>
                                    </div>
                                    <button
                                        class="px-3 py-1.5 rounded-md border border-muted/40 disabled:opacity-40"
                                        disabled=(i == last)
                                        on:click=move |_| set_lightbox.set(Some((i + 1).min(last)))
                                    >
                                        "Next →"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
