use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::projects::{featured_projects, Project};

use super::blog::get_meta_server;
use super::motion::{AnimatedItem, AnimatedSection, HeroSection, PageTransition, StaggerContainer};
use super::whatsapp::whatsapp_link;

const HIGHLIGHT_SKILLS: &[(&str, &str)] = &[
    ("Laravel", "devicon-laravel-original"),
    ("Vue.js", "devicon-vuejs-plain"),
    ("PHP", "devicon-php-plain"),
    ("JavaScript", "devicon-javascript-plain"),
    ("MySQL", "devicon-mysql-plain"),
    ("Tailwind CSS", "devicon-tailwindcss-original"),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Amamul delivered our e-commerce platform ahead of schedule. Clean code, clear communication, and he stuck around to make sure launch went smoothly.",
        "Rahim Uddin",
        "Founder, RetailBD",
    ),
    (
        "The thesis repository he built transformed how our department works. Four user roles, complex workflows, and it just works.",
        "Dr. Fatema Khatun",
        "Department Coordinator",
    ),
    (
        "Fast, reliable, and genuinely cares about the product. Our restaurant system has run without a hitch since day one.",
        "Karim Hossain",
        "Restaurant Owner",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <PageTransition>
            <Hero />
            <AboutPreview />
            <SkillsPreview />
            <FeaturedProjects />
            <Testimonials />
            <RecentPosts />
            <CallToAction />
        </PageTransition>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-20 lg:py-28 text-center">
            <HeroSection>
                <p class="text-cyan font-medium mb-4">"Hi, my name is"</p>
            </HeroSection>
            <HeroSection delay=0.1>
                <h1 class="font-bold text-4xl sm:text-5xl lg:text-6xl mb-4">"Amamul Ahasan"</h1>
            </HeroSection>
            <HeroSection delay=0.2>
                <h2 class="font-bold text-2xl sm:text-3xl text-muted mb-6">
                    "I build things for the web."
                </h2>
            </HeroSection>
            <HeroSection delay=0.3>
                <p class="max-w-2xl mx-auto text-lg text-muted leading-relaxed mb-10">
                    "Freelance full-stack developer specializing in Laravel and Vue.js. "
                    "I turn ideas into fast, maintainable web applications — from e-commerce "
                    "platforms to school management systems."
                </p>
            </HeroSection>
            <HeroSection delay=0.4>
                <div class="flex flex-wrap justify-center gap-4">
                    <A
                        href="/projects"
                        attr:class="bg-cyan text-background px-6 py-3 rounded-md font-semibold hover:bg-cyan/90 transition-all duration-200"
                    >
                        "View My Work"
                    </A>
                    <a
                        href=whatsapp_link("Hi! I found your portfolio and would like to discuss a project.")
                        target="_blank"
                        rel="noopener noreferrer"
                        class="border border-cyan/40 text-cyan px-6 py-3 rounded-md font-semibold hover:bg-cyan/10 transition-all duration-200"
                    >
                        "Chat on WhatsApp"
                    </a>
                </div>
            </HeroSection>
        </section>
    }
}

#[component]
fn AboutPreview() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-4xl px-4 sm:px-6 lg:px-8 py-16 text-center">
            <AnimatedSection>
                <h2 class="font-bold text-3xl mb-6">
                    "About " <span class="text-cyan">"Me"</span>
                </h2>
                <p class="text-muted text-lg leading-relaxed mb-8">
                    "I'm a freelance developer from Chittagong, Bangladesh with a passion for "
                    "building complete products: backend APIs, polished frontends, and the "
                    "database design in between. I've shipped platforms for retail, education, "
                    "and hospitality clients."
                </p>
                <A
                    href="/about"
                    attr:class="text-cyan font-medium hover:underline underline-offset-4"
                >
                    "More about me →"
                </A>
            </AnimatedSection>
        </section>
    }
}

#[component]
fn SkillsPreview() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 py-16">
            <AnimatedSection class="text-center mb-10">
                <h2 class="font-bold text-3xl">
                    "My " <span class="text-cyan">"Stack"</span>
                </h2>
            </AnimatedSection>
            <StaggerContainer class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-4">
                {HIGHLIGHT_SKILLS
                    .iter()
                    .map(|&(name, icon)| {
                        view! {
                            <AnimatedItem class="glass-card p-6 text-center hover:border-cyan/40 transition-colors duration-300">
                                <i class=format!("{icon} text-4xl text-cyan")></i>
                                <p class="mt-3 text-sm font-medium">{name}</p>
                            </AnimatedItem>
                        }
                    })
                    .collect_view()}
            </StaggerContainer>
            <AnimatedSection class="text-center mt-8">
                <A
                    href="/skills"
                    attr:class="text-cyan font-medium hover:underline underline-offset-4"
                >
                    "All skills →"
                </A>
            </AnimatedSection>
        </section>
    }
}

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
                    <h3 class="font-bold text-lg mb-2 group-hover:text-cyan transition-colors">
                        {project.title}
                    </h3>
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
fn FeaturedProjects() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-16">
            <AnimatedSection class="text-center mb-10">
                <h2 class="font-bold text-3xl">
                    "Featured " <span class="text-cyan">"Projects"</span>
                </h2>
            </AnimatedSection>
            <StaggerContainer class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {featured_projects().map(project_card).collect_view()}
            </StaggerContainer>
            <AnimatedSection class="text-center mt-8">
                <A
                    href="/projects"
                    attr:class="text-cyan font-medium hover:underline underline-offset-4"
                >
                    "All projects →"
                </A>
            </AnimatedSection>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-16">
            <AnimatedSection class="text-center mb-10">
                <h2 class="font-bold text-3xl">
                    "What Clients " <span class="text-cyan">"Say"</span>
                </h2>
            </AnimatedSection>
            <StaggerContainer class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {TESTIMONIALS
                    .iter()
                    .map(|&(quote, name, role)| {
                        view! {
                            <AnimatedItem class="glass-card p-6 flex flex-col">
                                <p class="text-muted leading-relaxed flex-grow">
                                    "\u{201c}" {quote} "\u{201d}"
                                </p>
                                <div class="mt-4 pt-4 border-t border-muted/20">
                                    <p class="font-semibold">{name}</p>
                                    <p class="text-sm text-muted">{role}</p>
                                </div>
                            </AnimatedItem>
                        }
                    })
                    .collect_view()}
            </StaggerContainer>
        </section>
    }
}

#[component]
fn RecentPosts() -> impl IntoView {
    let posts = Resource::new(
        || (),
        |_| async { get_meta_server(String::new()).await.unwrap_or_default() },
    );
    view! {
        <section class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-16">
            <AnimatedSection class="text-center mb-10">
                <h2 class="font-bold text-3xl">
                    "Latest " <span class="text-cyan">"Articles"</span>
                </h2>
            </AnimatedSection>
            <Transition fallback=|| {
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <div class="loading-skeleton h-40 rounded-xl"></div>
                        <div class="loading-skeleton h-40 rounded-xl"></div>
                        <div class="loading-skeleton h-40 rounded-xl"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    let posts = posts.await;
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            {posts
                                .into_iter()
                                .take(3)
                                .map(|post| {
                                    view! {
                                        <A
                                            href=format!("/blog/{}", post.slug)
                                            attr:class="glass-card p-5 group hover:border-cyan/40 transition-all duration-300"
                                        >
                                            <div class="flex items-center gap-3 text-xs text-muted mb-3">
                                                <span class="bg-cyan/20 text-cyan px-2 py-1 rounded">
                                                    {post.category}
                                                </span>
                                                <span>{post.date.format("%b %e, %Y").to_string()}</span>
                                            </div>
                                            <h3 class="font-bold leading-snug mb-2 group-hover:text-cyan transition-colors">
                                                {post.title}
                                            </h3>
                                            <p class="text-sm text-muted leading-relaxed">
                                                {post.description}
                                            </p>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
            </Transition>
            <AnimatedSection class="text-center mt-8">
                <A
                    href="/blog"
                    attr:class="text-cyan font-medium hover:underline underline-offset-4"
                >
                    "All articles →"
                </A>
            </AnimatedSection>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-4xl px-4 sm:px-6 lg:px-8 py-20 text-center">
            <AnimatedSection class="glass-card p-10">
                <h2 class="font-bold text-3xl mb-4">"Have a project in mind?"</h2>
                <p class="text-muted text-lg mb-8">
                    "I'm currently available for freelance work. Let's build something great together."
                </p>
                <A
                    href="/contact"
                    attr:class="inline-block bg-cyan text-background px-8 py-3 rounded-md font-semibold hover:bg-cyan/90 transition-all duration-200"
                >
                    "Get in Touch"
                </A>
            </AnimatedSection>
        </section>
    }
}
