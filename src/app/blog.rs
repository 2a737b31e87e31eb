use leptos::{html::Input, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};
use server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use crate::blog::{get_meta, get_post_bundle};
use crate::blog::{PostBundle, PostMeta, GLOBAL_META_CACHE, GLOBAL_POST_CACHE};

use super::motion::PageTransition;
use super::share::share_current_page;
use super::toast::use_toasts;
use super::toc::TableOfContents;

#[component]
pub fn BlogWrapper() -> impl IntoView {
    let clicked = ArcTrigger::new();
    provide_context(clicked.clone());
    view! {
        <Title text="Blog" />
        <PageTransition>
            <div class="text-center pt-12 mb-8 px-4">
                <h1 class="font-bold text-3xl lg:text-4xl mb-4">
                    <a
                        href="/blog"
                        on:click=move |_| clicked.notify()
                        class="hover:text-cyan transition-colors duration-200"
                    >
                        "Blog & " <span class="text-cyan">"Articles"</span>
                    </a>
                    <a
                        href="https://amamulahasan.dev/rss.xml"
                        target="_blank"
                        class="relative top-1 ml-4 text-yellow hover:text-yellow/80 transition-colors duration-200"
                        aria-label="RSS Feed"
                    >
                        <i class="extra-rss" />
                    </a>
                </h1>
                <p class="max-w-2xl mx-auto text-lg text-muted">
                    "Thoughts on web development, Laravel, Vue.js, and building software that lasts."
                </p>
            </div>
            <div class="w-full max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 pb-16">
                <Outlet />
            </div>
        </PageTransition>
    }
}

#[server(input = GetUrl)]
pub async fn get_meta_server(pattern: String) -> Result<Vec<PostMeta>, ServerFnError> {
    get_meta(pattern)
        .await
        .ok_or(ServerFnError::new("Couldn't parse blog posts"))
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(None::<String>);
    let input_ref = NodeRef::<Input>::new();
    let posts = Resource::new(search, move |search| async move {
        let cache = &*GLOBAL_META_CACHE;
        if let Some(s) = cache.get(&search) {
            return (*s).clone();
        }
        let meta = get_meta_server(search.clone()).await.unwrap_or(Vec::new());
        // only cache all searches on the browser
        #[cfg(feature = "hydrate")]
        cache.insert(search, meta.clone());
        meta
    });

    let header_clicked = expect_context::<ArcTrigger>();
    Effect::watch(
        move || header_clicked.track(),
        move |_, _, _| {
            let el = if let Some(el) = input_ref.get_untracked() {
                el
            } else {
                return;
            };
            set_search(String::new());
            set_category(None);
            el.set_value("");
        },
        false,
    );

    view! {
        <div class="mb-8">
            <form
                class="flex flex-col sm:flex-row gap-3 items-start sm:items-center"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let el = if let Some(el) = input_ref.get_untracked() {
                        el
                    } else {
                        return;
                    };
                    set_search(el.value());
                }
            >
                <label for="blog_search" class="font-medium text-cyan whitespace-nowrap">
                    "Search articles:"
                </label>
                <div class="flex-grow w-full sm:max-w-md">
                    <input
                        id="blog_search"
                        class="w-full px-4 py-2 rounded-md border border-muted/30 focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-secondary/50 text-foreground placeholder-muted transition-all duration-200"
                        node_ref=input_ref
                        placeholder="Search by keyword..."
                    />
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 transition-all duration-200 whitespace-nowrap"
                >
                    "Search"
                </button>
            </form>
        </div>
        <Transition fallback=move || {
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <div class="loading-skeleton h-64 rounded-xl"></div>
                    <div class="loading-skeleton h-64 rounded-xl"></div>
                    <div class="loading-skeleton h-64 rounded-xl"></div>
                    <div class="loading-skeleton h-64 rounded-xl"></div>
                    <div class="loading-skeleton h-64 rounded-xl"></div>
                    <div class="loading-skeleton h-64 rounded-xl"></div>
                </div>
            }
        }>
            {move || {
                let selected = category.get();
                Suspend::new(async move {
                    let posts = posts.await;
                    let mut cats: Vec<String> = Vec::new();
                    for p in &posts {
                        if !cats.contains(&p.category) {
                            cats.push(p.category.clone());
                        }
                    }
                    let shown: Vec<PostMeta> = posts
                        .into_iter()
                        .filter(|p| {
                            selected.as_deref().is_none_or(|c| p.category == c)
                        })
                        .collect();
                    view! {
                        <div class="flex flex-wrap gap-2 mb-8">
                            <button
                                on:click=move |_| set_category.set(None)
                                class=if selected.is_none() {
                                    "px-3 py-1.5 rounded-full text-sm bg-cyan text-background font-medium"
                                } else {
                                    "px-3 py-1.5 rounded-full text-sm bg-secondary text-muted hover:text-foreground transition-colors"
                                }
                            >
                                "All"
                            </button>
                            {cats
                                .into_iter()
                                .map(|cat| {
                                    let is_selected = selected.as_deref() == Some(cat.as_str());
                                    let value = cat.clone();
                                    view! {
                                        <button
                                            on:click=move |_| set_category.set(Some(value.clone()))
                                            class=if is_selected {
                                                "px-3 py-1.5 rounded-full text-sm bg-cyan text-background font-medium"
                                            } else {
                                                "px-3 py-1.5 rounded-full text-sm bg-secondary text-muted hover:text-foreground transition-colors"
                                            }
                                        >
                                            {cat}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {if shown.is_empty() {
                            view! {
                                <p class="text-center text-muted py-16">
                                    "No articles match your search."
                                </p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {shown.into_iter().map(post_card).collect_view()}
                                </div>
                            }
                                .into_any()
                        }}
                    }
                })
            }}
        </Transition>
    }
}

fn post_card(post: PostMeta) -> impl IntoView {
    view! {
        <A
            href=post.slug
            attr:class="glass-card overflow-hidden group hover:border-cyan/40 transition-all duration-300 flex flex-col"
        >
            <img
                src=post.image
                alt=post.title.clone()
                loading="lazy"
                class="w-full h-40 object-cover group-hover:scale-105 transition-transform duration-300"
            />
            <div class="p-5 flex flex-col flex-grow">
                <div class="flex items-center gap-3 text-xs text-muted mb-3">
                    <span class="bg-cyan/20 text-cyan px-2 py-1 rounded">{post.category}</span>
                    <span>{post.date.format("%b %e, %Y").to_string()}</span>
                    <span>{format!("{} min read", post.read_minutes)}</span>
                </div>
                <h2 class="font-bold text-lg leading-snug mb-2 group-hover:text-cyan transition-colors">
                    {post.title}
                </h2>
                <p class="text-sm text-muted leading-relaxed flex-grow">{post.description}</p>
                <div class="flex flex-wrap gap-1 mt-4">
                    {post
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="bg-secondary text-muted px-2 py-1 rounded text-xs">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </A>
    }
}

#[server(input = GetUrl)]
pub async fn get_post_server(slug: String) -> Result<PostBundle, ServerFnError> {
    get_post_bundle(slug)
        .await
        .ok_or(ServerFnError::new("Couldn't get blog post"))
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let post = Resource::new(slug, move |slug| async {
        // take ownership of slug
        let slug = slug;
        let cache = &*GLOBAL_POST_CACHE;
        if let Some(s) = cache.get(&slug) {
            return (*s)
                .clone()
                .ok_or(ServerFnError::new("Couldn't get blog post"));
        }
        let bundle = get_post_server(slug.clone()).await;
        cache.insert(slug, bundle.clone().ok());
        bundle
    });
    view! {
        <Suspense>
            {move || Suspend::new(async move {
                match post.await {
                    Ok(bundle) => post_view(bundle).into_any(),
                    Err(_) => {
                        view! {
                            <div class="text-center py-24">
                                <h1 class="text-2xl font-bold mb-2">"Article not found"</h1>
                                <p class="text-muted mb-8">
                                    "This article doesn't exist or has been removed."
                                </p>
                                <A
                                    href="/blog"
                                    attr:class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30 transition-all duration-200"
                                >
                                    "Back to Blog"
                                </A>
                            </div>
                        }
                            .into_any()
                    }
                }
            })}
        </Suspense>
    }
}

fn post_view(bundle: PostBundle) -> impl IntoView {
    let PostBundle { post, related } = bundle;
    let toasts = use_toasts();
    let share_title = post.meta.title.clone();
    view! {
        <Title text=post.meta.title.clone() />
        <article>
            <header class="mb-8">
                <div class="flex items-center gap-3 text-sm mb-4">
                    <span class="bg-cyan/20 text-cyan px-2.5 py-1 rounded">
                        {post.meta.category.clone()}
                    </span>
                    <span class="text-muted">
                        {post.meta.date.format("%b %e, %Y").to_string()}
                    </span>
                    <span class="text-muted">
                        {format!("{} min read", post.meta.read_minutes)}
                    </span>
                </div>
                <h1 class="font-bold text-3xl lg:text-4xl leading-tight mb-4">
                    {post.meta.title.clone()}
                </h1>
                <p class="text-lg text-muted mb-4">{post.meta.description}</p>
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div class="flex items-center gap-4 text-sm">
                        <span class="text-cyan font-medium">{post.meta.author}</span>
                        <div class="flex flex-wrap gap-1">
                            {post
                                .meta
                                .tags
                                .into_iter()
                                .map(|tag| {
                                    view! {
                                        <span class="bg-secondary text-muted px-2 py-1 rounded text-xs">
                                            {tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <button
                        on:click=move |_| share_current_page(&share_title, toasts)
                        class="flex items-center gap-2 px-3 py-1.5 rounded-md border border-muted/30 text-sm text-muted hover:text-cyan hover:border-cyan/40 transition-all duration-200"
                    >
                        "Share"
                    </button>
                </div>
            </header>
            <div class="grid grid-cols-1 lg:grid-cols-[1fr_260px] gap-10">
                <div>
                    <div class="prose prose-invert max-w-none" inner_html=post.content></div>
                    {(!related.is_empty())
                        .then(|| {
                            view! {
                                <section class="mt-16 pt-8 border-t border-muted/20">
                                    <h2 class="font-bold text-xl mb-6">"Related Articles"</h2>
                                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                        {related.into_iter().map(post_card).collect_view()}
                                    </div>
                                </section>
                            }
                        })}
                </div>
                <aside class="hidden lg:block">
                    <TableOfContents sections=post.sections />
                </aside>
            </div>
        </article>
    }
}
