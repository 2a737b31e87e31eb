use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
#[cfg(any(feature = "ssr", feature = "rss"))]
use regex::RegexBuilder;

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight;

pub static GLOBAL_POST_CACHE: LazyLock<DashMap<String, Option<PostBundle>>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_META_CACHE: LazyLock<DashMap<String, Vec<PostMeta>>> =
    LazyLock::new(DashMap::new);

/// Words-per-minute figure used for the "N min read" estimate.
const READ_WPM: usize = 200;

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    author: String,
    date: DateTime<Utc>,
    category: String,
    tags: Vec<String>,
    image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub read_minutes: usize,
}

/// One `<h2>` of a rendered post, in document order. `id` doubles as the DOM
/// anchor the table of contents scrolls to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSection {
    pub id: String,
    pub title: String,
}

#[derive(Error, Debug, Clone)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,
    #[error("Couldn't parse blog posts")]
    ParseError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub sections: Vec<PostSection>,
    pub content: String,
}

/// Everything the post page needs in one fetch: the rendered post plus the
/// related-articles strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostBundle {
    pub post: Post,
    pub related: Vec<PostMeta>,
}

/// URL-safe anchor id from heading text. Lowercased ASCII alphanumerics,
/// everything else collapsed to single dashes.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_dash = true;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

pub fn read_minutes(body: &str) -> usize {
    let words = body.split_whitespace().count();
    words.div_ceil(READ_WPM).max(1)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn unique_slug(title: &str, seen: &mut std::collections::HashMap<String, usize>) -> String {
    let base = slugify(title);
    let base = if base.is_empty() {
        "section".to_string()
    } else {
        base
    };
    let count = seen.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{base}-{count}")
    }
}

/// Inject anchor ids into `<h2>` headings and collect the section list the
/// table of contents is built from. Heading markup other than plain text
/// still renders; only text and inline code contribute to the anchor id.
#[cfg(any(feature = "ssr", feature = "rss"))]
fn anchor_sections<'a>(
    events: impl Iterator<Item = Event<'a>>,
) -> (Vec<Event<'a>>, Vec<PostSection>) {
    let mut out = Vec::new();
    let mut sections = Vec::new();
    let mut seen = std::collections::HashMap::new();
    let mut pending: Option<(Vec<Event<'a>>, String)> = None;

    for ev in events {
        match ev {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => {
                pending = Some((Vec::new(), String::new()));
            }
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                let (inner, title) = pending.take().unwrap_or_default();
                let id = unique_slug(&title, &mut seen);
                out.push(Event::Start(Tag::Heading {
                    level: HeadingLevel::H2,
                    id: Some(CowStr::from(id.clone())),
                    classes: Vec::new(),
                    attrs: Vec::new(),
                }));
                out.extend(inner);
                out.push(Event::End(TagEnd::Heading(HeadingLevel::H2)));
                sections.push(PostSection { id, title });
            }
            ev => match pending.as_mut() {
                Some((inner, title)) => {
                    match &ev {
                        Event::Text(t) | Event::Code(t) => title.push_str(t),
                        _ => {}
                    }
                    inner.push(ev);
                }
                None => out.push(ev),
            },
        }
    }

    (out, sections)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_meta(pattern: String) -> Option<Vec<PostMeta>> {
    let cache = &*GLOBAL_META_CACHE;
    let is_base = pattern.is_empty();
    if is_base {
        if let Some(r) = cache.get(&pattern) {
            return Some(r.clone());
        }
    }
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .ok()?;
    let matter = Matter::<YAML>::new();
    let posts = Assets::iter()
        .map(|s| {
            let content = Assets::get(&s).expect("Should be able to get blog post");
            (
                s,
                String::from_utf8(content.data.into()).expect("Couldn't parse blog post"),
            )
        })
        .filter(|(_, content)| is_base || re.is_match(content))
        .map(|(s, content)| {
            let fm = matter.parse_with_struct::<FrontMatter>(&content)?;
            Some(meta_from_front_matter(&s, fm.data, &fm.content))
        })
        .collect::<Option<Vec<PostMeta>>>();
    let posts = posts.map(|mut pv| {
        pv.sort_by(|a, b| b.date.cmp(&a.date));
        pv
    });
    if is_base {
        cache.insert(pattern, posts.clone().unwrap_or_default());
    }

    posts
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn meta_from_front_matter(file_name: &str, fm: FrontMatter, body: &str) -> PostMeta {
    let slug = file_name
        .strip_suffix(".md")
        .unwrap_or(file_name)
        .to_string();
    PostMeta {
        slug,
        title: fm.title,
        description: fm.description,
        author: fm.author,
        date: fm.date,
        category: fm.category,
        tags: fm.tags,
        image: fm.image,
        read_minutes: read_minutes(body),
    }
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn parse_post(slug: &str) -> Option<Post> {
    let file_name = format!("{slug}.md");
    let content = Assets::get(&file_name)?;
    let content = &String::from_utf8(content.data.into()).expect("Couldn't parse blog post");

    let matter = Matter::<YAML>::new();
    let fm = matter.parse_with_struct::<FrontMatter>(content)?;
    let meta = meta_from_front_matter(&file_name, fm.data, &fm.content);

    let parser = Parser::new_ext(content, Options::all());
    let (events, sections) = anchor_sections(parser);
    let events = highlight(events.into_iter());

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, events);

    Some(Post {
        meta,
        sections,
        content: html_output,
    })
}

/// Resolve a post by slug, with its related articles, caching both hits and
/// misses. A miss is a normal outcome (unknown slug → not-found view).
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_post_bundle(slug: String) -> Option<PostBundle> {
    let cache = &*GLOBAL_POST_CACHE;
    if let Some(cached) = cache.get(&slug) {
        return cached.clone();
    }
    let bundle = match parse_post(&slug) {
        Some(post) => {
            let related = get_related(slug.clone(), post.meta.category.clone(), 3).await;
            Some(PostBundle { post, related })
        }
        None => None,
    };
    cache.insert(slug, bundle.clone());
    bundle
}

/// Posts sharing a category with `slug`, newest first, excluding the post
/// itself. Used for the "related articles" strip.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn get_related(slug: String, category: String, limit: usize) -> Vec<PostMeta> {
    let Some(metas) = get_meta(String::new()).await else {
        return Vec::new();
    };
    metas
        .into_iter()
        .filter(|m| m.category == category && m.slug != slug)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Setting Up Your Project"), "setting-up-your-project");
        assert_eq!(slugify("  What's New in Vue 3?  "), "what-s-new-in-vue-3");
        assert_eq!(slugify("API / REST -- basics"), "api-rest-basics");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_read_minutes_rounds_up_and_floors_at_one() {
        assert_eq!(read_minutes("short"), 1);
        let two_hundred_one = "word ".repeat(201);
        assert_eq!(read_minutes(&two_hundred_one), 2);
        assert_eq!(read_minutes(""), 1);
    }
}

#[cfg(all(test, any(feature = "ssr", feature = "rss")))]
mod parse_tests {
    use super::*;

    #[test]
    fn test_unique_slug_deduplicates() {
        let mut seen = std::collections::HashMap::new();
        assert_eq!(unique_slug("Overview", &mut seen), "overview");
        assert_eq!(unique_slug("Overview", &mut seen), "overview-2");
        assert_eq!(unique_slug("Overview", &mut seen), "overview-3");
        assert_eq!(unique_slug("", &mut seen), "section");
    }

    #[test]
    fn test_anchor_sections_collects_h2_in_order() {
        let md = "# Post Title\n\nintro\n\n## First Part\n\nbody\n\n## Second `Part`\n\nmore\n\n### not a section\n";
        let parser = Parser::new_ext(md, Options::all());
        let (events, sections) = anchor_sections(parser);
        assert_eq!(
            sections,
            vec![
                PostSection {
                    id: "first-part".to_string(),
                    title: "First Part".to_string()
                },
                PostSection {
                    id: "second-part".to_string(),
                    title: "Second Part".to_string()
                },
            ]
        );

        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        assert!(html.contains("<h2 id=\"first-part\">"));
        assert!(html.contains("<h2 id=\"second-part\">"));
        // h1/h3 left untouched
        assert!(!html.contains("<h1 id="));
        assert!(!html.contains("<h3 id="));
    }

    #[tokio::test]
    async fn test_get_post_bundle_unknown_slug_is_none() {
        assert!(get_post_bundle("does-not-exist".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn test_get_post_bundle_known_slug_has_sections() {
        let bundle = get_post_bundle("vuejs-3-composition-api".to_string())
            .await
            .expect("embedded post should parse");
        assert!(bundle.related.iter().all(|m| m.slug != "vuejs-3-composition-api"));
        let post = bundle.post;
        assert_eq!(post.meta.title, "Vue.js 3 Composition API: Getting Started");
        assert!(!post.sections.is_empty());
        // every section id is unique
        let mut ids: Vec<_> = post.sections.iter().map(|s| s.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), post.sections.len());
    }

    #[tokio::test]
    async fn test_get_related_excludes_self_and_caps() {
        let related = get_related(
            "vuejs-3-composition-api".to_string(),
            "Vue.js".to_string(),
            3,
        )
        .await;
        assert!(related.len() <= 3);
        assert!(related.iter().all(|m| m.slug != "vuejs-3-composition-api"));
        assert!(related.iter().all(|m| m.category == "Vue.js"));
    }
}
