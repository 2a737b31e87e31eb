use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::blog::PostMeta;

pub fn build_channel(posts: Vec<PostMeta>) -> Channel {
    let items = posts
        .into_iter()
        .map(|p| {
            let link = format!("https://amamulahasan.dev/blog/{}", p.slug);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            ItemBuilder::default()
                .title(p.title)
                .description(p.description)
                .author(p.author)
                .pub_date(p.date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href("https://amamulahasan.dev/rss.xml");
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title("Amamul Ahasan's Blog")
        .description("Articles on Laravel, Vue.js, and building for the web from a freelance full-stack developer.")
        .link("https://amamulahasan.dev/blog")
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}
