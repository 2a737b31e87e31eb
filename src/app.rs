mod about;
mod blog;
mod contact;
mod experience;
mod footer;
mod home;
mod motion;
mod navbar;
mod not_found;
mod projects;
mod services;
mod share;
mod skills;
mod toast;
mod toc;
mod whatsapp;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use footer::Footer;
use navbar::Navbar;
use toast::Toaster;
use whatsapp::WhatsAppButton;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Amamul Ahasan - Full Stack Developer specializing in Laravel, Vue.js, and modern web applications."
                />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    toast::provide_toasts();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Amamul Ahasan - {title}") />

        <Router>
            <Navbar />
            <main class="pt-16 md:pt-20 min-h-screen">
                <Routes fallback=not_found::NotFoundPage>
                    <Route path=path!("/") view=home::HomePage />
                    <Route path=path!("/about") view=about::AboutPage />
                    <Route path=path!("/skills") view=skills::SkillsPage />
                    <Route path=path!("/experience") view=experience::ExperiencePage />
                    <Route path=path!("/services") view=services::ServicesPage />
                    <Route path=path!("/projects") view=projects::ProjectsPage />
                    <Route path=path!("/project/:slug") view=projects::ProjectDetailsPage />
                    <ParentRoute path=path!("/blog") view=blog::BlogWrapper>
                        <Route path=path!("") view=blog::BlogHome />
                        <Route path=path!(":slug") view=blog::BlogPage />
                    </ParentRoute>
                    <Route path=path!("/contact") view=contact::ContactPage />
                </Routes>
            </main>
            <Footer />
            <WhatsAppButton />
            <Toaster />
        </Router>
    }
}
