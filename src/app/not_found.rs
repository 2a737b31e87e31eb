use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <p class="text-7xl font-bold text-cyan mb-4">"404"</p>
            <h1 class="text-2xl font-bold mb-2">"Page not found"</h1>
            <p class="text-muted mb-8 max-w-md">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <A
                href="/"
                attr:class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30 transition-all duration-200"
            >
                "Back to Home"
            </A>
        </div>
    }
}
