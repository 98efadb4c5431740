//! Catch-all view for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="plain-page not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <a class="button button--primary" href="/">
                "Return to Home"
            </a>
        </div>
    }
}
