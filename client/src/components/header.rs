//! Top navigation bar for the landing page.

use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Gurumitra"
            </a>
            <nav class="site-header__nav">
                <a class="button button--ghost" href="/demo">
                    "View Demo"
                </a>
                <a class="button button--ghost" href="#features">
                    "Features"
                </a>
            </nav>
            <div class="site-header__actions">
                <a class="button button--outline" href="/auth">
                    "Login"
                </a>
                <a class="button button--primary" href="/auth">
                    "Start Teaching with AI"
                </a>
            </div>
        </header>
    }
}
