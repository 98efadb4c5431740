//! Page chrome shared by the five tool views.

use classroom::Tool;
use leptos::prelude::*;

/// Back link, tool heading card holding the form, then `results` below.
#[component]
pub fn ToolFrame(tool: Tool, #[prop(into)] results: ViewFn, children: Children) -> impl IntoView {
    view! {
        <div class="tool-page">
            <div class="tool-page__inner">
                <a class="button button--ghost back-link" href="/">
                    "← Back to Home"
                </a>
                <section class="card tool-card">
                    <header class="card__header">
                        <h1 class="card__title">{tool.name()}</h1>
                        <p class="card__description">{tool.tagline()}</p>
                    </header>
                    <div class="card__content tool-card__form">{children()}</div>
                </section>
                {results.run()}
            </div>
        </div>
    }
}
