//! Feature card grid linking to each tool view.

use classroom::Tool;
use leptos::prelude::*;

#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <section class="features" id="features">
            <div class="features__intro">
                <h2>"Everything You Need to Teach Effectively"</h2>
                <p>
                    "Comprehensive AI tools with voice support designed specifically for multi-grade "
                    "classrooms and resource-constrained environments"
                </p>
            </div>
            <div class="features__grid">
                {Tool::ALL
                    .into_iter()
                    .map(|tool| {
                        view! {
                            <article class="card feature-card">
                                <h3 class="card__title">{tool.name()}</h3>
                                <p class="card__description">{tool.summary()}</p>
                                <p class="feature-card__example">"Example: " {tool.example()}</p>
                                <a class="button button--ghost feature-card__cta" href=tool.path()>
                                    "Try Now"
                                </a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
