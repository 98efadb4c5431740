//! Product demo placeholder.

use leptos::prelude::*;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Content Generation", "See how AI creates culturally relevant content"),
    ("Multi-level Worksheets", "Differentiated activities for all students"),
    ("Visual Aids", "AI-generated diagrams and illustrations"),
];

#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <div class="plain-page">
            <div class="plain-page__inner">
                <a class="button button--ghost back-link" href="/">
                    "← Back to Home"
                </a>
                <section class="card demo">
                    <h1>"Gurumitra Product Demo"</h1>
                    <p class="demo__lead">"Watch how Gurumitra transforms teaching with AI-powered tools"</p>
                    <div class="demo__video">
                        <div class="demo__play" aria-hidden="true">"▶"</div>
                        <p>"Product Demo Video"</p>
                    </div>
                    <div class="demo__highlights">
                        {HIGHLIGHTS
                            .iter()
                            .map(|(title, text)| {
                                view! {
                                    <div class="demo__highlight">
                                        <h3>{*title}</h3>
                                        <p>{*text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
