//! Landing hero with call-to-action buttons and headline stats.

use leptos::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("5000+", "Teachers Empowered"),
    ("15+", "Regional Languages"),
    ("50,000+", "Students Benefited"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">
                "Empowering Teachers, "
                <span class="hero__accent">"Transforming Education"</span>
            </h1>
            <p class="hero__lead">
                "Revolutionary AI-powered platform designed specifically for Indian educators. "
                "Create engaging content, assess students intelligently, and bridge language barriers effortlessly."
            </p>
            <div class="hero__actions">
                <a class="button button--primary button--lg" href="/auth">
                    "Start Teaching with AI"
                </a>
                <a class="button button--outline button--lg" href="/demo">
                    "View Demo"
                </a>
            </div>
            <div class="hero__stats">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="hero__stat">
                                <div class="hero__stat-value">{*value}</div>
                                <div class="hero__stat-label">{*label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
