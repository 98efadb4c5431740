//! Landing page.

use leptos::prelude::*;

use crate::components::feature_cards::FeatureCards;
use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::hero::Hero;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <SiteHeader/>
            <main>
                <Hero/>
                <FeatureCards/>
            </main>
            <SiteFooter/>
        </div>
    }
}
