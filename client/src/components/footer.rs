//! Site footer.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__about">
                <div class="site-footer__brand">"Gurumitra"</div>
                <p>
                    "Empowering teachers with AI-powered tools for better learning outcomes in multi-grade classrooms."
                </p>
                <p class="site-footer__motto">"\"Smarter Teaching, Better Learning\""</p>
            </div>
            <div class="site-footer__links">
                <h3>"Quick Links"</h3>
                <ul>
                    <li><a href="#features">"Features"</a></li>
                    <li><a href="/demo">"Demo"</a></li>
                </ul>
            </div>
            <div class="site-footer__contact">
                <h3>"Contact"</h3>
                <ul>
                    <li>"support@gurumitra.ai"</li>
                    <li>"+91 9876543210"</li>
                    <li>"Mumbai, Maharashtra"</li>
                </ul>
            </div>
            <p class="site-footer__legal">"© 2024 Gurumitra. All rights reserved."</p>
        </footer>
    }
}
