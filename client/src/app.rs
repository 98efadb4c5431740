//! Root application component with routing and context providers.

use classroom::Tool;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::toaster::Toaster;
use crate::pages::Page;
use crate::pages::{
    auth::AuthPage, content_generator::ContentGeneratorPage, demo::DemoPage, home::HomePage,
    knowledge_simplifier::KnowledgeSimplifierPage, not_found::NotFoundPage, student_evaluator::StudentEvaluatorPage,
    visual_aid_generator::VisualAidGeneratorPage, worksheet_generator::WorksheetGeneratorPage,
};
use crate::state::toast::ToastQueue;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Route segment for `page`; every routed page has one.
fn segment(page: Page) -> StaticSegment<&'static str> {
    StaticSegment(page.segment().unwrap_or_default())
}

/// Root application component.
///
/// Provides the toast queue and sets up client-side routing. Tool pages own
/// their request state, so it resets whenever the route changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastQueue::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/gurumitra.css"/>
        <Title text="Gurumitra - AI Teaching Assistant"/>

        <Router>
            <Routes fallback=CurrentPage>
                <Route path=segment(Page::Home) view=CurrentPage/>
                <Route path=segment(Page::Auth) view=CurrentPage/>
                <Route path=segment(Page::Demo) view=CurrentPage/>
                <Route path=segment(Page::Tool(Tool::StoryCrafter)) view=CurrentPage/>
                <Route path=segment(Page::Tool(Tool::Snap2Sheet)) view=CurrentPage/>
                <Route path=segment(Page::Tool(Tool::GyaanGenie)) view=CurrentPage/>
                <Route path=segment(Page::Tool(Tool::DiagramGen)) view=CurrentPage/>
                <Route path=segment(Page::Tool(Tool::SmartEvaluator)) view=CurrentPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}

/// Page for the current location, resolved by `Page::from_path`.
///
/// The router's segments only register paths for server rendering; this
/// picks the view, so trailing slashes and unknown paths resolve the same way
/// on the server and in the browser. A page change swaps the whole subtree.
#[component]
fn CurrentPage() -> impl IntoView {
    let location = use_location();
    let page = Memo::new(move |_| location.pathname.with(|path| Page::from_path(path)));

    move || match page.get() {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Auth => view! { <AuthPage/> }.into_any(),
        Page::Demo => view! { <DemoPage/> }.into_any(),
        Page::Tool(Tool::StoryCrafter) => view! { <ContentGeneratorPage/> }.into_any(),
        Page::Tool(Tool::Snap2Sheet) => view! { <WorksheetGeneratorPage/> }.into_any(),
        Page::Tool(Tool::GyaanGenie) => view! { <KnowledgeSimplifierPage/> }.into_any(),
        Page::Tool(Tool::DiagramGen) => view! { <VisualAidGeneratorPage/> }.into_any(),
        Page::Tool(Tool::SmartEvaluator) => view! { <StudentEvaluatorPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
