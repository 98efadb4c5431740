//! GyaanGenie: a question in a regional language to a simple explanation.

use classroom::{Language, REGIONAL_LANGUAGES, SimplifiedAnswer, SimplifyRequest, Tool, Validate};
use leptos::prelude::*;

use crate::components::choice_select::ChoiceSelect;
use crate::components::generate_button::GenerateButton;
use crate::components::tool_frame::ToolFrame;
use crate::state::toast::ToastQueue;

const TOOL: Tool = Tool::GyaanGenie;

#[component]
pub fn KnowledgeSimplifierPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let state = super::mount_state::<SimplifiedAnswer>();

    let language = RwSignal::new(Language::Marathi);
    let question = RwSignal::new(String::new());

    let on_press = move || {
        let req = SimplifyRequest { question: question.get_untracked(), language: language.get_untracked() };
        super::run(state, toasts, TOOL, req.validate(), move || async move { crate::net::api::simplify(&req).await });
    };

    let results = move || {
        state.get().result.map(|answer| {
            view! {
                <section class="card result-card">
                    <header class="card__header">
                        <h2 class="card__title result-card__title">"Regional Language Answer"</h2>
                    </header>
                    <div class="card__content">
                        <pre class="answer">{answer.text}</pre>
                    </div>
                </section>
            }
        })
    };

    view! {
        <ToolFrame tool=TOOL results=results>
            <ChoiceSelect label="Response Language" value=language options=REGIONAL_LANGUAGES.as_slice()/>
            <label class="field">
                <span class="field__label">"Your Question (Regional Language)"</span>
                <textarea
                    class="field__input field__input--tall"
                    placeholder="उदाहरण: आकाश निळे का दिसते? / आसमान नीला क्यों दिखता है? / Why is the sky blue?"
                    prop:value=move || question.get()
                    on:input=move |ev| question.set(event_target_value(&ev))
                ></textarea>
            </label>
            <GenerateButton
                tool=TOOL
                pending=Signal::derive(move || state.get().is_pending())
                disabled=false
                on_press=on_press
            />
        </ToolFrame>
    }
}
