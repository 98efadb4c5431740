//! DiagramGen: a description to a labelled image with blackboard instructions.

use classroom::{Complexity, Language, REGIONAL_LANGUAGES, Tool, Validate, VisualAid, VisualAidRequest};
use leptos::prelude::*;

use crate::components::choice_select::ChoiceSelect;
use crate::components::generate_button::GenerateButton;
use crate::components::tool_frame::ToolFrame;
use crate::state::toast::ToastQueue;

const TOOL: Tool = Tool::DiagramGen;

#[component]
pub fn VisualAidGeneratorPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let state = super::mount_state::<VisualAid>();

    let language = RwSignal::new(Language::Marathi);
    let complexity = RwSignal::new(Complexity::default());
    let prompt = RwSignal::new(String::new());

    let on_press = move || {
        let req = VisualAidRequest {
            prompt: prompt.get_untracked(),
            language: language.get_untracked(),
            complexity: complexity.get_untracked(),
        };
        super::run(state, toasts, TOOL, req.validate(), move || async move {
            crate::net::api::generate_visual_aid(&req).await
        });
    };

    let results = move || {
        state.get().result.map(|aid| {
            view! {
                <section class="card result-card">
                    <header class="card__header">
                        <h2 class="card__title result-card__title">"AI-Generated Visual Aid"</h2>
                        <p class="card__description">"Image with regional language labels"</p>
                    </header>
                    <div class="card__content">
                        <figure class="visual-aid">
                            <img class="visual-aid__image" src=aid.image_url alt="Generated visual aid"/>
                            {aid
                                .labels
                                .into_iter()
                                .map(|label| {
                                    let class = format!("visual-aid__label {}", label.anchor.css_class());
                                    view! { <span class=class>{label.text}</span> }
                                })
                                .collect_view()}
                        </figure>
                        <pre class="visual-aid__instructions">{aid.instructions}</pre>
                    </div>
                </section>
            }
        })
    };

    view! {
        <ToolFrame tool=TOOL results=results>
            <div class="field-row">
                <ChoiceSelect label="Language for Labels" value=language options=REGIONAL_LANGUAGES.as_slice()/>
                <ChoiceSelect label="Complexity" value=complexity/>
            </div>
            <label class="field">
                <span class="field__label">"Describe Visual Aid (Regional Language)"</span>
                <textarea
                    class="field__input field__input--tall"
                    placeholder="उदाहरण: पाण्याच्या चक्राचे चित्र बनवा ज्यात ढग, पाऊस, नदी आणि समुद्र दाखवा / Create water cycle diagram showing clouds, rain, river and ocean"
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
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
