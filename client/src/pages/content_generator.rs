//! StoryCrafter: prompt + language (+ grade and subject) to storyboard slides.

use classroom::{GradeLevel, Language, StoryRequest, Storyboard, Subject, Tool, Validate};
use leptos::prelude::*;

use crate::components::choice_select::ChoiceSelect;
use crate::components::generate_button::GenerateButton;
use crate::components::tool_frame::ToolFrame;
use crate::state::toast::ToastQueue;

const TOOL: Tool = Tool::StoryCrafter;

#[component]
pub fn ContentGeneratorPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let state = super::mount_state::<Storyboard>();

    let language = RwSignal::new(Language::English);
    let grade_level = RwSignal::new(GradeLevel::default());
    let subject = RwSignal::new(Subject::default());
    let prompt = RwSignal::new(String::new());

    let on_press = move || {
        let req = StoryRequest {
            prompt: prompt.get_untracked(),
            language: language.get_untracked(),
            grade_level: grade_level.get_untracked(),
            subject: subject.get_untracked(),
        };
        super::run(state, toasts, TOOL, req.validate(), move || async move {
            crate::net::api::generate_storyboard(&req).await
        });
    };

    let results = move || {
        state.get().result.map(|board| {
            view! {
                <section class="card result-card">
                    <header class="card__header">
                        <h2 class="card__title result-card__title">"Generated Storyboard"</h2>
                        <p class="card__description">
                            "Interactive story slides ready for classroom presentation"
                        </p>
                    </header>
                    <div class="card__content storyboard">
                        {board
                            .slides
                            .into_iter()
                            .map(|slide| {
                                view! {
                                    <article class="storyboard__slide">
                                        <h4>{slide.title}</h4>
                                        <p>{slide.content}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            }
        })
    };

    view! {
        <ToolFrame tool=TOOL results=results>
            <ChoiceSelect label="Language" value=language/>
            <div class="field-row">
                <ChoiceSelect label="Grade Level" value=grade_level/>
                <ChoiceSelect label="Subject" value=subject/>
            </div>
            <label class="field">
                <span class="field__label">"Content Prompt"</span>
                <textarea
                    class="field__input field__input--tall"
                    placeholder="Example: Create a story about farmers to explain different soil types for rural students in Maharashtra"
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
