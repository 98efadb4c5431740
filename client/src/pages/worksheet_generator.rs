//! Snap2Sheet: one uploaded image or PDF to three tiered worksheets.

use classroom::{FileRef, Tool, Validate, WorksheetRequest, WorksheetSet};
use leptos::prelude::*;

use crate::components::generate_button::GenerateButton;
use crate::components::toaster::notify;
use crate::components::tool_frame::ToolFrame;
use crate::state::toast::{ToastKind, ToastQueue};
use crate::util::files::picked_files;

#[cfg(test)]
#[path = "worksheet_generator_test.rs"]
mod worksheet_generator_test;

const TOOL: Tool = Tool::Snap2Sheet;

/// Generation stays off until a source file is picked.
pub(crate) fn generate_disabled(file: Option<&FileRef>) -> bool {
    file.is_none()
}

#[component]
pub fn WorksheetGeneratorPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let state = super::mount_state::<WorksheetSet>();
    let file = RwSignal::new(None::<FileRef>);

    let on_pick = move |ev: leptos::ev::Event| {
        if let Some(picked) = picked_files(&ev).into_iter().next() {
            file.set(Some(picked));
            notify(toasts, |queue| {
                queue.push(
                    "File uploaded successfully",
                    "Ready to generate differentiated worksheets",
                    ToastKind::Default,
                )
            });
        }
    };

    let on_press = move || {
        let req = WorksheetRequest { file: file.get_untracked() };
        super::run(state, toasts, TOOL, req.validate(), move || async move {
            crate::net::api::generate_worksheets(&req).await
        });
    };

    let results = move || {
        state.get().result.map(|set| {
            view! {
                <section class="card result-card">
                    <header class="card__header">
                        <h2 class="card__title result-card__title">"Generated Worksheets"</h2>
                        <p class="card__description">"Source: " {set.source}</p>
                    </header>
                    <div class="card__content worksheets">
                        {set
                            .sheets
                            .into_iter()
                            .map(|sheet| {
                                view! {
                                    <article class="worksheet">
                                        <h3 class="worksheet__title">
                                            {sheet.tier.label()} " Level - " {sheet.tier.focus()}
                                        </h3>
                                        <pre class="worksheet__content">{sheet.content}</pre>
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
            <label class="field upload">
                <span class="field__label">"Upload Image or PDF"</span>
                <input class="upload__input" type="file" accept="image/*,.pdf" on:change=on_pick/>
                <span class="upload__hint">
                    {move || {
                        file.get()
                            .map_or_else(|| "Click to upload image or PDF".to_owned(), |picked| picked.name)
                    }}
                </span>
            </label>
            <GenerateButton
                tool=TOOL
                pending=Signal::derive(move || state.get().is_pending())
                disabled=Signal::derive(move || file.with(|picked| generate_disabled(picked.as_ref())))
                on_press=on_press
            />
        </ToolFrame>
    }
}
