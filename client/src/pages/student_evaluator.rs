//! Smart Evaluator: answer-sheet uploads to per-student scores, weak topics
//! and study links, with CSV export.

use classroom::export::{EVALUATION_CSV_FILENAME, EVALUATION_CSV_MIME, evaluation_csv};
use classroom::{EvaluationReport, StudentResult, Tool, Validate};
use leptos::prelude::*;

use crate::components::generate_button::GenerateButton;
use crate::components::toaster::notify;
use crate::components::tool_frame::ToolFrame;
use crate::state::toast::{ToastKind, ToastQueue};
use crate::state::uploads::{UPLOADED_TITLE, UploadList, added_message};
use crate::util::download::save_text;
use crate::util::files::picked_files;

const TOOL: Tool = Tool::SmartEvaluator;

#[component]
pub fn StudentEvaluatorPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let state = super::mount_state::<EvaluationReport>();
    let uploads = RwSignal::new(UploadList::default());

    let on_pick = move |ev: leptos::ev::Event| {
        let picked = picked_files(&ev);
        let added = uploads.try_update(|list| list.add(picked)).unwrap_or_default();
        if added > 0 {
            notify(toasts, |queue| queue.push(UPLOADED_TITLE, added_message(added), ToastKind::Default));
        }
    };

    let on_press = move || {
        let req = uploads.with_untracked(UploadList::to_request);
        super::run(state, toasts, TOOL, req.validate(), move || async move { crate::net::api::evaluate(&req).await });
    };

    let on_download = move |_| {
        let csv = state.with_untracked(|s| s.result.as_ref().map(|report| evaluation_csv(&report.results)));
        let Some(csv) = csv else {
            return;
        };
        match save_text(EVALUATION_CSV_FILENAME, EVALUATION_CSV_MIME, &csv) {
            Ok(()) => notify(toasts, |queue| {
                queue.push("CSV Downloaded", "Evaluation results saved to CSV file", ToastKind::Default)
            }),
            Err(e) => notify(toasts, |queue| queue.push("Download failed", e, ToastKind::Destructive)),
        }
    };

    let results = move || {
        state.get().result.map(|report| {
            let count = report.results.len();
            view! {
                <section class="card result-card">
                    <header class="card__header">
                        <h2 class="card__title result-card__title">"Evaluation Results"</h2>
                        <p class="card__description">{format!("AI has analyzed {count} answer sheets")}</p>
                    </header>
                    <div class="card__content evaluation">
                        {report.results.into_iter().map(student_card).collect_view()}
                        <button class="button button--outline" type="button" on:click=on_download>
                            "Download Results as CSV"
                        </button>
                    </div>
                </section>
            }
        })
    };

    view! {
        <ToolFrame tool=TOOL results=results>
            <label class="field upload">
                <span class="field__label">"Upload photos of student answer sheets (JPG, PNG, PDF)"</span>
                <input class="upload__input" type="file" multiple accept="image/*,.pdf" on:change=on_pick/>
            </label>
            <Show when=move || !uploads.with(UploadList::is_empty)>
                <ul class="upload-list">
                    {move || {
                        uploads
                            .get()
                            .files()
                            .iter()
                            .map(|file| {
                                view! {
                                    <li class="upload-list__item">
                                        <span class="upload-list__name">{file.name.clone()}</span>
                                        <span class="upload-list__size">{file.size_label()}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
            <GenerateButton
                tool=TOOL
                pending=Signal::derive(move || state.get().is_pending())
                disabled=false
                on_press=on_press
            />
        </ToolFrame>
    }
}

fn student_card(result: StudentResult) -> impl IntoView {
    let topics = result
        .weak_topics
        .iter()
        .map(|topic| {
            let links = result
                .resources_for(topic)
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <a href=link.clone() target="_blank" rel="noopener noreferrer">
                                {link.clone()}
                            </a>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <li class="weak-topic">
                    <span class="weak-topic__name">{topic.clone()}</span>
                    <ul class="weak-topic__links">{links}</ul>
                </li>
            }
        })
        .collect_view();

    view! {
        <article class="student-result">
            <header class="student-result__header">
                <div>
                    <h3>{result.student_name.clone()}</h3>
                    <p class="student-result__file">{result.file_name.clone()}</p>
                </div>
                <div class="student-result__score">
                    <span>{format!("{}/{}", result.scored_marks, result.total_marks)}</span>
                    <span class="student-result__percentage">{format!("{}%", result.percentage)}</span>
                </div>
            </header>
            <h4>"Weak Topics"</h4>
            <ul class="weak-topics">{topics}</ul>
        </article>
    }
}
