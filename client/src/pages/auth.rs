//! Sign-in / sign-up page. Accounts are not implemented; submit only logs
//! and notifies.

use classroom::{Choice, GradeLevel};
use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::state::auth::{AuthForm, AuthMode};
use crate::state::toast::{ToastKind, ToastQueue};

#[component]
pub fn AuthPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let form = RwSignal::new(AuthForm::default());
    let mode = Memo::new(move |_| form.get().mode);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        match current.check() {
            Ok(()) => {
                #[cfg(feature = "hydrate")]
                log::info!("auth: {:?} submitted for {}", current.mode, current.email);
                notify(toasts, |queue| {
                    queue.push(
                        current.mode.submit_label(),
                        "Accounts are not available in this preview",
                        ToastKind::Default,
                    )
                });
            }
            Err(missing) => notify(toasts, |queue| queue.push(missing.title(), missing.hint(), ToastKind::Destructive)),
        }
    };

    view! {
        <div class="plain-page">
            <div class="plain-page__inner plain-page__inner--narrow">
                <a class="button button--ghost back-link" href="/">
                    "← Back to Home"
                </a>
                <section class="card auth-card">
                    <header class="card__header auth-card__header">
                        <h1 class="card__title">{move || mode.get().heading()}</h1>
                        <p class="card__description">{move || mode.get().subtitle()}</p>
                    </header>
                    <form class="card__content auth-form" on:submit=on_submit>
                        <Show when=move || mode.get() == AuthMode::SignUp>
                            <label class="field">
                                <span class="field__label">"Username"</span>
                                <input
                                    class="field__input"
                                    type="text"
                                    placeholder="Enter your username"
                                    prop:value=move || form.get().username
                                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                                />
                            </label>
                        </Show>
                        <label class="field">
                            <span class="field__label">"Email Address"</span>
                            <input
                                class="field__input"
                                type="email"
                                placeholder="Enter your email"
                                prop:value=move || form.get().email
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Password"</span>
                            <input
                                class="field__input"
                                type="password"
                                placeholder="Enter your password"
                                prop:value=move || form.get().password
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || mode.get() == AuthMode::SignUp>
                            <label class="field">
                                <span class="field__label">"Grades You Teach"</span>
                                <select
                                    class="field__input"
                                    on:change=move |ev| {
                                        form.update(|f| f.grades = GradeLevel::from_key(&event_target_value(&ev)));
                                    }
                                >
                                    <option value="">"Select grade levels"</option>
                                    {GradeLevel::all()
                                        .iter()
                                        .map(|&grade| {
                                            view! {
                                                <option
                                                    value=grade.key()
                                                    selected=move || form.get().grades == Some(grade)
                                                >
                                                    {grade.label()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                        </Show>
                        <button class="button button--primary button--block" type="submit">
                            {move || mode.get().submit_label()}
                        </button>
                    </form>
                    <p class="auth-card__switch">
                        {move || mode.get().switch_copy().0}
                        " "
                        <button class="button button--link" type="button" on:click=move |_| form.update(AuthForm::toggle_mode)>
                            {move || mode.get().switch_copy().1}
                        </button>
                    </p>
                </section>
            </div>
        </div>
    }
}
