//! Toast viewport and the helper views use to raise notifications.
//!
//! DESIGN
//! ======
//! The queue lives in one `RwSignal<ToastQueue>` provided by the app root.
//! `notify` pushes through that signal and, in the browser, schedules the
//! auto-dismiss timer. Dismissal goes through `try_update` so a timer that
//! fires after the root is disposed does nothing.

use leptos::prelude::*;

use crate::state::toast::ToastQueue;
#[cfg(feature = "hydrate")]
use crate::state::toast::AUTO_DISMISS_MS;

/// Push a toast with `push` and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastQueue>, push: impl FnOnce(&mut ToastQueue) -> u64) {
    let Some(id) = toasts.try_update(push) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
            toasts.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <Show when=move || !toasts.with(ToastQueue::is_empty)>
            <ol class="toaster" aria-live="polite">
                {move || {
                    toasts
                        .get()
                        .visible()
                        .iter()
                        .cloned()
                        .map(|toast| {
                            let id = toast.id;
                            view! {
                                <li class=toast.kind.css_class() role="status">
                                    <div class="toast__body">
                                        <div class="toast__title">{toast.title}</div>
                                        <div class="toast__description">{toast.description}</div>
                                    </div>
                                    <button
                                        class="toast__close"
                                        aria-label="Dismiss"
                                        on:click=move |_| {
                                            toasts.update(|queue| {
                                                queue.dismiss(id);
                                            });
                                        }
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </Show>
    }
}
