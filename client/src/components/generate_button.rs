//! Trigger button showing the tool's action or busy label.

use classroom::Tool;
use leptos::prelude::*;

#[component]
pub fn GenerateButton(
    tool: Tool,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    on_press: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <button
            class="button button--primary button--block"
            class:button--busy=move || pending.get()
            type="button"
            disabled=move || pending.get() || disabled.get()
            on:click=move |_| on_press()
        >
            {move || if pending.get() { tool.busy_label() } else { tool.action_label() }}
        </button>
    }
}
