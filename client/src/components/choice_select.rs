//! Labelled `<select>` bound to any [`Choice`] enumeration.

use classroom::Choice;
use leptos::prelude::*;

/// Renders `options` (or every value of `C`) and writes picks to `value`.
#[component]
pub fn ChoiceSelect<C>(
    label: &'static str,
    value: RwSignal<C>,
    #[prop(optional)] options: Option<&'static [C]>,
) -> impl IntoView
where
    C: Choice + Send + Sync,
{
    let options = options.unwrap_or_else(C::all);

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || value.get().key()
                on:change=move |ev| {
                    if let Some(choice) = C::from_key(&event_target_value(&ev)) {
                        value.set(choice);
                    }
                }
            >
                {options
                    .iter()
                    .map(|&choice| {
                        view! {
                            <option value=choice.key() selected=move || value.get() == choice>
                                {choice.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
