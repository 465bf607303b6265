//! Busy-aware submit button for the intake form.

use leptos::prelude::*;

#[component]
pub fn SubmitButton(#[prop(into)] busy: Signal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <button class="submit-button" type="submit" disabled=move || busy.get()>
            {move || if busy.get() { "Submitting..." } else { label }}
        </button>
    }
}
