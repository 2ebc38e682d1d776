//! Inline validation message shown under a form input.

use leptos::prelude::*;

#[component]
pub fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="form-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
