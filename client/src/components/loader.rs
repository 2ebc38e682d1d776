//! Indeterminate progress bar shown while a fetch is in flight.

use leptos::prelude::*;

#[component]
pub fn BarLoader(#[prop(optional)] full_page: bool) -> impl IntoView {
    view! {
        <div class="bar-loader" class:bar-loader--page=full_page role="progressbar" aria-busy="true">
            <span class="bar-loader__bar"></span>
        </div>
    }
}
