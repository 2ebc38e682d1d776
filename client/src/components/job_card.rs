//! Listing card for one job.
//!
//! DESIGN
//! ======
//! Used by the listing, saved-jobs, and my-jobs pages. Save and delete call
//! the API directly and then tell the parent through `on_job_action` so it
//! can re-fetch; the card keeps no copy of the list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loader::BarLoader;
use crate::net::types::{Job, User};
use crate::state::auth::AuthState;
use crate::util::format::excerpt;

#[cfg(test)]
#[path = "job_card_test.rs"]
mod job_card_test;

/// Owner view when the page says so or the signed-in user posted the job.
#[must_use]
pub fn shows_owner_controls(job: &Job, is_my_job: bool, viewer: Option<&User>) -> bool {
    is_my_job || job.is_owned_by(viewer)
}

#[component]
pub fn JobCard(
    job: Job,
    /// Force the owner view (delete shown, save hidden). The signed-in
    /// recruiter of the job gets it regardless.
    #[prop(optional)]
    is_my_job: bool,
    #[prop(optional)] on_job_action: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_context::<RwSignal<AuthState>>();
    let stored_job = StoredValue::new(job.clone());
    let owner_view = move || {
        let viewer = auth.and_then(|a| a.with(|state| state.user.clone()));
        stored_job.with_value(|j| shows_owner_controls(j, is_my_job, viewer.as_ref()))
    };
    let saved = RwSignal::new(job.saved);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let job_id = StoredValue::new(job.id.clone());
    let href = format!("/job/{}", job.id);
    let summary = excerpt(&job.description).to_owned();

    let notify = move || {
        if let Some(cb) = on_job_action {
            cb.run(());
        }
    };

    let on_save = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_saved_job(job_id.get_value()).await {
                Ok(now_saved) => {
                    saved.set(now_saved);
                    notify();
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_job(job_id.get_value()).await {
                Ok(()) => notify(),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    #[cfg(not(feature = "hydrate"))]
    let _ = (notify, saved, job_id);

    view! {
        <article class="job-card">
            <Show when=move || busy.get()>
                <BarLoader/>
            </Show>
            <header class="job-card__header">
                <h3 class="job-card__title">{job.title.clone()}</h3>
                <Show when=owner_view>
                    <button class="job-card__delete" on:click=on_delete title="Delete job" aria-label="Delete job">
                        "🗑"
                    </button>
                </Show>
            </header>
            <div class="job-card__meta">
                <img class="job-card__logo" src=job.company.logo_url.clone() alt=job.company.name.clone()/>
                <span class="job-card__location">"📍 " {job.location.clone()}</span>
            </div>
            <hr/>
            <p class="job-card__summary">{summary}</p>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <footer class="job-card__footer">
                <A href=href attr:class="btn btn--secondary job-card__details">
                    "More Details"
                </A>
                <Show when=move || !owner_view()>
                    <button
                        class="job-card__save"
                        class:job-card__save--on=move || saved.get()
                        disabled=move || busy.get()
                        on:click=on_save
                        title=move || if saved.get() { "Remove from saved" } else { "Save job" }
                    >
                        {move || if saved.get() { "♥" } else { "♡" }}
                    </button>
                </Show>
            </footer>
        </article>
    }
}
