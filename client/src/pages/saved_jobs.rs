//! Jobs the viewer has saved.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::job_card::JobCard;
use crate::components::loader::BarLoader;
use crate::net::types::Job;
use crate::state::fetch::Fetch;

#[component]
pub fn SavedJobsPage() -> impl IntoView {
    let jobs = Fetch::<Vec<Job>>::new();
    let reload = move || jobs.run(crate::net::api::fetch_saved_jobs());
    reload();
    // Un-saving from a card drops it from this list.
    let on_job_action = Callback::new(move |()| reload());

    view! {
        <div class="saved-jobs">
            <h1 class="gradient-title page-title">"Saved Jobs"</h1>
            <Show when=move || jobs.loading()>
                <BarLoader/>
            </Show>
            <Show when=move || jobs.error().is_some()>
                <p class="form-error">{move || jobs.error().unwrap_or_default()}</p>
            </Show>
            {move || {
                let list = jobs.data().unwrap_or_default();
                if list.is_empty() && !jobs.loading() {
                    return view! { <p class="empty-state">"No Saved Jobs 👀"</p> }.into_any();
                }
                view! {
                    <div class="job-grid">
                        {list
                            .into_iter()
                            .map(|job| view! { <JobCard job=job on_job_action=on_job_action/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
