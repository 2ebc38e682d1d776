//! "My Jobs" for recruiters, "My Applications" for candidates.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::application_card::ApplicationCard;
use crate::components::job_card::JobCard;
use crate::components::loader::BarLoader;
use crate::net::types::{Application, Job};
use crate::state::auth::AuthState;
use crate::state::fetch::Fetch;

#[component]
pub fn MyJobsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        {move || {
            if auth.with(AuthState::is_recruiter) {
                view! { <CreatedJobs/> }.into_any()
            } else {
                view! { <CreatedApplications/> }.into_any()
            }
        }}
    }
}

#[component]
fn CreatedJobs() -> impl IntoView {
    let jobs = Fetch::<Vec<Job>>::new();
    let reload = move || jobs.run(crate::net::api::fetch_my_jobs());
    reload();
    let on_job_action = Callback::new(move |()| reload());

    view! {
        <div class="my-jobs">
            <h1 class="gradient-title page-title">"My Jobs"</h1>
            <Show when=move || jobs.loading()>
                <BarLoader/>
            </Show>
            <Show when=move || jobs.error().is_some()>
                <p class="form-error">{move || jobs.error().unwrap_or_default()}</p>
            </Show>
            {move || {
                let list = jobs.data().unwrap_or_default();
                if list.is_empty() && !jobs.loading() {
                    return view! { <p class="empty-state">"No Jobs Found 😢"</p> }.into_any();
                }
                view! {
                    <div class="job-grid">
                        {list
                            .into_iter()
                            .map(|job| view! { <JobCard job=job is_my_job=true on_job_action=on_job_action/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn CreatedApplications() -> impl IntoView {
    let applications = Fetch::<Vec<Application>>::new();
    applications.run(crate::net::api::fetch_my_applications());

    view! {
        <div class="my-applications">
            <h1 class="gradient-title page-title">"My Applications"</h1>
            <Show when=move || applications.loading()>
                <BarLoader/>
            </Show>
            <Show when=move || applications.error().is_some()>
                <p class="form-error">{move || applications.error().unwrap_or_default()}</p>
            </Show>
            {move || {
                let list = applications.data().unwrap_or_default();
                if list.is_empty() && !applications.loading() {
                    return view! { <p class="empty-state">"No Applications Yet 👀"</p> }.into_any();
                }
                list.into_iter()
                    .map(|application| view! { <ApplicationCard application=application is_candidate=true/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
