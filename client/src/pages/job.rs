//! Job detail page with the recruiter's hiring-status control.
//!
//! SYSTEM CONTEXT
//! ==============
//! The job is fetched once the session probe settles so ownership and
//! "already applied" can be decided from the viewer. Status changes and new
//! applications both re-fetch the whole job.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::application_card::ApplicationCard;
use crate::components::apply_job::ApplyJobDrawer;
use crate::components::loader::BarLoader;
use crate::net::types::Job;
use crate::state::auth::AuthState;
use crate::state::fetch::Fetch;
use crate::util::format::{applicant_label, hiring_status_placeholder};
use crate::util::markdown::render_markdown_html;

/// Map the hiring-status select value to `is_open`.
#[must_use]
pub(crate) fn parse_hiring_status(value: &str) -> Option<bool> {
    match value {
        "open" => Some(true),
        "closed" => Some(false),
        _ => None,
    }
}

#[component]
pub fn JobPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let job_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let job = Fetch::<Job>::new();
    let hiring = Fetch::<()>::new();

    let reload = move || {
        let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
        job.run(crate::net::api::fetch_job(id));
    };

    Effect::new(move || {
        if auth.with(|a| a.loading) {
            return;
        }
        let id = job_id();
        if id.is_empty() {
            return;
        }
        job.run(crate::net::api::fetch_job(id));
    });

    let on_hiring_change = move |ev: leptos::ev::Event| {
        let Some(is_open) = parse_hiring_status(&event_target_value(&ev)) else {
            return;
        };
        hiring.run_then(crate::net::api::update_hiring_status(job_id(), is_open), move |_| reload());
    };

    let on_applied = Callback::new(move |()| reload());

    view! {
        {move || {
            if auth.with(|a| a.loading) {
                return view! { <BarLoader full_page=true/> }.into_any();
            }
            let Some(current) = job.data() else {
                if let Some(e) = job.error() {
                    return view! { <p class="form-error">{e}</p> }.into_any();
                }
                return view! { <BarLoader full_page=true/> }.into_any();
            };
            let viewer = auth.with(|a| a.user.clone());
            let is_owner = current.is_owned_by(viewer.as_ref());
            let applied = current.application_of(viewer.as_ref()).is_some();
            render_job(current, is_owner, applied, on_hiring_change, on_applied, hiring)
        }}
    }
}

fn render_job(
    job: Job,
    is_owner: bool,
    applied: bool,
    on_hiring_change: impl Fn(leptos::ev::Event) + 'static,
    on_applied: Callback<()>,
    hiring: Fetch<()>,
) -> AnyView {
    let requirements_html = render_markdown_html(&job.requirements);
    let applicants = applicant_label(job.application_count);
    let status_label = if job.is_open { "Open" } else { "Closed" };
    let placeholder = hiring_status_placeholder(job.is_open);
    let applications = job.applications.clone();
    let has_applications = is_owner && !applications.is_empty();

    view! {
        <div class="job-detail">
            <div class="job-detail__heading">
                <h1 class="gradient-title job-detail__title">{job.title.clone()}</h1>
                <img class="job-detail__logo" src=job.company.logo_url.clone() alt=job.company.name.clone()/>
            </div>
            <div class="job-detail__meta">
                <span>"📍 " {job.location.clone()}</span>
                <span>"👥 " {applicants}</span>
                <span class="job-detail__status" class:job-detail__status--open=job.is_open>
                    {if job.is_open { "🔓 " } else { "🔒 " }}
                    {status_label}
                </span>
            </div>
            <Show when=move || hiring.loading()>
                <BarLoader/>
            </Show>
            <Show when=move || hiring.error().is_some()>
                <p class="form-error">{move || hiring.error().unwrap_or_default()}</p>
            </Show>
            {is_owner
                .then(|| {
                    view! {
                        <select
                            class="select job-detail__hiring"
                            class:job-detail__hiring--open=job.is_open
                            class:job-detail__hiring--closed=!job.is_open
                            on:change=on_hiring_change
                        >
                            <option value="" selected=true disabled=true>
                                {placeholder}
                            </option>
                            <option value="open">"Open"</option>
                            <option value="closed">"Closed"</option>
                        </select>
                    }
                })}
            <h2 class="job-detail__section">"About the job"</h2>
            <p class="job-detail__description">{job.description.clone()}</p>
            <h2 class="job-detail__section">"What we are looking for"</h2>
            <div class="markdown job-detail__requirements" inner_html=requirements_html></div>
            {(!is_owner).then(|| view! { <ApplyJobDrawer job=job.clone() applied=applied on_applied=on_applied/> })}
            {has_applications
                .then(|| {
                    view! {
                        <div class="job-detail__applications">
                            <h2 class="job-detail__section">"Applications"</h2>
                            {applications
                                .into_iter()
                                .map(|application| view! { <ApplicationCard application=application/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}
        </div>
    }
    .into_any()
}

#[cfg(test)]
#[path = "job_test.rs"]
mod job_test;
