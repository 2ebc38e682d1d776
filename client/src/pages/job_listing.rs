//! Job search and filter page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters live in one `JobFilters` signal. Any change re-runs the job list
//! fetch; the search box only commits on submit.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::job_card::JobCard;
use crate::components::loader::BarLoader;
use crate::content::LOCATIONS;
use crate::net::types::{Company, Job, JobFilters};
use crate::state::auth::AuthState;
use crate::state::fetch::Fetch;

#[component]
pub fn JobListingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let filters = RwSignal::new(JobFilters::default());
    let search_draft = RwSignal::new(String::new());
    let jobs = Fetch::<Vec<Job>>::new();
    let companies = Fetch::<Vec<Company>>::new();

    Effect::new(move || {
        if auth.with(|a| a.loading) {
            return;
        }
        let current = filters.get();
        jobs.run(crate::net::api::fetch_jobs(current));
    });

    let requested_companies = RwSignal::new(false);
    Effect::new(move || {
        if requested_companies.get() || auth.with(|a| a.loading) {
            return;
        }
        requested_companies.set(true);
        companies.run(crate::net::api::fetch_companies());
    });

    let on_job_action = Callback::new(move |()| {
        jobs.run(crate::net::api::fetch_jobs(filters.get_untracked()));
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = search_draft.get_untracked();
        filters.update(|f| f.search = query);
    };

    let on_clear = move |_| {
        search_draft.set(String::new());
        filters.set(JobFilters::default());
    };

    view! {
        <div class="job-listing">
            <h1 class="gradient-title page-title">"Latest Jobs"</h1>
            <form class="search-bar" on:submit=on_search>
                <input
                    class="input search-bar__input"
                    type="text"
                    name="search-query"
                    placeholder="Search Jobs by Title.."
                    prop:value=move || search_draft.get()
                    on:input=move |ev| search_draft.set(event_target_value(&ev))
                />
                <button class="btn btn--blue search-bar__submit" type="submit">
                    "Search"
                </button>
            </form>
            <div class="filters">
                <select
                    class="select"
                    prop:value=move || filters.with(|f| f.location.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.location = value);
                    }
                >
                    <option value="">"Filter by Location"</option>
                    {LOCATIONS
                        .into_iter()
                        .map(|name| view! { <option value=name>{name}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="select"
                    prop:value=move || filters.with(|f| f.company_id.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.company_id = value);
                    }
                >
                    <option value="">"Filter by Company"</option>
                    {move || {
                        companies
                            .data()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|company| view! { <option value=company.id>{company.name}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <button class="btn btn--destructive filters__clear" on:click=on_clear>
                    "Clear Filters"
                </button>
            </div>
            <Show when=move || jobs.loading()>
                <BarLoader/>
            </Show>
            <Show when=move || jobs.error().is_some()>
                <p class="form-error">{move || jobs.error().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !jobs.loading()>
                {move || {
                    let list = jobs.data().unwrap_or_default();
                    if list.is_empty() {
                        view! { <p class="empty-state">"No Jobs Found 😢"</p> }.into_any()
                    } else {
                        view! {
                            <div class="job-grid">
                                {list
                                    .into_iter()
                                    .map(|job| view! { <JobCard job=job on_job_action=on_job_action/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
