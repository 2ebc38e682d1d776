//! Recruiter form for publishing a job.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::add_company::AddCompanyDrawer;
use crate::components::field_error::FieldError;
use crate::components::loader::BarLoader;
use crate::content::LOCATIONS;
use crate::net::types::{Company, Job, Role};
use crate::state::auth::AuthState;
use crate::state::fetch::Fetch;
use crate::util::auth::role_redirect;
use crate::util::markdown::render_markdown_html;
use crate::util::validate::{FieldErrors, PostJobForm};

#[component]
pub fn PostJobPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let company_id = RwSignal::new(String::new());
    let requirements = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let companies = Fetch::<Vec<Company>>::new();
    let created = Fetch::<Job>::new();

    let redirect = navigate.clone();
    Effect::new(move || {
        if let Some(target) = role_redirect(&auth.get(), Role::Recruiter) {
            redirect(target, NavigateOptions::default());
        }
    });

    let requested_companies = RwSignal::new(false);
    Effect::new(move || {
        if requested_companies.get() || !auth.with(AuthState::is_recruiter) {
            return;
        }
        requested_companies.set(true);
        companies.run(crate::net::api::fetch_companies());
    });

    let on_company_added = Callback::new(move |company: Company| {
        company_id.set(company.id.clone());
        companies.run(crate::net::api::fetch_companies());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if created.loading_untracked() {
            return;
        }
        let form = PostJobForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
            company_id: company_id.get_untracked(),
            requirements: requirements.get_untracked(),
        };
        match form.validate() {
            Ok(new_job) => {
                errors.set(FieldErrors::default());
                let navigate = navigate.clone();
                created.run_then(crate::net::api::create_job(new_job), move |_| {
                    navigate("/jobs", NavigateOptions::default());
                });
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)))
    };
    let preview = move || render_markdown_html(&requirements.get());

    view! {
        <div class="post-job">
            <h1 class="gradient-title page-title">"Post a Job"</h1>
            <form class="form" on:submit=on_submit>
                <input
                    class="input"
                    type="text"
                    placeholder="Job Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <FieldError message=field_error("title")/>
                <textarea
                    class="textarea"
                    placeholder="Job Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <FieldError message=field_error("description")/>
                <div class="form__row">
                    <select
                        class="select"
                        prop:value=move || location.get()
                        on:change=move |ev| location.set(event_target_value(&ev))
                    >
                        <option value="">"Job Location"</option>
                        {LOCATIONS
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="select"
                        prop:value=move || company_id.get()
                        on:change=move |ev| company_id.set(event_target_value(&ev))
                    >
                        <option value="">"Company"</option>
                        {move || {
                            let selected_id = company_id.get();
                            companies
                                .data()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|company| {
                                    let selected = company.id == selected_id;
                                    view! { <option value=company.id selected=selected>{company.name}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <AddCompanyDrawer on_added=on_company_added/>
                </div>
                <FieldError message=field_error("location")/>
                <FieldError message=field_error("company_id")/>
                <div class="markdown-editor">
                    <textarea
                        class="textarea markdown-editor__source"
                        placeholder="Requirements (Markdown)"
                        prop:value=move || requirements.get()
                        on:input=move |ev| requirements.set(event_target_value(&ev))
                    ></textarea>
                    <div class="markdown markdown-editor__preview" inner_html=preview></div>
                </div>
                <FieldError message=field_error("requirements")/>
                <Show when=move || created.error().is_some()>
                    <p class="form-error">{move || created.error().unwrap_or_default()}</p>
                </Show>
                <Show when=move || created.loading() || companies.loading()>
                    <BarLoader/>
                </Show>
                <button class="btn btn--blue btn--lg" type="submit" disabled=move || created.loading()>
                    "Submit"
                </button>
            </form>
        </div>
    }
}
