//! Apply drawer shown to non-owners on the job page.
//!
//! DESIGN
//! ======
//! The form keeps raw strings in signals and validates with
//! `util::validate::ApplyForm`. The resume `File` is read from the input
//! element at submit time rather than stored in a signal.

use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::components::loader::BarLoader;
use crate::net::types::Job;
use crate::util::validate::{ApplyForm, EDUCATION_LEVELS, FieldErrors};

/// Label and enabled state of the drawer trigger.
#[must_use]
pub(crate) fn trigger_state(applied: bool, is_open: bool) -> (&'static str, bool) {
    if applied {
        ("Applied", false)
    } else if is_open {
        ("Apply", true)
    } else {
        ("Hiring Closed", false)
    }
}

#[component]
pub fn ApplyJobDrawer(job: Job, applied: bool, on_applied: Callback<()>) -> impl IntoView {
    let open = RwSignal::new(false);
    let (label, enabled) = trigger_state(applied, job.is_open);

    view! {
        <button
            class="btn btn--lg apply-trigger"
            class:btn--blue=enabled
            class:btn--destructive=!enabled
            disabled=!enabled
            on:click=move |_| open.set(true)
        >
            {label}
        </button>
        <Show when=move || open.get()>
            <ApplicationForm
                job_id=job.id.clone()
                title=format!("Apply for {} at {}", job.title, job.company.name)
                on_close=Callback::new(move |()| open.set(false))
                on_applied=on_applied
            />
        </Show>
    }
}

#[component]
fn ApplicationForm(job_id: String, title: String, on_close: Callback<()>, on_applied: Callback<()>) -> impl IntoView {
    let experience = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let education = RwSignal::new(String::new());
    let resume_name = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);
    let server_error = RwSignal::new(None::<String>);
    let resume_ref = NodeRef::<leptos::html::Input>::new();
    let job_id = StoredValue::new(job_id);

    let on_resume_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let name = resume_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            resume_name.set(name);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = ApplyForm {
            experience: experience.get_untracked(),
            skills: skills.get_untracked(),
            education: education.get_untracked(),
            resume_name: resume_name.get_untracked(),
        };
        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        server_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let Some(resume) = resume_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                submitting.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::apply_to_job(&job_id.get_value(), &submission, &resume).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        on_close.run(());
                        on_applied.run(());
                    }
                    Err(e) => server_error.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (submission, job_id, on_applied);
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|e| e.get(field).map(str::to_owned))
    };

    view! {
        <div class="dialog-backdrop drawer-backdrop" on:click=move |_| on_close.run(())>
            <div class="drawer" on:click=move |ev| ev.stop_propagation()>
                <h2 class="drawer__title">{title}</h2>
                <p class="drawer__hint">"Please fill the form below"</p>
                <form class="form" on:submit=on_submit>
                    <input
                        class="input"
                        type="number"
                        min="0"
                        step="1"
                        placeholder="Years of Experience"
                        prop:value=move || experience.get()
                        on:input=move |ev| experience.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(field_error("experience"))/>
                    <input
                        class="input"
                        type="text"
                        placeholder="Skills (Comma Separated)"
                        prop:value=move || skills.get()
                        on:input=move |ev| skills.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(field_error("skills"))/>
                    <fieldset class="radio-group">
                        {EDUCATION_LEVELS
                            .into_iter()
                            .map(|level| {
                                view! {
                                    <label class="radio-group__item">
                                        <input
                                            type="radio"
                                            name="education"
                                            value=level
                                            prop:checked=move || education.get() == level
                                            on:change=move |_| education.set(level.to_owned())
                                        />
                                        {level}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </fieldset>
                    <FieldError message=Signal::derive(field_error("education"))/>
                    <input
                        class="input input--file"
                        type="file"
                        accept=".pdf,.doc,.docx,application/pdf,application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                        node_ref=resume_ref
                        on:change=on_resume_change
                    />
                    <FieldError message=Signal::derive(field_error("resume"))/>
                    <Show when=move || server_error.get().is_some()>
                        <p class="form-error">{move || server_error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || submitting.get()>
                        <BarLoader/>
                    </Show>
                    <button class="btn btn--blue btn--lg" type="submit" disabled=move || submitting.get()>
                        "Apply"
                    </button>
                </form>
                <button class="btn btn--outline" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "apply_job_test.rs"]
mod apply_job_test;
