//! Card for one job application.
//!
//! Recruiters see a status select on their job page; candidates see which
//! job the application belongs to on their "My Applications" list.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::loader::BarLoader;
use crate::net::types::{Application, ApplicationStatus};
use crate::util::format::display_timestamp;

#[must_use]
pub(crate) fn card_title(application: &Application, is_candidate: bool) -> String {
    match (is_candidate, application.job.as_ref()) {
        (true, Some(job)) => format!("{} at {}", job.title, job.company.name),
        _ => application.name.clone(),
    }
}

#[component]
pub fn ApplicationCard(application: Application, #[prop(optional)] is_candidate: bool) -> impl IntoView {
    let status = RwSignal::new(application.status);
    let updating = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let application_id = StoredValue::new(application.id.clone());
    let title = card_title(&application, is_candidate);

    let on_status_change = move |ev: leptos::ev::Event| {
        let Some(next) = ApplicationStatus::parse(&event_target_value(&ev)) else {
            return;
        };
        updating.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_application_status(application_id.get_value(), next).await {
                Ok(()) => status.set(next),
                Err(e) => error.set(Some(e)),
            }
            updating.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (next, application_id);
    };

    view! {
        <article class="application-card">
            <Show when=move || updating.get()>
                <BarLoader/>
            </Show>
            <header class="application-card__header">
                <h3 class="application-card__title">{title}</h3>
                <a class="btn btn--icon" href=application.resume.clone() target="_blank" rel="external noopener" title="Download resume">
                    "⬇"
                </a>
            </header>
            <div class="application-card__facts">
                <span>"💼 " {application.experience} " years of experience"</span>
                <span>"🎓 " {application.education.clone()}</span>
                <span>"🧠 Skills: " {application.skills.clone()}</span>
            </div>
            <hr/>
            <footer class="application-card__footer">
                <span class="application-card__date">{display_timestamp(&application.created_at)}</span>
                {if is_candidate {
                    view! {
                        <span class="application-card__status">
                            "Status: " {move || status.get().label()}
                        </span>
                    }
                        .into_any()
                } else {
                    view! {
                        <select
                            class="select application-card__status-select"
                            prop:value=move || status.get().as_str()
                            on:change=on_status_change
                        >
                            {ApplicationStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    }
                        .into_any()
                }}
            </footer>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </article>
    }
}

#[cfg(test)]
#[path = "application_card_test.rs"]
mod application_card_test;
