//! Role selection for first-time users.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loader::BarLoader;
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Users who already picked a role skip straight to their home page.
    Effect::new(move || {
        if let Some(role) = auth.get().role() {
            navigate(role.home_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let choose = move |role: Role| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_role(role).await {
                Ok(user) => auth.update(|a| a.user = Some(user)),
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = role;
    };

    view! {
        <div class="onboarding">
            <h2 class="gradient-title onboarding__title">"I am a..."</h2>
            <Show when=move || submitting.get()>
                <BarLoader/>
            </Show>
            <div class="onboarding__choices">
                <button
                    class="btn btn--blue onboarding__choice"
                    disabled=move || submitting.get()
                    on:click=move |_| choose(Role::Candidate)
                >
                    "Candidate"
                </button>
                <button
                    class="btn btn--destructive onboarding__choice"
                    disabled=move || submitting.get()
                    on:click=move |_| choose(Role::Recruiter)
                >
                    "Recruiter"
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
