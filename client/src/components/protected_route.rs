//! Route guard wrapping every signed-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decisions come from `util::auth::guard_outcome`; this component only
//! renders the loader, performs the redirect, or renders its children.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loader::BarLoader;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardOutcome, guard_outcome, install_guard_redirect};

/// Render `children` only for a signed-in user who finished onboarding.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let path = Signal::derive(move || location.pathname.get());

    install_guard_redirect(auth, path, use_navigate());

    let allowed = move || guard_outcome(&auth.get(), &path.get()) == GuardOutcome::Allow;

    view! {
        <Show when=allowed fallback=|| view! { <BarLoader full_page=true/> }>
            {children()}
        </Show>
    }
}
