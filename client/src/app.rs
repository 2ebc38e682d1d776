//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::AppLayout;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    job::JobPage, job_listing::JobListingPage, landing::LandingPage, my_jobs::MyJobsPage,
    onboarding::OnboardingPage, post_job::PostJobPage, saved_jobs::SavedJobsPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/logo.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, probes the session once, and sets
/// up client-side routing. Every route except `/` sits behind
/// `ProtectedRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    // Theme runs after hydration so the first client render matches SSR.
    Effect::new(move || {
        let dark = crate::util::theme::read_preference();
        crate::util::theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.set(AuthState { user, loading: false });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/hirehub.css"/>
        <Title text="HireHub"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <ParentRoute path=StaticSegment("") view=AppLayout>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("onboarding") view=|| view! { <ProtectedRoute><OnboardingPage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("jobs") view=|| view! { <ProtectedRoute><JobListingPage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("post-job") view=|| view! { <ProtectedRoute><PostJobPage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("my-jobs") view=|| view! { <ProtectedRoute><MyJobsPage/></ProtectedRoute> }/>
                    <Route path=StaticSegment("saved-jobs") view=|| view! { <ProtectedRoute><SavedJobsPage/></ProtectedRoute> }/>
                    <Route
                        path=(StaticSegment("job"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><JobPage/></ProtectedRoute> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
