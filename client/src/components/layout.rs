//! Layout shell shared by every route: header, routed outlet, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header reads auth and UI context. Signing in is a full-page
//! navigation to `/auth/login`, which hands off to the identity provider.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Parent route view: background, header, page outlet, footer.
#[component]
pub fn AppLayout() -> impl IntoView {
    view! {
        <div class="app-shell">
            <div class="grid-background"></div>
            <main class="app-main">
                <Header/>
                <Outlet/>
            </main>
            <footer class="app-footer">"Made with HireHub"</footer>
        </div>
    }
}

#[must_use]
pub(crate) fn sign_in_requested(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Current path with the sign-in overlay requested.
#[must_use]
pub(crate) fn sign_in_href(pathname: &str) -> String {
    let path = if pathname.is_empty() { "/" } else { pathname };
    format!("{path}?sign-in=true")
}

#[component]
fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();
    let location = use_location();
    let navigate = use_navigate();

    let show_sign_in = move || query.with(|q| sign_in_requested(q.get("sign-in").as_deref()));

    let open_sign_in = move |_: leptos::ev::MouseEvent| {
        let href = sign_in_href(&location.pathname.get_untracked());
        navigate(&href, NavigateOptions::default());
    };

    let on_logout = move |_| {
        ui.update(UiState::close_menus);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    let on_theme = move |_| {
        let next = crate::util::theme::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <nav class="header">
            <A href="/" attr:class="header__logo">
                <img src="/logo.svg" alt="HireHub logo" class="header__logo-img"/>
            </A>
            <div class="header__actions">
                <button class="btn btn--ghost" on:click=on_theme title="Toggle theme">
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                {move || {
                    let state = auth.get();
                    let is_recruiter = state.is_recruiter();
                    if state.loading {
                        return view! { <span class="header__pending"></span> }.into_any();
                    }
                    match state.user {
                        None => {
                            view! {
                                <button class="btn btn--outline" on:click=open_sign_in.clone()>
                                    "Login"
                                </button>
                            }
                                .into_any()
                        }
                        Some(user) => {
                            let initial = user.name.chars().next().unwrap_or('?').to_string();
                            view! {
                                <Show when=move || is_recruiter>
                                    <A href="/post-job" attr:class="btn btn--destructive btn--pill">
                                        "Post a Job"
                                    </A>
                                </Show>
                                <div class="user-menu">
                                    <button
                                        class="user-menu__trigger"
                                        on:click=move |_| ui.update(UiState::toggle_user_menu)
                                        title=user.name.clone()
                                    >
                                        {match user.avatar_url.clone() {
                                            Some(url) => {
                                                view! { <img class="user-menu__avatar" src=url alt=user.name.clone()/> }
                                                    .into_any()
                                            }
                                            None => view! { <span class="user-menu__initial">{initial}</span> }.into_any(),
                                        }}
                                    </button>
                                    <Show when=move || ui.get().user_menu_open>
                                        <div class="user-menu__panel" on:click=move |_| ui.update(UiState::close_menus)>
                                            <A href="/my-jobs" attr:class="user-menu__item">
                                                "My Jobs"
                                            </A>
                                            <A href="/saved-jobs" attr:class="user-menu__item">
                                                "Saved Jobs"
                                            </A>
                                            <button class="user-menu__item" on:click=on_logout>
                                                "Sign out"
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </nav>
        <Show when=show_sign_in>
            <SignInOverlay/>
        </Show>
    }
}

/// Backdrop + card linking to the identity provider. Dismissing it drops
/// the `sign-in` query from the current path.
#[component]
fn SignInOverlay() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let close = move || {
        let path = location.pathname.get_untracked();
        navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };
    let close_backdrop = close.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| close_backdrop()>
            <div class="dialog sign-in" on:click=move |ev| ev.stop_propagation()>
                <h2>"Sign in to HireHub"</h2>
                <p class="dialog__hint">"Find your next role or your next hire."</p>
                <a href="/auth/login" rel="external" class="btn btn--primary btn--block">
                    "Continue with your account"
                </a>
                <button class="btn btn--ghost btn--block" on:click=move |_| close()>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
