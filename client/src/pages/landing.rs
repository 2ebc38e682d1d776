//! Public landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only unguarded route. Buttons link into guarded routes, so signed-out
//! visitors land back here with the sign-in overlay open.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{FAQS, rotated_logos};

#[component]
pub fn LandingPage() -> impl IntoView {
    let ticks = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(crate::content::LOGO_STRIP_INTERVAL_MS).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                ticks.update(|t| *t = t.wrapping_add(1));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="landing">
            <section class="landing__hero">
                <h1 class="gradient-title landing__headline">
                    "Find Your Dream Job"
                    <span class="landing__headline-line">
                        "and get hired on "
                        <img src="/logo.svg" alt="HireHub logo" class="landing__headline-logo"/>
                    </span>
                </h1>
                <p class="landing__tagline">"Explore thousands of job listings or find the perfect candidate"</p>
            </section>
            <div class="landing__cta">
                <A href="/jobs" attr:class="btn btn--blue btn--xl">
                    "Find Jobs"
                </A>
                <A href="/post-job" attr:class="btn btn--destructive btn--xl">
                    "Post a Job"
                </A>
            </div>
            <div class="logo-strip" aria-label="Companies hiring on HireHub">
                {move || {
                    let offset = crate::content::logo_strip_offset(ticks.get());
                    rotated_logos(offset)
                        .into_iter()
                        .map(|logo| {
                            view! {
                                <img class="logo-strip__item" src=logo.path alt=logo.name/>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <img src="/banner.svg" class="landing__banner" alt=""/>
            <section class="landing__cards">
                <div class="card">
                    <h2 class="card__title">"For Job Seekers"</h2>
                    <p class="card__body">"Search and apply for jobs, track applications, and more."</p>
                </div>
                <div class="card">
                    <h2 class="card__title">"For Employers"</h2>
                    <p class="card__body">"Post jobs, manage applications, and find the best candidates."</p>
                </div>
            </section>
            <section class="accordion">
                {FAQS
                    .into_iter()
                    .map(|faq| {
                        let expanded = RwSignal::new(false);
                        view! {
                            <div class="accordion__item" class:accordion__item--open=move || expanded.get()>
                                <button
                                    class="accordion__trigger"
                                    aria-expanded=move || expanded.get().to_string()
                                    on:click=move |_| expanded.update(|e| *e = !*e)
                                >
                                    {faq.question}
                                    <span class="accordion__chevron">"⌄"</span>
                                </button>
                                <Show when=move || expanded.get()>
                                    <p class="accordion__content">{faq.answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
