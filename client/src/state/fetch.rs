//! Single-call fetch tracking shared by every page.
//!
//! DESIGN
//! ======
//! `FetchState` is the plain loading/error/data record; `Fetch` wraps it in a
//! signal and drives one future at a time through `spawn_local`. There is no
//! cancellation or deduplication: a second `run` simply races the first and
//! the last completion wins.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use leptos::prelude::*;

/// Loading/error/data for one remote call.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> FetchState<T> {
    /// Mark a call as in flight. Previous data stays visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a completed call. Returns `true` on success.
    ///
    /// On failure the last good `data` is kept so a failed refresh does not
    /// blank the page.
    pub fn finish(&mut self, result: Result<T, String>) -> bool {
        self.loading = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }
}

/// Reactive handle over a `FetchState`. Cheap to copy into closures.
pub struct Fetch<T: Send + Sync + 'static> {
    state: RwSignal<FetchState<T>>,
}

impl<T: Send + Sync + 'static> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Fetch<T> {}

impl<T: Send + Sync + 'static> Default for Fetch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> Fetch<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(FetchState::default()) }
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn loading_untracked(&self) -> bool {
        self.state.with_untracked(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn data(&self) -> Option<T>
    where
        T: Clone,
    {
        self.state.with(|s| s.data.clone())
    }

    /// Replace the cached data without a network call.
    pub fn set_data(&self, data: Option<T>) {
        self.state.update(|s| s.data = data);
    }

    /// Start `fut` and record its outcome.
    pub fn run<Fut>(&self, fut: Fut)
    where
        Fut: Future<Output = Result<T, String>> + 'static,
    {
        self.run_then(fut, |_| {});
    }

    /// Start `fut`; on success, call `on_ok` with the fresh data.
    pub fn run_then<Fut, F>(&self, fut: Fut, on_ok: F)
    where
        Fut: Future<Output = Result<T, String>> + 'static,
        F: FnOnce(&T) + 'static,
    {
        let state = self.state;
        state.update(FetchState::begin);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = fut.await;
            if let Err(e) = &result {
                log::warn!("fetch failed: {e}");
            }
            if state.try_update(|s| s.finish(result)) == Some(true) {
                let _ = state.try_with_untracked(|s| {
                    if let Some(data) = s.data.as_ref() {
                        on_ok(data);
                    }
                });
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (fut, on_ok);
        }
    }
}
