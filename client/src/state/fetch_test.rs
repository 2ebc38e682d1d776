use super::*;

#[test]
fn default_is_idle_and_empty() {
    let state = FetchState::<u32>::default();
    assert!(!state.loading);
    assert!(state.data.is_none());
    assert!(state.error.is_none());
}

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = FetchState::<u32> { data: Some(1), loading: false, error: Some("boom".to_owned()) };
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.data, Some(1));
}

#[test]
fn finish_ok_stores_data() {
    let mut state = FetchState::<u32>::default();
    state.begin();
    assert!(state.finish(Ok(7)));
    assert!(!state.loading);
    assert_eq!(state.data, Some(7));
    assert!(state.error.is_none());
}

#[test]
fn finish_err_keeps_previous_data() {
    let mut state = FetchState::<u32>::default();
    state.begin();
    state.finish(Ok(3));
    state.begin();
    assert!(!state.finish(Err("job list failed: 500".to_owned())));
    assert!(!state.loading);
    assert_eq!(state.data, Some(3));
    assert_eq!(state.error.as_deref(), Some("job list failed: 500"));
}

#[test]
fn handle_marks_loading_when_run_outside_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let fetch = Fetch::<u32>::new();
        assert!(!fetch.loading());
        fetch.run(async { Ok(5) });
        assert!(fetch.loading());
        assert!(fetch.data().is_none());
    });
}

#[test]
fn handle_set_data_replaces_cache() {
    let owner = Owner::new();
    owner.with(|| {
        let fetch = Fetch::<Vec<u32>>::new();
        fetch.set_data(Some(vec![1, 2]));
        assert_eq!(fetch.data(), Some(vec![1, 2]));
        fetch.set_data(None);
        assert!(fetch.data().is_none());
    });
}
