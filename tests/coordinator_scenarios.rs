use async_trait::async_trait;
use number_facts::{
    DisplaySurface, FactItem, FactsBackend, FactsError, FetchResult, NumbersCoordinator,
    PresentationState,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Recorded {
    progress: Vec<bool>,
    states: Vec<PresentationState>,
    numbers: Vec<FactItem>,
    times_show_list: usize,
}

#[derive(Clone, Default)]
struct RecordingDisplay {
    recorded: Arc<Mutex<Recorded>>,
}

impl RecordingDisplay {
    fn progress(&self) -> Vec<bool> {
        self.recorded.lock().unwrap().progress.clone()
    }

    fn states(&self) -> Vec<PresentationState> {
        self.recorded.lock().unwrap().states.clone()
    }

    fn numbers(&self) -> Vec<FactItem> {
        self.recorded.lock().unwrap().numbers.clone()
    }

    fn times_show_list(&self) -> usize {
        self.recorded.lock().unwrap().times_show_list
    }
}

impl DisplaySurface for RecordingDisplay {
    fn show_progress(&self, show: bool) {
        self.recorded.lock().unwrap().progress.push(show);
    }

    fn show_state(&self, state: PresentationState) {
        self.recorded.lock().unwrap().states.push(state);
    }

    fn show_list(&self, items: Vec<FactItem>) {
        let mut recorded = self.recorded.lock().unwrap();
        recorded.times_show_list += 1;
        recorded.numbers.extend(items);
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Items(Vec<FactItem>),
    Fail(String),
}

#[derive(Debug)]
struct Calls {
    outcome: Outcome,
    init: usize,
    about_number: Vec<String>,
    about_random: usize,
}

#[derive(Clone)]
struct ScriptedBackend {
    calls: Arc<Mutex<Calls>>,
}

impl ScriptedBackend {
    fn new(outcome: Outcome) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Calls {
                outcome,
                init: 0,
                about_number: vec![],
                about_random: 0,
            })),
        }
    }

    fn succeeding(items: Vec<FactItem>) -> Self {
        Self::new(Outcome::Items(items))
    }

    fn change_outcome(&self, outcome: Outcome) {
        self.calls.lock().unwrap().outcome = outcome;
    }

    fn init_calls(&self) -> usize {
        self.calls.lock().unwrap().init
    }

    fn about_number_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().about_number.clone()
    }

    fn about_random_calls(&self) -> usize {
        self.calls.lock().unwrap().about_random
    }

    fn result(calls: &Calls) -> FetchResult {
        match &calls.outcome {
            Outcome::Items(items) => Ok(items.clone()),
            Outcome::Fail(message) => Err(FactsError::BackendError {
                message: message.clone(),
            }),
        }
    }
}

#[async_trait]
impl FactsBackend for ScriptedBackend {
    async fn init(&self) -> FetchResult {
        let mut calls = self.calls.lock().unwrap();
        calls.init += 1;
        Self::result(&calls)
    }

    async fn fact_about_number(&self, number: &str) -> FetchResult {
        let mut calls = self.calls.lock().unwrap();
        calls.about_number.push(number.to_string());
        Self::result(&calls)
    }

    async fn fact_about_random_number(&self) -> FetchResult {
        let mut calls = self.calls.lock().unwrap();
        calls.about_random += 1;
        Self::result(&calls)
    }
}

fn setup(
    backend: ScriptedBackend,
) -> (
    NumbersCoordinator<ScriptedBackend, RecordingDisplay>,
    ScriptedBackend,
    RecordingDisplay,
) {
    let display = RecordingDisplay::default();
    let coordinator = NumbersCoordinator::new(backend.clone(), display.clone());
    (coordinator, backend, display)
}

fn fact(number: &str) -> FactItem {
    FactItem::new(number, format!("fact about {}", number))
}

#[tokio::test]
async fn test_first_init_shows_and_hides_progress() {
    let (mut coordinator, backend, display) = setup(ScriptedBackend::succeeding(vec![]));

    coordinator.init(true).await;

    assert_eq!(backend.init_calls(), 1);
    assert_eq!(display.progress(), vec![true, false]);
}

#[tokio::test]
async fn test_first_init_shows_empty_number_list() {
    let (mut coordinator, _backend, display) = setup(ScriptedBackend::succeeding(vec![]));

    coordinator.init(true).await;

    assert_eq!(display.states(), vec![PresentationState::Success]);
    assert_eq!(display.numbers().len(), 0);
    assert_eq!(display.times_show_list(), 1);
}

#[tokio::test]
async fn test_first_init_then_random_failure() {
    let (mut coordinator, backend, display) = setup(ScriptedBackend::succeeding(vec![]));

    coordinator.init(true).await;
    backend.change_outcome(Outcome::Fail("service unavailable".to_string()));
    coordinator.fetch_random_number_data().await;

    assert_eq!(backend.about_random_calls(), 1);
    assert_eq!(display.progress(), vec![true, false, true, false]);
    assert_eq!(
        display.states(),
        vec![
            PresentationState::Success,
            PresentationState::Error("service unavailable".to_string())
        ]
    );
    assert_eq!(display.times_show_list(), 1);
}

#[tokio::test]
async fn test_backend_failure_without_text_uses_fixed_message() {
    let (mut coordinator, _backend, display) =
        setup(ScriptedBackend::new(Outcome::Fail(String::new())));

    coordinator.fetch_random_number_data().await;

    assert_eq!(display.progress(), vec![true, false]);
    assert_eq!(
        display.states(),
        vec![PresentationState::Error(
            "unable to fetch number fact".to_string()
        )]
    );
    assert_eq!(display.times_show_list(), 0);
}

#[tokio::test]
async fn test_init_on_re_entry_changes_nothing() {
    let (mut coordinator, backend, display) = setup(ScriptedBackend::succeeding(vec![]));

    coordinator.init(true).await;
    backend.change_outcome(Outcome::Fail(String::new()));
    coordinator.fetch_random_number_data().await;
    coordinator.init(false).await;

    assert_eq!(backend.init_calls(), 1);
    assert_eq!(display.progress().len(), 4);
    assert_eq!(display.states().len(), 2);
    assert_eq!(display.times_show_list(), 1);
}

#[tokio::test]
async fn test_init_not_first_run_on_fresh_coordinator_is_silent() {
    let (mut coordinator, backend, display) =
        setup(ScriptedBackend::succeeding(vec![fact("1")]));

    coordinator.init(false).await;

    assert_eq!(backend.init_calls(), 0);
    assert!(display.progress().is_empty());
    assert!(display.states().is_empty());
    assert_eq!(display.times_show_list(), 0);
}

#[tokio::test]
async fn test_fetch_fact_with_empty_number_is_rejected_locally() {
    let (mut coordinator, backend, display) = setup(ScriptedBackend::succeeding(vec![]));

    coordinator.fetch_fact("").await;

    assert!(backend.about_number_calls().is_empty());
    assert!(display.progress().is_empty());
    assert_eq!(
        display.states(),
        vec![PresentationState::Error(
            "entered number is empty".to_string()
        )]
    );
    assert_eq!(display.times_show_list(), 0);
}

#[tokio::test]
async fn test_fetch_fact_with_some_number() {
    let (mut coordinator, backend, display) =
        setup(ScriptedBackend::succeeding(vec![fact("12345")]));

    coordinator.fetch_fact(12345).await;

    assert_eq!(backend.about_number_calls(), vec!["12345".to_string()]);
    assert_eq!(display.progress(), vec![true, false]);
    assert_eq!(display.states(), vec![PresentationState::Success]);
    assert_eq!(display.times_show_list(), 1);
    assert_eq!(display.numbers(), vec![fact("12345")]);
}

#[tokio::test]
async fn test_fetch_fact_keeps_backend_order() {
    let items = vec![fact("3"), fact("1"), fact("2")];
    let (mut coordinator, _backend, display) = setup(ScriptedBackend::succeeding(items.clone()));

    coordinator.fetch_fact("3").await;

    assert_eq!(display.times_show_list(), 1);
    assert_eq!(display.numbers(), items);
}

#[tokio::test]
async fn test_fetch_with_no_items_skips_list_push() {
    let (mut coordinator, _backend, display) = setup(ScriptedBackend::succeeding(vec![]));

    coordinator.fetch_fact("8").await;
    coordinator.fetch_random_number_data().await;

    assert_eq!(
        display.states(),
        vec![PresentationState::Success, PresentationState::Success]
    );
    assert_eq!(display.times_show_list(), 0);
}

#[tokio::test]
async fn test_successful_fetches_accumulate_in_list() {
    let (mut coordinator, backend, display) = setup(ScriptedBackend::succeeding(vec![fact("1")]));

    coordinator.fetch_fact("1").await;
    backend.change_outcome(Outcome::Items(vec![fact("77")]));
    coordinator.fetch_random_number_data().await;

    assert_eq!(display.times_show_list(), 2);
    assert_eq!(display.numbers(), vec![fact("1"), fact("77")]);
    assert_eq!(display.progress(), vec![true, false, true, false]);
}

#[tokio::test]
async fn test_fetch_fact_with_whitespace_number_reaches_backend_unchanged() {
    let (mut coordinator, backend, display) = setup(ScriptedBackend::succeeding(vec![]));

    coordinator.fetch_fact("   ").await;
    coordinator.fetch_fact(" 7 ").await;

    assert_eq!(
        backend.about_number_calls(),
        vec!["   ".to_string(), " 7 ".to_string()]
    );
    assert_eq!(display.progress(), vec![true, false, true, false]);
    assert_eq!(
        display.states(),
        vec![PresentationState::Success, PresentationState::Success]
    );
}
