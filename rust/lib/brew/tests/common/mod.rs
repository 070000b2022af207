//! Test drivers shared by the integration tests.
//!
//! `BrewFlow` plays the renderer: it addresses inputs by their visible
//! labels, emits requests, and reads state back. `RecordingApi` records
//! every call so tests can assert on order and payloads.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use brewlog::api::{Brew, BrewApi, CreateBrewData};
use brewlog::form::{label, FormState};
use brewlog::request::*;
use brewlog::state::{AppRoute, BrewDraft, BrewFeed, FlowState, Route};
use brewlog::summary::{feed_view, BrewSummary};
use brewlog::{ApiError, FlowConfig, Flux};

// =====================================================================
// Recording API
// =====================================================================

#[derive(Default)]
pub struct RecordingApi {
    pub brews: Mutex<Vec<Brew>>,
    /// Every create call, successful or not.
    pub attempts: Mutex<Vec<CreateBrewData>>,
    /// "get" / "create" in call order; "create" is pushed when it resolves.
    pub events: Mutex<Vec<&'static str>>,
    pub get_calls: AtomicUsize,
    pub fail_create: AtomicBool,
    pub fail_get: AtomicBool,
    pub hold_create: AtomicBool,
    pub release: Notify,
}

impl RecordingApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_brews(brews: Vec<Brew>) -> Arc<Self> {
        let api = Self::default();
        *api.brews.lock().unwrap() = brews;
        Arc::new(api)
    }

    pub fn attempts(&self) -> Vec<CreateBrewData> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl BrewApi for RecordingApi {
    async fn create_brew(&self, data: CreateBrewData) -> Result<(), ApiError> {
        self.attempts.lock().unwrap().push(data.clone());
        if self.hold_create.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        self.events.lock().unwrap().push("create");
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(ApiError::Server {
                status: 503,
                message: "backend unavailable".into(),
            });
        }
        let id = format!("brew-{}", self.attempts.lock().unwrap().len());
        self.brews
            .lock()
            .unwrap()
            .insert(0, Brew::from_create(Some(id), data));
        Ok(())
    }

    async fn get_brews(&self) -> Result<Vec<Brew>, ApiError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push("get");
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(ApiError::Decode("garbled feed".into()));
        }
        Ok(self.brews.lock().unwrap().clone())
    }
}

// =====================================================================
// Flow driver
// =====================================================================

pub struct BrewFlow {
    pub flux: Arc<Flux>,
    pub api: Arc<RecordingApi>,
}

impl BrewFlow {
    /// Start the app on a fresh recording API and load the feed.
    pub async fn render() -> Self {
        Self::render_with(RecordingApi::new(), FlowConfig::default()).await
    }

    pub async fn render_with(api: Arc<RecordingApi>, config: FlowConfig) -> Self {
        let flux = Arc::new(brewlog::app(api.clone(), config));
        flux.emit(InitializeReq::PATH, InitializeReq).await;
        Self { flux, api }
    }

    pub async fn add_new_brew(&self) {
        self.flux.emit(AddNewBrewReq::PATH, AddNewBrewReq).await;
    }

    pub async fn set_origin(&self, origin: &str) {
        self.set_input(label::ORIGIN, origin).await;
    }

    pub async fn set_roaster(&self, roaster: &str) {
        self.set_input(label::ROASTER, roaster).await;
    }

    pub async fn set_technique(&self, technique: &str) {
        self.set_input(label::TECHNIQUE, technique).await;
    }

    pub async fn set_process(&self, process: &str) {
        self.set_input(label::PROCESS, process).await;
    }

    /// Click "Customize brew".
    pub async fn open_brew_customization(&self) {
        self.flux.emit(SubmitBasicsReq::PATH, SubmitBasicsReq).await;
    }

    pub async fn customize_brew(&self, water: &str, weight: &str, temperature: &str, grind: &str) {
        self.set_input(label::WATER_DOSE, water).await;
        self.set_input(label::COFFEE_WEIGHT, weight).await;
        self.set_input(label::TEMPERATURE, temperature).await;
        self.set_input(label::GRIND_SIZE, grind).await;
    }

    /// Click "Rate".
    pub async fn rate_brew(&self) {
        self.flux
            .emit(SubmitCustomizationReq::PATH, SubmitCustomizationReq)
            .await;
    }

    pub async fn set_rating(&self, rating: &str) {
        self.set_input(label::RATING, rating).await;
    }

    /// Click "Save brew".
    pub async fn save_brew(&self) {
        self.flux.emit(SaveBrewReq::PATH, SaveBrewReq).await;
    }

    pub async fn navigate(&self, route: Route) {
        self.flux.emit(NavigateReq::PATH, NavigateReq { route }).await;
    }

    /// Type into the input with the given label on the open form.
    pub async fn set_input(&self, label: &str, value: &str) {
        let form = self.form().expect("no form open");
        let name = form
            .field_by_label(label)
            .unwrap_or_else(|| panic!("no input labeled {:?}", label))
            .name;
        self.flux
            .emit(UpdateFieldReq::PATH, UpdateFieldReq::new(name, value))
            .await;
    }

    pub fn input_value(&self, label: &str) -> Option<String> {
        self.form()?.field_by_label(label).map(|f| f.value.clone())
    }

    pub fn input_error(&self, label: &str) -> Option<String> {
        let form = self.form()?;
        let name = form.field_by_label(label)?.name;
        form.error(name).map(str::to_string)
    }

    pub fn has_correct_initial_customization(&self) -> bool {
        self.input_value(label::WATER_DOSE).as_deref() == Some("300")
            && self.input_value(label::COFFEE_WEIGHT).as_deref() == Some("18")
            && self.input_value(label::TEMPERATURE).as_deref() == Some("95")
            && self.input_value(label::GRIND_SIZE).as_deref() == Some("Medium-Fine")
    }

    pub fn is_displaying_summary_for(&self, data: &CreateBrewData) -> bool {
        let expected = BrewSummary::of(&Brew::from_create(None, data.clone()));
        self.summaries().iter().any(|s| *s == expected)
    }

    pub fn form(&self) -> Option<FormState> {
        self.flux.get_as::<FormState>(FormState::PATH)
    }

    pub fn flow(&self) -> FlowState {
        self.flux
            .get_as::<FlowState>(FlowState::PATH)
            .expect("flow state not initialized")
    }

    pub fn draft(&self) -> Option<BrewDraft> {
        self.flux.get_as::<BrewDraft>(BrewDraft::PATH)
    }

    pub fn feed(&self) -> BrewFeed {
        self.flux
            .get_as::<BrewFeed>(BrewFeed::PATH)
            .expect("feed not initialized")
    }

    pub fn summaries(&self) -> Vec<BrewSummary> {
        feed_view(&self.feed())
    }

    pub fn route(&self) -> Option<Route> {
        self.flux.get_as::<AppRoute>(AppRoute::PATH)?.route()
    }

    pub fn is_adding_new_brew(&self) -> bool {
        self.flow().heading() == Some(label::NEW_BREW)
    }

    pub fn is_save_disabled(&self) -> bool {
        !self.flow().controls().save_brew
    }

    /// Drive basics and customization with the reference brew.
    pub async fn fill_up_to_rating(&self) {
        self.add_new_brew().await;
        self.set_origin("Ethiopia Guji").await;
        self.set_roaster("Local Roasters").await;
        self.set_technique("V60").await;
        self.set_process("Washed").await;
        self.open_brew_customization().await;
        self.customize_brew("300", "18", "95", "Medium-Fine").await;
        self.rate_brew().await;
    }
}
