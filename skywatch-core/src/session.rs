//! The request session: one user-facing lookup context owning the in-flight
//! guard, the most recent snapshot, and the visibility state.
//!
//! Control flow per trigger is strictly linear: collect, gate, fetch, render
//! or sticky error, release. The in-flight flag is the sole concurrency
//! guard; it is not a queue, so a trigger that arrives while a request is
//! outstanding is dropped, never coalesced. There is no cancellation: a
//! fetch that started always runs to its render-or-error step.

use crate::{
    error::{GeoError, WeatherError},
    format::banner_text,
    geo::{Coordinates, LocationSource},
    model::WeatherSnapshot,
    provider::WeatherProvider,
    query::LocationQuery,
    ui::UiState,
};

#[derive(Debug)]
pub struct Session {
    provider: Box<dyn WeatherProvider>,
    locator: Box<dyn LocationSource>,
    ui: UiState,
    in_flight: bool,
    snapshot: Option<WeatherSnapshot>,
}

impl Session {
    pub fn new(provider: Box<dyn WeatherProvider>, locator: Box<dyn LocationSource>) -> Self {
        Self {
            provider,
            locator,
            ui: UiState::new(),
            in_flight: false,
            snapshot: None,
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Most recent successful snapshot. Stays in memory even while the
    /// result panel is hidden after a failed later fetch.
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    /// While true, search and geolocation triggers are no-ops and inputs
    /// should render as disabled.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// First half of a search trigger: the in-flight gate plus validation.
    /// Returns the query to fetch, or `None` when the trigger was dropped or
    /// rejected before the network.
    pub fn begin_search(&mut self, raw: &str) -> Option<LocationQuery> {
        if self.in_flight {
            tracing::debug!("search trigger dropped, request already in flight");
            return None;
        }

        match LocationQuery::parse(raw) {
            Ok(query) => {
                self.start_request();
                Some(query)
            }
            Err(err) => {
                // Validation errors are sticky: a visible result stays put.
                self.ui.show_error(banner_text(&err.to_string()), true);
                None
            }
        }
    }

    /// First half of a geolocation trigger. Returns false when dropped.
    pub fn begin_locate(&mut self) -> bool {
        if self.in_flight {
            tracing::debug!("geolocation trigger dropped, request already in flight");
            return false;
        }
        self.start_request();
        true
    }

    fn start_request(&mut self) {
        self.in_flight = true;
        self.ui.show_loader();
    }

    /// Completion of a fetch, success or failure. A failure hides the result
    /// panel but leaves the previously stored snapshot in memory.
    pub fn finish_fetch(&mut self, result: Result<WeatherSnapshot, WeatherError>) {
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.ui.show_result();
            }
            Err(err) => {
                self.ui.show_error(banner_text(&err.to_string()), true);
                self.ui.hide_result();
            }
        }
        self.ui.hide_loader();
        self.in_flight = false;
    }

    /// Completion of a failed position resolution: the attempt ends here,
    /// before any weather request.
    pub fn finish_locate_error(&mut self, err: GeoError) {
        self.ui.show_error(banner_text(&err.to_string()), true);
        self.ui.hide_loader();
        self.in_flight = false;
    }

    pub fn dismiss_error(&mut self) {
        self.ui.clear_error();
    }

    /// Advance the fade counters of all regions.
    pub fn tick(&mut self) {
        self.ui.tick();
    }

    /// Full search flow for a raw input string.
    pub async fn search(&mut self, raw: &str) {
        let Some(query) = self.begin_search(raw) else {
            return;
        };
        let result = self.provider.current_weather(&query).await;
        self.finish_fetch(result);
    }

    /// Full geolocation flow. A position failure ends the attempt; a
    /// position success continues into the coordinate fetch under the same
    /// in-flight span.
    pub async fn locate(&mut self) {
        if !self.begin_locate() {
            return;
        }
        match self.locator.current_position().await {
            Ok(Coordinates { lat, lon }) => {
                let query = LocationQuery::Coords { lat, lon };
                let result = self.provider.current_weather(&query).await;
                self.finish_fetch(result);
            }
            Err(err) => self.finish_locate_error(err),
        }
    }
}
