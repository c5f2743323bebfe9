//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use serde::Deserialize;
use serde_json::Value;

/// Raw provider payload: the top-level JSON object, kept as-is.
///
/// The slot stays opaque so unknown provider fields survive the merge;
/// display goes through the typed [`WeatherReport`] view instead.
pub type WeatherPayload = serde_json::Map<String, Value>;

/// Identifies one fetch request, for log correlation only.
///
/// Responses are applied in arrival order regardless of id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Search buffer (edited by the search bar, submitted as-is)
    pub query: String,

    /// Last merged provider payload (empty until a fetch lands)
    pub conditions: WeatherPayload,

    /// A fetch is in flight
    pub is_loading: bool,

    /// Error message (if the last fetch failed)
    pub error: Option<String>,

    /// Animation frame counter (for the loading spinner)
    pub tick_count: u32,

    /// Requests issued so far
    pub fetch_seq: u64,

    /// Most recently applied response
    pub last_applied: Option<RequestId>,
}

impl AppState {
    /// Allocate the next request id
    pub fn next_request(&mut self) -> RequestId {
        self.fetch_seq += 1;
        RequestId(self.fetch_seq)
    }

    /// Typed view of the current payload, if displayable
    pub fn report(&self) -> Option<WeatherReport> {
        WeatherReport::from_payload(&self.conditions)
    }
}

/// Display fields derived from a payload
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub conditions: String,
    pub temperature_c: f64,
    pub wind_speed: f64,
    pub pressure: f64,
}

/// The provider reports temperatures in Kelvin
const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Deserialize)]
struct PayloadView {
    name: Option<String>,
    #[serde(default)]
    weather: Vec<ConditionView>,
    main: Option<MainView>,
    wind: Option<WindView>,
}

#[derive(Debug, Deserialize)]
struct ConditionView {
    main: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainView {
    temp: Option<f64>,
    pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindView {
    speed: Option<f64>,
}

impl WeatherReport {
    /// Extract display fields from a raw payload.
    ///
    /// Returns `None` when any required field is missing or mistyped, so
    /// an unexpected provider response falls back to the prompt instead
    /// of panicking on nested access.
    pub fn from_payload(payload: &WeatherPayload) -> Option<Self> {
        let view: PayloadView = serde_json::from_value(Value::Object(payload.clone())).ok()?;
        let main = view.main?;
        Some(WeatherReport {
            city: view.name?,
            conditions: view.weather.first()?.main.clone()?,
            temperature_c: main.temp? - KELVIN_OFFSET,
            wind_speed: view.wind?.speed?,
            pressure: main.pressure?,
        })
    }
}
