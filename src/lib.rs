//! Ladle: a terminal recipe browser.
//!
//! Ladle searches a remote recipe API, shows recipe detail with serving-size
//! scaling, keeps a persistent bookmark collection, and supports submitting
//! and deleting user-owned recipes.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Command dispatch
//! │  - Store: every state mutation                      │  ← Business logic
//! │  - Coordinator: commands → store ops → renders      │
//! │  - AppState: recipe, search, bookmarks              │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Storage Layer │
//! │ (ui/)         │   │ (api/)        │   │ (storage/)    │
//! │ - Markup tree │   │ - HTTP client │   │ - JSON file   │
//! │ - Patch diff  │   │ - Timeout race│   │ - Atomic write│
//! │ - Renderers   │   │ - Wire types  │   │ - Backend API │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Recipe model (domain/recipe)                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! User input becomes a typed [`Command`]; the [`App`] coordinator invokes a
//! [`Store`](app::Store) operation, which may call the API client and the
//! bookmark store before mutating the single [`AppState`](app::AppState); the
//! coordinator then re-renders the affected UI regions, either wholesale or by
//! patching only changed text and attributes in place.
//!
//! State mutations are applied only after network calls resolve successfully;
//! nothing is installed speculatively, so a failed operation always leaves
//! state untouched. Errors are caught exclusively at the coordinator boundary
//! and rendered as error panels.

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{App, AppState, Command, Store};
pub use domain::{Ingredient, LadleError, Recipe, Result, SearchResult};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Application configuration.
///
/// Values come from defaults, an optional TOML file, or `LADLE_*` environment
/// variables; see [`Config::from_env`] and [`Config::from_file`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the recipe API, with a trailing slash.
    pub api_url: String,

    /// API key appended to every request.
    pub api_key: String,

    /// Request timeout in seconds. Default: 10
    pub timeout_secs: u64,

    /// Search results shown per page. Default: 10
    pub results_per_page: usize,

    /// Delay before the submission form auto-closes after a successful
    /// upload, in seconds. Default: 2.5
    pub modal_close_secs: f64,

    /// Overrides the platform data directory for the bookmark file.
    pub data_dir: Option<String>,

    /// Tracing level for log output (`trace`..`error`). Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://forkify-api.herokuapp.com/api/v2/recipes/".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
            results_per_page: 10,
            modal_close_secs: 2.5,
            data_dir: None,
            trace_level: None,
        }
    }
}

/// Optional-field mirror of [`Config`] for TOML deserialization.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
    results_per_page: Option<usize>,
    modal_close_secs: Option<f64>,
    data_dir: Option<String>,
    trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map, falling back to defaults for
    /// missing or malformed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use ladle::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("timeout_secs".to_string(), "5".to_string());
    /// map.insert("results_per_page".to_string(), "20".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.timeout_secs, 5);
    /// assert_eq!(config.results_per_page, 20);
    /// assert_eq!(config.modal_close_secs, 2.5);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            api_url: map.get("api_url").cloned().unwrap_or(defaults.api_url),
            api_key: map.get("api_key").cloned().unwrap_or(defaults.api_key),
            timeout_secs: map
                .get("timeout_secs")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            results_per_page: map
                .get("results_per_page")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.results_per_page),
            modal_close_secs: map
                .get("modal_close_secs")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.modal_close_secs),
            data_dir: map.get("data_dir").cloned(),
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Builds configuration from `LADLE_*` environment variables.
    ///
    /// Recognized: `LADLE_API_URL`, `LADLE_API_KEY`, `LADLE_TIMEOUT_SECS`,
    /// `LADLE_RESULTS_PER_PAGE`, `LADLE_MODAL_CLOSE_SECS`, `LADLE_DATA_DIR`,
    /// `LADLE_TRACE_LEVEL`.
    #[must_use]
    pub fn from_env() -> Self {
        let keys = [
            ("LADLE_API_URL", "api_url"),
            ("LADLE_API_KEY", "api_key"),
            ("LADLE_TIMEOUT_SECS", "timeout_secs"),
            ("LADLE_RESULTS_PER_PAGE", "results_per_page"),
            ("LADLE_MODAL_CLOSE_SECS", "modal_close_secs"),
            ("LADLE_DATA_DIR", "data_dir"),
            ("LADLE_TRACE_LEVEL", "trace_level"),
        ];

        let mut map = BTreeMap::new();
        for (var, key) in keys {
            if let Ok(value) = std::env::var(var) {
                map.insert(key.to_string(), value);
            }
        }
        Self::from_map(&map)
    }

    /// Loads configuration from a TOML file, overlaying defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| LadleError::Config(format!("invalid config file: {e}")))?;

        let defaults = Self::default();
        Ok(Self {
            api_url: file.api_url.unwrap_or(defaults.api_url),
            api_key: file.api_key.unwrap_or(defaults.api_key),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
            results_per_page: file.results_per_page.unwrap_or(defaults.results_per_page),
            modal_close_secs: file.modal_close_secs.unwrap_or(defaults.modal_close_secs),
            data_dir: file.data_dir,
            trace_level: file.trace_level,
        })
    }

    /// Location of the bookmark file.
    #[must_use]
    pub fn bookmarks_path(&self) -> PathBuf {
        let dir = self
            .data_dir
            .as_ref()
            .map(|d| PathBuf::from(infrastructure::paths::expand_tilde(d)))
            .unwrap_or_else(infrastructure::paths::data_dir);
        dir.join("bookmarks.json")
    }
}

/// Initializes the application.
///
/// Creates the API client, opens the bookmark store (loading the persisted
/// collection), and wires the coordinator. The bookmark list is rendered from
/// the restored state immediately.
///
/// # Errors
///
/// Returns an error if the bookmark storage directory cannot be created.
/// A damaged bookmark file is tolerated and treated as empty.
pub fn initialize(config: &Config) -> Result<App> {
    tracing::debug!("initializing ladle");

    let client = api::ApiClient::new(config.timeout_secs);
    let bookmarks = storage::JsonBookmarks::new(config.bookmarks_path())?;
    let store = Store::new(config, client, Box::new(bookmarks));

    Ok(App::new(config, store))
}
