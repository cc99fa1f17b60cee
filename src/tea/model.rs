/// Application model following TEA pattern
///
/// Contains all application state in one value that only `update` replaces.

use crate::config::{AppConfig, StartRoute};
use crate::order::{OrderForm, SubmissionOutcome, TOPPINGS};
use crate::tea::message::Route;
use crate::theme::{Theme, ThemeColors, ThemeManager};

/// Main application model containing all state
#[derive(Debug, Clone)]
pub struct Model {
    /// Application lifecycle state
    pub app_state: AppState,

    /// Current page
    pub route: Route,

    /// Order form values and their errors
    pub form: OrderForm,

    /// Form keyboard focus
    pub focus: Focus,

    /// Highlighted row in the topping list
    pub topping_cursor: usize,

    /// Result of the latest async whole-form check
    pub validity: Option<Validity>,

    /// Submission progress and outcome
    pub submission: SubmissionState,

    /// Application configuration
    pub config: AppConfig,

    /// Theme settings
    pub theme: Theme,
}

/// Application lifecycle state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Terminal dimensions
    pub terminal_size: (u16, u16),
}

/// Which form control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FullName,
    Size,
    Toppings,
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::FullName => Focus::Size,
            Focus::Size => Focus::Toppings,
            Focus::Toppings => Focus::Submit,
            Focus::Submit => Focus::FullName,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::FullName => Focus::Submit,
            Focus::Size => Focus::FullName,
            Focus::Toppings => Focus::Size,
            Focus::Submit => Focus::Toppings,
        }
    }
}

/// Whole-form validity for one form revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub revision: u64,
    pub valid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    /// Form revision currently being submitted
    pub in_flight: Option<u64>,

    /// Message from the last attempt
    pub outcome: Option<SubmissionOutcome>,
}

impl Model {
    pub fn new(config: AppConfig) -> Self {
        let route = match config.start_route {
            StartRoute::Home => Route::Home,
            StartRoute::Order => Route::Order,
        };

        Self {
            app_state: AppState {
                should_quit: false,
                terminal_size: (80, 24),
            },
            route,
            form: OrderForm::new(),
            focus: Focus::FullName,
            topping_cursor: 0,
            validity: None,
            submission: SubmissionState::default(),
            theme: ThemeManager::resolve(&config.theme),
            config,
        }
    }

    /// Whether the async check confirmed the current revision as valid
    pub fn is_known_valid(&self) -> bool {
        matches!(
            self.validity,
            Some(Validity { revision, valid: true }) if revision == self.form.revision
        )
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.in_flight.is_some()
    }

    /// Submit button state
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting() && self.form.can_submit() && self.is_known_valid()
    }

    /// Catalog id under the topping cursor
    pub fn topping_under_cursor(&self) -> Option<&'static str> {
        TOPPINGS.get(self.topping_cursor).map(|t| t.id)
    }
}

impl Model {
    /// Allocation-free stand-in that holds the slot while `update` owns the
    /// real model. Never rendered.
    pub(crate) fn vacant() -> Self {
        Self {
            app_state: AppState {
                should_quit: false,
                terminal_size: (0, 0),
            },
            route: Route::Home,
            form: OrderForm::new(),
            focus: Focus::FullName,
            topping_cursor: 0,
            validity: None,
            submission: SubmissionState::default(),
            config: AppConfig {
                endpoint: String::new(),
                request_timeout_secs: 0,
                theme: String::new(),
                start_route: StartRoute::Home,
            },
            theme: Theme {
                name: String::new(),
                description: String::new(),
                colors: ThemeColors::gruvbox_dark(),
            },
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
