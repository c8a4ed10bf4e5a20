//! Application state and core logic

use crate::config::TuiConfig;
use crate::services::{
    build_client, ConfiguredGeolocator, Geolocator, HttpGeocoder, HttpTracker, LeadTracker,
    LocationResolver, ReverseGeocoder, ServiceError,
};
use crate::state::{
    Advance, AppState, FieldKind, Form, FormState, FormView, StepNavigator, View, LOCATION,
};
use crate::submission::SubmissionPipeline;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// Results of background work, applied on the UI loop
#[derive(Debug)]
pub enum AppEvent {
    LocationResolved(Result<String, ServiceError>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Form and step index
    pub navigator: StepNavigator,
    pipeline: SubmissionPipeline,
    resolver: Arc<LocationResolver>,
    config: TuiConfig,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App wired to the HTTP services from the configuration
    pub fn new(config: TuiConfig) -> Self {
        let client = build_client(config.request_timeout());
        let geolocator = Arc::new(ConfiguredGeolocator::new(
            config.position(),
            config.share_location(),
        ));
        let geocoder = Arc::new(HttpGeocoder::new(client.clone(), config.geocoding_url()));
        let tracker = Arc::new(HttpTracker::new(client, config.tracking_url()));
        Self::with_services(config, geolocator, geocoder, tracker)
    }

    /// Create an App on top of explicit service implementations
    pub fn with_services(
        config: TuiConfig,
        geolocator: Arc<dyn Geolocator>,
        geocoder: Arc<dyn ReverseGeocoder>,
        tracker: Arc<dyn LeadTracker>,
    ) -> Self {
        let navigator = StepNavigator::new(FormState::solar_lead());
        let mut state = AppState::default();
        navigator.start(&mut state);

        let resolver = LocationResolver::new(geolocator, geocoder)
            .with_timeout(config.request_timeout());
        let (events_tx, events_rx) = unbounded_channel();

        Self {
            state,
            navigator,
            pipeline: SubmissionPipeline::new(tracker),
            resolver: Arc::new(resolver),
            config,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Push an error message to the alert queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alerts are modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.state.show_privacy {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.show_privacy = false;
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::Results => self.handle_results_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => self.advance(),
            KeyCode::Char('n') if ctrl => self.advance(),
            KeyCode::Esc => self.retreat(),
            KeyCode::Char('b') if ctrl => self.retreat(),
            KeyCode::Char('l') if ctrl => self.request_location(),
            KeyCode::Char('p') if ctrl => self.state.show_privacy = true,
            KeyCode::Tab => self.navigator.form_mut().current_step_mut().next_field(),
            KeyCode::BackTab => self.navigator.form_mut().current_step_mut().prev_field(),
            _ => self.edit_active_field(key),
        }
        Ok(())
    }

    /// Route editing keys to the focused field
    fn edit_active_field(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }
        let step = self.navigator.form_mut().current_step_mut();
        let Some(field) = step.get_active_field_mut() else {
            return;
        };

        match (field.kind, key.code) {
            (FieldKind::Select, KeyCode::Right | KeyCode::Down) => field.next_option(),
            (FieldKind::Select, KeyCode::Left | KeyCode::Up) => field.prev_option(),
            (FieldKind::Select, KeyCode::Char(' ')) => field.next_option(),
            (FieldKind::Checkbox, KeyCode::Char(' ')) => field.toggle(),
            (_, KeyCode::Char(c)) if field.accepts_text() => field.push_char(c),
            (_, KeyCode::Backspace) if field.accepts_text() => field.pop_char(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('b') | KeyCode::Esc => self.return_to_form(),
            KeyCode::Char('w') => self.copy_specialist_link(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Advance one step, or submit from the last step
    pub fn advance(&mut self) {
        match self.navigator.advance(&mut self.state) {
            Advance::ReadyToSubmit => self.submit(),
            Advance::Moved(_) | Advance::Blocked => {}
        }
    }

    pub fn retreat(&mut self) {
        self.navigator.retreat(&mut self.state);
    }

    fn submit(&mut self) {
        let Some(submission) = self.pipeline.submit(&mut self.navigator, &mut self.state) else {
            return;
        };
        if submission.result.is_some() {
            self.state.status_message = Some("Your estimate is ready".to_string());
        }
        // The spawned task logs the delivery outcome
        drop(submission.delivery);
    }

    /// Show the form again without touching field values or the step index
    pub fn return_to_form(&mut self) {
        self.state.show_form();
        self.navigator.start(&mut self.state);
    }

    /// Start a background location lookup; ignored while one is running
    pub fn request_location(&mut self) {
        if self.state.location_pending {
            return;
        }
        self.state.location_pending = true;
        self.state.status_message = Some("Looking up your location...".to_string());

        let resolver = Arc::clone(&self.resolver);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = resolver.resolve().await;
            // The receiver only goes away when the app shuts down
            let _ = events.send(AppEvent::LocationResolved(outcome));
        });
    }

    /// Apply results of finished background work
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LocationResolved(outcome) => {
                self.state.location_pending = false;
                self.state.status_message = None;
                match outcome {
                    Ok(place) => {
                        if let Some(field) = self.navigator.form_mut().field_mut(LOCATION) {
                            field.set_text(&place);
                        }
                        self.state.status_message = Some(format!("Location set to {place}"));
                    }
                    Err(e) => {
                        warn!(error = %e, "location lookup failed");
                        self.push_error(e.location_message());
                    }
                }
            }
        }
    }

    /// Copy the specialist deep link to the clipboard
    fn copy_specialist_link(&mut self) {
        let link = match self.config.specialist_link() {
            Ok(link) => link,
            Err(e) => {
                warn!(error = %e, "invalid specialist link");
                self.state.status_message = Some("Specialist link unavailable".to_string());
                return;
            }
        };

        match self.copy_to_clipboard(link.as_str()) {
            Ok(()) => {
                info!("specialist link copied");
                self.state.status_message =
                    Some("Specialist link copied to clipboard".to_string());
            }
            Err(e) => {
                warn!(error = %e, "clipboard unavailable");
                self.state.status_message = Some(format!("Open {link} to talk to a specialist"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        debug!(len = text.len(), "copied to clipboard");
        Ok(())
    }
}
