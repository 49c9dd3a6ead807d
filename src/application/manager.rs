//! Flow state management for the application.
//!
//! This module owns the three persisted flow flags and the transition rules
//! that route the user between the onboarding, paywall, and main app screens.

use crate::domain::{AppState, PaymentStatus, PrefValue, ScreenIntent, StateSnapshot};
use crate::infrastructure::KeyValueStore;

/// Preferences key for the active screen ordinal.
pub const APP_STATE_KEY: &str = "appState";
/// Preferences key for the payment status ordinal.
pub const PAYMENT_STATUS_KEY: &str = "paymentStatus";
/// Preferences key for the onboarding-completed flag.
pub const IS_ONBOARDED_KEY: &str = "isOnboarded";

/// Observer callback invoked with a fresh snapshot after every mutation.
pub type Listener = Box<dyn FnMut(StateSnapshot)>;

/// Sole owner and mutator of the application flow state.
///
/// The manager loads its three fields from the injected store at
/// construction, falling back to defaults when a value is missing or holds
/// an out-of-range ordinal. Every field mutation is followed immediately by
/// a persistence write of that field and a notification to subscribed
/// observers, in that order.
///
/// Transitions never fail: a store that refuses a write leaves the
/// in-memory state fully transitioned and records the failure in
/// [`store_warning`](Self::store_warning).
///
/// # Examples
///
/// ```
/// use appflow::application::AppStateManager;
/// use appflow::domain::{AppState, PaymentStatus};
/// use appflow::infrastructure::MemoryPreferences;
///
/// let manager = AppStateManager::new(Box::new(MemoryPreferences::new()));
/// assert_eq!(manager.app_state(), AppState::Onboarding);
/// assert_eq!(manager.payment_status(), PaymentStatus::Expired);
/// ```
pub struct AppStateManager {
    app_state: AppState,
    payment_status: PaymentStatus,
    is_onboarded: bool,
    store: Box<dyn KeyValueStore>,
    listeners: Vec<Listener>,
    store_warning: Option<String>,
}

impl std::fmt::Debug for AppStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStateManager")
            .field("app_state", &self.app_state)
            .field("payment_status", &self.payment_status)
            .field("is_onboarded", &self.is_onboarded)
            .finish_non_exhaustive()
    }
}

impl AppStateManager {
    /// Creates a manager over the given store, loading persisted state.
    ///
    /// Missing or invalid entries fall back to type defaults: `Onboarding`,
    /// `Expired`, and an onboarding flag of `true`.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let app_state = store
            .get(APP_STATE_KEY)
            .and_then(PrefValue::as_int)
            .and_then(AppState::from_ordinal)
            .unwrap_or_default();
        let payment_status = store
            .get(PAYMENT_STATUS_KEY)
            .and_then(PrefValue::as_int)
            .and_then(PaymentStatus::from_ordinal)
            .unwrap_or_default();
        let is_onboarded = store
            .get(IS_ONBOARDED_KEY)
            .and_then(PrefValue::as_bool)
            .unwrap_or(true);

        Self {
            app_state,
            payment_status,
            is_onboarded,
            store,
            listeners: Vec::new(),
            store_warning: None,
        }
    }

    pub fn app_state(&self) -> AppState {
        self.app_state
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn is_onboarded(&self) -> bool {
        self.is_onboarded
    }

    /// Current state as an immutable snapshot.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            app_state: self.app_state,
            payment_status: self.payment_status,
            is_onboarded: self.is_onboarded,
        }
    }

    /// Message describing the most recent persistence failure, if any.
    pub fn store_warning(&self) -> Option<&str> {
        self.store_warning.as_deref()
    }

    /// Clears and returns the most recent persistence failure message.
    pub fn take_store_warning(&mut self) -> Option<String> {
        self.store_warning.take()
    }

    /// Registers an observer called with a snapshot after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(StateSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns to the onboarding screen from any state.
    pub fn reset_onboarding(&mut self) {
        self.set_app_state(AppState::Onboarding);
    }

    /// Leaves onboarding, routing on the current payment status: `Paid`
    /// lands in the main app, `Expired` on the paywall.
    ///
    /// The onboarding flag itself is left untouched; its stored value is
    /// rewritten as-is.
    pub fn finish_onboarding(&mut self) {
        match self.payment_status {
            PaymentStatus::Paid => self.set_app_state(AppState::App),
            PaymentStatus::Expired => self.set_app_state(AppState::Paywall),
        }
        self.persist_onboarding_flag();
    }

    /// Marks the subscription paid and enters the main app.
    pub fn process_payment(&mut self) {
        self.set_payment_status(PaymentStatus::Paid);
        self.set_app_state(AppState::App);
        // The setters already stored both keys; the trailing writes are
        // idempotent under last-write-wins.
        self.persist_app_state();
        self.persist_payment_status();
    }

    /// Marks the subscription expired and falls back to the paywall.
    pub fn expire_payment(&mut self) {
        self.set_payment_status(PaymentStatus::Expired);
        self.set_app_state(AppState::Paywall);
        self.persist_app_state();
        self.persist_payment_status();
    }

    /// Dispatches a screen intent to the matching transition.
    pub fn apply(&mut self, intent: ScreenIntent) {
        match intent {
            ScreenIntent::FinishOnboarding => self.finish_onboarding(),
            ScreenIntent::ProcessPayment => self.process_payment(),
            ScreenIntent::ResetOnboarding => self.reset_onboarding(),
            ScreenIntent::ExpirePayment => self.expire_payment(),
        }
    }

    fn set_app_state(&mut self, next: AppState) {
        self.app_state = next;
        self.persist_app_state();
        self.notify();
    }

    fn set_payment_status(&mut self, next: PaymentStatus) {
        self.payment_status = next;
        self.persist_payment_status();
        self.notify();
    }

    fn persist_app_state(&mut self) {
        self.write(APP_STATE_KEY, PrefValue::Int(self.app_state.ordinal()));
    }

    fn persist_payment_status(&mut self) {
        self.write(
            PAYMENT_STATUS_KEY,
            PrefValue::Int(self.payment_status.ordinal()),
        );
    }

    fn persist_onboarding_flag(&mut self) {
        self.write(IS_ONBOARDED_KEY, PrefValue::Bool(self.is_onboarded));
    }

    fn write(&mut self, key: &str, value: PrefValue) {
        if let Err(err) = self.store.set(key, value) {
            self.store_warning = Some(err.to_string());
        }
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(snapshot);
        }
    }
}
