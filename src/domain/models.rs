use serde::{Deserialize, Serialize};

/// Top-level screen selector. Persisted as an integer ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Onboarding,
    Paywall,
    App,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Onboarding
    }
}

impl AppState {
    pub fn ordinal(self) -> i64 {
        match self {
            AppState::Onboarding => 0,
            AppState::Paywall => 1,
            AppState::App => 2,
        }
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(AppState::Onboarding),
            1 => Some(AppState::Paywall),
            2 => Some(AppState::App),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AppState::Onboarding => "Onboarding",
            AppState::Paywall => "Paywall",
            AppState::App => "Main App",
        }
    }
}

/// Simulated subscription status. Persisted as an integer ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Expired,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Expired
    }
}

impl PaymentStatus {
    pub fn ordinal(self) -> i64 {
        match self {
            PaymentStatus::Paid => 0,
            PaymentStatus::Expired => 1,
        }
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(PaymentStatus::Paid),
            1 => Some(PaymentStatus::Expired),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Expired => "expired",
        }
    }
}

/// Immutable copy of the flow state handed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    pub app_state: AppState,
    pub payment_status: PaymentStatus,
    pub is_onboarded: bool,
}

/// A user action offered by one of the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenIntent {
    FinishOnboarding,
    ProcessPayment,
    ResetOnboarding,
    ExpirePayment,
}

impl ScreenIntent {
    pub fn label(self) -> &'static str {
        match self {
            ScreenIntent::FinishOnboarding => "Finish Onboarding",
            ScreenIntent::ProcessPayment => "Pay",
            ScreenIntent::ResetOnboarding => "Reset Onboarding",
            ScreenIntent::ExpirePayment => "Expire Payment",
        }
    }

    /// Command set offered while the given screen is active.
    pub fn for_state(state: AppState) -> &'static [ScreenIntent] {
        match state {
            AppState::Onboarding => &[ScreenIntent::FinishOnboarding],
            AppState::Paywall => &[ScreenIntent::ProcessPayment],
            AppState::App => &[ScreenIntent::ResetOnboarding, ScreenIntent::ExpirePayment],
        }
    }
}

/// Scalar value held by the preferences store.
///
/// Serialized untagged so the preferences file reads as a flat JSON object
/// of plain integers and booleans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
}

impl PrefValue {
    pub fn as_int(self) -> Option<i64> {
        match self {
            PrefValue::Int(value) => Some(value),
            PrefValue::Bool(_) => None,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            PrefValue::Bool(value) => Some(value),
            PrefValue::Int(_) => None,
        }
    }
}
