//! Receivables Anticipation Model
//!
//! Ephemeral request/quote types; nothing here is persisted.

use crate::error::{AppError, AppResult, ErrorCode};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the user asked to anticipate
///
/// The kind only changes the horizon; the amount always comes from the
/// typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnticipationKind {
    /// Every receivable currently available
    All,
    /// A specific amount typed by the user
    Selected,
    /// Receivables up to a target date (may not be picked yet)
    ByDate { date: Option<NaiveDate> },
}

/// Upper-bound policy for the fee rate
///
/// The linear rate reaches 100% at 975 days; `Unbounded` keeps the raw
/// formula, `Clamp` limits the rate to `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeRateCap {
    #[default]
    Unbounded,
    Clamp,
}

/// Anticipation form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnticipationRequest {
    pub kind: AnticipationKind,
    /// pt-BR formatted amount as typed (`"1.234,56"`), required for every kind
    #[serde(default)]
    pub value: String,
}

impl AnticipationRequest {
    pub fn all(value: impl Into<String>) -> Self {
        Self {
            kind: AnticipationKind::All,
            value: value.into(),
        }
    }

    pub fn selected(value: impl Into<String>) -> Self {
        Self {
            kind: AnticipationKind::Selected,
            value: value.into(),
        }
    }

    pub fn by_date(date: Option<NaiveDate>, value: impl Into<String>) -> Self {
        Self {
            kind: AnticipationKind::ByDate { date },
            value: value.into(),
        }
    }

    /// Check the request can be submitted
    pub fn validate(&self) -> AppResult<()> {
        if self.value.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::AnticipationValueRequired,
                "Informe o valor da antecipação",
            ));
        }
        Ok(())
    }
}

/// Result of a fee calculation
///
/// Values are unrounded; round only when presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnticipationQuote {
    pub gross_amount: Decimal,
    pub horizon_days: u32,
    pub fee_rate: Decimal,
    pub fee_amount: Decimal,
    pub net_amount: Decimal,
}
