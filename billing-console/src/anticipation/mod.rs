//! Receivables anticipation
//!
//! 预支模拟：用户选择预支方式（全部 / 指定金额 / 按日期），实时显示手续费与到账金额。
//!
//! - [`amount`] - pt-BR 金额解析与 BRL 格式化
//! - [`horizon`] - 预支天数
//! - [`calculator`] - 费率与手续费计算

pub mod amount;
pub mod calculator;
pub mod horizon;

pub use amount::{format_brl, parse_brl_amount, parse_brl_strict};
pub use calculator::{calculate_fee, fee_rate};
pub use horizon::{DEFAULT_HORIZON_DAYS, days_until, resolve_horizon};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::{AnticipationKind, AnticipationQuote, AnticipationRequest, FeeRateCap};

use crate::core::{AnticipationConfig, Config};

/// Quote and submit anticipation requests
#[derive(Debug, Clone)]
pub struct AnticipationSimulator {
    default_horizon_days: u32,
    fee_rate_cap: FeeRateCap,
    available_balance: Decimal,
}

impl AnticipationSimulator {
    pub fn new(config: &AnticipationConfig) -> Self {
        Self {
            default_horizon_days: config.default_horizon_days,
            fee_rate_cap: config.fee_rate_cap,
            available_balance: config.available_balance,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.anticipation)
    }

    pub fn available_balance(&self) -> Decimal {
        self.available_balance
    }

    pub fn fee_rate_cap(&self) -> FeeRateCap {
        self.fee_rate_cap
    }

    /// Gross amount the request covers, read from the typed value
    pub fn gross_amount(&self, request: &AnticipationRequest) -> Decimal {
        parse_brl_amount(&request.value)
    }

    /// Gross amount to show next to the quote
    ///
    /// Falls back to the available balance while the typed value is empty
    /// or reads as zero.
    pub fn display_gross_amount(&self, request: &AnticipationRequest) -> Decimal {
        let gross = self.gross_amount(request);
        if gross.is_zero() {
            self.available_balance
        } else {
            gross
        }
    }

    pub fn horizon(&self, kind: AnticipationKind, today: NaiveDate) -> u32 {
        resolve_horizon(kind, today, self.default_horizon_days)
    }

    /// Live quote shown while the form is edited; never fails
    pub fn quote(&self, request: &AnticipationRequest, today: NaiveDate) -> AnticipationQuote {
        calculate_fee(
            self.gross_amount(request),
            self.horizon(request.kind, today),
            self.fee_rate_cap,
        )
    }

    /// Validate and quote a request for submission
    ///
    /// Unlike [`quote`](Self::quote), the value must be present and parse as
    /// a whole.
    pub fn submit(
        &self,
        request: &AnticipationRequest,
        today: NaiveDate,
    ) -> AppResult<AnticipationQuote> {
        request.validate()?;

        let gross = parse_brl_strict(&request.value)?;
        let quote = calculate_fee(gross, self.horizon(request.kind, today), self.fee_rate_cap);

        tracing::info!(
            kind = ?request.kind,
            gross = %quote.gross_amount,
            horizon_days = quote.horizon_days,
            fee = %quote.fee_amount,
            "Anticipation requested"
        );
        Ok(quote)
    }
}

impl Default for AnticipationSimulator {
    fn default() -> Self {
        Self::new(&AnticipationConfig::default())
    }
}

/// Message shown once a request has been accepted
pub fn confirmation_message(quote: &AnticipationQuote) -> String {
    format!(
        "Sua solicitação de antecipação de {} foi recebida com sucesso.",
        format_brl(quote.gross_amount)
    )
}
