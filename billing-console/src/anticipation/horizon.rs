//! Anticipation horizon in days

use chrono::NaiveDate;
use shared::models::AnticipationKind;

/// Horizon used when no target date applies
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Whole days from `today` to `target`; today or a past date gives 0
pub fn days_until(target: NaiveDate, today: NaiveDate) -> u32 {
    let days = (target - today).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Days to anticipate for a request kind
pub fn resolve_horizon(kind: AnticipationKind, today: NaiveDate, default_days: u32) -> u32 {
    match kind {
        AnticipationKind::ByDate { date: Some(target) } => days_until(target, today),
        AnticipationKind::All
        | AnticipationKind::Selected
        | AnticipationKind::ByDate { date: None } => default_days,
    }
}
