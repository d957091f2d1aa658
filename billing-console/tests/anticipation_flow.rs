//! Anticipation quotes driven by configuration

use billing_console::anticipation::{format_brl, parse_brl_amount};
use billing_console::core::AnticipationConfig;
use billing_console::AnticipationSimulator;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{AnticipationRequest, FeeRateCap};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn default_balance_quote_matches_dashboard_figures() {
    let simulator = AnticipationSimulator::default();
    let empty = AnticipationRequest::all("");
    assert_eq!(
        format_brl(simulator.display_gross_amount(&empty)),
        "R$\u{a0}23.145,00"
    );

    let quote = simulator
        .submit(&AnticipationRequest::all("23.145,00"), today())
        .unwrap();
    assert_eq!(format_brl(quote.gross_amount), "R$\u{a0}23.145,00");
    assert_eq!(quote.fee_amount, Decimal::new(1272975, 3));
    assert_eq!(quote.net_amount, Decimal::new(21872025, 3));
}

#[test]
fn typing_updates_the_quote() {
    let simulator = AnticipationSimulator::default();
    let mut last = None;
    for typed in ["1", "10", "100", "1.000", "1.000,", "1.000,5", "1.000,50"] {
        let quote = simulator.quote(&AnticipationRequest::selected(typed), today());
        assert_eq!(quote.gross_amount, parse_brl_amount(typed));
        assert_eq!(quote.fee_amount + quote.net_amount, quote.gross_amount);
        last = Some(quote);
    }
    let last = last.unwrap();
    assert_eq!(last.gross_amount, Decimal::new(100050, 2));
}

#[test]
fn clamped_configuration_never_goes_negative() {
    let simulator = AnticipationSimulator::new(&AnticipationConfig {
        default_horizon_days: 30,
        fee_rate_cap: FeeRateCap::Clamp,
        available_balance: Decimal::from(1000),
    });
    let far = NaiveDate::from_ymd_opt(2030, 1, 1);
    let quote = simulator.quote(&AnticipationRequest::by_date(far, "1.000"), today());

    assert!(quote.horizon_days > 975);
    assert_eq!(quote.fee_rate, Decimal::ONE);
    assert_eq!(quote.net_amount, Decimal::ZERO);
}

#[test]
fn typed_value_wins_over_balance_for_every_kind() {
    let simulator = AnticipationSimulator::default();
    let target = NaiveDate::from_ymd_opt(2026, 11, 18);

    let all = simulator
        .submit(&AnticipationRequest::all("1.000,00"), today())
        .unwrap();
    assert_eq!(all.gross_amount, Decimal::from(1000));
    assert_eq!(all.fee_amount, Decimal::from(55));

    let by_date = simulator
        .submit(&AnticipationRequest::by_date(target, "1.000,00"), today())
        .unwrap();
    assert_eq!(by_date.gross_amount, Decimal::from(1000));
    assert_eq!(by_date.horizon_days, 30);

    assert!(
        simulator
            .submit(&AnticipationRequest::by_date(target, ""), today())
            .is_err()
    );
}

#[test]
fn custom_default_horizon() {
    let simulator = AnticipationSimulator::new(&AnticipationConfig {
        default_horizon_days: 60,
        ..Default::default()
    });
    let quote = simulator.quote(&AnticipationRequest::selected("1.000,00"), today());
    assert_eq!(quote.horizon_days, 60);
    assert_eq!(quote.fee_amount, Decimal::from(85));
}
