use billing_console::anticipation::{confirmation_message, format_brl};
use billing_console::auth::get_all_permissions_grouped;
use billing_console::{AnticipationSimulator, InMemoryRoleStore, RoleStore, setup_environment};
use chrono::NaiveDate;
use shared::models::AnticipationRequest;

/// Usage: `billing-console [AMOUNT] [YYYY-MM-DD]`
///
/// An amount is quoted over the default horizon, or up to the given date.
/// Without an amount only the available balance is shown.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment()?;
    tracing::info!(environment = %config.environment, "Billing console starting...");

    // 2. 角色与权限目录
    let roles = InMemoryRoleStore::new();
    for role in roles.list() {
        tracing::info!(
            role_id = %role.id,
            permissions = role.permissions.len(),
            "Role loaded"
        );
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&get_all_permissions_grouped())?
    );

    // 3. 预支模拟
    let mut args = std::env::args().skip(1);
    let amount = args.next();
    let target = args
        .next()
        .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
        .transpose()?;

    let simulator = AnticipationSimulator::from_config(&config);
    let today = chrono::Local::now().date_naive();

    let Some(value) = amount else {
        let request = AnticipationRequest::all("");
        println!(
            "Saldo disponível:    {}",
            format_brl(simulator.display_gross_amount(&request))
        );
        return Ok(());
    };

    let request = match target {
        Some(date) => AnticipationRequest::by_date(Some(date), value),
        None => AnticipationRequest::selected(value),
    };
    let quote = simulator.submit(&request, today)?;

    println!("Valor bruto:         {}", format_brl(quote.gross_amount));
    println!("Prazo:               {} dias", quote.horizon_days);
    println!("Taxa de antecipação: -{}", format_brl(quote.fee_amount));
    println!("Valor a receber:     {}", format_brl(quote.net_amount));
    println!("{}", confirmation_message(&quote));

    Ok(())
}
