use anyhow::Context;
use billing::reconciliation::pending_payments;
use billing::utils::format_amount;
use billing::{
    AppError, BillingBoard, Config, ConfirmationStore, JsonFileConfirmationStore,
    JsonFileOrderSource, reconcile_strict, setup_environment,
};
use serde::Serialize;
use shared::billing::{BillingMonth, BillingReport};
use shared::{ApiResponse, Decimal};
use std::sync::Arc;

const USAGE: &str = "\
usage: billing [report]
       billing pending
       billing confirm <month YYYY-MM> <supplier> <paid_at> <transaction_number>";

const EXIT_USAGE: i32 = 64;
const EXIT_REJECTED: i32 = 2;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PendingRow {
    month: BillingMonth,
    supplier_name: String,
    total_supplier_payable: Decimal,
    display_amount: String,
}

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match dispatch(&config, &args) {
        Ok(()) => Ok(()),
        Err(Failure::Usage(reason)) => {
            eprintln!("{reason}\n{USAGE}");
            std::process::exit(EXIT_USAGE);
        }
        Err(Failure::Rejected(err)) => {
            print_json(&ApiResponse::<()>::error(&err))?;
            std::process::exit(EXIT_REJECTED);
        }
        Err(Failure::Fatal(err)) => Err(err),
    }
}

fn dispatch(config: &Config, args: &[String]) -> Result<(), Failure> {
    match args.first().map(String::as_str) {
        None | Some("report") => run_report(config),
        Some("pending") => run_pending(config),
        Some("confirm") => run_confirm(config, &args[1..]),
        Some(other) => Err(Failure::Usage(format!("unknown command: {other}"))),
    }
}

/// Recoverable errors are reported on stdout as an error envelope; the rest abort.
enum Failure {
    /// Bad command line
    Usage(String),
    Rejected(AppError),
    Fatal(anyhow::Error),
}

impl From<AppError> for Failure {
    fn from(err: AppError) -> Self {
        if err.is_recoverable() {
            Failure::Rejected(err)
        } else {
            Failure::Fatal(anyhow::Error::new(err))
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Failure::Fatal(err)
    }
}

fn load_report(config: &Config) -> Result<BillingReport, Failure> {
    let source = JsonFileOrderSource::new(&config.orders_file);
    let store = JsonFileConfirmationStore::open(&config.confirmations_file)?;
    let confirmations = store.snapshot();

    let mut board = BillingBoard::from_source(&source)?;
    if config.strict_dates {
        // fail on the first bad order instead of excluding it
        return Ok(reconcile_strict(board.orders(), &confirmations)?);
    }
    Ok(Arc::unwrap_or_clone(board.report(&confirmations)))
}

fn run_report(config: &Config) -> Result<(), Failure> {
    let report = load_report(config)?;
    let symbol = &config.currency_symbol;

    tracing::info!(
        months = report.months.len(),
        rejected = report.rejected.len(),
        total = %format_amount(report.summary.total_payable, symbol),
        outstanding = %format_amount(report.summary.outstanding_amount, symbol),
        "Billing report generated"
    );
    print_json(&ApiResponse::success(report))?;
    Ok(())
}

fn run_pending(config: &Config) -> Result<(), Failure> {
    let report = load_report(config)?;
    let rows: Vec<PendingRow> = pending_payments(&report.months)
        .into_iter()
        .map(|(month, bill)| PendingRow {
            month,
            supplier_name: bill.supplier_name.clone(),
            total_supplier_payable: bill.total_supplier_payable,
            display_amount: format_amount(bill.total_supplier_payable, &config.currency_symbol),
        })
        .collect();
    print_json(&ApiResponse::success(rows))?;
    Ok(())
}

fn run_confirm(config: &Config, args: &[String]) -> Result<(), Failure> {
    let [month, supplier, paid_at, transaction_number] = args else {
        return Err(Failure::Usage(format!(
            "confirm expects 4 arguments, got {}",
            args.len()
        )));
    };
    let month: BillingMonth = month.parse()?;

    let store = JsonFileConfirmationStore::open(&config.confirmations_file)?;
    let confirmations = store.confirm_payment(month, supplier, paid_at, transaction_number)?;

    let confirmation = confirmations
        .get_for(month, supplier)
        .cloned()
        .context("confirmation missing right after write")?;
    print_json(&ApiResponse::success_with_message(
        format!("{month} {supplier} marked as paid"),
        confirmation,
    ))?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("encode response")?;
    println!("{json}");
    Ok(())
}
