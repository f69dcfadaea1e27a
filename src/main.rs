use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paydesk::application::component::AccountPayments;
use paydesk::domain::account::AccountId;
use paydesk::domain::payment::PaymentType;
use paydesk::domain::ports::{NotifierBox, PaymentApiBox};
use paydesk::infrastructure::console::ConsoleNotifier;
use paydesk::infrastructure::http::HttpPaymentApi;
use paydesk::infrastructure::in_memory::InMemoryPaymentApi;
use paydesk::interfaces::csv::report_writer::ReportWriter;
use paydesk::interfaces::csv::seed_reader::{AccountReader, PaymentReader};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of a remote payment service. Uses the in-memory backend when absent.
    #[arg(long)]
    base_url: Option<String>,

    /// Account seed CSV (`id,name`) for the in-memory backend
    #[arg(long)]
    accounts_csv: Option<PathBuf>,

    /// Payment seed CSV (`id,account_id,type,amount,due_date,notes`) for the in-memory backend
    #[arg(long)]
    payments_csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List accounts as selector options
    Accounts,
    /// List payments for an account
    Payments {
        /// Account identifier to select
        #[arg(long)]
        account: Option<String>,
    },
    /// Create a payment against an account and print the refreshed list
    Create {
        /// Account identifier to select
        #[arg(long)]
        account: Option<String>,

        #[arg(long)]
        payment_type: Option<PaymentType>,

        #[arg(long, default_value = "0")]
        amount: Decimal,

        #[arg(long)]
        due_date: Option<NaiveDate>,

        #[arg(long, default_value = "")]
        notes: String,
    },
}

fn seeded_backend(cli: &Cli) -> paydesk::error::Result<InMemoryPaymentApi> {
    let mut accounts = Vec::new();
    if let Some(path) = &cli.accounts_csv {
        let file = File::open(path)?;
        for account in AccountReader::new(file).accounts() {
            accounts.push(account?);
        }
    }

    let mut payments = Vec::new();
    if let Some(path) = &cli.payments_csv {
        let file = File::open(path)?;
        for payment in PaymentReader::new(file).payments() {
            payments.push(payment?);
        }
    }

    Ok(InMemoryPaymentApi::seeded(accounts, payments))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let api: PaymentApiBox = if let Some(base_url) = &cli.base_url {
        Box::new(HttpPaymentApi::new(base_url.clone()))
    } else {
        Box::new(seeded_backend(&cli).into_diagnostic()?)
    };
    let notifier: NotifierBox = Box::new(ConsoleNotifier::new());

    let component = AccountPayments::new(api, notifier);
    component.on_ready().await;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());

    match cli.command {
        Command::Accounts => {
            let options = component.account_options().get();
            writer.write_options(&options).into_diagnostic()?;
        }
        Command::Payments { account } => {
            component
                .select_account(account.map(AccountId::new))
                .await;
            let payments = component.payments().get();
            writer.write_payments(&payments).into_diagnostic()?;
        }
        Command::Create {
            account,
            payment_type,
            amount,
            due_date,
            notes,
        } => {
            component
                .select_account(account.map(AccountId::new))
                .await;
            component.set_payment_type(payment_type);
            component.set_amount(amount);
            component.set_due_date(due_date);
            component.set_notes(notes);

            component.create_payment().await;

            let payments = component.payments().get();
            writer.write_payments(&payments).into_diagnostic()?;
        }
    }

    Ok(())
}
