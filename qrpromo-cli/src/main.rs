//! QR Promo command-line tool
//!
//! Usage:
//!   qrpromo mask cpf 11144477735
//!   qrpromo cpf validate 111.444.777-35
//!   qrpromo register --name "Maria" --cpf 11144477735 --phone 11987654321 --birth-date 01/01/1990
//!   qrpromo page --page 2 --total 25 --search maria

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use qrpromo_admin::CampaignConfigForm;
use qrpromo_cli::{commands, default_config_path, CliConfig};
use qrpromo_cpf::Cpf;
use qrpromo_mask::{apply_mask, MaskKind};
use qrpromo_registration::RegistrationForm;
use qrpromo_types::CampaignId;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "qrpromo")]
#[command(about = "QR Promo masks, CPF checks and form validation")]
struct Args {
    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply an input mask to some text
    Mask {
        #[arg(value_enum)]
        kind: MaskArg,
        text: String,
    },
    /// CPF utilities
    Cpf {
        #[command(subcommand)]
        action: CpfAction,
    },
    /// Validate a registration form and print the request
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cpf: String,
        #[arg(long)]
        phone: String,
        /// dd/mm/yyyy
        #[arg(long)]
        birth_date: String,
        /// Date to check the minimum age against (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Describe a page of the admin customer list
    Page {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        total: u64,
        #[arg(long)]
        search: Option<String>,
    },
    /// Validate a campaign configuration and print the request
    Config {
        #[arg(long)]
        title: String,
        #[arg(long)]
        limit: String,
        /// YYYY-MM-DDTHH:MM in the configured UTC offset
        #[arg(long, default_value = "")]
        deadline: String,
        #[arg(long)]
        id: Option<CampaignId>,
    },
    /// Explain a backend reply
    Reply {
        #[arg(value_enum)]
        endpoint: ReplyEndpoint,
        status: u16,
        body: String,
    },
    /// Split a promotion title into headline and price
    Promo { title: String },
}

#[derive(Subcommand, Debug)]
enum CpfAction {
    /// Check a CPF; exits non-zero when invalid
    Validate { text: String },
    /// Complete a nine-digit base with its check digits
    Generate { base: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MaskArg {
    Cpf,
    Phone,
    Date,
}

impl From<MaskArg> for MaskKind {
    fn from(arg: MaskArg) -> Self {
        match arg {
            MaskArg::Cpf => MaskKind::Cpf,
            MaskArg::Phone => MaskKind::Phone,
            MaskArg::Date => MaskKind::Date,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReplyEndpoint {
    /// POST /clientes/
    Register,
    /// POST /api/validar/{hash}
    Scan,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = CliConfig::load_from(&config_path);
    debug!(?config, "configuration resolved");

    match args.command {
        Command::Mask { kind, text } => println!("{}", apply_mask(kind.into(), &text)),
        Command::Cpf { action } => match action {
            CpfAction::Validate { text } => match Cpf::parse(&text) {
                Ok(cpf) => println!("valid: {cpf}"),
                Err(e) => {
                    println!("invalid: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            },
            CpfAction::Generate { base } => println!("{}", Cpf::from_base(&base)?.digits()),
        },
        Command::Register {
            name,
            cpf,
            phone,
            birth_date,
            today,
        } => {
            let form = RegistrationForm {
                name,
                cpf,
                phone,
                birth_date,
            };
            let today = today
                .unwrap_or_else(|| Utc::now().with_timezone(&config.offset()).date_naive());
            println!("{}", commands::register(&config, &form, today)?);
        }
        Command::Page {
            page,
            total,
            search,
        } => println!(
            "{}",
            commands::page(&config, page, total, search.as_deref())?
        ),
        Command::Config {
            title,
            limit,
            deadline,
            id,
        } => {
            let form = CampaignConfigForm {
                promo_title: title,
                customer_limit: limit,
                deadline,
            };
            println!("{}", commands::configure(&config, &form, id, Utc::now())?);
        }
        Command::Reply {
            endpoint,
            status,
            body,
        } => match endpoint {
            ReplyEndpoint::Register => {
                println!("{}", commands::registration_reply(&config, status, &body)?);
            }
            ReplyEndpoint::Scan => println!("{}", commands::scan_reply(status, &body)),
        },
        Command::Promo { title } => println!("{}", commands::promo(&title)),
    }

    Ok(ExitCode::SUCCESS)
}
