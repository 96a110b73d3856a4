use clap::{Parser, Subcommand, ValueEnum};
use loansim::report::{build_quote, render_report};
use loansim::{App, DataDirectory, Theme, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "loansim")]
#[command(about = "A terminal loan simulator with age-based interest rates")]
struct Args {
    /// Path to the data directory (default: ~/.loansim/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Color theme (default: saved preference, then terminal background)
    #[arg(short, long, value_enum)]
    theme: Option<ThemeArg>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a loan quote without starting the interactive wizard
    Quote {
        /// Birth date as DD/MM/YYYY
        #[arg(long)]
        birth_date: String,

        /// Loan amount, e.g. "R$ 100.000,00"
        #[arg(long)]
        amount: String,

        /// Term in months
        #[arg(long)]
        term: String,

        /// Also print the month-by-month schedule
        #[arg(long)]
        schedule: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = DataDirectory::new(
        args.data_dir
            .unwrap_or_else(DataDirectory::default_path),
    );

    init_logging(&data_dir, &args.log_level)?;
    tracing::debug!(data_dir = %data_dir.root().display(), "Using data directory");

    if let Some(Command::Quote {
        birth_date,
        amount,
        term,
        schedule,
    }) = args.command
    {
        let today = jiff::Zoned::now().date();
        let quote = build_quote(&birth_date, &amount, &term, today)?;
        tracing::info!(
            principal = quote.terms.principal,
            months = quote.terms.months,
            "Printed headless quote"
        );
        print!("{}", render_report(&quote, schedule));
        return Ok(());
    }

    let mut app = App::with_data_dir(data_dir, args.theme.map(Theme::from));

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
