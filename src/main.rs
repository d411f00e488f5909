use clap::Parser;
use global_checkout::interfaces::cli::Menu;
use global_checkout::logging::{LogFormat, init_logging};
use miette::{IntoDiagnostic, Result};
use std::io;

/// Interactive Factory Method checkout demo.
///
/// Pick a payment method from the menu; the matching gateway creates its
/// processor and runs a simulated payment.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Default log level for diagnostics on stderr (overridden by RUST_LOG).
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Diagnostic log format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    tracing::info!("checkout menu started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());
    let exit = menu.run().into_diagnostic()?;

    tracing::info!(?exit, "checkout menu terminated");
    Ok(())
}
