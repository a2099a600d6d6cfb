// src/main.rs
use clap::Parser;
use ct_subfind::cli::Cli;
use ct_subfind::config::Config;
use ct_subfind::crtsh::CrtShClient;
use ct_subfind::input;
use ct_subfind::output;
use ct_subfind::progress::ProgressIndicator;
use ct_subfind::resolver::DomainResolver;
use ct_subfind::retry::TokioSleeper;
use ct_subfind::scanner::Scanner;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments (-h/--help prints usage and exits 0 here)
    let cli = Cli::parse();

    cli.validate()?;

    // Load config file, then apply CLI overrides
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let stderr_is_terminal = is_terminal::is_terminal(std::io::stderr());
    let progress = ProgressIndicator::new(!cli.no_progress && stderr_is_terminal);

    // Logs go to stderr (through the spinner) so stdout only carries results
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.log_filter()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(progress.log_writer())
        .with_ansi(stderr_is_terminal)
        .init();

    let client = CrtShClient::new(
        &config.crtsh.endpoint,
        config.crtsh.timeout(),
        &config.crtsh.user_agent,
    )?;
    let policy = config.retry.policy();
    tracing::debug!("Using {} with {:?}", config.crtsh.endpoint, policy);

    let domains = match input::read_domains(cli.list.as_deref(), input::stdin_is_terminal()) {
        Ok(domains) => domains,
        Err(e) => {
            eprintln!("[!] error: {}", e);
            eprintln!("{}", Cli::help_text());
            std::process::exit(1);
        }
    };
    tracing::debug!("Read {} root domains", domains.len());

    let output_handler = output::build_handler(cli.output_format(), cli.output.as_deref())?;
    if let Some(ref path) = cli.output {
        tracing::info!("Writing results to: {}", path.display());
    }

    tracing::debug!("Progress indicator enabled: {}", progress.is_enabled());
    let scanner = Scanner::new(DomainResolver::new(client, TokioSleeper, policy), progress);
    let report = scanner.scan(&domains).await;

    let results = report.subdomains.into_sorted();
    output_handler.emit_all(&results)?;
    output_handler.flush()?;

    Ok(())
}
