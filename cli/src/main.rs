//! CLI entrypoint for Survey Wizard
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wizard_application::{
    DeliveryLog, FormSink, SubmissionController, SubmitOutcome, WizardSession,
};
use wizard_domain::{ConfigIssue, QuestionId};
use wizard_infrastructure::{ConfigLoader, DryRunSink, FileConfig, HttpFormSink, JsonlDeliveryLog};
use wizard_presentation::{Cli, ConsolePresenter, WizardRepl};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let interactive = cli.answer.is_empty();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // The interactive wizard owns the terminal, so diagnostics go to a file
    // instead of stderr. Keep the guard alive until exit.
    let _log_guard = if interactive {
        let log_dir = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("survey-wizard")
            .join("logs");
        let appender = tracing_appender::rolling::daily(log_dir, "survey-wizard.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
        None
    };

    info!("Starting Survey Wizard");

    // Load configuration
    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    // CLI overrides
    if let Some(endpoint) = &cli.endpoint {
        config.submit.endpoint = Some(endpoint.clone());
    }
    if cli.show_failures {
        config.submit.surface_failures = true;
    }
    if let Some(path) = &cli.delivery_log {
        config.log.delivery_log = Some(path.clone());
    }

    // Validate and report issues
    let issues = config.validate();
    for issue in &issues {
        eprintln!("{}", issue);
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("configuration has errors; aborting");
    }

    let catalog = Arc::new(config.to_catalog()?);

    // A dry run never touches the endpoint, so one is not required.
    if cli.dry_run && config.submit.endpoint.is_none() {
        config.submit.endpoint = Some("dry-run".to_string());
    }
    let params = config.to_submit_params()?;

    // === Dependency Injection ===
    let sink: Arc<dyn FormSink> = if cli.dry_run {
        Arc::new(DryRunSink::new())
    } else {
        Arc::new(HttpFormSink::new(params.endpoint()))
    };

    let presenter = Arc::new(ConsolePresenter::new().with_show_questions(!interactive));

    let mut controller =
        SubmissionController::new(sink, params).with_observer(presenter.clone());
    if let Some(path) = &config.log.delivery_log
        && let Some(log) = JsonlDeliveryLog::new(path)
    {
        let log: Arc<dyn DeliveryLog> = Arc::new(log);
        controller = controller.with_delivery_log(log);
    }
    let controller = Arc::new(controller);

    let session =
        WizardSession::new(catalog, controller).with_observer(presenter.clone());

    if interactive {
        let mut repl = WizardRepl::new(session).with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(());
    }

    // One-shot mode: apply the given answers and submit directly.
    let mut session = session;
    for (id, text) in &cli.answer {
        let id = QuestionId::try_new(id.clone())
            .context("question id cannot be empty")?;
        session
            .set_answer_for(&id, text.clone())
            .with_context(|| format!("unknown question id '{}'", id))?;
    }

    match session.submit().await {
        SubmitOutcome::Delivered => Ok(()),
        SubmitOutcome::Failed(e) => Err(e.into()),
        SubmitOutcome::Ignored => bail!("a submission was already in flight"),
    }
}
