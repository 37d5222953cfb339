mod app;
mod cli;
mod config;
mod consts;
mod content;
mod error;
mod history;
mod output;
mod remote;
mod render;
mod select;
mod utils;

use chrono::{NaiveDate, Timelike};
use clap::Parser;

use app::{RunContext, RunSummary, Services};
use cli::{Cli, Commands};
use config::{Config, Credentials};
use content::TimeOfDay;
use error::AppError;
use history::{FileLedger, Ledger, MemoryLedger};
use output::{output_preview_json, output_run_json, print_preview, print_run_summary};
use remote::{BibleApi, FacebookPage, Pexels};
use render::{Composer, RenderStyle};
use utils::logging::Verbosity;
use utils::{Timezone, init_logging, parse_date};

fn main() {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.debug, cli.quiet));

    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load(cli.config.as_deref())?;
    let cli = cli.with_config(&config);

    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let now = timezone.now();
    let date: NaiveDate = match cli.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => now.date(),
    };
    let use_color = cli.use_color();

    let summary = match cli.command {
        Commands::Preview => {
            let preview = app::preview(&config, date)?;
            if cli.json {
                println!("{}", output_preview_json(&preview));
            } else {
                print_preview(&preview, use_color);
            }
            return Ok(());
        }
        Commands::Verse => {
            let style = RenderStyle::centered(config.size, config.overlay_opacity);
            let renderer = Composer::new(&config.verse.font, style)?;
            with_services(&config, &renderer, |services| {
                let ctx = RunContext {
                    config: &config,
                    date,
                    dry_run: cli.dry_run,
                };
                app::run_verse(&ctx, services, &mut rand::thread_rng())
            })?
        }
        Commands::Prayer { slot } => {
            let slot = slot.unwrap_or_else(|| TimeOfDay::from_hour(now.hour()));
            tracing::debug!(%slot, hour = now.hour(), "Time-of-day slot");

            let style = RenderStyle::stacked(config.size, config.overlay_opacity);
            let renderer = Composer::new(&config.prayer.font, style)?;

            let file = FileLedger::new(&config.prayer.history);
            let mut ledger: Box<dyn Ledger> = if cli.dry_run {
                let memory = MemoryLedger::seeded_from(&file)?;
                tracing::debug!(
                    path = %file.path().display(),
                    entries = memory.len(),
                    "History loaded read-only"
                );
                Box::new(memory)
            } else {
                tracing::debug!(path = %file.path().display(), "History ledger");
                Box::new(file)
            };

            with_services(&config, &renderer, |services| {
                let ctx = RunContext {
                    config: &config,
                    date,
                    dry_run: cli.dry_run,
                };
                app::run_prayer(
                    &ctx,
                    slot,
                    services,
                    ledger.as_mut(),
                    &mut rand::thread_rng(),
                )
            })?
        }
    };

    if cli.json {
        println!("{}", output_run_json(&summary));
    } else {
        print_run_summary(&summary, use_color);
    }
    Ok(())
}

/// Wire the live HTTP clients around a renderer
fn with_services<F>(config: &Config, renderer: &Composer, run: F) -> Result<RunSummary, AppError>
where
    F: FnOnce(&Services<'_>) -> Result<RunSummary, AppError>,
{
    let credentials = Credentials::from_env();
    let scripture = BibleApi::new();
    let backgrounds = Pexels::new(credentials.pexels_key);
    let publisher = FacebookPage::new(
        &config.publish.api_version,
        credentials.page_id,
        credentials.page_token,
    );

    run(&Services {
        scripture: &scripture,
        backgrounds: &backgrounds,
        renderer,
        publisher: &publisher,
    })
}
