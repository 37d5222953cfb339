use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::Config;
use crate::consts::DEFAULT_TOPIC;
use crate::content::{CandidateEntry, PrayerTemplates, ThemedPool, TimeOfDay, load_verse_pool};
use crate::error::AppError;
use crate::history::Ledger;
use crate::remote::{
    BackgroundSource, Passage, PhotoQuery, PublishReceipt, Publisher, ScriptureSource,
    background_or_fallback,
};
use crate::render::Renderer;
use crate::select::{select_for_date, select_unused};

/// Collaborators the pipelines call out to
pub(crate) struct Services<'a> {
    pub(crate) scripture: &'a dyn ScriptureSource,
    pub(crate) backgrounds: &'a dyn BackgroundSource,
    pub(crate) renderer: &'a dyn Renderer,
    pub(crate) publisher: &'a dyn Publisher,
}

pub(crate) struct RunContext<'a> {
    pub(crate) config: &'a Config,
    pub(crate) date: NaiveDate,
    pub(crate) dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Mode {
    Verse,
    Prayer,
}

/// What a run produced, for the final report
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RunSummary {
    pub(crate) mode: Mode,
    pub(crate) date: NaiveDate,
    pub(crate) slot: Option<TimeOfDay>,
    pub(crate) reference: String,
    pub(crate) text: String,
    pub(crate) prayer: Option<String>,
    pub(crate) caption: String,
    pub(crate) asset: PathBuf,
    pub(crate) attempts: Option<usize>,
    pub(crate) repeated: bool,
    pub(crate) dry_run: bool,
    pub(crate) publish: Option<PublishReceipt>,
}

/// Date-mode selection, reported by `preview`
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Preview {
    pub(crate) date: NaiveDate,
    pub(crate) day_number: i64,
    pub(crate) index: usize,
    pub(crate) pool_size: usize,
    pub(crate) reference: String,
    pub(crate) text: Option<String>,
}

fn pool_name(path: &Path) -> String {
    path.display().to_string()
}

/// Stored text when the entry has it, otherwise ask the scripture provider
fn resolve_passage(
    entry: &CandidateEntry,
    scripture: &dyn ScriptureSource,
) -> Result<Passage, AppError> {
    match &entry.text {
        Some(text) => Ok(Passage {
            reference: entry.reference.clone(),
            text: text.trim().to_string(),
        }),
        None => {
            tracing::info!(reference = %entry.reference, "Fetching verse text");
            scripture.passage(&entry.reference)
        }
    }
}

fn publish(
    ctx: &RunContext<'_>,
    publisher: &dyn Publisher,
    asset: &Path,
    caption: &str,
) -> Result<Option<PublishReceipt>, AppError> {
    if ctx.dry_run {
        tracing::info!("Dry run, not publishing");
        return Ok(None);
    }
    let receipt = publisher.publish(asset, caption)?;
    tracing::info!(
        status = receipt.status,
        post_id = receipt.post_id.as_deref().unwrap_or("-"),
        "Published"
    );
    Ok(Some(receipt))
}

pub(crate) fn verse_caption(reference: &str, hashtags: &str) -> String {
    if hashtags.trim().is_empty() {
        reference.to_string()
    } else {
        format!("{reference}\n\n{}", hashtags.trim())
    }
}

pub(crate) fn prayer_caption(passage: &Passage, prayer: &str) -> String {
    format!("{} ({})\n\n{}", passage.text, passage.reference, prayer)
}

pub(crate) fn preview(config: &Config, date: NaiveDate) -> Result<Preview, AppError> {
    let pool = load_verse_pool(&config.verse.pool)?;
    let selection = select_for_date(&pool, date, &pool_name(&config.verse.pool))?;
    Ok(Preview {
        date: selection.date,
        day_number: selection.day_number,
        index: selection.index,
        pool_size: selection.pool_size,
        reference: selection.entry.reference.clone(),
        text: selection.entry.text.clone(),
    })
}

/// Daily verse: rotate through the pool by date, render, publish
pub(crate) fn run_verse<R: Rng + ?Sized>(
    ctx: &RunContext<'_>,
    services: &Services<'_>,
    rng: &mut R,
) -> Result<RunSummary, AppError> {
    let config = ctx.config;
    let pool = load_verse_pool(&config.verse.pool)?;
    let selection = select_for_date(&pool, ctx.date, &pool_name(&config.verse.pool))?;
    tracing::info!(
        date = %ctx.date,
        day = selection.day_number,
        index = selection.index,
        pool = selection.pool_size,
        reference = %selection.entry.reference,
        "Selected verse"
    );

    let passage = resolve_passage(selection.entry, services.scripture)?;

    let query = PhotoQuery {
        terms: config
            .verse
            .topics
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
        per_page: 10,
        orientation: None,
    };
    let background =
        background_or_fallback(services.backgrounds, &query, &config.fallback_image)?;
    let asset = services.renderer.render(
        &background,
        &passage.text,
        &passage.reference,
        &config.verse.output,
    )?;

    let caption = verse_caption(&passage.reference, &config.verse.hashtags);
    let receipt = publish(ctx, services.publisher, &asset, &caption)?;

    Ok(RunSummary {
        mode: Mode::Verse,
        date: ctx.date,
        slot: None,
        reference: passage.reference,
        text: passage.text,
        prayer: None,
        caption,
        asset,
        attempts: None,
        repeated: false,
        dry_run: ctx.dry_run,
        publish: receipt,
    })
}

/// Time-of-day prayer: random verse for the slot, a prayer not used before,
/// render, publish. The prayer is recorded in history before publishing.
pub(crate) fn run_prayer<R: Rng + ?Sized>(
    ctx: &RunContext<'_>,
    slot: TimeOfDay,
    services: &Services<'_>,
    ledger: &mut dyn Ledger,
    rng: &mut R,
) -> Result<RunSummary, AppError> {
    let config = ctx.config;
    let templates = PrayerTemplates::load(config.prayer.templates.as_deref())?;
    let pool = ThemedPool::load(&config.prayer.pool)?;
    let entry = pool.choose(slot, rng)?;
    let theme = entry.theme.as_deref();
    tracing::info!(
        %slot,
        reference = %entry.reference,
        theme = theme.unwrap_or("-"),
        "Selected verse"
    );
    tracing::debug!(
        variants = templates.variants(slot, theme).len(),
        "Prayer variants available"
    );

    let passage = resolve_passage(entry, services.scripture)?;

    let pick = select_unused(ledger, config.prayer.max_attempts, || {
        templates.generate(slot, theme, rng)
    })?;

    tracing::info!(
        attempts = pick.attempts,
        repeated = pick.repeated,
        fingerprint = %pick.fingerprint,
        "Prayer selected"
    );

    let caption = prayer_caption(&passage, &pick.text);

    let query = PhotoQuery {
        terms: match slot {
            TimeOfDay::Morning => config.prayer.morning_query.clone(),
            TimeOfDay::Evening => config.prayer.evening_query.clone(),
        },
        per_page: 1,
        orientation: Some("square".to_string()),
    };
    let background =
        background_or_fallback(services.backgrounds, &query, &config.fallback_image)?;
    let asset = services.renderer.render(
        &background,
        &passage.text,
        &pick.text,
        &config.prayer.output,
    )?;

    let receipt = publish(ctx, services.publisher, &asset, &caption)?;

    Ok(RunSummary {
        mode: Mode::Prayer,
        date: ctx.date,
        slot: Some(slot),
        reference: passage.reference,
        text: passage.text,
        prayer: Some(pick.text),
        caption,
        asset,
        attempts: Some(pick.attempts),
        repeated: pick.repeated,
        dry_run: ctx.dry_run,
        publish: receipt,
    })
}
