//! CLI subcommand definitions

use clap::Subcommand;

use crate::content::TimeOfDay;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Render and publish today's rotating verse
    Verse,
    /// Render and publish a time-of-day verse with a generated prayer
    Prayer {
        /// Force the time-of-day slot instead of deriving it from the clock
        #[arg(long, value_enum)]
        slot: Option<TimeOfDay>,
    },
    /// Print the verse selected for the date, without rendering or posting
    Preview,
}
