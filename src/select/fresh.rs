use crate::error::AppError;
use crate::history::{Fingerprint, Ledger};

use super::retry::retry_until;

/// Text accepted by the no-repeat selector, already recorded in the ledger
#[derive(Debug, Clone)]
pub(crate) struct FreshPick {
    pub(crate) text: String,
    pub(crate) fingerprint: Fingerprint,
    pub(crate) attempts: usize,
    /// The retry bound ran out and this text was published before
    pub(crate) repeated: bool,
}

/// Draw from `generate` until a text not yet in `ledger` appears, at most
/// `max_attempts` times. After exhaustion the last draw is taken anyway, so
/// a duplicate can be emitted. The pick is appended to the ledger before it
/// is returned.
pub(crate) fn select_unused<L, G>(
    ledger: &mut L,
    max_attempts: usize,
    mut generate: G,
) -> Result<FreshPick, AppError>
where
    L: Ledger + ?Sized,
    G: FnMut() -> String,
{
    let outcome = retry_until(
        max_attempts,
        || {
            let text = generate();
            let fingerprint = Fingerprint::of(&text);
            (text, fingerprint)
        },
        |(_, fingerprint)| ledger.contains(fingerprint).map(|seen| !seen),
    )?;

    let (text, fingerprint) = outcome.value;
    if outcome.accepted {
        tracing::debug!(attempts = outcome.attempts, %fingerprint, "Picked unused text");
    } else {
        tracing::warn!(
            attempts = outcome.attempts,
            %fingerprint,
            "Every draw was already used, accepting a repeat"
        );
    }

    ledger.append(&fingerprint)?;

    Ok(FreshPick {
        text,
        fingerprint,
        attempts: outcome.attempts,
        repeated: !outcome.accepted,
    })
}
