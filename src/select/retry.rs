/// Outcome of a bounded retry
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Attempted<T> {
    pub(crate) value: T,
    /// Generator calls made, between 1 and the bound
    pub(crate) attempts: usize,
    /// False when the bound ran out and `value` is the last, rejected, draw
    pub(crate) accepted: bool,
}

/// Call `generate` until `accept` passes or `max_attempts` draws were made.
///
/// Returns the first accepted value, otherwise the last generated one. A
/// bound of zero still makes one draw. Errors from `accept` abort the loop.
pub(crate) fn retry_until<T, E, G, P>(
    max_attempts: usize,
    mut generate: G,
    mut accept: P,
) -> Result<Attempted<T>, E>
where
    G: FnMut() -> T,
    P: FnMut(&T) -> Result<bool, E>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;
    loop {
        let value = generate();
        attempts += 1;
        if accept(&value)? {
            return Ok(Attempted {
                value,
                attempts,
                accepted: true,
            });
        }
        if attempts >= max_attempts {
            return Ok(Attempted {
                value,
                attempts,
                accepted: false,
            });
        }
    }
}
