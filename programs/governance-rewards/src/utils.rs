use anchor_lang::prelude::Clock;

/// Cluster unix time as an unsigned timestamp. Pre-epoch clocks read as 0.
pub fn current_timestamp(clock: &Clock) -> u64 {
    u64::try_from(clock.unix_timestamp).unwrap_or_default()
}
