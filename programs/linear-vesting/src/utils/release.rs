//! Linear release arithmetic.
//!
//! Each claim re-anchors the ratio to the *remaining* amount over the
//! *remaining* duration:
//! - remaining_duration = max(deadline - checkpoint, 0)
//! - elapsed = now - checkpoint
//! - claimable = remaining * min(elapsed, remaining_duration) / remaining_duration (floor)
//! - claimable = remaining once the deadline is reached or nothing is left

use crate::error::VestingError;

pub fn claimable_amount(
    remaining: u64,
    checkpoint: i64,
    deadline: i64,
    now: i64,
) -> Result<u64, VestingError> {
    let remaining_duration = deadline.saturating_sub(checkpoint).max(0);
    if remaining_duration == 0 || remaining == 0 {
        return Ok(remaining);
    }

    // A checkpoint is never ahead of the clock; clamp anyway.
    let elapsed = now.saturating_sub(checkpoint).max(0);
    let vested_span = elapsed.min(remaining_duration);

    let v = (remaining as u128)
        .checked_mul(vested_span as u128)
        .ok_or(VestingError::MathOverflow)?
        / (remaining_duration as u128);
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = 365 * 86_400;
    const T0: i64 = 1_700_000_000;

    #[test]
    fn thirds_of_a_year_sum_to_the_allocation() {
        let deadline = T0 + YEAR;
        let mut remaining = 100u64;
        let mut checkpoint = T0;
        let mut claimed = Vec::new();

        for now in [T0 + YEAR / 3, T0 + 2 * YEAR / 3, T0 + YEAR] {
            let c = claimable_amount(remaining, checkpoint, deadline, now).unwrap();
            remaining -= c;
            checkpoint = now;
            claimed.push(c);
        }

        assert_eq!(claimed, vec![33, 33, 34]);
        assert_eq!(remaining, 0);
        assert_eq!(
            claimable_amount(remaining, checkpoint, deadline, T0 + YEAR + 1).unwrap(),
            0
        );
    }

    #[test]
    fn nothing_accrues_at_the_checkpoint() {
        assert_eq!(claimable_amount(1_000, T0, T0 + YEAR, T0).unwrap(), 0);
    }

    #[test]
    fn past_deadline_everything_is_due() {
        assert_eq!(claimable_amount(77, T0, T0 + YEAR, T0 + 5 * YEAR).unwrap(), 77);
        // Checkpoint re-anchored after the deadline (late transfer in).
        assert_eq!(
            claimable_amount(77, T0 + 2 * YEAR, T0 + YEAR, T0 + 2 * YEAR).unwrap(),
            77
        );
    }

    #[test]
    fn totality_holds_for_irregular_claims() {
        let deadline = T0 + YEAR;
        let allocation = 1_000_000_007u64;
        let mut remaining = allocation;
        let mut checkpoint = T0;
        let mut paid = 0u64;
        let mut now = T0;
        let mut step = 1i64;

        while remaining > 0 {
            now += step;
            step = step * 7 % 1_000_003 + 13;
            let c = claimable_amount(remaining, checkpoint, deadline, now).unwrap();
            if c > 0 {
                remaining -= c;
                paid += c;
                checkpoint = now;
            }
        }

        assert_eq!(paid, allocation);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let c = claimable_amount(u64::MAX, T0, T0 + YEAR, T0 + YEAR / 2).unwrap();
        assert_eq!(c, u64::MAX / 2);
    }
}
