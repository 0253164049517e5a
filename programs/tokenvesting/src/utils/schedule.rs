//! Cliff + linear unlock math.
//! - before cliff: nothing vested
//! - at or after end: everything vested
//! - otherwise: total * (now - start) / (end - start), floored

use crate::error::VestingError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
}

impl VestingSchedule {
    /// Reject schedules that cannot be interpolated or that allocate nothing.
    pub fn validate(&self) -> Result<(), VestingError> {
        if self.total_amount == 0 {
            return Err(VestingError::InvalidSchedule);
        }
        if self.start_time >= self.end_time {
            return Err(VestingError::InvalidSchedule);
        }
        if !(self.start_time..=self.end_time).contains(&self.cliff_time) {
            return Err(VestingError::InvalidSchedule);
        }
        Ok(())
    }

    pub fn vested_amount(&self, now: i64) -> Result<u64, VestingError> {
        if now < self.cliff_time {
            return Ok(0);
        }
        if now >= self.end_time {
            return Ok(self.total_amount);
        }
        // cliff >= start, so elapsed is non-negative here.
        let elapsed = span(self.start_time, now)?;
        let duration = span(self.start_time, self.end_time)?;
        if duration == 0 {
            return Err(VestingError::InvalidSchedule);
        }
        let v = (self.total_amount as u128)
            .checked_mul(elapsed)
            .ok_or(VestingError::MathOverflow)?
            / duration;
        u64::try_from(v).map_err(|_| VestingError::MathOverflow)
    }

    pub fn claimable(&self, now: i64, total_withdrawn: u64) -> Result<u64, VestingError> {
        self.vested_amount(now)?
            .checked_sub(total_withdrawn)
            .ok_or(VestingError::MathOverflow)
    }
}

fn span(from: i64, to: i64) -> Result<u128, VestingError> {
    let d = (to as i128)
        .checked_sub(from as i128)
        .ok_or(VestingError::MathOverflow)?;
    u128::try_from(d).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_760_000_000;

    fn coral() -> VestingSchedule {
        VestingSchedule {
            start_time: T,
            cliff_time: T + 100,
            end_time: T + 1000,
            total_amount: 10_000,
        }
    }

    #[test]
    fn nothing_vested_before_cliff() {
        let s = coral();
        assert_eq!(s.vested_amount(T - 1).unwrap(), 0);
        assert_eq!(s.vested_amount(T + 50).unwrap(), 0);
        assert_eq!(s.vested_amount(T + 99).unwrap(), 0);
        // At the cliff the linear share since start unlocks at once.
        assert_eq!(s.vested_amount(T + 100).unwrap(), 1_000);
    }

    #[test]
    fn fully_vested_at_and_after_end() {
        let s = coral();
        assert_eq!(s.vested_amount(T + 1000).unwrap(), 10_000);
        assert_eq!(s.vested_amount(i64::MAX).unwrap(), 10_000);
    }

    #[test]
    fn linear_between_cliff_and_end() {
        let s = coral();
        assert_eq!(s.vested_amount(T + 550).unwrap(), 5_500);
        assert_eq!(s.claimable(T + 550, 1_000).unwrap(), 4_500);
    }

    #[test]
    fn rounds_down() {
        let s = VestingSchedule {
            start_time: 0,
            cliff_time: 0,
            end_time: 3,
            total_amount: 100,
        };
        assert_eq!(s.vested_amount(1).unwrap(), 33);
        assert_eq!(s.vested_amount(2).unwrap(), 66);
        assert_eq!(s.vested_amount(3).unwrap(), 100);
    }

    #[test]
    fn monotonic_in_time() {
        let s = VestingSchedule {
            start_time: T,
            cliff_time: T + 7,
            end_time: T + 97,
            total_amount: 1_234_567,
        };
        let mut prev = 0;
        for now in (T - 5)..(T + 110) {
            let v = s.vested_amount(now).unwrap();
            assert!(v >= prev);
            assert!(v <= s.total_amount);
            prev = v;
        }
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let s = VestingSchedule {
            start_time: 0,
            cliff_time: 0,
            end_time: 1_000_000,
            total_amount: u64::MAX,
        };
        assert_eq!(s.vested_amount(500_000).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn zero_length_cliff_is_valid() {
        let s = VestingSchedule {
            start_time: T,
            cliff_time: T,
            end_time: T + 10,
            total_amount: 10,
        };
        assert!(s.validate().is_ok());
        assert_eq!(s.vested_amount(T).unwrap(), 0);
        assert_eq!(s.vested_amount(T + 1).unwrap(), 1);
    }

    #[test]
    fn rejects_malformed_schedules() {
        let base = coral();
        assert!(base.validate().is_ok());

        let cases = [
            VestingSchedule { end_time: T, cliff_time: T, ..base },
            VestingSchedule { end_time: T - 1, ..base },
            VestingSchedule { cliff_time: T - 1, ..base },
            VestingSchedule { cliff_time: T + 1001, ..base },
            VestingSchedule { total_amount: 0, ..base },
        ];
        for s in cases {
            assert!(matches!(s.validate(), Err(VestingError::InvalidSchedule)));
        }

        // cliff == end is allowed: a single unlock at the end.
        let cliff_at_end = VestingSchedule { cliff_time: T + 1000, ..base };
        assert!(cliff_at_end.validate().is_ok());
        assert_eq!(cliff_at_end.vested_amount(T + 999).unwrap(), 0);
        assert_eq!(cliff_at_end.vested_amount(T + 1000).unwrap(), 10_000);
    }

    #[test]
    fn over_withdrawn_is_an_error() {
        let s = coral();
        assert!(matches!(
            s.claimable(T + 550, 6_000),
            Err(VestingError::MathOverflow)
        ));
    }
}
