//! Implementation of increment rounding functionality

use num_traits::float::FloatCore;

use crate::{interval_assert, IntervalResult};

/// The direction a value is rounded towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoundingMode {
    /// Towards positive infinity.
    Ceil,
    /// Towards negative infinity.
    Floor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnsignedRoundingMode {
    Infinity,
    Zero,
}

impl RoundingMode {
    const fn get_unsigned_round_mode(self, is_positive: bool) -> UnsignedRoundingMode {
        match (self, is_positive) {
            (Self::Ceil, true) | (Self::Floor, false) => UnsignedRoundingMode::Infinity,
            (Self::Ceil, false) | (Self::Floor, true) => UnsignedRoundingMode::Zero,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub(crate) struct IncrementRounder<T: FloatCore> {
    sign: bool,
    dividend: T,
    divisor: T,
}

impl<T: FloatCore> IncrementRounder<T> {
    #[inline]
    pub(crate) fn from_signed_num(number: T, increment: T) -> IntervalResult<Self> {
        interval_assert!(
            increment > T::zero() && increment.is_finite(),
            "rounding increment must be a positive finite number"
        );
        Ok(Self {
            sign: number >= T::zero(),
            dividend: number,
            divisor: increment,
        })
    }

    /// Rounds the number to a multiple of the increment.
    #[inline]
    pub(crate) fn round(&self, mode: RoundingMode) -> T {
        let unsigned_rounding_mode = mode.get_unsigned_round_mode(self.sign);
        let quotient = FloatCore::abs(self.dividend / self.divisor);
        let mut rounded = apply_unsigned_rounding_mode(quotient, unsigned_rounding_mode);
        if !self.sign {
            rounded = -rounded;
        }
        rounded * self.divisor
    }
}

/// Applies the unsigned rounding mode to an absolute quotient.
fn apply_unsigned_rounding_mode<T: FloatCore>(
    quotient: T,
    unsigned_rounding_mode: UnsignedRoundingMode,
) -> T {
    let r1 = FloatCore::floor(quotient);
    // If x is equal to r1, return r1.
    if quotient == r1 {
        return r1;
    }
    match unsigned_rounding_mode {
        UnsignedRoundingMode::Zero => r1,
        UnsignedRoundingMode::Infinity => FloatCore::ceil(quotient),
    }
}
