//! Two-phase evaluation score.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `(middlegame, endgame)` pair, blended later by the full evaluator
/// according to the remaining material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Score {
    pub mg: i32,
    pub eg: i32,
}

impl Score {
    pub const ZERO: Score = Score { mg: 0, eg: 0 };

    #[inline]
    #[must_use]
    pub const fn new(mg: i32, eg: i32) -> Self {
        Score { mg, eg }
    }

    #[inline]
    #[must_use]
    pub const fn mg(self) -> i32 {
        self.mg
    }

    #[inline]
    #[must_use]
    pub const fn eg(self) -> i32 {
        self.eg
    }
}

impl Add for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        Score::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl Sub for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl AddAssign for Score {
    #[inline]
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl SubAssign for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: Score) {
        *self = *self - rhs;
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        Score::new(-self.mg, -self.eg)
    }
}

impl Mul<i32> for Score {
    type Output = Score;

    #[inline]
    fn mul(self, rhs: i32) -> Score {
        Score::new(self.mg * rhs, self.eg * rhs)
    }
}

/// Component-wise, truncating toward zero.
impl Div<i32> for Score {
    type Output = Score;

    #[inline]
    fn div(self, rhs: i32) -> Score {
        Score::new(self.mg / rhs, self.eg / rhs)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.mg, self.eg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Score::new(5, 15);
        let b = Score::new(13, 27);
        assert_eq!(a + b, Score::new(18, 42));
        assert_eq!(a - b, Score::new(-8, -12));
        assert_eq!(a * 3, Score::new(15, 45));
        assert_eq!(-a, Score::new(-5, -15));

        let mut acc = Score::ZERO;
        acc += a;
        acc -= b;
        assert_eq!(acc, Score::new(-8, -12));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(Score::new(5, 15) / 2, Score::new(2, 7));
        assert_eq!(Score::new(-5, -15) / 2, Score::new(-2, -7));
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::new(70, -11).to_string(), "(70, -11)");
    }
}
