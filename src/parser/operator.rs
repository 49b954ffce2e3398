use crate::error::Error;
use crate::parser::TokenKind;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    pub(crate) fn of_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Subtract),
            TokenKind::Multiply => Some(Self::Multiply),
            TokenKind::Divide => Some(Self::Divide),
            TokenKind::Exponent => Some(Self::Power),
            _ => None
        }
    }

    /// Applies the operator with checked `i64` arithmetic.
    ///
    /// # Errors
    /// - [`Error::DivisionByZero`] when dividing by zero, or raising zero to a negative power.
    /// - [`Error::Overflow`] when the result does not fit into an `i64`.
    pub fn op(&self, left: i64, right: i64) -> Result<i64, Error> {
        use BinaryOperator as Op;
        match self {
            Op::Add => left.checked_add(right).ok_or(Error::Overflow),
            Op::Subtract => left.checked_sub(right).ok_or(Error::Overflow),
            Op::Multiply => left.checked_mul(right).ok_or(Error::Overflow),
            Op::Divide if right == 0 => Err(Error::DivisionByZero),
            Op::Divide => left.checked_div(right).ok_or(Error::Overflow),
            Op::Power => power(left, right)
        }
    }
}


/// Exact integer power by repeated squaring.
///
/// A negative exponent yields the reciprocal truncated toward zero.
fn power(base: i64, exponent: i64) -> Result<i64, Error> {
    match (base, exponent) {
        (_, 0) => Ok(1),
        (0, e) if e < 0 => Err(Error::DivisionByZero),
        (0, _) => Ok(0),
        (1, _) => Ok(1),
        (-1, e) => Ok(if e % 2 == 0 { 1 } else { -1 }),
        (_, e) if e < 0 => Ok(0),
        (b, e) => {
            // |b| >= 2 overflows long before the exponent leaves u32 range
            let e = u32::try_from(e).map_err(|_| Error::Overflow)?;
            b.checked_pow(e).ok_or(Error::Overflow)
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;


    proptest! {
        #[test]
        fn test_power_matches_repeated_multiplication(base in -12i64..=12, exponent in 0i64..=15) {
            let expected = (0..exponent).fold(1i64, |acc, _| acc * base);
            prop_assert_eq!(BinaryOperator::Power.op(base, exponent), Ok(expected));
        }

        #[test]
        fn test_division_truncates_toward_zero(left in -1000i64..=1000, right in -50i64..=50) {
            prop_assume!(right != 0);

            let result = BinaryOperator::Divide.op(left, right).unwrap();
            prop_assert_eq!(result, left / right);
            prop_assert!((result * right).abs() <= left.abs());
        }

        #[test]
        fn test_negative_exponent(base in -100i64..=100, exponent in i64::MIN..0) {
            let result = BinaryOperator::Power.op(base, exponent);

            match base {
                0 => prop_assert_eq!(result, Err(Error::DivisionByZero)),
                1 => prop_assert_eq!(result, Ok(1)),
                -1 => prop_assert_eq!(result, Ok(if exponent % 2 == 0 { 1 } else { -1 })),
                _ => prop_assert_eq!(result, Ok(0)),
            }
        }
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(BinaryOperator::Divide.op(10, 0), Err(Error::DivisionByZero));
        assert_eq!(BinaryOperator::Divide.op(0, 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(BinaryOperator::Add.op(i64::MAX, 1), Err(Error::Overflow));
        assert_eq!(BinaryOperator::Subtract.op(i64::MIN, 1), Err(Error::Overflow));
        assert_eq!(BinaryOperator::Multiply.op(i64::MAX, 2), Err(Error::Overflow));
        assert_eq!(BinaryOperator::Divide.op(i64::MIN, -1), Err(Error::Overflow));
        assert_eq!(BinaryOperator::Power.op(2, 63), Err(Error::Overflow));
        assert_eq!(BinaryOperator::Power.op(2, i64::MAX), Err(Error::Overflow));
    }

    #[test]
    fn test_power_edges() {
        assert_eq!(BinaryOperator::Power.op(2, 62), Ok(1 << 62));
        assert_eq!(BinaryOperator::Power.op(0, 0), Ok(1));
        assert_eq!(BinaryOperator::Power.op(-2, 63), Ok(i64::MIN));
        assert_eq!(BinaryOperator::Power.op(1, i64::MAX), Ok(1));
        assert_eq!(BinaryOperator::Power.op(-1, i64::MAX), Ok(-1));
        assert_eq!(BinaryOperator::Power.op(0, i64::MAX), Ok(0));
    }

    #[test]
    fn test_of_token() {
        assert_eq!(BinaryOperator::of_token(TokenKind::Exponent), Some(BinaryOperator::Power));
        assert_eq!(BinaryOperator::of_token(TokenKind::Assign), None);
        assert_eq!(BinaryOperator::of_token(TokenKind::End), None);
    }
}
