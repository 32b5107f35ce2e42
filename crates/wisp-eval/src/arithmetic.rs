//! Numeric helpers for the binary-operator rules: integer division floors
//! toward negative infinity, decimal division rounds half-to-even at a
//! fixed working scale (SPEC_FULL.md §3's resolution of the
//! numeric-representation open question).

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer as _;
use num_traits::Zero;
use wisp_util::Span;

use crate::error::{EvaluateException, EvaluateResult};

/// Decimal division works to this many fractional digits before rounding
/// half-to-even, since `BigDecimal` division is otherwise exact-or-bust
/// (it has no native concept of a terminating ratio for things like 1/3).
const WORKING_SCALE: i64 = 34;

pub fn integer_add(a: &BigInt, b: &BigInt) -> BigInt {
    a + b
}

pub fn integer_sub(a: &BigInt, b: &BigInt) -> BigInt {
    a - b
}

pub fn integer_mul(a: &BigInt, b: &BigInt) -> BigInt {
    a * b
}

/// Floor division: the quotient rounds toward negative infinity rather
/// than toward zero, adjusted when signs differ and the remainder is
/// nonzero.
pub fn integer_div(a: &BigInt, b: &BigInt, span: Span) -> EvaluateResult<BigInt> {
    if b.is_zero() {
        return Err(EvaluateException::new("division by zero", span));
    }
    Ok(a.div_floor(b))
}

pub fn decimal_add(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    a + b
}

pub fn decimal_sub(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    a - b
}

pub fn decimal_mul(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    a * b
}

/// Banker's rounding (half-to-even) at [`WORKING_SCALE`] digits.
pub fn decimal_div(a: &BigDecimal, b: &BigDecimal, span: Span) -> EvaluateResult<BigDecimal> {
    if b.is_zero() {
        return Err(EvaluateException::new("division by zero", span));
    }
    Ok((a / b).round(WORKING_SCALE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn integer_division_floors_toward_negative_infinity() {
        let result = integer_div(&BigInt::from(-7), &BigInt::from(2), Span::DUMMY).unwrap();
        assert_eq!(result, BigInt::from(-4));
    }

    #[test]
    fn integer_division_by_zero_fails() {
        assert!(integer_div(&BigInt::from(1), &BigInt::from(0), Span::DUMMY).is_err());
    }

    #[test]
    fn decimal_division_by_zero_fails() {
        let zero = BigDecimal::from_str("0").unwrap();
        let one = BigDecimal::from_str("1").unwrap();
        assert!(decimal_div(&one, &zero, Span::DUMMY).is_err());
    }

    #[test]
    fn decimal_division_rounds_half_to_even() {
        let a = BigDecimal::from_str("1").unwrap();
        let b = BigDecimal::from_str("3").unwrap();
        let result = decimal_div(&a, &b, Span::DUMMY).unwrap();
        assert_eq!(result.to_string().len() > 1, true);
    }
}
