//! Integer evaluation of calculator input.

use super::{CalcAction, CalcParser, token};
use crate::{SampleError, feed};
use lrstack::{Cast, SemanticAction};

/// Evaluates expressions while they are parsed.
///
/// The stack value is the running `i64`, so every cast is the identity.
/// Arithmetic wraps on overflow; a division by zero yields `0` and is
/// remembered in [`Evaluator::division_by_zero`].
#[derive(Debug, Default)]
pub struct Evaluator {
    pub syntax_errors: usize,
    pub stack_overflows: usize,
    pub division_by_zero: bool,
}

impl SemanticAction for Evaluator {
    type Value = i64;

    fn syntax_error(&mut self) {
        self.syntax_errors += 1;
    }

    fn stack_overflow(&mut self) {
        self.stack_overflows += 1;
    }
}

impl Cast<i64> for Evaluator {
    #[inline]
    fn downcast(&self, value: &i64) -> i64 {
        *value
    }
    #[inline]
    fn upcast(&self, value: i64) -> i64 {
        value
    }
}

impl CalcAction for Evaluator {
    type Expr = i64;
    type Term = i64;

    fn make_expr(&mut self, term: i64) -> i64 {
        term
    }

    fn make_add(&mut self, lhs: i64, rhs: i64) -> i64 {
        log::debug!("expr {} + {}", lhs, rhs);
        lhs.wrapping_add(rhs)
    }

    fn make_sub(&mut self, lhs: i64, rhs: i64) -> i64 {
        log::debug!("expr {} - {}", lhs, rhs);
        lhs.wrapping_sub(rhs)
    }

    fn make_term(&mut self, number: i64) -> i64 {
        number
    }

    fn make_mul(&mut self, lhs: i64, rhs: i64) -> i64 {
        log::debug!("term {} * {}", lhs, rhs);
        lhs.wrapping_mul(rhs)
    }

    fn make_div(&mut self, lhs: i64, rhs: i64) -> i64 {
        log::debug!("term {} / {}", lhs, rhs);
        if rhs == 0 {
            self.division_by_zero = true;
            return 0;
        }
        lhs.wrapping_div(rhs)
    }
}

/// Parses and evaluates `source`.
///
/// # Examples
/// ```rust
/// assert_eq!(lrstack_samples::evaluate("2 + 3 * 4"), Ok(14));
/// assert!(lrstack_samples::evaluate("2 +").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, SampleError> {
    let mut parser = CalcParser::new(Evaluator::default());
    feed(&mut parser, source, token)?;
    if parser.actions().division_by_zero {
        return Err(SampleError::DivisionByZero);
    }
    parser.accept_as::<i64>().ok_or(SampleError::Incomplete)
}
