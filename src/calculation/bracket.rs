//! Bracket lookup for progressive tax tables.
//!
//! This module provides the linear-scan lookup over an ordered,
//! non-overlapping bracket table, plus the cent rounding used by every
//! monetary result in the engine.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::TaxBracket;
use crate::error::{EngineError, EngineResult};

/// Rounds a monetary amount to cents, midpoint away from zero.
///
/// This is the statutory rounding used for withheld taxes and benefit
/// amounts throughout the engine.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Finds the bracket whose closed-closed range contains `salary`.
///
/// The table is validated at config load time to start at zero, be
/// contiguous at cent granularity, and terminate in an unbounded
/// bracket, so every non-negative cent-precision salary matches exactly
/// one bracket.
///
/// # Arguments
///
/// * `salary` - The (non-negative) amount to locate
/// * `brackets` - The ordered bracket table
///
/// # Returns
///
/// Returns the matching bracket and its index, or an error if the salary
/// is negative or the table does not cover it.
pub fn find_bracket(salary: Decimal, brackets: &[TaxBracket]) -> EngineResult<(usize, &TaxBracket)> {
    if salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            message: format!("cannot locate bracket for negative amount {}", salary),
        });
    }

    brackets
        .iter()
        .enumerate()
        .find(|(_, b)| salary >= b.min && b.max.is_none_or(|max| salary <= max))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no bracket covers amount {}", salary),
        })
}
