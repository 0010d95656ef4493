//! Extraction and summation of decimal numbers embedded in text.
//!
//! Matches standalone floating-point literals only: word boundaries on both
//! sides exclude digits glued to identifiers (`abc1.23xyz` yields nothing).

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+\.\d+\b").expect("number pattern is valid"));

/// Lazily yields every standalone decimal literal found in `text`.
pub fn extract_numbers(text: &str) -> impl Iterator<Item = Decimal> + '_ {
    NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|m| Decimal::from_str(m.as_str()).ok())
}

/// Sums every number the `extractor` produces from `text`, rounded to two
/// fractional digits with round-half-up.
///
/// Generic over the producing function so callers can plug in their own
/// source of values; [`extract_numbers`] is the usual choice.
pub fn sum_profit<'a, F, I>(text: &'a str, extractor: F) -> Decimal
where
    F: FnOnce(&'a str) -> I,
    I: IntoIterator<Item = Decimal>,
{
    let total: Decimal = extractor(text).into_iter().sum();
    total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_extracts_all_floats() {
        let text = "Values: 1000.01 and 27.45 and 324.00";
        let values: Vec<Decimal> = extract_numbers(text).collect();
        assert_eq!(values, vec![dec!(1000.01), dec!(27.45), dec!(324.00)]);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert_eq!(extract_numbers("").count(), 0);
    }

    #[test]
    fn test_integers_are_not_matched() {
        let text = "There are 3 items and 10 boxes";
        assert_eq!(extract_numbers(text).count(), 0);
    }

    #[test]
    fn test_numbers_embedded_in_words_are_ignored() {
        let text = "abc123.45xyz and normal 6.78 value";
        let values: Vec<Decimal> = extract_numbers(text).collect();
        assert_eq!(values, vec![dec!(6.78)]);
    }

    #[test]
    fn test_sum_profit_example_text() {
        let text = "Загальний дохід працівника складається з декількох частин: \
                    1000.01 як основний дохід, доповнений додатковими надходженнями \
                    27.45 і 324.00 доларів.";
        assert_eq!(sum_profit(text, extract_numbers), dec!(1351.46));
    }

    #[test]
    fn test_sum_profit_empty_text_is_zero() {
        assert_eq!(sum_profit("", extract_numbers), dec!(0.00));
    }

    #[test]
    fn test_sum_profit_single_number() {
        assert_eq!(sum_profit("Profit: 500.75", extract_numbers), dec!(500.75));
    }

    #[test]
    fn test_sum_profit_rounds_half_up() {
        // 0.005 -> 0.01 under half-up; banker's rounding would give 0.00.
        assert_eq!(sum_profit("0.005", extract_numbers), dec!(0.01));
    }

    #[test]
    fn test_sum_profit_custom_extractor() {
        let fixed = |_: &str| vec![dec!(10.00), dec!(20.00), dec!(30.00)];
        assert_eq!(sum_profit("ignored", fixed), dec!(60.00));
    }
}
