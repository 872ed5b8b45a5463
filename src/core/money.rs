use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

pub type Amount = Decimal;

const CURRENCY_SYMBOL: &str = "$";
const DECIMAL_PLACES: u32 = 2;

/// Display wrapper printing an amount in the fixed currency format,
/// e.g. `$1,234.50` or `-$3.00`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Money(pub Amount);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

        // always two digits after the point, even for whole amounts
        let digits = format!("{:.2}", rounded.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        write!(f, "{}{}{}.{}", sign, CURRENCY_SYMBOL, group_thousands(integer), fraction)
    }
}

fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}


#[cfg(test)]
mod tests {
    use super::Money;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(5), "$5.00")]
    #[case(dec!(150.5), "$150.50")]
    #[case(dec!(999.999), "$1,000.00")]
    #[case(dec!(1234.5), "$1,234.50")]
    #[case(dec!(1234567.891), "$1,234,567.89")]
    #[case(dec!(0.005), "$0.01")]
    #[case(dec!(-3), "-$3.00")]
    #[case(dec!(-0.001), "$0.00")]
    fn formats_currency(#[case] amount: rust_decimal::Decimal, #[case] expected: &str) {
        assert_eq!(Money(amount).to_string(), expected);
    }
}
