// 6.0: display formatting for preview rows. "$1,234.56", "0.12%", "15 sec".

use crate::input::DisplayPrecision;
use rust_decimal::{Decimal, RoundingStrategy};

fn fixed(value: Decimal, dp: u32) -> String {
    let mut v = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(dp);
    v.to_string()
}

// negative and still non-zero after rounding, so "-0.00" never shows
fn rounds_negative(value: Decimal, dp: u32) -> bool {
    value.is_sign_negative()
        && !value
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
            .is_zero()
}

fn group_thousands(int_part: &str) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

pub fn format_number(value: Decimal, dp: u32) -> String {
    let text = fixed(value.abs(), dp);
    let sign = if rounds_negative(value, dp) { "-" } else { "" };
    match text.split_once('.') {
        Some((int_part, frac)) => format!("{sign}{}.{frac}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(&text)),
    }
}

pub fn format_dollars(value: Decimal, precision: DisplayPrecision) -> String {
    let dp = precision.decimals_for(value);
    let body = format_number(value.abs(), dp);
    if rounds_negative(value, dp) {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

// ratio in, percent out: 0.0123 -> "1.23%"
pub fn format_percent(ratio: Decimal) -> String {
    format!("{}%", format_number(ratio * Decimal::ONE_HUNDRED, 2))
}

pub fn format_seconds(seconds: u64) -> String {
    format!("{seconds} sec")
}

pub fn format_size(value: Decimal, asset: &str) -> String {
    let dp = crate::input::suggested_decimals(value);
    format!("{} {asset}", format_number(value, dp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn dollars_with_grouping() {
        assert_eq!(format_dollars(dec!(1234.5), DisplayPrecision::Fixed(2)), "$1,234.50");
        assert_eq!(format_dollars(dec!(1234567), DisplayPrecision::Fixed(2)), "$1,234,567.00");
        assert_eq!(format_dollars(dec!(0), DisplayPrecision::Fixed(2)), "$0.00");
        assert_eq!(format_dollars(dec!(-5.125), DisplayPrecision::Fixed(2)), "-$5.13");
    }

    #[test]
    fn suggested_dollars_for_small_prices() {
        assert_eq!(format_dollars(dec!(0.123456), DisplayPrecision::Suggested), "$0.1235");
        assert_eq!(format_dollars(dec!(1850.25), DisplayPrecision::Suggested), "$1,850.25");
    }

    #[test]
    fn percent_from_ratio() {
        assert_eq!(format_percent(dec!(0.0123)), "1.23%");
        assert_eq!(format_percent(dec!(-0.5)), "-50.00%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
    }

    #[test]
    fn number_rounding() {
        assert_eq!(format_number(dec!(999.995), 2), "1,000.00");
        assert_eq!(format_number(dec!(-0.001), 2), "0.00");
        assert_eq!(format_number(dec!(15), 0), "15");
    }

    #[test]
    fn seconds_and_size() {
        assert_eq!(format_seconds(15), "15 sec");
        assert_eq!(format_size(dec!(1.5), "ETH"), "1.5000 ETH");
    }
}
