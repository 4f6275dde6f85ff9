//! Display formatting for on-chain amounts.
use num_bigint::BigUint;

/// Render an integer amount of smallest units with a decimal point
/// `decimals` digits from the right. There is always at least one
/// digit before the point, and trailing zeros are kept so no precision
/// is hidden.
///
/// ```
/// # use num_bigint::BigUint;
/// # use yumbal::libs::mvx::spells::format_denominated;
/// let v = BigUint::from(1_234_000_000_000_000_000u128);
/// assert_eq!(format_denominated(&v, 18), "1.234000000000000000");
/// ```
pub fn format_denominated(amount: &BigUint, decimals: u32) -> String {
    let digits = amount.to_str_radix(10);
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (int, frac) = padded.split_at(padded.len() - decimals);
    format!("{int}.{frac}")
}
