use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Display locale for all figures (`id_ID`: period groups thousands)
pub const DISPLAY_LOCALE: Locale = Locale::id;

/// Rupiah display prefix
pub const RUPIAH_PREFIX: &str = "Rp ";

/// Group an integer with `id_ID` thousands separators
pub fn group_digits(value: i128) -> String {
    value.to_formatted_string(&DISPLAY_LOCALE)
}

/// Round an amount to whole Rupiah (IDR has no minor unit on display)
///
/// Halves round away from zero, matching locale currency formatting.
pub fn round_rupiah(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `Rp 1.234.567`, negative amounts as `-Rp 1.234`
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = round_rupiah(amount);
    // Decimal's 96-bit mantissa always fits in i128
    let whole = rounded.to_i128().unwrap_or_default();

    if whole < 0 {
        format!("-{}{}", RUPIAH_PREFIX, group_digits(-whole))
    } else {
        format!("{}{}", RUPIAH_PREFIX, group_digits(whole))
    }
}
