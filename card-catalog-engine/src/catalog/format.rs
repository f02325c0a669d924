use constants::catalog::{FEE_CURRENCY_SUFFIX, FREE_FEE_LABEL, group_thousands};

/// Annual fee label: grouped amount with the currency suffix, or the free label
/// when there is no fee.
pub fn format_annual_fee(amount: Option<u64>) -> String {
    match amount {
        Some(amount) if amount > 0 => {
            format!("{}{}", group_thousands(amount), FEE_CURRENCY_SUFFIX)
        }
        _ => FREE_FEE_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_fee_is_grouped_with_suffix() {
        assert_eq!(format_annual_fee(Some(15000)), "15,000원");
        assert_eq!(format_annual_fee(Some(500)), "500원");
        assert_eq!(format_annual_fee(Some(1_234_567)), "1,234,567원");
    }

    #[test]
    fn absent_or_zero_fee_is_free() {
        assert_eq!(format_annual_fee(None), "무료");
        assert_eq!(format_annual_fee(Some(0)), "무료");
    }
}
