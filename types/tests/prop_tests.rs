use proptest::prelude::*;

use steward_types::{Address, Amount};

proptest! {
    /// Only the all-zero byte pattern is the zero sentinel.
    #[test]
    fn zero_detection_matches_bytes(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        prop_assert_eq!(addr.is_zero(), bytes == [0u8; 20]);
    }

    /// Display renders exactly 40 lowercase hex digits after the prefix.
    #[test]
    fn display_shape(bytes in prop::array::uniform20(0u8..)) {
        let shown = Address::new(bytes).to_string();
        prop_assert!(shown.starts_with("0x"));
        prop_assert_eq!(shown.len(), 42);
        prop_assert!(shown[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// Checked addition agrees with u128 overflow behaviour.
    #[test]
    fn checked_add_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        let sum = Amount::new(a).checked_add(Amount::new(b));
        prop_assert_eq!(sum.map(|s| s.raw()), a.checked_add(b));
    }

    /// Saturating subtraction never underflows.
    #[test]
    fn saturating_sub_never_underflows(a in any::<u128>(), b in any::<u128>()) {
        let diff = Amount::new(a).saturating_sub(Amount::new(b));
        prop_assert_eq!(diff.raw(), a.saturating_sub(b));
    }
}
