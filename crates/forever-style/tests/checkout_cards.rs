use chrono::NaiveDate;
use forever_style::workflows::payment::{
    brand_label, classify_card_brand, format_card_number, format_expiry_input, is_valid_expiry,
    CardBrand, CardNumberInput, ExpiryInput,
};

fn june_first_2025() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

#[test]
fn brands_follow_their_prefix_rules() {
    assert_eq!(
        classify_card_brand("4111 1111 1111 1111"),
        Some(CardBrand::Visa)
    );
    assert_eq!(
        classify_card_brand("5500 0000 0000 0004"),
        Some(CardBrand::Mastercard)
    );
    assert_eq!(classify_card_brand("6011000000000000"), Some(CardBrand::RuPay));
    assert_eq!(classify_card_brand("8212345678901234"), Some(CardBrand::RuPay));
    assert_eq!(classify_card_brand("1234"), None);
    assert_eq!(classify_card_brand(""), None);
    // RuPay rules need the full sixteen digits
    assert_eq!(classify_card_brand("601100"), None);
    assert_eq!(brand_label(classify_card_brand("1234")), "Credit Card");
}

#[test]
fn card_numbers_group_in_fours() {
    assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
    assert_eq!(format_card_number("4111-1111-11"), "4111 1111 11");
    assert_eq!(format_card_number(""), "");

    let input = CardNumberInput::from_raw("4111 1111 1111 1111 999");
    assert_eq!(input.formatted, "4111 1111 1111 1111");
    assert_eq!(input.digits.len(), 16);
    assert_eq!(input.detected_brand, Some(CardBrand::Visa));
}

#[test]
fn expiry_is_valid_through_the_printed_month() {
    let today = june_first_2025();
    assert!(!is_valid_expiry("13/25", today));
    assert!(!is_valid_expiry("13/99", NaiveDate::from_ymd_opt(2000, 1, 1).expect("date")));
    assert!(!is_valid_expiry("01/20", today));
    assert!(!is_valid_expiry("05/25", today));
    assert!(is_valid_expiry("06/25", today));
    assert!(is_valid_expiry("07/25", today));
    assert!(!is_valid_expiry("0725", today));
    assert!(!is_valid_expiry("7/25", today));
}

#[test]
fn typed_expiry_gets_a_slash() {
    assert_eq!(format_expiry_input("0725"), "07/25");
    assert_eq!(format_expiry_input("07"), "07");
    assert_eq!(format_expiry_input("072599"), "07/25");

    let input = ExpiryInput::from_raw("1230", june_first_2025());
    assert_eq!(input.formatted, "12/30");
    assert!(input.is_valid);
}
