//! Property-based tests for registration form validation.

use chrono::NaiveDate;
use qrpromo_cpf::check_digits;
use qrpromo_registration::{RegistrationForm, RegistrationRules};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

proptest! {
    /// Arbitrary field contents never panic; they either validate or fail cleanly
    #[test]
    fn validate_is_total(
        name in ".{0,20}",
        cpf in ".{0,20}",
        phone in ".{0,20}",
        birth_date in ".{0,12}",
    ) {
        let form = RegistrationForm { name, cpf, phone, birth_date };
        let _ = form.validate(&RegistrationRules::default(), today());
    }

    /// Any valid CPF with an adult birth date yields a payload carrying the bare digits
    #[test]
    fn adult_with_valid_cpf_is_accepted(
        base in prop::array::uniform9(0u8..=9)
            .prop_filter("not repeated", |b| b.iter().any(|&d| d != b[0])),
        year in 1930i32..=2009,
        day in 1u32..=28,
        month in 1u32..=12,
    ) {
        let [first, second] = check_digits(&base);
        let digits: String = base.iter().chain([first, second].iter())
            .map(|d| char::from(b'0' + d))
            .collect();
        let form = RegistrationForm {
            name: "Cliente".into(),
            cpf: digits.clone(),
            phone: "11987654321".into(),
            birth_date: format!("{day:02}/{month:02}/{year}"),
        }
        .masked();
        let payload = form.validate(&RegistrationRules::default(), today()).unwrap();
        prop_assert_eq!(payload.cpf.digits(), digits.as_str());
        prop_assert_eq!(payload.phone.as_str(), "11987654321");
    }
}
