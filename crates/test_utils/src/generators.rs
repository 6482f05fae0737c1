//! Property-Based Test Generators
//!
//! Provides proptest strategies for customers and request bodies.

use proptest::prelude::*;

use core_kernel::CustomerId;
use domain_customer::{Customer, CustomerDto, Gender};

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Strategy for generating optional gender values
pub fn optional_gender_strategy() -> impl Strategy<Value = Option<Gender>> {
    proptest::option::of(gender_strategy())
}

/// Strategy for generating non-empty display names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,15}( [A-Z][a-z]{1,15})?"
}

/// Strategy for generating syntactically plausible emails
pub fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,11}@[a-z]{2,10}\\.(com|org|io)"
}

/// Strategy for generating ages; the domain accepts any integer
pub fn age_strategy() -> impl Strategy<Value = i32> {
    any::<i32>()
}

/// Strategy for generating positive customer ids
pub fn customer_id_strategy() -> impl Strategy<Value = CustomerId> {
    (1i32..i32::MAX).prop_map(CustomerId::new)
}

/// Strategy for generating unpersisted customers
pub fn customer_strategy() -> impl Strategy<Value = Customer> {
    (name_strategy(), email_strategy(), age_strategy(), optional_gender_strategy())
        .prop_map(|(name, email, age, gender)| Customer::new(name, email, age, gender))
}

/// Strategy for generating complete create requests
pub fn create_dto_strategy() -> impl Strategy<Value = CustomerDto> {
    customer_strategy().prop_map(|c| CustomerDto::from(&c))
}

/// Strategy for generating update requests where any field may be absent
pub fn update_dto_strategy() -> impl Strategy<Value = CustomerDto> {
    (
        proptest::option::of(name_strategy()),
        proptest::option::of(email_strategy()),
        proptest::option::of(age_strategy()),
        optional_gender_strategy(),
    )
        .prop_map(|(name, email, age, gender)| CustomerDto { name, email, age, gender })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_names_are_non_empty(name in name_strategy()) {
            prop_assert!(!name.is_empty());
        }

        #[test]
        fn generated_emails_contain_at(email in email_strategy()) {
            prop_assert!(email.contains('@'));
        }
    }
}
