//! Customer aggregate and the request envelopes that create or change it
//!
//! A [`Customer`] is the persisted record. [`CustomerDto`] is what clients
//! send: every field is optional on the wire, and create requests are checked
//! for the mandatory ones by [`crate::validation`]. [`CustomerUpdate`] is the
//! dirty-field set the service hands to a data access adapter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

use core_kernel::CustomerId;

/// Gender classification of a customer
///
/// Persisted as the variant's upper-case name (`MALE`, `FEMALE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the persisted token for this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored gender token names no known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

/// A customer record in the directory
///
/// `id` is `None` until the store assigns one at insert time and never
/// changes afterwards. Two customers are equal when all five fields match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned identity
    pub id: Option<CustomerId>,
    /// Display name, never empty
    pub name: String,
    /// Email address, unique across the directory (case-sensitive)
    pub email: String,
    /// Age in years; no range is enforced
    pub age: i32,
    /// Gender, absent on legacy rows and on creates that omit it
    pub gender: Option<Gender>,
}

impl Customer {
    /// Creates a customer that has not been persisted yet
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32, gender: Option<Gender>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
            gender,
        }
    }

    /// Returns this customer carrying the given identity
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    /// True when name, email, age and gender match, ignoring identity
    pub fn same_content(&self, other: &Customer) -> bool {
        self.name == other.name
            && self.email == other.email
            && self.age == other.age
            && self.gender == other.gender
    }
}

/// Request envelope for create and update
///
/// Absent fields deserialize to `None`. On update `None` means "leave
/// unchanged"; on create `name`, `email` and `age` must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CustomerDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl CustomerDto {
    /// Creates a fully populated envelope
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32, gender: Option<Gender>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            age: Some(age),
            gender,
        }
    }

    /// Sets only the name
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Sets only the email
    pub fn email_only(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Sets only the age
    pub fn age_only(age: i32) -> Self {
        Self {
            age: Some(age),
            ..Default::default()
        }
    }

    /// Sets only the gender
    pub fn gender_only(gender: Gender) -> Self {
        Self {
            gender: Some(gender),
            ..Default::default()
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            name: Some(customer.name.clone()),
            email: Some(customer.email.clone()),
            age: Some(customer.age),
            gender: customer.gender,
        }
    }
}

/// Fields of one customer that an update actually changes
///
/// Adapters write exactly the `Some` fields and leave the rest untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub id: CustomerId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl CustomerUpdate {
    /// Starts an empty change set for the given customer
    pub fn new(id: CustomerId) -> Self {
        Self {
            id,
            name: None,
            email: None,
            age: None,
            gender: None,
        }
    }

    /// True when no field would be written
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none() && self.gender.is_none()
    }

    /// Names of the columns this update touches, in write order
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(4);
        if self.name.is_some() {
            fields.push("name");
        }
        if self.email.is_some() {
            fields.push("email");
        }
        if self.age.is_some() {
            fields.push("age");
        }
        if self.gender.is_some() {
            fields.push("gender");
        }
        fields
    }

    /// Writes the changed fields onto a loaded customer
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(age) = self.age {
            customer.age = age;
        }
        if let Some(gender) = self.gender {
            customer.gender = Some(gender);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> Customer {
        Customer::new("Foo", "foo@bar.com", 90, None).with_id(CustomerId::new(9))
    }

    #[test]
    fn test_gender_tokens() {
        assert_eq!(Gender::Male.as_str(), "MALE");
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(
            "female".parse::<Gender>().unwrap_err(),
            UnknownGender("female".to_string())
        );
    }

    #[test]
    fn test_gender_json() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"MALE\"");
        let g: Gender = serde_json::from_str("\"FEMALE\"").unwrap();
        assert_eq!(g, Gender::Female);
    }

    #[test]
    fn test_customer_equality_covers_all_fields() {
        let a = foo();
        let mut b = foo();
        assert_eq!(a, b);
        b.gender = Some(Gender::Male);
        assert_ne!(a, b);
        assert!(!a.same_content(&b));
    }

    #[test]
    fn test_same_content_ignores_id() {
        let persisted = foo();
        let fresh = Customer::new("Foo", "foo@bar.com", 90, None);
        assert_ne!(persisted, fresh);
        assert!(persisted.same_content(&fresh));
    }

    #[test]
    fn test_dto_missing_fields_deserialize_as_none() {
        let dto: CustomerDto = serde_json::from_str(r#"{"name":"Faa"}"#).unwrap();
        assert_eq!(dto, CustomerDto::name_only("Faa"));
    }

    #[test]
    fn test_update_apply_only_touches_some_fields() {
        let mut customer = foo();
        let mut update = CustomerUpdate::new(CustomerId::new(9));
        update.age = Some(100);
        update.apply_to(&mut customer);

        assert_eq!(customer.name, "Foo");
        assert_eq!(customer.email, "foo@bar.com");
        assert_eq!(customer.age, 100);
        assert_eq!(update.changed_fields(), vec!["age"]);
    }

    #[test]
    fn test_empty_update() {
        let update = CustomerUpdate::new(CustomerId::new(1));
        assert!(update.is_empty());
        assert!(update.changed_fields().is_empty());
    }
}
