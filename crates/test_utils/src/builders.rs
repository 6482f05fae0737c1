//! Test Data Builders
//!
//! Builder patterns for constructing customers and request bodies with
//! sensible defaults, so tests only spell out the fields they care about.

use domain_customer::{Customer, CustomerDto, Gender};

use crate::fixtures::StringFixtures;

/// Builder for constructing test customers
pub struct TestCustomerBuilder {
    name: String,
    email: String,
    age: i32,
    gender: Option<Gender>,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCustomerBuilder {
    /// Creates a new builder with default values and a unique email
    pub fn new() -> Self {
        Self {
            name: "Test Customer".to_string(),
            email: StringFixtures::unique_email("customer"),
            age: 30,
            gender: None,
        }
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the age
    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Builds an unsaved customer
    pub fn build(self) -> Customer {
        Customer::new(self.name, self.email, self.age, self.gender)
    }
}

/// Builder for partial update requests
#[derive(Default)]
pub struct TestUpdateBuilder {
    dto: CustomerDto,
}

impl TestUpdateBuilder {
    /// Starts an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.dto.name = Some(name.into());
        self
    }

    /// Sets the email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.dto.email = Some(email.into());
        self
    }

    /// Sets the age
    pub fn age(mut self, age: i32) -> Self {
        self.dto.age = Some(age);
        self
    }

    /// Sets the gender
    pub fn gender(mut self, gender: Gender) -> Self {
        self.dto.gender = Some(gender);
        self
    }

    /// Returns the request body
    pub fn build(self) -> CustomerDto {
        self.dto
    }
}
