//! Pre-built Test Fixtures
//!
//! Provides ready-to-use customers and request bodies. Values are fixed so
//! tests can match on them literally.

use core_kernel::CustomerId;
use domain_customer::{Customer, CustomerDto};
use uuid::Uuid;

/// Fixture for customer records
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// The persisted "Foo" customer used throughout the service tests (id 9)
    pub fn foo() -> Customer {
        Customer::new("Foo", "foo@bar.com", 90, None).with_id(CustomerId::new(9))
    }

    /// First demo customer
    pub fn alex() -> Customer {
        Customer::new("Alex", "alex@gmail.com", 21, None).with_id(CustomerId::new(1))
    }

    /// Second demo customer
    pub fn jamila() -> Customer {
        Customer::new("Jamila", "jamila@gmail.com", 19, None).with_id(CustomerId::new(2))
    }
}

/// Fixture for request bodies
pub struct DtoFixtures;

impl DtoFixtures {
    /// A create request with a unique email
    pub fn venom_snake() -> CustomerDto {
        CustomerDto::new("Venom Snake", StringFixtures::unique_email("vs"), 42, None)
    }

    /// A create request colliding with [`CustomerFixtures::foo`]
    pub fn duplicate_of_foo() -> CustomerDto {
        CustomerDto::new("X", "foo@bar.com", 20, None)
    }

    /// An update request repeating every field of [`CustomerFixtures::foo`]
    pub fn unchanged_foo() -> CustomerDto {
        CustomerDto::from(&CustomerFixtures::foo())
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// An id no test store ever assigns
    pub fn missing() -> CustomerId {
        CustomerId::new(99999)
    }

    /// A negative id, never assigned by a sequence
    pub fn negative() -> CustomerId {
        CustomerId::new(-1)
    }
}

/// Fixture for string values
pub struct StringFixtures;

impl StringFixtures {
    /// Builds an email that no other test uses
    pub fn unique_email(prefix: &str) -> String {
        format!("{}-{}@x", prefix, Uuid::new_v4())
    }
}
