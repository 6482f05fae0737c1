//! Customer DTOs

use serde::{Deserialize, Serialize};

use domain_customer::{Customer, CustomerDto, Gender};

/// Body of `POST` and `PUT /api/v1/customers`
///
/// Every field may be absent; the service decides which are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl From<CustomerRequest> for CustomerDto {
    fn from(request: CustomerRequest) -> Self {
        CustomerDto {
            name: request.name,
            email: request.email,
            age: request.age,
            gender: request.gender,
        }
    }
}

/// A customer as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: Option<Gender>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.map(|id| id.value()),
            name: customer.name,
            email: customer.email,
            age: customer.age,
            gender: customer.gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CustomerId;

    #[test]
    fn test_response_shape() {
        let response = CustomerResponse::from(
            Customer::new("Foo", "foo@bar.com", 90, Some(Gender::Male)).with_id(CustomerId::new(9)),
        );
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "id": 9,
                "name": "Foo",
                "email": "foo@bar.com",
                "age": 90,
                "gender": "MALE"
            })
        );
    }

    #[test]
    fn test_null_gender_is_serialized() {
        let response = CustomerResponse::from(
            Customer::new("Foo", "foo@bar.com", 90, None).with_id(CustomerId::new(9)),
        );
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("gender").unwrap().is_null());
    }

    #[test]
    fn test_request_accepts_partial_body() {
        let request: CustomerRequest = serde_json::from_str(r#"{"name":"Faa"}"#).unwrap();
        assert_eq!(CustomerDto::from(request), CustomerDto::name_only("Faa"));
    }
}
