//! Request and response wire shapes

pub mod customer;

pub use customer::{CustomerRequest, CustomerResponse};
