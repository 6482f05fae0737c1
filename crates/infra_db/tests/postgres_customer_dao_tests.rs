//! PostgreSQL customer adapter tests
//!
//! These start a PostgreSQL container and are ignored by default.
//! Run with `cargo test -p infra_db -- --ignored` on a host with docker.

use core_kernel::{CustomerId, HealthCheckable, PortError};
use domain_customer::{Customer, CustomerDao, CustomerUpdate, Gender};
use infra_db::PostgresCustomerDao;
use test_utils::{
    assert_same_content, create_isolated_test_database, IdFixtures, StringFixtures, TestCustomerBuilder,
    TestDatabase,
};

/// Each test owns its container; a pool cannot outlive the runtime that opened it
async fn dao() -> (TestDatabase, PostgresCustomerDao) {
    let db = create_isolated_test_database()
        .await
        .expect("Failed to create test database");
    let dao = PostgresCustomerDao::new(db.pool().clone());
    (db, dao)
}

/// Inserts a customer with a unique email and returns it with its assigned id
async fn insert_fresh(dao: &PostgresCustomerDao) -> Customer {
    let customer = TestCustomerBuilder::new()
        .with_name("Foo")
        .with_age(20)
        .with_gender(Gender::Female)
        .build();
    dao.insert_customer(customer.clone()).await.unwrap();

    dao.select_all_customers()
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.email == customer.email)
        .expect("inserted customer is listed")
}

#[tokio::test]
#[ignore = "requires docker"]
async fn select_all_customers() {
    let (_db, dao) = dao().await;
    insert_fresh(&dao).await;
    assert!(!dao.select_all_customers().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn select_customer_by_id() {
    let (_db, dao) = dao().await;
    let stored = insert_fresh(&dao).await;

    let actual = dao.select_customer_by_id(stored.id.unwrap()).await.unwrap();

    assert_eq!(actual, Some(stored));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn select_missing_id_is_empty() {
    let (_db, dao) = dao().await;
    assert!(dao.select_customer_by_id(IdFixtures::negative()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn insert_assigns_id_and_keeps_content() {
    let (_db, dao) = dao().await;
    let customer = TestCustomerBuilder::new().with_gender(Gender::Male).build();
    dao.insert_customer(customer.clone()).await.unwrap();

    let stored = dao
        .select_all_customers()
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.email == customer.email)
        .unwrap();

    assert!(stored.id.is_some());
    assert_same_content(&stored, &customer);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn insert_without_gender_stores_null() {
    let (_db, dao) = dao().await;
    let customer = TestCustomerBuilder::new().build();
    dao.insert_customer(customer.clone()).await.unwrap();

    let all = dao.select_all_customers().await.unwrap();
    let stored = all.iter().find(|c| c.email == customer.email).unwrap();
    assert_eq!(stored.gender, None);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn duplicate_email_is_a_conflict() {
    let (_db, dao) = dao().await;
    let stored = insert_fresh(&dao).await;
    let clash = TestCustomerBuilder::new().with_email(stored.email.clone()).build();

    let err = dao.insert_customer(clash).await.unwrap_err();

    assert!(matches!(err, PortError::Conflict { .. }));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn update_name_only() {
    let (_db, dao) = dao().await;
    let stored = insert_fresh(&dao).await;
    let id = stored.id.unwrap();

    let mut update = CustomerUpdate::new(id);
    update.name = Some("Faa".to_string());
    dao.update_person(update).await.unwrap();

    let actual = dao.select_customer_by_id(id).await.unwrap().unwrap();
    assert_eq!(actual.name, "Faa");
    assert_eq!(actual.email, stored.email);
    assert_eq!(actual.age, stored.age);
    assert_eq!(actual.gender, stored.gender);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn update_email_only() {
    let (_db, dao) = dao().await;
    let stored = insert_fresh(&dao).await;
    let id = stored.id.unwrap();
    let new_email = StringFixtures::unique_email("new");

    let mut update = CustomerUpdate::new(id);
    update.email = Some(new_email.clone());
    dao.update_person(update).await.unwrap();

    let actual = dao.select_customer_by_id(id).await.unwrap().unwrap();
    assert_eq!(actual.email, new_email);
    assert_eq!(actual.name, stored.name);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn update_all_properties() {
    let (_db, dao) = dao().await;
    let stored = insert_fresh(&dao).await;
    let id = stored.id.unwrap();
    let expected = Customer::new("Bar", StringFixtures::unique_email("bar"), 55, Some(Gender::Male)).with_id(id);

    let mut update = CustomerUpdate::new(id);
    update.name = Some(expected.name.clone());
    update.email = Some(expected.email.clone());
    update.age = Some(expected.age);
    update.gender = expected.gender;
    dao.update_person(update).await.unwrap();

    assert_eq!(dao.select_customer_by_id(id).await.unwrap(), Some(expected));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn update_onto_taken_email_is_a_conflict() {
    let (_db, dao) = dao().await;
    let first = insert_fresh(&dao).await;
    let second = insert_fresh(&dao).await;
    let id = second.id.unwrap();

    let mut update = CustomerUpdate::new(id);
    update.email = Some(first.email.clone());
    let err = dao.update_person(update).await.unwrap_err();

    assert!(matches!(err, PortError::Conflict { .. }));
    assert_eq!(dao.select_customer_by_id(id).await.unwrap(), Some(second));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn empty_update_changes_nothing() {
    let (_db, dao) = dao().await;
    let stored = insert_fresh(&dao).await;
    let id = stored.id.unwrap();

    dao.update_person(CustomerUpdate::new(id)).await.unwrap();

    assert_eq!(dao.select_customer_by_id(id).await.unwrap(), Some(stored));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn delete_person_by_id() {
    let (_db, dao) = dao().await;
    let id = insert_fresh(&dao).await.id.unwrap();

    dao.delete_person_by_id(id).await.unwrap();

    assert!(dao.select_customer_by_id(id).await.unwrap().is_none());
    assert!(!dao.exists_person_with_id(id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn exists_probes() {
    let (_db, dao) = dao().await;
    let stored = insert_fresh(&dao).await;

    assert!(dao.exists_person_with_email(&stored.email).await.unwrap());
    assert!(dao.exists_person_with_id(stored.id.unwrap()).await.unwrap());
    assert!(!dao
        .exists_person_with_email(&StringFixtures::unique_email("nobody"))
        .await
        .unwrap());
    assert!(!dao.exists_person_with_id(CustomerId::new(-1)).await.unwrap());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn health_check_reports_healthy() {
    let (_db, dao) = dao().await;
    assert!(dao.health_check().await.is_operational());
}
