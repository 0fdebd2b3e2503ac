//! Macro-generated test suite for `DataService` contract validation.
//!
//! The `data_service_tests!` macro generates a test module that validates
//! a pair of `DataService<Order>` / `DataService<Employee>` implementations
//! against the full contract: CRUD operations, id assignment, ordering and
//! concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use payroll::storage::InMemoryDataService;
//!
//! data_service_tests!(
//!     orders: InMemoryDataService::<Order>::new(),
//!     employees: InMemoryDataService::<Employee>::new()
//! );
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_assigns_id`: unsaved entity gets a fresh id
//! - `test_create_keeps_preassigned_id`: caller-supplied id is kept
//! - `test_create_duplicate_id_fails`: second insert with the same id errors
//! - `test_get_nonexistent`: get with random UUID returns None
//! - `test_list_empty`: list on empty store returns empty vec
//! - `test_list_in_creation_order`: list returns entities oldest first
//! - `test_update_existing`: replace status, verify persisted
//! - `test_update_nonexistent`: update unknown ID returns Err
//! - `test_delete_existing`: delete then get returns None
//! - `test_delete_nonexistent`: delete unknown ID is Ok
//!
//! ## Employees
//! - `test_employee_roundtrip`: name parts and role survive storage
//!
//! ## Edge Cases
//! - `test_concurrent_access`: parallel creates from spawned tasks

/// Generate a full `DataService` conformance test suite.
///
/// Both factories must be expressions evaluating to a fresh, empty store.
/// They are re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! data_service_tests {
    (orders: $orders:expr, employees: $employees:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use payroll::core::{DataService, Entity};
            use payroll::entities::order::OrderStatus;
            use std::sync::Arc;
            use uuid::Uuid;

            // ==================================================================
            // CRUD — Create
            // ==================================================================

            #[tokio::test]
            async fn test_create_assigns_id() {
                let service = $orders;
                let order = create_test_order("MacBook Pro");
                assert!(order.id.is_none());

                let created = service.create(order).await.unwrap();
                let id = created.id().expect("created order should have an id");
                assert_eq!(created.description, "MacBook Pro");
                assert_eq!(created.status, OrderStatus::InProgress);

                let retrieved = service.get(&id).await.unwrap().unwrap();
                assert_eq!(retrieved.id, Some(id));
                assert_eq!(retrieved.description, "MacBook Pro");
                assert_eq!(retrieved.status, OrderStatus::InProgress);
            }

            #[tokio::test]
            async fn test_create_keeps_preassigned_id() {
                let service = $orders;
                let id = Uuid::new_v4();
                let mut order = create_test_order("iPhone");
                order.assign_id(id);

                let created = service.create(order).await.unwrap();
                assert_eq!(created.id, Some(id));
                assert!(service.get(&id).await.unwrap().is_some());
            }

            #[tokio::test]
            async fn test_create_duplicate_id_fails() {
                let service = $orders;
                let id = Uuid::new_v4();
                let mut first = create_test_order("first");
                first.assign_id(id);
                let mut second = create_test_order("second");
                second.assign_id(id);

                service.create(first).await.unwrap();
                assert!(
                    service.create(second).await.is_err(),
                    "Creating a second entity with the same id should fail"
                );

                let kept = service.get(&id).await.unwrap().unwrap();
                assert_eq!(kept.description, "first");
            }

            // ==================================================================
            // CRUD — Get & List
            // ==================================================================

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $orders;
                let random_id = Uuid::new_v4();

                let result = service.get(&random_id).await.unwrap();
                assert!(
                    result.is_none(),
                    "Getting a nonexistent entity should return None"
                );
            }

            #[tokio::test]
            async fn test_list_empty() {
                let service = $orders;

                let all = service.list().await.unwrap();
                assert!(all.is_empty(), "List on empty store should return empty vec");
            }

            #[tokio::test]
            async fn test_list_in_creation_order() {
                let service = $orders;
                let mut expected_ids: Vec<Uuid> = Vec::new();

                for order in sample_orders(5) {
                    let created = service.create(order).await.unwrap();
                    expected_ids.push(created.id().unwrap());
                }

                let all = service.list().await.unwrap();
                let returned_ids: Vec<Uuid> = all.iter().filter_map(|o| o.id()).collect();
                assert_eq!(returned_ids, expected_ids);
            }

            // ==================================================================
            // CRUD — Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let service = $orders;
                let created = service.create(create_test_order("Book")).await.unwrap();
                let id = created.id().unwrap();

                let mut changed = created.clone();
                changed.complete().unwrap();
                let updated = service.update(&id, changed).await.unwrap();
                assert_eq!(updated.status, OrderStatus::Completed);
                assert_eq!(updated.id, Some(id));

                let retrieved = service.get(&id).await.unwrap().unwrap();
                assert_eq!(retrieved.status, OrderStatus::Completed);
                assert_eq!(retrieved.description, "Book");
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $orders;
                let id = Uuid::new_v4();

                let result = service.update(&id, create_test_order("Ghost")).await;
                assert!(
                    result.is_err(),
                    "Updating a nonexistent entity should return an error"
                );
                assert!(service.get(&id).await.unwrap().is_none());
            }

            // ==================================================================
            // CRUD — Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $orders;
                let created = service.create(create_test_order("ToDelete")).await.unwrap();
                let id = created.id().unwrap();

                service.delete(&id).await.unwrap();
                assert!(service.get(&id).await.unwrap().is_none());
                assert!(service.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let service = $orders;
                service.delete(&Uuid::new_v4()).await.unwrap();
            }

            // ==================================================================
            // Employees
            // ==================================================================

            #[tokio::test]
            async fn test_employee_roundtrip() {
                let service = $employees;
                let created = service
                    .create(create_test_employee("Bilbo", "Baggins", "burglar"))
                    .await
                    .unwrap();
                let id = created.id().unwrap();

                let retrieved = service.get(&id).await.unwrap().unwrap();
                assert_eq!(retrieved.first_name, "Bilbo");
                assert_eq!(retrieved.last_name, "Baggins");
                assert_eq!(retrieved.role, "burglar");
                assert_eq!(retrieved.name(), "Bilbo Baggins");
                assert_eq!(retrieved, created);
            }

            // ==================================================================
            // Edge Cases
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_access() {
                let service = Arc::new($orders);
                let mut handles = Vec::new();

                for i in 0..10 {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move {
                        service
                            .create(create_test_order(&format!("concurrent #{}", i)))
                            .await
                    }));
                }

                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                assert_eq!(service.list().await.unwrap().len(), 10);
            }
        }
    };
}
