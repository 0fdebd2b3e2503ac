//! Shared test harness for storage backend testing
//!
//! Provides fixture builders for `Order` and `Employee` and the
//! `data_service_tests!` macro that every backend runs.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

pub mod data_service_tests;

use payroll::entities::employee::Employee;
use payroll::entities::order::{Order, OrderStatus};

/// Unsaved order with the given description
pub fn create_test_order(description: &str) -> Order {
    Order::new(description)
}

/// Unsaved order in an arbitrary status
pub fn create_test_order_with_status(description: &str, status: OrderStatus) -> Order {
    Order::with_status(description, status)
}

/// Unsaved employee
pub fn create_test_employee(first: &str, last: &str, role: &str) -> Employee {
    Employee::new(first, last, role)
}

/// `count` unsaved orders with distinct descriptions
pub fn sample_orders(count: usize) -> Vec<Order> {
    (0..count)
        .map(|i| create_test_order(&format!("order #{}", i)))
        .collect()
}
