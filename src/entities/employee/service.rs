//! Employee CRUD service

use super::model::Employee;
use crate::core::error::{EntityError, PayrollResult, StorageError};
use crate::core::{DataService, Entity};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Client submission for creating or replacing an employee.
///
/// Either `name` or `firstName`/`lastName` may be given; explicit parts win
/// over the split full name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
}

impl EmployeeInput {
    pub fn into_employee(self) -> Employee {
        let mut employee = Employee::new("", "", self.role);
        if let Some(name) = &self.name {
            employee.set_name(name);
        }
        if let Some(first) = self.first_name {
            employee.first_name = first;
        }
        if let Some(last) = self.last_name {
            employee.last_name = last;
        }
        employee
    }
}

/// Whether a replace updated an existing record or created one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replaced {
    Updated,
    Created,
}

#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn DataService<Employee>>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn DataService<Employee>>) -> Self {
        Self { store }
    }

    pub async fn list_employees(&self) -> PayrollResult<Vec<Employee>> {
        self.store
            .list()
            .await
            .map_err(StorageError::operation("list employees"))
    }

    pub async fn get_employee(&self, id: &Uuid) -> PayrollResult<Employee> {
        self.store
            .get(id)
            .await
            .map_err(StorageError::operation("get employee"))?
            .ok_or_else(|| EntityError::not_found(Employee::resource_name_singular(), id).into())
    }

    pub async fn create_employee(&self, input: EmployeeInput) -> PayrollResult<Employee> {
        let employee = self
            .store
            .create(input.into_employee())
            .await
            .map_err(StorageError::operation("create employee"))?;

        tracing::info!(employee_id = ?employee.id, "employee created");
        Ok(employee)
    }

    /// Replace the employee stored under `id`, or create it under that id
    ///
    /// The lookup and the write are separate store calls. When a concurrent
    /// replace creates the same id in between, the create fails on the
    /// duplicate and this falls back to an update.
    pub async fn replace_employee(
        &self,
        id: &Uuid,
        input: EmployeeInput,
    ) -> PayrollResult<(Employee, Replaced)> {
        let mut employee = input.into_employee();
        employee.assign_id(*id);

        let existing = self
            .store
            .get(id)
            .await
            .map_err(StorageError::operation("get employee"))?;

        if existing.is_some() {
            return self.update_existing(id, employee).await;
        }

        match self.store.create(employee.clone()).await {
            Ok(employee) => {
                tracing::info!(employee_id = %id, "employee created by replace");
                Ok((employee, Replaced::Created))
            }
            Err(create_err) => {
                let raced = self
                    .store
                    .get(id)
                    .await
                    .map_err(StorageError::operation("get employee"))?;
                if raced.is_none() {
                    return Err(StorageError::operation("create employee")(create_err));
                }
                tracing::debug!(employee_id = %id, "concurrent create, replacing instead");
                self.update_existing(id, employee).await
            }
        }
    }

    async fn update_existing(
        &self,
        id: &Uuid,
        employee: Employee,
    ) -> PayrollResult<(Employee, Replaced)> {
        let employee = self
            .store
            .update(id, employee)
            .await
            .map_err(StorageError::operation("update employee"))?;
        tracing::info!(employee_id = %id, "employee replaced");
        Ok((employee, Replaced::Updated))
    }

    pub async fn delete_employee(&self, id: &Uuid) -> PayrollResult<()> {
        // Existence check first for a consistent 404
        self.get_employee(id).await?;

        self.store
            .delete(id)
            .await
            .map_err(StorageError::operation("delete employee"))?;

        tracing::info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}
