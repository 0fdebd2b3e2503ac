//! Employee entity

use crate::core::entity::{Entity, entity_eq};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// An employee on the payroll
///
/// Serializes with a derived `name` field (`"<firstName> <lastName>"`)
/// alongside the stored parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl Employee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
        }
    }

    /// `"<firstName> <lastName>"`, separator included even when a part is empty
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Split a full name on its first space
    pub fn set_name(&mut self, name: &str) {
        let (first, last) = name.split_once(' ').unwrap_or((name, ""));
        self.first_name = first.to_string();
        self.last_name = last.to_string();
    }
}

impl Serialize for Employee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.id.is_some() { 5 } else { 4 };
        let mut state = serializer.serialize_struct("Employee", len)?;
        if let Some(id) = &self.id {
            state.serialize_field("id", id)?;
        }
        state.serialize_field("firstName", &self.first_name)?;
        state.serialize_field("lastName", &self.last_name)?;
        state.serialize_field("role", &self.role)?;
        state.serialize_field("name", &self.name())?;
        state.end()
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        entity_eq(self, other, |a, b| {
            a.first_name == b.first_name && a.last_name == b.last_name && a.role == b.role
        })
    }
}

impl Entity for Employee {
    type Id = Uuid;

    fn resource_name() -> &'static str {
        "employees"
    }

    fn resource_name_singular() -> &'static str {
        "employee"
    }

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}
