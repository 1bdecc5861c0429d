//! Employee resource.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use waypost_core::{Page, PageQuery};

use crate::error::Result;
use crate::request::Connection;
use crate::resource::{ResourceClient, ResourceSpec, UpdateStyle};

pub(crate) const SPEC: ResourceSpec = ResourceSpec {
    path: "Employee",
    update_style: UpdateStyle::ByPath,
    status_verb: None,
};

/// A staff record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Backend-assigned identifier.
    pub id: String,

    /// Full name.
    pub name: String,

    /// Owning branch.
    pub branch_id: String,

    /// Job title, when recorded.
    #[serde(default)]
    pub designation: Option<String>,

    /// Contact phone, when recorded.
    #[serde(default)]
    pub phone: Option<String>,

    /// First day of employment, when recorded.
    #[serde(default)]
    pub joined_on: Option<NaiveDate>,
}

/// Fields accepted when creating or updating an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    /// Full name.
    pub name: String,

    /// Owning branch.
    pub branch_id: String,

    /// Job title.
    #[serde(default)]
    pub designation: Option<String>,

    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,

    /// First day of employment.
    #[serde(default)]
    pub joined_on: Option<NaiveDate>,
}

/// Client for the `/Employee` resource.
pub struct Employees<C> {
    inner: ResourceClient<C>,
}

impl<C: Connection> Employees<C> {
    /// Creates the employee client over a shared connection.
    pub fn new(conn: Arc<C>) -> Self {
        Self {
            inner: ResourceClient::new(conn, SPEC),
        }
    }

    /// Creates an employee.
    pub async fn create(&self, draft: &EmployeeDraft) -> Result<Employee> {
        self.inner.create(draft).await
    }

    /// Lists a page of employees. `SearchQuery` narrows by name.
    pub async fn list(&self, page: &PageQuery) -> Result<Page<Employee>> {
        self.inner.list(page).await
    }

    /// Fetches one employee.
    pub async fn get(&self, id: &str) -> Result<Employee> {
        self.inner.get(id).await
    }

    /// Updates an employee.
    pub async fn update(&self, id: &str, draft: &EmployeeDraft) -> Result<Employee> {
        self.inner.update(id, draft).await
    }

    /// Deletes an employee.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_wiring() {
        assert_eq!(SPEC.path, "Employee");
        assert_eq!(SPEC.update_style, UpdateStyle::ByPath);
    }

    #[test]
    fn test_employee_dates_parse_from_wire() {
        let employee: Employee = serde_json::from_str(
            r#"{"id": "e1", "name": "Asif Raza", "branchId": "b1", "joinedOn": "2024-03-11"}"#,
        )
        .expect("employee payload");
        assert_eq!(
            employee.joined_on,
            chrono::NaiveDate::from_ymd_opt(2024, 3, 11)
        );
    }
}
