//! Row Types
//!
//! One struct per persisted table, plus the joined view used by
//! "view all employees". Conversions from `tokio_postgres::Row` are fallible
//! so a schema mismatch surfaces as a `QueryFailed` instead of a panic.

use tokio_postgres::Row;

use crate::error::{Result, RosterError};
use crate::output::Tabular;

/// A row of the `department` table
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

impl Department {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self { id: get(row, "id")?, name: get(row, "name")? })
    }
}

/// A row of the `role` table
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub title: String,
    pub salary: f64,
    pub department_id: i32,
}

impl Role {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: get(row, "id")?,
            title: get(row, "title")?,
            salary: get(row, "salary")?,
            department_id: get(row, "department_id")?,
        })
    }
}

/// A row of the `employee` table
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role_id: Option<i32>,
    pub manager_id: Option<i32>,
}

impl Employee {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: get(row, "id")?,
            first_name: get(row, "first_name")?,
            last_name: get(row, "last_name")?,
            role_id: get(row, "role_id")?,
            manager_id: get(row, "manager_id")?,
        })
    }

    /// "First Last", as shown in manager selection lists
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One employee joined with role, department, and manager
///
/// Left joins throughout: an employee with a missing role, department, or
/// manager still appears, with the derived fields absent.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetail {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub manager: Option<String>,
}

impl EmployeeDetail {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: get(row, "id")?,
            first_name: get(row, "first_name")?,
            last_name: get(row, "last_name")?,
            title: get(row, "title")?,
            department: get(row, "department")?,
            salary: get(row, "salary")?,
            manager: get(row, "manager")?,
        })
    }
}

/// Fetch a column by name, mapping driver errors to `QueryFailed`
fn get<'a, T: tokio_postgres::types::FromSql<'a>>(row: &'a Row, column: &str) -> Result<T> {
    row.try_get(column)
        .map_err(|e| RosterError::query_failed(format!("Failed to read column '{column}': {e}")))
}

fn cell_opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl Tabular for Department {
    const HEADERS: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Tabular for Role {
    const HEADERS: &'static [&'static str] = &["id", "title", "salary", "department_id"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.salary.to_string(),
            self.department_id.to_string(),
        ]
    }
}

impl Tabular for Employee {
    const HEADERS: &'static [&'static str] =
        &["id", "first_name", "last_name", "role_id", "manager_id"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.role_id.map(|v| v.to_string()).unwrap_or_default(),
            self.manager_id.map(|v| v.to_string()).unwrap_or_default(),
        ]
    }
}

impl Tabular for EmployeeDetail {
    const HEADERS: &'static [&'static str] =
        &["id", "first_name", "last_name", "title", "department", "salary", "manager"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            cell_opt_text(&self.title),
            cell_opt_text(&self.department),
            self.salary.map(|v| v.to_string()).unwrap_or_default(),
            cell_opt_text(&self.manager),
        ]
    }
}
