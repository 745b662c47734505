//! Staff Store
//!
//! The eight data operations behind the menu, as a trait so the menu loop can
//! be exercised against an in-memory implementation in tests.
//!
//! `PgStore` is the real implementation: a single long-lived
//! `tokio_postgres::Client` acquired once at startup and shared by reference
//! for the life of the process. Every statement is parameterized and
//! auto-committed individually; there are no transaction boundaries.

use std::future::Future;

use tokio_postgres::NoTls;

use crate::config::ConnectionConfig;
use crate::error::{Result, RosterError};
use crate::model::{Department, Employee, EmployeeDetail, Role};

/// Data operations over the department/role/employee schema
pub trait StaffStore {
    /// All departments, in storage order
    fn departments(&self) -> impl Future<Output = Result<Vec<Department>>> + Send;

    /// All roles, in storage order
    fn roles(&self) -> impl Future<Output = Result<Vec<Role>>> + Send;

    /// All employees as raw rows (used for manager/update selection lists)
    fn employees(&self) -> impl Future<Output = Result<Vec<Employee>>> + Send;

    /// All employees joined with role, department, and manager, ordered by id
    fn employee_details(&self) -> impl Future<Output = Result<Vec<EmployeeDetail>>> + Send;

    /// Insert a department and return the inserted row
    fn add_department(&self, name: &str) -> impl Future<Output = Result<Department>> + Send;

    /// Insert a role and return the inserted row
    fn add_role(
        &self,
        title: &str,
        salary: f64,
        department_id: i32,
    ) -> impl Future<Output = Result<Role>> + Send;

    /// Insert an employee and return the inserted row
    fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
        role_id: i32,
        manager_id: Option<i32>,
    ) -> impl Future<Output = Result<Employee>> + Send;

    /// Change an employee's role reference and return the updated row
    fn update_employee_role(
        &self,
        employee_id: i32,
        role_id: i32,
    ) -> impl Future<Output = Result<Employee>> + Send;
}

/// `PostgreSQL` implementation of [`StaffStore`]
pub struct PgStore {
    client: tokio_postgres::Client,
}

impl PgStore {
    /// Connect to `PostgreSQL` and hold the connection for the process lifetime
    ///
    /// The connection task is spawned onto the runtime; its errors surface as
    /// `QueryFailed` on the next statement rather than being logged here, to
    /// keep credentials out of log output.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let (client, connection) = config.pg_config().connect(NoTls).await.map_err(|e| {
            RosterError::connection_failed(format!("Failed to connect to PostgreSQL: {e}"))
        })?;

        tokio::spawn(async move {
            let _ = connection.await;
        });

        tracing::info!(host = %config.host, database = %config.database, "connected");

        Ok(Self { client })
    }
}

impl StaffStore for PgStore {
    async fn departments(&self) -> Result<Vec<Department>> {
        let rows = self
            .client
            .query("SELECT id, name FROM department", &[])
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to list departments: {e}")))?;

        rows.iter().map(Department::from_row).collect()
    }

    async fn roles(&self) -> Result<Vec<Role>> {
        let rows = self
            .client
            .query("SELECT id, title, salary, department_id FROM role", &[])
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to list roles: {e}")))?;

        rows.iter().map(Role::from_row).collect()
    }

    async fn employees(&self) -> Result<Vec<Employee>> {
        let rows = self
            .client
            .query("SELECT id, first_name, last_name, role_id, manager_id FROM employee", &[])
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to list employees: {e}")))?;

        rows.iter().map(Employee::from_row).collect()
    }

    async fn employee_details(&self) -> Result<Vec<EmployeeDetail>> {
        // || concatenation (not CONCAT) so a missing manager yields NULL,
        // which renders as an empty cell.
        let query = "
            SELECT
                e.id,
                e.first_name,
                e.last_name,
                r.title,
                d.name AS department,
                r.salary,
                m.first_name || ' ' || m.last_name AS manager
            FROM employee e
            LEFT JOIN role r ON e.role_id = r.id
            LEFT JOIN department d ON r.department_id = d.id
            LEFT JOIN employee m ON e.manager_id = m.id
            ORDER BY e.id";

        let rows = self
            .client
            .query(query, &[])
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to list employees: {e}")))?;

        rows.iter().map(EmployeeDetail::from_row).collect()
    }

    async fn add_department(&self, name: &str) -> Result<Department> {
        let row = self
            .client
            .query_one("INSERT INTO department (name) VALUES ($1) RETURNING id, name", &[&name])
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to add department: {e}")))?;

        Department::from_row(&row)
    }

    async fn add_role(&self, title: &str, salary: f64, department_id: i32) -> Result<Role> {
        let row = self
            .client
            .query_one(
                "INSERT INTO role (title, salary, department_id) VALUES ($1, $2, $3)
                 RETURNING id, title, salary, department_id",
                &[&title, &salary, &department_id],
            )
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to add role: {e}")))?;

        Role::from_row(&row)
    }

    async fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
        role_id: i32,
        manager_id: Option<i32>,
    ) -> Result<Employee> {
        let row = self
            .client
            .query_one(
                "INSERT INTO employee (first_name, last_name, role_id, manager_id)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, first_name, last_name, role_id, manager_id",
                &[&first_name, &last_name, &role_id, &manager_id],
            )
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to add employee: {e}")))?;

        Employee::from_row(&row)
    }

    async fn update_employee_role(&self, employee_id: i32, role_id: i32) -> Result<Employee> {
        let row = self
            .client
            .query_one(
                "UPDATE employee SET role_id = $1 WHERE id = $2
                 RETURNING id, first_name, last_name, role_id, manager_id",
                &[&role_id, &employee_id],
            )
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to update employee: {e}")))?;

        Employee::from_row(&row)
    }
}
