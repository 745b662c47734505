//! Roster - Interactive Employee Tracker CLI
//!
//! Roster is a small interactive command-line tool for viewing and mutating a
//! department/role/employee schema in `PostgreSQL`. The whole program is one
//! menu-driven request/response loop: prompt for a choice, run one
//! parameterized SQL statement, print a table, return to the menu.
//!
//! # Core Principles
//! - One long-lived database connection, acquired at startup
//! - Strictly sequential: one statement in flight at a time, auto-committed
//! - Input validated client-side before any statement is issued
//! - Operation failures return to the menu; only startup failures are fatal
//!
//! # Module Organization
//! - [`error`] - Error types and handling
//! - [`config`] - Connection configuration (file, env, CLI flags)
//! - [`model`] - Row types for the three tables and the employee join
//! - [`store`] - `StaffStore` trait and the `PostgreSQL` implementation
//! - [`prompt`] - Interactive prompt seam over `dialoguer`
//! - [`menu`] - The menu loop itself
//! - [`output`] - Table rendering and the startup banner

pub mod config;
pub mod error;
pub mod menu;
pub mod model;
pub mod output;
pub mod prompt;
pub mod store;

// Re-export commonly used types for convenience
pub use config::{ConnectionConfig, Overrides, StoredConfig};
pub use error::{Result, RosterError};
pub use menu::MenuChoice;
pub use model::{Department, Employee, EmployeeDetail, Role};
pub use prompt::{Choice, Prompter, TermPrompter};
pub use store::{PgStore, StaffStore};
