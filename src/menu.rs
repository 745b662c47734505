//! Menu Loop
//!
//! The single control loop of the program: present the top-level choices,
//! dispatch to one of the seven operations, print the result, and return to
//! the top. Looping is an explicit `loop`, not recursion, so a long
//! interactive session never grows the call stack.
//!
//! # Error policy
//! Any failure inside an operation, lookup queries included, is printed and
//! the loop returns to the main menu. Nothing is retried. Only a failed
//! main-menu prompt escapes the loop.

use crate::error::Result;
use crate::output::print_table;
use crate::prompt::{pick, Choice, Prompter};
use crate::store::StaffStore;

/// The eight top-level choices, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 8] = [
        Self::ViewDepartments,
        Self::ViewRoles,
        Self::ViewEmployees,
        Self::AddDepartment,
        Self::AddRole,
        Self::AddEmployee,
        Self::UpdateEmployeeRole,
        Self::Exit,
    ];

    /// Menu label, shown verbatim
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViewDepartments => "view all departments",
            Self::ViewRoles => "view all roles",
            Self::ViewEmployees => "view all employees",
            Self::AddDepartment => "add a department",
            Self::AddRole => "add a role",
            Self::AddEmployee => "add an employee",
            Self::UpdateEmployeeRole => "update employee role",
            Self::Exit => "exit",
        }
    }

    /// Map a selection index back to a choice; anything unmatched exits
    pub fn from_index(idx: usize) -> Self {
        Self::ALL.get(idx).copied().unwrap_or(Self::Exit)
    }
}

/// Run the menu loop until the user exits
///
/// Returns `Ok(())` on a normal exit. Errors from individual operations are
/// printed and swallowed; only a main-menu prompt failure propagates.
pub async fn run<S: StaffStore>(store: &S, prompter: &dyn Prompter) -> Result<()> {
    let labels: Vec<String> = MenuChoice::ALL.iter().map(|c| c.label().to_string()).collect();

    loop {
        let idx = prompter.select("What would you like to do?", &labels)?;
        let choice = MenuChoice::from_index(idx);

        if choice == MenuChoice::Exit {
            println!("Goodbye");
            return Ok(());
        }

        if let Err(err) = dispatch(store, prompter, choice).await {
            tracing::error!(operation = choice.label(), error = %err, "operation failed");
            eprintln!("{err}");
        }
    }
}

/// Run one non-terminal operation end to end
async fn dispatch<S: StaffStore>(
    store: &S,
    prompter: &dyn Prompter,
    choice: MenuChoice,
) -> Result<()> {
    match choice {
        MenuChoice::ViewDepartments => {
            print_table(&store.departments().await?);
        }

        MenuChoice::ViewRoles => {
            print_table(&store.roles().await?);
        }

        MenuChoice::ViewEmployees => {
            print_table(&store.employee_details().await?);
        }

        MenuChoice::AddDepartment => {
            let name = prompter.text("What is the name of the department?")?;
            let department = store.add_department(&name).await?;
            print_table(&[department]);
        }

        MenuChoice::AddRole => {
            let departments = store.departments().await?;
            if departments.is_empty() {
                println!("No departments found. Add a department first.");
                return Ok(());
            }

            let title = prompter.text("What is the name of the role?")?;
            let salary = prompter.number("What is the salary of the role?")?;
            let choices: Vec<Choice<i32>> =
                departments.iter().map(|d| Choice::new(d.name.clone(), d.id)).collect();
            let department_id =
                *pick(prompter, "Which department does the role belong to?", &choices)?;

            let role = store.add_role(&title, salary, department_id).await?;
            println!("New role added successfully:");
            print_table(&[role]);
        }

        MenuChoice::AddEmployee => {
            let roles = store.roles().await?;
            if roles.is_empty() {
                println!("No roles found. Add a role first.");
                return Ok(());
            }
            let managers = store.employees().await?;

            let first_name = prompter.text("What is the employee's first name?")?;
            let last_name = prompter.text("What is the employee's last name?")?;

            let role_choices: Vec<Choice<i32>> =
                roles.iter().map(|r| Choice::new(r.title.clone(), r.id)).collect();
            let role_id = *pick(prompter, "What is the employee's role?", &role_choices)?;

            // "None" first, so an employee without a manager is one keystroke
            let mut manager_choices: Vec<Choice<Option<i32>>> = vec![Choice::new("None", None)];
            manager_choices
                .extend(managers.iter().map(|m| Choice::new(m.full_name(), Some(m.id))));
            let manager_id =
                *pick(prompter, "Who is the employee's manager?", &manager_choices)?;

            let employee = store.add_employee(&first_name, &last_name, role_id, manager_id).await?;
            println!("New employee added successfully:");
            print_table(&[employee]);
        }

        MenuChoice::UpdateEmployeeRole => {
            let employees = store.employees().await?;
            if employees.is_empty() {
                println!("No employees found. Add an employee first.");
                return Ok(());
            }
            let roles = store.roles().await?;
            if roles.is_empty() {
                println!("No roles found. Add a role first.");
                return Ok(());
            }

            let employee_choices: Vec<Choice<i32>> =
                employees.iter().map(|e| Choice::new(e.full_name(), e.id)).collect();
            let employee_id = *pick(
                prompter,
                "Which employee's role do you want to update?",
                &employee_choices,
            )?;

            let role_choices: Vec<Choice<i32>> =
                roles.iter().map(|r| Choice::new(r.title.clone(), r.id)).collect();
            let role_id = *pick(
                prompter,
                "Which role do you want to assign the selected employee?",
                &role_choices,
            )?;

            let employee = store.update_employee_role(employee_id, role_id).await?;
            println!("Employee updated successfully:");
            print_table(&[employee]);
        }

        MenuChoice::Exit => unreachable!("exit is handled by the loop"),
    }

    Ok(())
}
