pub mod records;
pub mod register;
pub mod students;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use std::collections::HashMap;

use secrecy::SecretString;

use crate::config::AppConfig;

#[derive(Debug)]
pub enum Action {
    Dashboard,
    StudentList,
    StudentShow {
        id: i64,
    },
    StudentAdd {
        record: HashMap<String, String>,
    },
    StudentRemove {
        id: i64,
    },
    Marks {
        student_id: Option<i64>,
    },
    Attendance {
        student_id: Option<i64>,
        percentage: bool,
    },
    Subjects {
        course: Option<String>,
    },
    Register(register::Args),
    Login {
        email_or_roll: String,
        password: SecretString,
    },
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute(&config).await`.
    // When adding new actions, extend the match in `run::execute`.
    /// Execute the action against the configured backend.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self, config: &AppConfig) -> anyhow::Result<()> {
        run::execute(self, config).await
    }
}
