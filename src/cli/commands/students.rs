use clap::{Arg, Command, value_parser};

pub const CMD_STUDENTS: &str = "students";
pub const CMD_LIST: &str = "list";
pub const CMD_SHOW: &str = "show";
pub const CMD_ADD: &str = "add";
pub const CMD_REMOVE: &str = "remove";

pub const ARG_ID: &str = "id";

/// Form fields accepted by `students add`, in the order the enrollment form
/// shows them. Values are handed to the validation engine as-is, so missing
/// required fields fail validation rather than argument parsing.
pub const FORM_FIELDS: [&str; 7] = ["name", "email", "phone", "course", "gender", "dob", "city"];

#[must_use]
pub fn with_commands(command: Command) -> Command {
    let add = FORM_FIELDS
        .iter()
        .fold(
            Command::new(CMD_ADD).about("Enroll a student and assign a roll number"),
            |cmd, field| {
                cmd.arg(
                    Arg::new(*field)
                        .long(*field)
                        .help(field_help(field))
                        .value_name(field.to_uppercase()),
                )
            },
        );

    command.subcommand(
        Command::new(CMD_STUDENTS)
            .about("Manage student records")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Command::new(CMD_LIST).about("List every student"))
            .subcommand(
                Command::new(CMD_SHOW).about("Show one student").arg(
                    Arg::new(ARG_ID)
                        .help("Student id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                ),
            )
            .subcommand(add)
            .subcommand(
                Command::new(CMD_REMOVE).about("Delete a student").arg(
                    Arg::new(ARG_ID)
                        .help("Student id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                ),
            ),
    )
}

fn field_help(field: &str) -> &'static str {
    match field {
        "name" => "Full name (letters and spaces)",
        "email" => "Email address",
        "phone" => "Phone number, 10-15 digits",
        "course" => "Course name",
        "gender" => "Male, Female, or Other",
        "dob" => "Date of birth, yyyy-mm-dd",
        _ => "City",
    }
}
