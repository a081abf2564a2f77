use clap::{Arg, ArgAction, Command, value_parser};

pub const CMD_DASHBOARD: &str = "dashboard";
pub const CMD_MARKS: &str = "marks";
pub const CMD_ATTENDANCE: &str = "attendance";
pub const CMD_SUBJECTS: &str = "subjects";

pub const ARG_STUDENT: &str = "student";
pub const ARG_PERCENTAGE: &str = "percentage";
pub const ARG_COURSE: &str = "course";

fn student_arg() -> Arg {
    Arg::new(ARG_STUDENT)
        .short('s')
        .long("student")
        .help("Only rows for this student id")
        .value_name("ID")
        .value_parser(value_parser!(i64))
}

#[must_use]
pub fn with_commands(command: Command) -> Command {
    command
        .subcommand(Command::new(CMD_DASHBOARD).about("Show aggregate statistics"))
        .subcommand(
            Command::new(CMD_MARKS)
                .about("List exam marks")
                .arg(student_arg()),
        )
        .subcommand(
            Command::new(CMD_ATTENDANCE)
                .about("List attendance records")
                .arg(student_arg())
                .arg(
                    Arg::new(ARG_PERCENTAGE)
                        .long("percentage")
                        .help("Show per-subject attendance percentages instead of rows")
                        .action(ArgAction::SetTrue)
                        .requires(ARG_STUDENT),
                ),
        )
        .subcommand(
            Command::new(CMD_SUBJECTS).about("List the subject catalog").arg(
                Arg::new(ARG_COURSE)
                    .short('c')
                    .long("course")
                    .help("Only subjects for this course")
                    .value_name("COURSE"),
            ),
        )
}
