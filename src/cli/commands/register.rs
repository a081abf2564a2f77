use clap::{Arg, Command};

pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGIN: &str = "login";

pub const ARG_ROLL_NUMBER: &str = "roll-number";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_EMAIL_OR_ROLL: &str = "email-or-roll";

#[must_use]
pub fn with_commands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Register as a student or reset a password")
                .long_about(
                    "Register as a student or reset a password. Identity is verified by roll \
                     number or email; the roll number wins when both are given. The same flow \
                     serves first-time registration and resets.",
                )
                .arg(
                    Arg::new(ARG_ROLL_NUMBER)
                        .short('r')
                        .long("roll-number")
                        .help("Roll number, e.g. STU0001")
                        .value_name("ROLL"),
                )
                .arg(
                    Arg::new(ARG_EMAIL)
                        .short('e')
                        .long("email")
                        .help("Email address on record")
                        .value_name("EMAIL"),
                )
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .long("password")
                        .help("New password, at least 6 characters")
                        .value_name("PASSWORD")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_CONFIRM_PASSWORD)
                        .long("confirm-password")
                        .help("Repeat the new password")
                        .value_name("PASSWORD")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in to the student portal")
                .arg(
                    Arg::new(ARG_EMAIL_OR_ROLL)
                        .long("email-or-roll")
                        .help("Email address or roll number")
                        .value_name("IDENTIFIER")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .long("password")
                        .help("Portal password")
                        .value_name("PASSWORD")
                        .required(true),
                ),
        )
}
