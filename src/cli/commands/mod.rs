pub mod logging;
pub mod records;
pub mod register;
pub mod students;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

use crate::config::DEFAULT_API_BASE_URL;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_ADMIN_USERNAME: &str = "admin-username";
pub const ARG_ADMIN_PASSWORD: &str = "admin-password";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("rollcall")
        .about("Student records and registration console")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long("api-url")
                .help("Base URL of the records backend API")
                .default_value(DEFAULT_API_BASE_URL)
                .env("ROLLCALL_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds")
                .default_value("30")
                .env("ROLLCALL_TIMEOUT")
                .value_parser(clap::value_parser!(u64))
                .global(true),
        )
        .arg(
            Arg::new(ARG_ADMIN_USERNAME)
                .long("admin-username")
                .help("Username for the admin console sign-in")
                .default_value("admin")
                .env("ROLLCALL_ADMIN_USERNAME")
                .global(true),
        )
        .arg(
            Arg::new(ARG_ADMIN_PASSWORD)
                .long("admin-password")
                .help("Password for the admin console sign-in")
                .default_value("admin123")
                .env("ROLLCALL_ADMIN_PASSWORD")
                .global(true),
        );

    let command = students::with_commands(command);
    let command = records::with_commands(command);
    let command = register::with_commands(command);
    logging::with_args(command)
}
