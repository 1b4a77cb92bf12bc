//! Literal message text: usage lines, version strings, placeholders and
//! error reports.
//!
//! The resolution engine calls these with the relevant identifiers and
//! treats the return values as opaque formatted text.

use super::style;
use crate::errors::CliError;

/// General CLI strings.
pub struct CliMsg;

impl CliMsg {
    /// The version line: `"{app_name} {version}"`, nothing else.
    #[must_use]
    pub fn version(app_name: &str, version: &str) -> String {
        format!("{app_name} {version}")
    }

    /// The usage line for the whole application.
    #[must_use]
    pub fn usage(app_name: &str) -> String {
        format!("  {app_name} <command> [options] [arguments]")
    }

    /// The usage line for one command.
    #[must_use]
    pub fn command_usage(command_name: &str) -> String {
        format!("  {command_name} [options] [arguments]")
    }
}

/// Placeholders for undocumented applications and commands.
pub struct DescriptionMsg;

impl DescriptionMsg {
    /// Placeholder shown when the application has no doc string.
    #[must_use]
    pub fn no_description() -> String {
        "No description provided.".to_owned()
    }

    /// Placeholder shown when a command has no doc string.
    #[must_use]
    pub fn no_command_description(command_name: &str) -> String {
        format!("No description provided for '{command_name}'.")
    }
}

/// User-facing error reports.
pub struct ErrorMsg;

impl ErrorMsg {
    /// Report an unresolved command token.
    #[must_use]
    pub fn wrong_command(command: &str) -> String {
        Self::render(&CliError::UnknownCommand {
            command: command.to_owned(),
        })
    }

    /// Report an unrecognized flag.
    #[must_use]
    pub fn wrong_option(option: &str) -> String {
        Self::render(&CliError::UnknownOption {
            option: option.to_owned(),
        })
    }

    /// Report a declared argument that was not supplied.
    #[must_use]
    pub fn no_argument(argument: &str) -> String {
        Self::render(&CliError::MissingArgument {
            argument: argument.to_owned(),
        })
    }

    /// Report a positional passed to a command that takes none.
    #[must_use]
    pub fn too_many_arguments(command: &str) -> String {
        Self::render(&CliError::TooManyArguments {
            command: command.to_owned(),
        })
    }

    /// The "did you mean" line appended after `wrong_command` when a
    /// registered name scores close to the unknown token.
    #[must_use]
    pub fn suggestion(candidate: &str) -> String {
        format!("Did you mean '{candidate}'?")
    }

    /// Report a failure from an author-supplied handler.
    #[must_use]
    pub fn handler_failure(err: &anyhow::Error) -> String {
        format!("{} {err:#}", style::red("error:"))
    }

    fn render(err: &CliError) -> String {
        format!("{} {err}", style::red("error:"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_exactly_name_space_version() {
        assert_eq!(CliMsg::version("noodle", "0.1.0"), "noodle 0.1.0");
    }

    #[test]
    fn test_wrong_command_names_the_token() {
        let msg = ErrorMsg::wrong_command("instal");
        assert!(msg.contains("'instal'"));
        assert!(msg.contains("not a registered command"));
    }

    #[test]
    fn test_no_argument_names_the_declared_argument() {
        let msg = ErrorMsg::no_argument("id");
        assert!(msg.contains("'id'"));
    }

    #[test]
    fn test_suggestion_line() {
        assert_eq!(ErrorMsg::suggestion("install"), "Did you mean 'install'?");
    }
}
