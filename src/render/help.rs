//! Help text assembly for the application and for single commands.
//!
//! Pure formatting: identical inputs produce byte-identical output.

use comfy_table::{Table, presets::NOTHING};

use super::messages::CliMsg;
use super::style;
use crate::options::OptionSpec;

/// Section title on its own line, bold cyan, preceded by a blank line.
fn section(title: &str) -> String {
    format!("\n{}\n", style::bold(&style::cyan(title)))
}

/// Two-column borderless table, rendered to a string.
fn columns(rows: &[[String; 2]]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    for row in rows {
        table.add_row(row.clone());
    }
    table.to_string()
}

fn option_rows(options: &[OptionSpec]) -> Vec<[String; 2]> {
    options
        .iter()
        .map(|o| {
            [
                format!("{}, {}", o.short_flag, o.long_flag),
                o.description.clone(),
            ]
        })
        .collect()
}

/// Assemble the main (application-level) help screen.
///
/// Pulls the application description, the usage line, the global
/// options, any user-declared dispatcher options, and the registered
/// commands in insertion order.
#[must_use]
pub fn master_help(
    description: &str,
    app_name: &str,
    commands: &[(String, String)],
    default_options: &[OptionSpec],
    user_options: &[OptionSpec],
) -> String {
    let mut help = String::new();
    help.push_str(description);
    help.push('\n');

    help.push_str(&section("USAGE"));
    help.push_str(&CliMsg::usage(app_name));
    help.push('\n');

    help.push_str(&section("OPTIONS"));
    let mut rows = option_rows(default_options);
    rows.extend(option_rows(user_options));
    help.push_str(&columns(&rows));
    help.push('\n');

    if !commands.is_empty() {
        help.push_str(&section("COMMANDS"));
        let rows: Vec<[String; 2]> = commands
            .iter()
            .map(|(name, doc)| [name.clone(), doc.clone()])
            .collect();
        help.push_str(&columns(&rows));
        help.push('\n');
    }

    help
}

/// Assemble the help screen for one command.
///
/// Pulls the command description, its usage line, the default
/// command-scoped `-h/--help` option, the declared options, and the
/// declared argument (name + help text) when present.
#[must_use]
pub fn command_help(
    description: &str,
    command_name: &str,
    argument: Option<(&str, &str)>,
    default_options: &[OptionSpec],
    declared_options: &[OptionSpec],
) -> String {
    let mut help = String::new();
    help.push_str(description);
    help.push('\n');

    help.push_str(&section("USAGE"));
    help.push_str(&CliMsg::command_usage(command_name));
    help.push('\n');

    help.push_str(&section("OPTIONS"));
    let mut rows = option_rows(default_options);
    rows.extend(option_rows(declared_options));
    help.push_str(&columns(&rows));
    help.push('\n');

    if let Some((name, about)) = argument {
        help.push_str(&section("ARGUMENTS"));
        help.push_str(&columns(&[[name.to_owned(), about.to_owned()]]));
        help.push('\n');
    }

    help
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<OptionSpec> {
        vec![
            OptionSpec::derive("version", "Display this application version").unwrap(),
            OptionSpec::derive("help", "Display this help message").unwrap(),
        ]
    }

    #[test]
    fn test_master_help_lists_sections_and_commands() {
        let commands = vec![
            ("greet".to_owned(), "Greet someone".to_owned()),
            ("status".to_owned(), "Show status".to_owned()),
        ];
        let help = master_help("A demo CLI.", "demo", &commands, &opts(), &[]);
        assert!(help.starts_with("A demo CLI.\n"));
        assert!(help.contains("USAGE"));
        assert!(help.contains("demo <command> [options] [arguments]"));
        assert!(help.contains("OPTIONS"));
        assert!(help.contains("-v, --version"));
        assert!(help.contains("-h, --help"));
        assert!(help.contains("COMMANDS"));
        assert!(help.contains("greet"));
        assert!(help.contains("Show status"));
    }

    #[test]
    fn test_master_help_omits_empty_command_section() {
        let help = master_help("A demo CLI.", "demo", &[], &opts(), &[]);
        assert!(!help.contains("COMMANDS"));
    }

    #[test]
    fn test_master_help_is_deterministic() {
        let commands = vec![("greet".to_owned(), "Greet someone".to_owned())];
        let first = master_help("A demo CLI.", "demo", &commands, &opts(), &[]);
        let second = master_help("A demo CLI.", "demo", &commands, &opts(), &[]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_command_help_includes_argument_section() {
        let declared = vec![OptionSpec::derive("loud", "Shout the greeting").unwrap()];
        let defaults = vec![OptionSpec::derive("help", "Display this help message").unwrap()];
        let help = command_help(
            "Greet someone.",
            "greet",
            Some(("name", "who to greet")),
            &defaults,
            &declared,
        );
        assert!(help.contains("greet [options] [arguments]"));
        assert!(help.contains("-l, --loud"));
        assert!(help.contains("ARGUMENTS"));
        assert!(help.contains("who to greet"));
    }

    #[test]
    fn test_command_help_without_argument_has_no_argument_section() {
        let defaults = vec![OptionSpec::derive("help", "Display this help message").unwrap()];
        let help = command_help("Ping.", "ping", None, &defaults, &[]);
        assert!(!help.contains("ARGUMENTS"));
    }
}
