/// Top-level resolution: the command registry, global flags and the
/// process driver.
use tracing::debug;

use crate::command::{CommandSpec, RegisteredCommand};
use crate::errors::CliError;
use crate::invocation::RawInvocation;
use crate::options::{OptionSpec, global_options, parse_options};
use crate::render::{
    Console, StdoutConsole, help,
    messages::{CliMsg, DescriptionMsg, ErrorMsg},
};
use crate::suggest;

/// What a resolution decided, short of touching the process.
///
/// All `process::exit` calls live in [`Dispatcher::run`]; everything
/// below it returns an `Outcome` instead, so resolution stays pure and
/// unit-testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Resolution ran to completion; the process ends normally.
    Continue,
    /// Resolution decided the process must end with this status code.
    Exit(i32),
}

impl Outcome {
    /// The process status code this outcome maps to.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Continue => 0,
            Self::Exit(code) => code,
        }
    }
}

/// The application-level resolver.
///
/// Owns the command registry, the global option set and the app
/// metadata. Built once at process start, read-only during resolution.
///
/// ```rust,ignore
/// let mut cli = Dispatcher::new("noodle", "0.1.0").doc("A demo CLI.");
/// cli.register([greet, status])?;
/// cli.run();
/// ```
pub struct Dispatcher {
    app_name: String,
    version: String,
    doc: Option<String>,
    cover: Option<String>,
    default_options: Vec<OptionSpec>,
    user_options: Vec<OptionSpec>,
    commands: Vec<RegisteredCommand>,
}

impl Dispatcher {
    /// A dispatcher with the default global options (`-h`, `-v`) and an
    /// empty registry.
    #[must_use]
    pub fn new(app_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            version: version.into(),
            doc: None,
            cover: None,
            default_options: global_options(),
            user_options: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Application description shown at the top of main help.
    #[must_use]
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Cover text printed above the main help screen.
    #[must_use]
    pub fn cover(mut self, text: impl Into<String>) -> Self {
        self.cover = Some(text.into());
        self
    }

    /// Declare dispatcher-level options.
    ///
    /// These render in the main help below the defaults. They carry no
    /// dispatch behavior of their own: only `-h` and `-v` are acted on.
    ///
    /// # Errors
    ///
    /// `CliError::Configuration` when the declared set is malformed.
    pub fn options(mut self, declared: &[(&str, &str)]) -> Result<Self, CliError> {
        self.user_options = parse_options(declared)?;
        Ok(self)
    }

    /// Register commands into the registry.
    ///
    /// Set-once per name: the first registration wins and later
    /// registrations under the same name are ignored. Declared options
    /// are validated here, fail-fast.
    ///
    /// # Errors
    ///
    /// `CliError::Configuration` when an accepted command declares a
    /// malformed option set.
    pub fn register<I>(&mut self, commands: I) -> Result<(), CliError>
    where
        I: IntoIterator<Item = CommandSpec>,
    {
        for spec in commands {
            if self.find(spec.name()).is_some() {
                debug!(command = %spec.name(), "name already registered, keeping first");
                continue;
            }
            self.commands.push(RegisteredCommand::from_spec(spec)?);
        }
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&RegisteredCommand> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Resolve one invocation. Priority: command, then flags, then the
    /// main help.
    pub fn resolve(&self, inv: &RawInvocation, console: &mut dyn Console) -> Outcome {
        if let Some(command) = &inv.command {
            return match self.find(command) {
                Some(cmd) => {
                    debug!(command = %command, "dispatching to registered command");
                    cmd.resolve(inv, console)
                }
                None => {
                    debug!(command = %command, "unknown command");
                    console.line(&ErrorMsg::wrong_command(command));
                    let names = self.commands.iter().map(|c| c.name.as_str());
                    if let Some(candidate) = suggest::closest_command(names, command) {
                        console.line(&ErrorMsg::suggestion(&candidate));
                    }
                    let err = CliError::UnknownCommand {
                        command: command.clone(),
                    };
                    Outcome::Exit(err.exit_code())
                }
            };
        }

        if inv.has_flags() {
            return self.resolve_flag(&inv.flags, console);
        }

        console.line(&self.main_help());
        Outcome::Exit(0)
    }

    /// Route a flag-only invocation through the global option set.
    /// Only the first unrecognized flag is reported.
    fn resolve_flag(&self, flags: &[String], console: &mut dyn Console) -> Outcome {
        if flags.iter().any(|f| f == "-h" || f == "--help") {
            console.line(&self.main_help());
            return Outcome::Exit(0);
        }

        if flags.iter().any(|f| f == "-v" || f == "--version") {
            console.line(&CliMsg::version(&self.app_name, &self.version));
            return Outcome::Exit(0);
        }

        debug!(flag = %flags[0], "unrecognized global flag");
        console.line(&ErrorMsg::wrong_option(&flags[0]));
        let err = CliError::UnknownOption {
            option: flags[0].clone(),
        };
        Outcome::Exit(err.exit_code())
    }

    /// Assemble the main help screen from the current registry state.
    fn main_help(&self) -> String {
        let description = self
            .doc
            .clone()
            .unwrap_or_else(DescriptionMsg::no_description);
        let commands: Vec<(String, String)> = self
            .commands
            .iter()
            .map(|c| (c.name.clone(), c.one_line_doc()))
            .collect();
        let body = help::master_help(
            &description,
            &self.app_name,
            &commands,
            &self.default_options,
            &self.user_options,
        );
        match &self.cover {
            Some(cover) => format!("{cover}\n{body}"),
            None => body,
        }
    }

    /// Resolve the current process invocation and terminate.
    ///
    /// The single place that calls `process::exit`.
    pub fn run(&self) -> ! {
        let inv = RawInvocation::from_env();
        let mut console = StdoutConsole;
        let outcome = self.resolve(&inv, &mut console);
        std::process::exit(outcome.code())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::render::BufferConsole;

    fn inv(args: &[&str]) -> RawInvocation {
        RawInvocation::from_args(args.iter().copied())
    }

    fn demo() -> Dispatcher {
        let mut cli = Dispatcher::new("noodle", "0.1.0").doc("A demo CLI.");
        cli.register([
            CommandSpec::new("greet")
                .doc("Greet someone")
                .argument("name", "who to greet")
                .handler(|_| Ok(())),
            CommandSpec::new("status")
                .doc("Show status")
                .handler(|_| Ok(())),
        ])
        .unwrap();
        cli
    }

    #[test]
    fn test_no_input_renders_main_help() {
        let cli = demo();
        let mut console = BufferConsole::new();
        let outcome = cli.resolve(&inv(&[]), &mut console);
        assert_eq!(outcome, Outcome::Exit(0));
        let help = &console.lines()[0];
        assert!(help.contains("A demo CLI."));
        assert!(help.contains("greet"));
        assert!(help.contains("Show status"));
    }

    #[test]
    fn test_help_flag_renders_main_help() {
        let cli = demo();
        let mut console = BufferConsole::new();
        let outcome = cli.resolve(&inv(&["-h"]), &mut console);
        assert_eq!(outcome, Outcome::Exit(0));
        assert!(console.lines()[0].contains("USAGE"));
    }

    #[test]
    fn test_version_flag_prints_name_and_version() {
        let cli = demo();
        let mut console = BufferConsole::new();
        let outcome = cli.resolve(&inv(&["--version"]), &mut console);
        assert_eq!(outcome, Outcome::Exit(0));
        assert_eq!(console.lines(), ["noodle 0.1.0"]);
    }

    #[test]
    fn test_unknown_flag_reports_first_only() {
        let cli = demo();
        let mut console = BufferConsole::new();
        let outcome = cli.resolve(&inv(&["--bogus", "--worse"]), &mut console);
        assert_eq!(outcome, Outcome::Exit(2));
        assert_eq!(console.lines().len(), 1);
        assert!(console.lines()[0].contains("'--bogus'"));
    }

    #[test]
    fn test_unknown_command_reports_the_token() {
        let cli = demo();
        let mut console = BufferConsole::new();
        let outcome = cli.resolve(&inv(&["frobnicate"]), &mut console);
        assert_eq!(outcome, Outcome::Exit(2));
        assert!(console.lines()[0].contains("'frobnicate'"));
    }

    #[test]
    fn test_near_miss_command_gets_a_suggestion() {
        let cli = demo();
        let mut console = BufferConsole::new();
        let outcome = cli.resolve(&inv(&["gret"]), &mut console);
        assert_eq!(outcome, Outcome::Exit(2));
        assert!(console.lines()[1].contains("'greet'"));
    }

    #[test]
    fn test_command_dispatch_reaches_the_handler() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let mut cli = Dispatcher::new("noodle", "0.1.0");
        cli.register([CommandSpec::new("greet")
            .argument("name", "who to greet")
            .handler(move |ctx| {
                *sink.borrow_mut() = ctx.argument().map(str::to_owned);
                Ok(())
            })])
            .unwrap();

        let outcome = cli.resolve(&inv(&["greet", "alice"]), &mut BufferConsole::new());
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(*seen.borrow(), Some("alice".to_owned()));
    }

    #[test]
    fn test_first_registration_wins() {
        let winner = Rc::new(RefCell::new(""));
        let first = Rc::clone(&winner);
        let second = Rc::clone(&winner);
        let mut cli = Dispatcher::new("noodle", "0.1.0");
        cli.register([
            CommandSpec::new("greet").handler(move |_| {
                *first.borrow_mut() = "first";
                Ok(())
            }),
            CommandSpec::new("greet").handler(move |_| {
                *second.borrow_mut() = "second";
                Ok(())
            }),
        ])
        .unwrap();

        cli.resolve(&inv(&["greet"]), &mut BufferConsole::new());
        assert_eq!(*winner.borrow(), "first");
    }

    #[test]
    fn test_registration_order_drives_help_listing() {
        let cli = demo();
        let mut console = BufferConsole::new();
        cli.resolve(&inv(&[]), &mut console);
        let help = &console.lines()[0];
        let greet_at = help.find("greet").unwrap();
        let status_at = help.find("status").unwrap();
        assert!(greet_at < status_at);
    }

    #[test]
    fn test_main_help_is_idempotent() {
        let cli = demo();
        let mut first = BufferConsole::new();
        let mut second = BufferConsole::new();
        cli.resolve(&inv(&[]), &mut first);
        cli.resolve(&inv(&[]), &mut second);
        assert_eq!(first.lines(), second.lines());
    }

    #[test]
    fn test_cover_text_precedes_main_help() {
        let cli = Dispatcher::new("noodle", "0.1.0").cover("~ noodle ~");
        let mut console = BufferConsole::new();
        cli.resolve(&inv(&[]), &mut console);
        assert!(console.lines()[0].starts_with("~ noodle ~\n"));
    }

    #[test]
    fn test_user_options_render_in_main_help() {
        let cli = Dispatcher::new("noodle", "0.1.0")
            .options(&[("debug", "Print timing information")])
            .unwrap();
        let mut console = BufferConsole::new();
        cli.resolve(&inv(&[]), &mut console);
        assert!(console.lines()[0].contains("-d, --debug"));
    }

    #[test]
    fn test_malformed_user_options_fail_fast() {
        let result = Dispatcher::new("noodle", "0.1.0").options(&[]);
        assert!(matches!(result, Err(CliError::Configuration { .. })));
    }
}
