/// Command declaration and per-invocation resolution.
///
/// Authors declare commands with the [`CommandSpec`] builder and hand
/// them to [`Dispatcher::register`](crate::Dispatcher::register). At
/// registration the declared options are validated and the spec is
/// frozen into its registered form; from then on, resolution for one
/// invocation validates the passed flags against the declared option
/// set, checks the argument contract, and invokes the handler.
use tracing::debug;

use crate::dispatcher::Outcome;
use crate::errors::CliError;
use crate::invocation::RawInvocation;
use crate::options::{OptionSpec, help_option, parse_options};
use crate::render::{
    Console, help,
    messages::{DescriptionMsg, ErrorMsg},
};

/// The callable a command runs when it resolves successfully.
pub type HandlerFn = Box<dyn Fn(&CommandContext<'_>) -> anyhow::Result<()>>;

/// An author-declared command, before registration.
///
/// ```rust,ignore
/// let greet = CommandSpec::new("greet")
///     .doc("Greet someone")
///     .argument("name", "who to greet")
///     .option("loud", "Shout the greeting")
///     .handler(|ctx| {
///         println!("hello, {}", ctx.argument().unwrap_or("world"));
///         Ok(())
///     });
/// ```
pub struct CommandSpec {
    name: String,
    doc: Option<String>,
    argument: Option<(String, String)>,
    options: Vec<(String, String)>,
    handler: Option<HandlerFn>,
}

impl CommandSpec {
    /// Start declaring a command with the given invocation name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            argument: None,
            options: Vec::new(),
            handler: None,
        }
    }

    /// One-line description shown in help listings.
    #[must_use]
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Declare the command's required positional argument.
    ///
    /// At most one argument is supported; a later call replaces an
    /// earlier one.
    #[must_use]
    pub fn argument(mut self, name: impl Into<String>, help: impl Into<String>) -> Self {
        self.argument = Some((name.into(), help.into()));
        self
    }

    /// Declare a boolean option. Short/long flags are derived from the
    /// name. Repeatable; declaration order drives help rendering.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>, help: impl Into<String>) -> Self {
        self.options.push((name.into(), help.into()));
        self
    }

    /// The behavior to run when the command resolves.
    #[must_use]
    pub fn handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&CommandContext<'_>) -> anyhow::Result<()> + 'static,
    {
        self.handler = Some(Box::new(f));
        self
    }

    /// The declared invocation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Resolved view of the invocation, handed to handlers.
pub struct CommandContext<'a> {
    options: &'a [OptionSpec],
    flags: &'a [String],
    argument: Option<&'a str>,
}

impl CommandContext<'_> {
    /// The bound positional argument, when the command declares one.
    #[must_use]
    pub fn argument(&self) -> Option<&str> {
        self.argument
    }

    /// Whether the named declared option's short or long flag appears
    /// among the invocation's flags.
    #[must_use]
    pub fn option(&self, name: &str) -> bool {
        self.options
            .iter()
            .find(|o| o.name == name)
            .is_some_and(|o| self.flags.iter().any(|f| o.matches(f)))
    }
}

/// A command after registration: options parsed, contract frozen.
pub(crate) struct RegisteredCommand {
    pub(crate) name: String,
    doc: Option<String>,
    argument: Option<(String, String)>,
    options: Vec<OptionSpec>,
    handler: Option<HandlerFn>,
}

impl RegisteredCommand {
    /// Validate a declared spec into its registered form.
    ///
    /// # Errors
    ///
    /// `CliError::Configuration` when the declared options are
    /// malformed (empty name, derived flag collision).
    pub(crate) fn from_spec(spec: CommandSpec) -> Result<Self, CliError> {
        let options = if spec.options.is_empty() {
            Vec::new()
        } else {
            let declared: Vec<(&str, &str)> = spec
                .options
                .iter()
                .map(|(name, help)| (name.as_str(), help.as_str()))
                .collect();
            parse_options(&declared)?
        };

        Ok(Self {
            name: spec.name,
            doc: spec.doc,
            argument: spec.argument,
            options,
            handler: spec.handler,
        })
    }

    /// The line this command contributes to the main help listing.
    pub(crate) fn one_line_doc(&self) -> String {
        match &self.doc {
            Some(doc) => doc.lines().next().unwrap_or_default().to_owned(),
            None => DescriptionMsg::no_command_description(&self.name),
        }
    }

    /// Resolve one invocation against this command.
    ///
    /// # Panics
    ///
    /// Panics when the command was registered without a handler and a
    /// resolution path reaches invocation — a programming error in the
    /// application, not user input.
    pub(crate) fn resolve(&self, inv: &RawInvocation, console: &mut dyn Console) -> Outcome {
        if inv.has_flags() {
            if let Some(outcome) = self.check_options(&inv.flags, console) {
                return outcome;
            }
        }
        self.resolve_argument(inv, console)
    }

    /// Validate the passed flags against the declared option set.
    ///
    /// `-h`/`--help` wins over every other check. Otherwise the check
    /// passes as soon as any declared option's short or long form is
    /// present; only the first unrecognized flag is reported.
    fn check_options(&self, flags: &[String], console: &mut dyn Console) -> Option<Outcome> {
        if flags.iter().any(|f| f == "-h" || f == "--help") {
            console.line(&self.help());
            return Some(Outcome::Exit(0));
        }

        let recognized = flags
            .iter()
            .any(|f| self.options.iter().any(|o| o.matches(f)));
        if recognized {
            debug!(command = %self.name, "declared option matched");
            return None;
        }

        let err = CliError::UnknownOption {
            option: flags[0].clone(),
        };
        debug!(command = %self.name, flag = %flags[0], "unrecognized option");
        console.line(&ErrorMsg::wrong_option(&flags[0]));
        Some(Outcome::Exit(err.exit_code()))
    }

    /// Enforce the argument contract and invoke the handler.
    ///
    /// Only the first positional is bound; multi-value arguments are a
    /// documented limitation. Contract violations report and return
    /// normally — they never hard-exit.
    fn resolve_argument(&self, inv: &RawInvocation, console: &mut dyn Console) -> Outcome {
        match (&self.argument, inv.positionals.first()) {
            (Some(_), Some(value)) => self.invoke(inv, Some(value), console),
            (Some((name, _)), None) => {
                debug!(command = %self.name, argument = %name, "required argument missing");
                console.line(&ErrorMsg::no_argument(name));
                Outcome::Continue
            }
            (None, Some(_)) => {
                debug!(command = %self.name, "unexpected positional");
                console.line(&ErrorMsg::too_many_arguments(&self.name));
                Outcome::Continue
            }
            (None, None) => self.invoke(inv, None, console),
        }
    }

    fn invoke(
        &self,
        inv: &RawInvocation,
        argument: Option<&str>,
        console: &mut dyn Console,
    ) -> Outcome {
        let Some(handler) = &self.handler else {
            panic!("command '{}' is registered without a handler", self.name);
        };

        let ctx = CommandContext {
            options: &self.options,
            flags: &inv.flags,
            argument,
        };
        debug!(command = %self.name, argument = ?argument, "invoking handler");
        match handler(&ctx) {
            Ok(()) => Outcome::Continue,
            Err(err) => {
                console.line(&ErrorMsg::handler_failure(&err));
                Outcome::Exit(1)
            }
        }
    }

    /// The command's own help screen.
    pub(crate) fn help(&self) -> String {
        let description = self
            .doc
            .clone()
            .unwrap_or_else(|| DescriptionMsg::no_command_description(&self.name));
        let defaults = [help_option()];
        help::command_help(
            &description,
            &self.name,
            self.argument
                .as_ref()
                .map(|(name, about)| (name.as_str(), about.as_str())),
            &defaults,
            &self.options,
        )
    }
}
