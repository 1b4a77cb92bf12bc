/// Errors produced while resolving an invocation.
use thiserror::Error;

/// Everything that can go wrong between argv and a handler call.
///
/// All variants are user-facing and non-retryable: each one terminates
/// the current invocation. `Configuration` is the exception — it is an
/// author error surfaced at declaration/registration time, before any
/// resolution begins.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command token does not match any registered command.
    #[error("'{command}' is not a registered command")]
    UnknownCommand {
        /// The unresolved command token, verbatim.
        command: String,
    },

    /// A flag matched neither the global options nor the command's
    /// declared options.
    #[error("'{option}' is not a recognized option")]
    UnknownOption {
        /// The first unrecognized flag, verbatim.
        option: String,
    },

    /// The command declares a required argument and none was supplied.
    #[error("missing required argument '{argument}'")]
    MissingArgument {
        /// The declared argument name.
        argument: String,
    },

    /// The command declares no argument and one was supplied.
    #[error("'{command}' takes no arguments")]
    TooManyArguments {
        /// The invoked command name.
        command: String,
    },

    /// Malformed author-declared option/argument structures.
    #[error("invalid declaration: {reason}")]
    Configuration {
        /// What the author got wrong.
        reason: String,
    },
}

/// Exit code mapping for `CliError` variants.
impl CliError {
    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCommand { .. }
            | Self::UnknownOption { .. }
            | Self::MissingArgument { .. }
            | Self::TooManyArguments { .. } => 2,
            Self::Configuration { .. } => 1,
        }
    }
}
