/// Argv lexing: split the raw argument vector into command, flags and
/// positionals.
///
/// No validation happens here — unknown commands and flags are legal at
/// this stage. Resolution against the registry is the dispatcher's job.

/// One invocation's argument vector, bucketed.
///
/// Computed once per process run and never mutated afterwards. Threaded
/// explicitly into the dispatcher and each command resolver, so
/// resolution is testable without touching process state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInvocation {
    /// First non-flag token, iff it occupies position 0.
    pub command: Option<String>,
    /// Every `-`/`--` token, in original order.
    pub flags: Vec<String>,
    /// Remaining non-flag tokens (command excluded), in original order.
    pub positionals: Vec<String>,
}

impl RawInvocation {
    /// Lex the current process arguments (program name excluded).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Lex an explicit argument list.
    #[must_use]
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut command = None;
        let mut flags = Vec::new();
        let mut positionals = Vec::new();

        for (index, arg) in args.into_iter().enumerate() {
            let arg: String = arg.into();
            if arg.starts_with('-') {
                flags.push(arg);
            } else if index == 0 {
                command = Some(arg);
            } else {
                positionals.push(arg);
            }
        }

        Self {
            command,
            flags,
            positionals,
        }
    }

    /// Whether any flag token was supplied.
    #[must_use]
    pub fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }
}
