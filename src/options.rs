/// Option records derived from author declarations.
///
/// An option is a boolean presence flag: declaring `("help", "…")`
/// yields `-h` / `--help`. There are no typed option values.
use crate::errors::CliError;

/// A declared option with its derived flag forms.
///
/// Immutable once constructed. Short/long flags are unique within the
/// option set they belong to; the global set and each command's set are
/// independent namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Declared name (e.g. `"help"`).
    pub name: String,
    /// Derived short form (e.g. `"-h"`).
    pub short_flag: String,
    /// Derived long form (e.g. `"--help"`).
    pub long_flag: String,
    /// Author-supplied help text.
    pub description: String,
}

impl OptionSpec {
    /// Derive an option from a declared name/description pair.
    ///
    /// # Errors
    ///
    /// `CliError::Configuration` when `name` is empty — there is no
    /// first character to derive a short flag from.
    pub fn derive(name: &str, description: &str) -> Result<Self, CliError> {
        let Some(first) = name.chars().next() else {
            return Err(CliError::Configuration {
                reason: "option name is empty".to_owned(),
            });
        };
        Ok(Self {
            name: name.to_owned(),
            short_flag: format!("-{first}"),
            long_flag: format!("--{name}"),
            description: description.to_owned(),
        })
    }

    /// Whether `flag` is this option's short or long form.
    #[must_use]
    pub fn matches(&self, flag: &str) -> bool {
        flag == self.short_flag || flag == self.long_flag
    }
}

/// Turn a declared `name → description` mapping into option records.
///
/// Declaration order is preserved (it drives help rendering order).
/// Pure function: no side effects beyond allocation.
///
/// # Errors
///
/// `CliError::Configuration` when the declared set is empty, when a
/// name is empty, or when two entries collide on a derived short or
/// long flag.
pub fn parse_options(declared: &[(&str, &str)]) -> Result<Vec<OptionSpec>, CliError> {
    if declared.is_empty() {
        return Err(CliError::Configuration {
            reason: "declared option set is empty".to_owned(),
        });
    }

    let mut options: Vec<OptionSpec> = Vec::with_capacity(declared.len());
    for (name, description) in declared {
        let option = OptionSpec::derive(name, description)?;
        if let Some(taken) = options
            .iter()
            .find(|o| o.short_flag == option.short_flag || o.long_flag == option.long_flag)
        {
            return Err(CliError::Configuration {
                reason: format!(
                    "options '{}' and '{}' collide on a derived flag",
                    taken.name, option.name
                ),
            });
        }
        options.push(option);
    }

    Ok(options)
}

/// The default command-scoped `-h/--help` option.
pub(crate) fn help_option() -> OptionSpec {
    OptionSpec {
        name: "help".to_owned(),
        short_flag: "-h".to_owned(),
        long_flag: "--help".to_owned(),
        description: "Display this help message".to_owned(),
    }
}

/// The global option set every dispatcher carries.
pub(crate) fn global_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec {
            name: "version".to_owned(),
            short_flag: "-v".to_owned(),
            long_flag: "--version".to_owned(),
            description: "Display this application version".to_owned(),
        },
        help_option(),
    ]
}
