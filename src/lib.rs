#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! noodle — a tiny micro-framework for command-line applications.
//!
//! Declare commands, register them into a [`Dispatcher`], and let it
//! turn the process argument vector into a dispatch decision: run a
//! handler, print help, or report an error.
//!
//! ```rust,ignore
//! use noodle::{CommandSpec, Dispatcher};
//!
//! let greet = CommandSpec::new("greet")
//!     .doc("Greet someone")
//!     .argument("name", "who to greet")
//!     .option("loud", "Shout the greeting")
//!     .handler(|ctx| {
//!         let name = ctx.argument().unwrap_or("world");
//!         if ctx.option("loud") {
//!             println!("HELLO, {}!", name.to_uppercase());
//!         } else {
//!             println!("hello, {name}");
//!         }
//!         Ok(())
//!     });
//!
//! let mut cli = Dispatcher::new("demo", "0.1.0").doc("A demo CLI.");
//! cli.register([greet])?;
//! cli.run();
//! ```
//!
//! Options are boolean presence flags: declaring `"loud"` derives `-l`
//! and `--loud`. A command takes at most one positional argument; only
//! the first positional is bound.

mod command;
mod dispatcher;
mod errors;
mod invocation;
mod options;
pub mod render;
mod suggest;

pub use command::{CommandContext, CommandSpec, HandlerFn};
pub use dispatcher::{Dispatcher, Outcome};
pub use errors::CliError;
pub use invocation::RawInvocation;
pub use options::{OptionSpec, parse_options};
pub use render::{BufferConsole, Console, StdoutConsole};
