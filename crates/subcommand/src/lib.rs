//! Subcommand dispatch with two-level completion.
//!
//! One top-level user command (e.g. `:Rocks`) groups a fixed set of named
//! subcommands. The first argument selects the subcommand; the rest are passed
//! to its handler. Completion offers either subcommand keys or, once a key has
//! been typed, that subcommand's own argument candidates.
//!
//! # Example
//!
//! ```ignore
//! let registry = SubcommandRegistry::builder()
//! 	.register("install", SubcommandSpec::new(|ctx| install(ctx.args))
//! 		.with_completion(|lead| filter_candidates(lead, known_rocks())))?
//! 	.register("sync", SubcommandSpec::new(|_| sync()))?
//! 	.build();
//!
//! let rocks = UserCommand::new(CommandConfig::default(), registry)?;
//! rocks.run_line(&mut host, "Rocks install neorg")?;
//! assert_eq!(rocks.complete("ne", "Rocks install ne"), ["neorg"]);
//! ```

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod registry;

pub use command::{Nargs, UserCommand, UserCommandAttrs};
pub use config::{CommandConfig, ConfigError, ConfigLayer, ConfigLoadReport, load_layers};
pub use dispatch::Dispatcher;
pub use error::{DispatchError, HandlerError, HandlerResult, RegistryError};
pub use host::{CommandHost, Level, Notification, RecordingHost};
pub use registry::{RegistryBuilder, SubcommandContext, SubcommandRegistry, SubcommandSpec, filter_candidates};
pub use sprig_cmdline::{CmdlineError, CommandOpts, LineRange};
