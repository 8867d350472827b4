//! Binding of a dispatcher to the host's user-command facility.

use sprig_cmdline::CommandOpts;

use crate::config::{self, CommandConfig};
use crate::dispatch::Dispatcher;
use crate::error::{DispatchError, HandlerResult};
use crate::host::{CommandHost, Notification};
use crate::registry::SubcommandRegistry;

/// Number of arguments a user command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
	/// `0`
	None,
	/// `1`
	One,
	/// `?`
	ZeroOrOne,
	/// `*`
	Any,
	/// `+`
	OneOrMore,
}

impl Nargs {
	/// The attribute value as written in a user-command definition.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "0",
			Self::One => "1",
			Self::ZeroOrOne => "?",
			Self::Any => "*",
			Self::OneOrMore => "+",
		}
	}
}

/// Attributes a host needs to register the command natively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCommandAttrs {
	/// Command name.
	pub name: String,
	/// Always [`Nargs::OneOrMore`]: the first argument is the subcommand.
	pub nargs: Nargs,
	/// Whether `!` is accepted.
	pub bang: bool,
	/// Whether a range is accepted.
	pub range: bool,
	/// Description for command listings.
	pub description: String,
}

/// A top-level command with subcommands, exposed as execute and complete callbacks.
#[derive(Debug)]
pub struct UserCommand {
	attrs: UserCommandAttrs,
	dispatcher: Dispatcher,
}

impl UserCommand {
	/// Validates `config` and binds `registry` to it.
	pub fn new(config: CommandConfig, registry: SubcommandRegistry) -> config::Result<Self> {
		config.validate()?;
		let dispatcher = Dispatcher::new(&config, registry)?;
		let attrs = UserCommandAttrs {
			nargs: Nargs::OneOrMore,
			bang: config.bang,
			range: config.range,
			description: config.description,
			name: config.name,
		};
		tracing::debug!(command = %attrs.name, subcommands = dispatcher.registry().len(), "user command created");
		Ok(Self { attrs, dispatcher })
	}

	/// Registration attributes.
	pub fn attrs(&self) -> &UserCommandAttrs {
		&self.attrs
	}

	/// The underlying dispatcher.
	pub fn dispatcher(&self) -> &Dispatcher {
		&self.dispatcher
	}

	/// Execution callback: dispatches on `opts.fargs`.
	///
	/// Unknown subcommands have already been reported to the host by the
	/// dispatcher and are not an error here. Handler failures are returned to
	/// the host.
	pub fn execute(&self, host: &mut dyn CommandHost, opts: &CommandOpts) -> HandlerResult {
		match self.dispatcher.dispatch(host, &opts.fargs, opts) {
			Ok(()) | Err(DispatchError::UnknownCommand { .. }) => Ok(()),
			Err(DispatchError::Handler(error)) => Err(error),
		}
	}

	/// Completion callback.
	pub fn complete(&self, arg_lead: &str, cmd_line: &str) -> Vec<String> {
		self.dispatcher.complete(arg_lead, cmd_line)
	}

	/// Parses a full command line and executes it.
	///
	/// A line the grammar rejects is reported to the host as an error
	/// notification and nothing runs.
	pub fn run_line(&self, host: &mut dyn CommandHost, line: &str) -> HandlerResult {
		match self.dispatcher.grammar().parse(line) {
			Ok(opts) => self.execute(host, &opts),
			Err(error) => {
				tracing::warn!(command = %self.attrs.name, %error, "rejected command line");
				host.notify(Notification::error(error.to_string()));
				Ok(())
			}
		}
	}
}
