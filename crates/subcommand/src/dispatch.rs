//! Resolution of subcommand invocations and completion requests.

use sprig_cmdline::{CmdlineError, CommandLineGrammar, CommandOpts, CompletionShape};

use crate::config::CommandConfig;
use crate::error::DispatchError;
use crate::host::{CommandHost, Level, Notification};
use crate::registry::{SubcommandContext, SubcommandRegistry};

/// Routes invocations of one top-level command to its subcommands.
///
/// Holds no mutable state; both [`dispatch`](Self::dispatch) and
/// [`complete`](Self::complete) only read the registry.
#[derive(Debug)]
pub struct Dispatcher {
	command: String,
	grammar: CommandLineGrammar,
	registry: SubcommandRegistry,
	notify_prefix: bool,
	unknown_level: Level,
}

impl Dispatcher {
	/// Creates a dispatcher for the command described by `config`.
	pub fn new(config: &CommandConfig, registry: SubcommandRegistry) -> Result<Self, CmdlineError> {
		let grammar = CommandLineGrammar::new(config.name.as_str())?
			.with_bang(config.bang)
			.with_range(config.range);
		Ok(Self {
			command: config.name.clone(),
			grammar,
			registry,
			notify_prefix: config.notify_prefix,
			unknown_level: config.unknown_level,
		})
	}

	/// Top-level command name.
	pub fn command(&self) -> &str {
		&self.command
	}

	/// The subcommand registry.
	pub fn registry(&self) -> &SubcommandRegistry {
		&self.registry
	}

	/// Command-line grammar for this command.
	pub fn grammar(&self) -> &CommandLineGrammar {
		&self.grammar
	}

	/// Invokes the subcommand named by the first token of `raw_args`.
	///
	/// An empty or unknown first token is reported through `host` and returned
	/// as [`DispatchError::UnknownCommand`]; no handler runs. Handler failures
	/// are returned unchanged as [`DispatchError::Handler`].
	pub fn dispatch(&self, host: &mut dyn CommandHost, raw_args: &[String], opts: &CommandOpts) -> Result<(), DispatchError> {
		let Some((key, args)) = raw_args.split_first() else {
			return Err(self.unknown(host, ""));
		};
		let Some(spec) = self.registry.get(key) else {
			return Err(self.unknown(host, key));
		};

		tracing::debug!(command = %self.command, subcommand = %key, args = args.len(), bang = opts.bang, "dispatching subcommand");
		let mut ctx = SubcommandContext { host, args, opts };
		spec.invoke(&mut ctx).map_err(|error| {
			tracing::warn!(command = %self.command, subcommand = %key, %error, "subcommand failed");
			DispatchError::Handler(error)
		})
	}

	/// Completion candidates for `arg_lead` given the full line typed so far.
	///
	/// Never fails; lines that match neither completion shape, unknown
	/// subcommands and subcommands without a completer all yield no candidates.
	pub fn complete(&self, arg_lead: &str, cmd_line: &str) -> Vec<String> {
		let candidates = match self.grammar.shape(cmd_line) {
			Some(CompletionShape::Arguments { key, .. }) => {
				let candidates = self.registry.get(key).and_then(|spec| spec.complete_args(arg_lead));
				tracing::debug!(command = %self.command, subcommand = %key, found = candidates.is_some(), "completing arguments");
				candidates.unwrap_or_default()
			}
			Some(CompletionShape::Subcommand { .. }) => self
				.registry
				.keys()
				.filter(|key| key.contains(arg_lead))
				.map(str::to_string)
				.collect(),
			None => Vec::new(),
		};
		tracing::trace!(command = %self.command, lead = arg_lead, count = candidates.len(), "completion candidates");
		candidates
	}

	fn unknown(&self, host: &mut dyn CommandHost, key: &str) -> DispatchError {
		tracing::warn!(command = %self.command, subcommand = key, "unknown subcommand");
		let message = if self.notify_prefix {
			format!("{}: Unknown command: {key}", self.command)
		} else {
			format!("Unknown command: {key}")
		};
		host.notify(Notification::new(self.unknown_level, message));
		DispatchError::UnknownCommand {
			command: self.command.clone(),
			key: key.to_string(),
		}
	}
}
