//! Subcommand definitions and the ordered registry that holds them.

use indexmap::IndexMap;
use sprig_cmdline::CommandOpts;

use crate::error::{HandlerResult, RegistryError};
use crate::host::{CommandHost, Notification};

/// Handler that performs a subcommand's effect.
pub type InvokeFn = dyn Fn(&mut SubcommandContext<'_>) -> HandlerResult + Send + Sync;

/// Argument completion callback: partial token in, candidates out.
pub type CompleteFn = dyn Fn(&str) -> Vec<String> + Send + Sync;

/// Context provided to subcommand handlers.
pub struct SubcommandContext<'a> {
	/// Host operations.
	pub host: &'a mut dyn CommandHost,
	/// Argument tokens after the subcommand key.
	pub args: &'a [String],
	/// Options record of the whole invocation.
	pub opts: &'a CommandOpts,
}

impl SubcommandContext<'_> {
	/// Emits a notification through the host.
	pub fn emit(&mut self, notification: impl Into<Notification>) {
		self.host.notify(notification.into());
	}
}

/// A registered subcommand.
pub struct SubcommandSpec {
	invoke: Box<InvokeFn>,
	complete_args: Option<Box<CompleteFn>>,
	description: Option<String>,
}

impl SubcommandSpec {
	/// Creates a subcommand with no argument completion.
	pub fn new<F>(invoke: F) -> Self
	where
		F: Fn(&mut SubcommandContext<'_>) -> HandlerResult + Send + Sync + 'static,
	{
		Self {
			invoke: Box::new(invoke),
			complete_args: None,
			description: None,
		}
	}

	/// Attaches an argument completion callback.
	///
	/// Candidates should contain the lead as a substring; see [`filter_candidates`].
	pub fn with_completion<F>(mut self, complete: F) -> Self
	where
		F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
	{
		self.complete_args = Some(Box::new(complete));
		self
	}

	/// Attaches a one-line description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Runs the handler.
	pub fn invoke(&self, ctx: &mut SubcommandContext<'_>) -> HandlerResult {
		(self.invoke)(ctx)
	}

	/// Argument candidates for `lead`, or `None` if the subcommand has no completer.
	pub fn complete_args(&self, lead: &str) -> Option<Vec<String>> {
		self.complete_args.as_ref().map(|complete| complete(lead))
	}

	/// Whether an argument completer is attached.
	pub fn has_completion(&self) -> bool {
		self.complete_args.is_some()
	}

	/// Returns the description, if any.
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}
}

impl std::fmt::Debug for SubcommandSpec {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SubcommandSpec")
			.field("complete_args", &self.has_completion())
			.field("description", &self.description)
			.finish_non_exhaustive()
	}
}

/// Immutable, ordered mapping from subcommand key to definition.
///
/// Iteration order is registration order; it only affects how completion
/// candidates are listed.
#[derive(Debug, Default)]
pub struct SubcommandRegistry {
	entries: IndexMap<String, SubcommandSpec>,
}

impl SubcommandRegistry {
	/// Starts building a registry.
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::default()
	}

	/// Finds a subcommand by exact key.
	pub fn get(&self, key: &str) -> Option<&SubcommandSpec> {
		self.entries.get(key)
	}

	/// Returns whether `key` is registered.
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Keys in registration order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &SubcommandSpec)> {
		self.entries.iter().map(|(key, spec)| (key.as_str(), spec))
	}

	/// Number of subcommands.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether no subcommands are registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Collects subcommands and validates their keys.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
	entries: IndexMap<String, SubcommandSpec>,
}

impl RegistryBuilder {
	/// Adds a subcommand under `key`.
	pub fn register(mut self, key: impl Into<String>, spec: SubcommandSpec) -> Result<Self, RegistryError> {
		let key = key.into();
		if key.is_empty() {
			return Err(RegistryError::EmptyKey);
		}
		if key.chars().any(char::is_whitespace) {
			return Err(RegistryError::InvalidKey(key));
		}
		if self.entries.contains_key(&key) {
			return Err(RegistryError::DuplicateKey(key));
		}
		self.entries.insert(key, spec);
		Ok(self)
	}

	/// Freezes the registry.
	pub fn build(self) -> SubcommandRegistry {
		SubcommandRegistry { entries: self.entries }
	}
}

/// Keeps the items that contain `lead` (case-sensitive), preserving order.
pub fn filter_candidates<I, S>(lead: &str, items: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	items
		.into_iter()
		.filter(|item| item.as_ref().contains(lead))
		.map(|item| item.as_ref().to_string())
		.collect()
}
