//! Error taxonomy for registry construction and dispatch.

use thiserror::Error;

/// Failure raised by a subcommand handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
	/// Handler failed with a message.
	#[error("{0}")]
	Failed(String),
	/// A required argument was not given.
	#[error("missing argument: {0}")]
	MissingArgument(&'static str),
	/// An argument could not be used.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// Anything else.
	#[error("{0}")]
	Other(String),
}

/// Result type returned by subcommand handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Errors produced by [`Dispatcher::dispatch`](crate::Dispatcher::dispatch).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
	/// The first argument does not name a registered subcommand.
	///
	/// `key` is empty when no arguments were given.
	#[error("{command}: Unknown command: {key}")]
	UnknownCommand {
		/// Top-level command name.
		command: String,
		/// The unresolved first token.
		key: String,
	},
	/// The selected handler failed.
	#[error(transparent)]
	Handler(#[from] HandlerError),
}

/// Rejected registry entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// Subcommand keys must be non-empty.
	#[error("subcommand key must not be empty")]
	EmptyKey,
	/// Keys are matched against single tokens, so they cannot contain whitespace.
	#[error("subcommand key contains whitespace: {0:?}")]
	InvalidKey(String),
	/// Two entries share a key.
	#[error("duplicate subcommand key: {0:?}")]
	DuplicateKey(String),
}
