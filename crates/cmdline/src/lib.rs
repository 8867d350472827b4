//! Command-line parsing for a single subcommand-style user command.
//!
//! A user command line has the general form
//!
//! ```text
//! [modifiers] [range] Name[!] [args...]
//! ```
//!
//! [`CommandLineGrammar`] is compiled once per command name and answers two
//! questions: what options record does a full line produce ([`CommandOpts`]),
//! and which completion shape is a partially typed line in
//! ([`CompletionShape`]).

mod grammar;
mod opts;

pub use grammar::{CommandLineGrammar, CompletionShape};
pub use opts::{CommandOpts, LineRange};

/// Errors produced while parsing a command line.
#[derive(Debug, thiserror::Error)]
pub enum CmdlineError {
	/// The line contained nothing but whitespace.
	#[error("empty command line")]
	Empty,
	/// The line does not invoke the expected command.
	#[error("not a {expected} command line: {line:?}")]
	NameMismatch {
		/// Command name the grammar was compiled for.
		expected: String,
		/// Offending input.
		line: String,
	},
	/// A `!` was given to a command that does not accept one.
	#[error("{0}: no ! allowed")]
	BangNotAllowed(String),
	/// A line range was given to a command that does not accept one.
	#[error("{0}: no range allowed")]
	RangeNotAllowed(String),
	/// The command name produced an invalid pattern.
	#[error("invalid command pattern: {0}")]
	Pattern(#[from] regex::Error),
}

/// Parses `line` as an invocation of the command `name`.
///
/// Compiles a [`CommandLineGrammar`] for a one-off parse; keep the grammar
/// around instead when parsing many lines for the same command.
pub fn parse_cmdline(name: &str, line: &str) -> Result<CommandOpts, CmdlineError> {
	CommandLineGrammar::new(name)?.parse(line)
}

/// Splits argument text into tokens on unescaped whitespace.
///
/// A backslash before a whitespace character makes that character part of
/// the token. Any other backslash is kept verbatim.
pub fn tokenize(input: &str) -> Vec<String> {
	let mut tokens = Vec::new();
	let mut current = String::new();
	let mut chars = input.chars().peekable();

	while let Some(ch) = chars.next() {
		match ch {
			'\\' => match chars.peek() {
				Some(next) if next.is_whitespace() => {
					current.push(*next);
					chars.next();
				}
				_ => current.push('\\'),
			},
			c if c.is_whitespace() => {
				if !current.is_empty() {
					tokens.push(std::mem::take(&mut current));
				}
			}
			c => current.push(c),
		}
	}

	if !current.is_empty() {
		tokens.push(current);
	}

	tokens
}

#[cfg(test)]
mod tests;
