use regex::{Captures, Regex};

use crate::{CmdlineError, CommandOpts, LineRange, tokenize};

/// Command modifiers that may precede a range and command name.
const MODIFIERS: &[&str] = &[
	"aboveleft",
	"belowright",
	"botright",
	"browse",
	"confirm",
	"hide",
	"horizontal",
	"keepalt",
	"keepjumps",
	"keepmarks",
	"keeppatterns",
	"leftabove",
	"lockmarks",
	"noautocmd",
	"noswapfile",
	"rightbelow",
	"sandbox",
	"silent",
	"tab",
	"topleft",
	"unsilent",
	"verbose",
	"vertical",
];

/// One line address: number, `.`, `$` or a mark, with optional offsets.
const ADDRESS: &str = r"(?:\d+|\.|\$|'[a-zA-Z<>\[\]])(?:[+-]\d*)*";

/// Shape of a partially typed command line, as seen by completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionShape<'a> {
	/// `Name key partial...`: completing arguments of subcommand `key`.
	Arguments {
		/// Subcommand key.
		key: &'a str,
		/// Everything typed after the key (may contain further whitespace).
		partial: &'a str,
	},
	/// `Name partial`: still typing the subcommand key.
	Subcommand {
		/// Partial key text, possibly empty.
		partial: &'a str,
	},
}

/// Precompiled matchers for one user command.
#[derive(Debug, Clone)]
pub struct CommandLineGrammar {
	name: String,
	bang: bool,
	range: bool,
	header: Regex,
	arguments: Regex,
	subcommand: Regex,
}

impl CommandLineGrammar {
	/// Compiles the header and completion matchers for `name`.
	///
	/// Bang and range are accepted by default.
	pub fn new(name: impl Into<String>) -> Result<Self, CmdlineError> {
		let name = name.into();
		let escaped = regex::escape(&name);
		let modifiers = MODIFIERS.join("|");
		let range = format!(r"%|{ADDRESS}(?:[,;]{ADDRESS})?");

		let header = Regex::new(&format!(
			r"(?s)^\s*(?P<mods>(?:\d*(?:{modifiers})!?\s+)*)(?P<range>{range})?\s*{escaped}(?P<bang>!)?(?:\s+(?P<args>.*))?$"
		))?;
		let prefix = format!(r"(?s)^\s*(?:\d*(?:{modifiers})!?\s+)*(?:{range})?\s*{escaped}!?");
		let arguments = Regex::new(&format!(r"{prefix}\s+(?P<key>\S+)\s+(?P<partial>.*)$"))?;
		let subcommand = Regex::new(&format!(r"{prefix}\s+(?P<partial>\S*)$"))?;

		Ok(Self {
			name,
			bang: true,
			range: true,
			header,
			arguments,
			subcommand,
		})
	}

	/// Sets whether `Name!` is accepted.
	pub fn with_bang(mut self, bang: bool) -> Self {
		self.bang = bang;
		self
	}

	/// Sets whether a line range prefix is accepted.
	pub fn with_range(mut self, range: bool) -> Self {
		self.range = range;
		self
	}

	/// Command name this grammar was compiled for.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Parses a complete command line into an options record.
	pub fn parse(&self, line: &str) -> Result<CommandOpts, CmdlineError> {
		if line.trim().is_empty() {
			return Err(CmdlineError::Empty);
		}

		let caps = self.header.captures(line).ok_or_else(|| CmdlineError::NameMismatch {
			expected: self.name.clone(),
			line: line.to_string(),
		})?;

		let bang = caps.name("bang").is_some();
		if bang && !self.bang {
			return Err(CmdlineError::BangNotAllowed(self.name.clone()));
		}

		let range = caps.name("range").map(|m| split_range(m.as_str()));
		if range.is_some() && !self.range {
			return Err(CmdlineError::RangeNotAllowed(self.name.clone()));
		}

		let args = trim_unescaped_end(group(&caps, "args"));
		let mut opts = CommandOpts {
			name: self.name.clone(),
			args: args.to_string(),
			fargs: tokenize(args),
			bang,
			mods: group(&caps, "mods").split_whitespace().collect::<Vec<_>>().join(" "),
			..CommandOpts::default()
		};
		if let Some(range) = range {
			opts = opts.with_range(range);
		}

		Ok(opts)
	}

	/// Classifies a partially typed line for completion.
	///
	/// Returns `None` when the line is neither shape, including lines for a
	/// different command and the bare command name with no trailing space.
	pub fn shape<'l>(&self, line: &'l str) -> Option<CompletionShape<'l>> {
		if let Some(caps) = self.arguments.captures(line) {
			let key = caps.name("key")?.as_str();
			let partial = caps.name("partial").map_or("", |m| m.as_str());
			return Some(CompletionShape::Arguments { key, partial });
		}

		self.subcommand.captures(line).map(|caps| CompletionShape::Subcommand {
			partial: caps.name("partial").map_or("", |m| m.as_str()),
		})
	}
}

fn group<'l>(caps: &Captures<'l>, name: &str) -> &'l str {
	caps.name(name).map_or("", |m| m.as_str())
}

/// Strips trailing whitespace, keeping a final whitespace character escaped by a backslash.
///
/// Matches [`tokenize`]: a backslash before whitespace always escapes it.
fn trim_unescaped_end(text: &str) -> &str {
	let trimmed = text.trim_end();
	if !trimmed.ends_with('\\') {
		return trimmed;
	}
	match text[trimmed.len()..].chars().next() {
		Some(escaped) => &text[..trimmed.len() + escaped.len_utf8()],
		None => trimmed,
	}
}

fn split_range(text: &str) -> LineRange {
	if text == "%" {
		return LineRange::Whole;
	}
	match text.split_once([',', ';']) {
		Some((start, end)) => LineRange::Two(start.to_string(), end.to_string()),
		None => LineRange::One(text.to_string()),
	}
}

#[cfg(test)]
mod tests;
