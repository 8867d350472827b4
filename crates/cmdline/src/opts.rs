/// Line range written in front of a command name.
///
/// Addresses are kept exactly as typed (`'<`, `.`, `$`, `12`, `.+3`); resolving
/// them against a buffer is the host's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRange {
	/// `%`, the whole buffer.
	Whole,
	/// A single address, e.g. `5` or `.`.
	One(String),
	/// An address pair, e.g. `'<,'>` or `1;$`.
	Two(String, String),
}

impl LineRange {
	/// Number of addresses written (0 through 2), matching the editor's `range` field.
	///
	/// `%` counts as two addresses since it spans first to last line.
	pub fn addresses(&self) -> u8 {
		match self {
			Self::Whole | Self::Two(..) => 2,
			Self::One(_) => 1,
		}
	}
}

/// Options record handed to subcommand handlers.
///
/// Mirrors the table an editor passes to user-command callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOpts {
	/// Top-level command name.
	pub name: String,
	/// Raw argument text after the command name.
	pub args: String,
	/// Arguments split on unescaped whitespace.
	pub fargs: Vec<String>,
	/// Whether the command was invoked with `!`.
	pub bang: bool,
	/// Line range, if one was given.
	pub range: Option<LineRange>,
	/// Count, when the range is a single numeric address.
	pub count: Option<usize>,
	/// Register name, when the host supplies one.
	pub register: Option<char>,
	/// Command modifiers (`silent`, `vertical`, ...) separated by spaces.
	pub mods: String,
}

impl CommandOpts {
	/// Builds options for a plain invocation with the given arguments.
	pub fn new(name: impl Into<String>, fargs: Vec<String>) -> Self {
		Self {
			name: name.into(),
			args: fargs.join(" "),
			fargs,
			..Self::default()
		}
	}

	/// Sets the bang flag.
	pub fn with_bang(mut self, bang: bool) -> Self {
		self.bang = bang;
		self
	}

	/// Sets the line range and derives `count` from it.
	pub fn with_range(mut self, range: LineRange) -> Self {
		self.count = match &range {
			LineRange::One(addr) => addr.parse().ok(),
			_ => None,
		};
		self.range = Some(range);
		self
	}

	/// Sets the register.
	pub fn with_register(mut self, register: char) -> Self {
		self.register = Some(register);
		self
	}
}
