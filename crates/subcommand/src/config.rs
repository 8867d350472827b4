//! Configuration of the top-level user command.
//!
//! Settings come from TOML layers merged over [`CommandConfig::default`]:
//!
//! ```toml
//! name = "Rocks"
//! description = "Manage rocks"
//! bang = true
//! range = false
//! notify_prefix = true
//! unknown_level = "warn"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::host::Level;

mod load;

pub use load::{ConfigLoadReport, load_layers};

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Config file could not be read.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		/// File that failed.
		path: PathBuf,
		/// Underlying error.
		#[source]
		source: std::io::Error,
	},
	/// Config text is not valid TOML for a [`ConfigLayer`].
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
	/// Merged values are not usable.
	#[error("invalid config: {0}")]
	Invalid(String),
	/// The command name could not be compiled into a command-line grammar.
	#[error(transparent)]
	Grammar(#[from] sprig_cmdline::CmdlineError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Resolved settings for one top-level command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
	/// Command name, e.g. `Rocks`.
	pub name: String,
	/// Description shown by the host's command listing.
	pub description: String,
	/// Whether `Name!` is accepted.
	pub bang: bool,
	/// Whether a line range prefix is accepted.
	pub range: bool,
	/// Prefix notifications with the command name.
	pub notify_prefix: bool,
	/// Level used when reporting an unknown subcommand.
	pub unknown_level: Level,
}

impl Default for CommandConfig {
	fn default() -> Self {
		Self {
			name: "Rocks".to_string(),
			description: String::new(),
			bang: true,
			range: true,
			notify_prefix: true,
			unknown_level: Level::Error,
		}
	}
}

impl CommandConfig {
	/// Default settings under a different command name.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Parses one TOML layer over the defaults and validates the result.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let mut config = Self::default();
		config.merge(ConfigLayer::parse(content)?);
		config.validate()?;
		Ok(config)
	}

	/// Applies every field set in `layer`, leaving the rest untouched.
	pub fn merge(&mut self, layer: ConfigLayer) {
		if let Some(name) = layer.name {
			self.name = name;
		}
		if let Some(description) = layer.description {
			self.description = description;
		}
		if let Some(bang) = layer.bang {
			self.bang = bang;
		}
		if let Some(range) = layer.range {
			self.range = range;
		}
		if let Some(notify_prefix) = layer.notify_prefix {
			self.notify_prefix = notify_prefix;
		}
		if let Some(level) = layer.unknown_level {
			self.unknown_level = level;
		}
	}

	/// Checks the editor's user-command naming rule.
	///
	/// Names must start with an ASCII uppercase letter and contain only ASCII
	/// alphanumerics.
	pub fn validate(&self) -> Result<()> {
		let mut chars = self.name.chars();
		match chars.next() {
			None => Err(ConfigError::Invalid("command name must not be empty".into())),
			Some(first) if !first.is_ascii_uppercase() => Err(ConfigError::Invalid(format!(
				"command name must start with an uppercase letter: {:?}",
				self.name
			))),
			Some(_) if !chars.all(|c| c.is_ascii_alphanumeric()) => Err(ConfigError::Invalid(format!(
				"command name must be alphanumeric: {:?}",
				self.name
			))),
			Some(_) => Ok(()),
		}
	}
}

/// One partial configuration source. Unset fields keep lower-layer values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
	/// See [`CommandConfig::name`].
	pub name: Option<String>,
	/// See [`CommandConfig::description`].
	pub description: Option<String>,
	/// See [`CommandConfig::bang`].
	pub bang: Option<bool>,
	/// See [`CommandConfig::range`].
	pub range: Option<bool>,
	/// See [`CommandConfig::notify_prefix`].
	pub notify_prefix: Option<bool>,
	/// See [`CommandConfig::unknown_level`].
	pub unknown_level: Option<Level>,
}

impl ConfigLayer {
	/// Parses a layer from TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}
}
