//! Config file loading utilities.

use std::path::{Path, PathBuf};

use super::{CommandConfig, ConfigError, ConfigLayer};

/// Aggregate result of loading configuration layers.
#[derive(Debug, Default)]
pub struct ConfigLoadReport {
	/// Defaults with every successfully parsed layer merged in.
	pub config: CommandConfig,
	/// Layers that were read and merged, in merge order.
	pub loaded: Vec<PathBuf>,
	/// Read, parse and validation errors keyed by source file path.
	pub errors: Vec<(PathBuf, ConfigError)>,
}

/// Loads and merges layers from `paths`, later paths taking precedence.
///
/// Missing files are skipped silently. A layer that fails to read or parse is
/// recorded in [`ConfigLoadReport::errors`] and does not contribute. If the
/// merged result fails validation, the error is recorded against the last
/// loaded layer and the defaults are returned instead.
pub fn load_layers<P: AsRef<Path>>(paths: &[P]) -> ConfigLoadReport {
	let mut report = ConfigLoadReport::default();

	for path in paths {
		let path = path.as_ref();
		if !path.exists() {
			tracing::trace!(path = %path.display(), "config layer not present");
			continue;
		}

		match read_layer(path) {
			Ok(layer) => {
				report.config.merge(layer);
				report.loaded.push(path.to_path_buf());
			}
			Err(error) => {
				tracing::warn!(path = %path.display(), %error, "skipping config layer");
				report.errors.push((path.to_path_buf(), error));
			}
		}
	}

	if let Err(error) = report.config.validate() {
		let path = report.loaded.last().cloned().unwrap_or_default();
		tracing::warn!(path = %path.display(), %error, "merged config rejected, using defaults");
		report.errors.push((path, error));
		report.config = CommandConfig::default();
	}

	report
}

fn read_layer(path: &Path) -> super::Result<ConfigLayer> {
	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	ConfigLayer::parse(&content)
}
