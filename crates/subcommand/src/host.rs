//! Host-facing notification channel.

use serde::Deserialize;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	/// Trace message.
	Trace,
	/// Debug message.
	Debug,
	/// Informational message (default).
	#[default]
	Info,
	/// Warning message.
	Warn,
	/// Error message.
	Error,
}

/// A user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	/// Severity.
	pub level: Level,
	/// Message text.
	pub message: String,
}

impl Notification {
	/// Creates a notification.
	pub fn new(level: Level, message: impl Into<String>) -> Self {
		Self {
			level,
			message: message.into(),
		}
	}

	/// Creates an error-level notification.
	pub fn error(message: impl Into<String>) -> Self {
		Self::new(Level::Error, message)
	}

	/// Creates an info-level notification.
	pub fn info(message: impl Into<String>) -> Self {
		Self::new(Level::Info, message)
	}
}

/// Editor operations available to the dispatcher and its handlers.
pub trait CommandHost {
	/// Shows a notification to the user.
	fn notify(&mut self, notification: Notification);
}

/// Host that records notifications instead of showing them.
///
/// Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct RecordingHost {
	/// Notifications in emission order.
	pub notifications: Vec<Notification>,
}

impl RecordingHost {
	/// Creates an empty recording host.
	pub fn new() -> Self {
		Self::default()
	}

	/// Messages of all recorded notifications at `level`.
	pub fn messages(&self, level: Level) -> Vec<&str> {
		self.notifications
			.iter()
			.filter(|n| n.level == level)
			.map(|n| n.message.as_str())
			.collect()
	}
}

impl CommandHost for RecordingHost {
	fn notify(&mut self, notification: Notification) {
		self.notifications.push(notification);
	}
}
