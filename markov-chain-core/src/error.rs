use crate::model::window::Window;

/// Errors reported by the chain library.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
	/// A generation run reached a window the table does not know.
	///
	/// Construction and generation advance the window with the same rule, so
	/// this only happens if the table was built inconsistently.
	#[error("Window {window} missing from transition table")]
	MissingWindow { window: Window },

	#[error("Failed to read training text: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type used across the library.
pub type ChainResult<T> = Result<T, ChainError>;
