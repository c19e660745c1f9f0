use std::fmt;

use serde::{Serialize, Serializer};

/// A single element of a chain: either a character of the training text or
/// the `NonWord` boundary marker.
///
/// `NonWord` pads the window before the first character and marks the end of
/// the text. It can never collide with an input character because it is a
/// distinct variant rather than a reserved `char`.
///
/// Ordering places `NonWord` before every character, which keeps inspection
/// dumps stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
	/// Boundary marker (start padding / end of sequence).
	NonWord,
	/// A character of the input text.
	Char(char),
}

impl Symbol {
	/// Returns `true` for the boundary marker.
	pub fn is_non_word(&self) -> bool {
		matches!(self, Symbol::NonWord)
	}
}

impl From<char> for Symbol {
	fn from(c: char) -> Self {
		Symbol::Char(c)
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Symbol::NonWord => f.write_str("NONWORD"),
			Symbol::Char(c) => write!(f, "{:?}", c),
		}
	}
}

/// `NonWord` serializes as a unit/null value, characters as themselves.
impl Serialize for Symbol {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Symbol::NonWord => serializer.serialize_none(),
			Symbol::Char(c) => serializer.serialize_char(*c),
		}
	}
}
