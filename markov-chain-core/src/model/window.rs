use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::symbol::Symbol;

/// The last `N` symbols seen, oldest first.
///
/// A `Window` is both the lookup key of the transition table and the moving
/// state of a generation run. Equality and hashing are positional, so two
/// windows match only if every slot holds the same symbol.
///
/// # Invariants
/// - The length is fixed at creation and is always >= 1
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Window {
	symbols: Box<[Symbol]>,
}

impl Window {
	/// Creates the initial window: `order` copies of `NonWord`.
	///
	/// `order` must already be normalized (`>= 1`).
	pub(crate) fn start(order: usize) -> Self {
		debug_assert!(order >= 1, "window order must be >= 1");
		Self { symbols: vec![Symbol::NonWord; order].into_boxed_slice() }
	}

	/// Builds a window from explicit symbols.
	///
	/// Returns `None` if `symbols` is empty.
	pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Option<Self> {
		let symbols: Box<[Symbol]> = symbols.into_iter().collect();
		if symbols.is_empty() {
			return None;
		}
		Some(Self { symbols })
	}

	/// Drops the oldest symbol and appends `next` at the end.
	pub fn advance(&mut self, next: Symbol) {
		self.symbols.rotate_left(1);
		// Length is >= 1 by construction
		if let Some(last) = self.symbols.last_mut() {
			*last = next;
		}
	}

	/// Number of slots (the chain order).
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	/// Always `false`; provided for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	pub fn symbols(&self) -> &[Symbol] {
		&self.symbols
	}
}

/// Lets the table be queried with a plain symbol slice.
impl Borrow<[Symbol]> for Window {
	fn borrow(&self) -> &[Symbol] {
		&self.symbols
	}
}

impl fmt::Display for Window {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (i, symbol) in self.symbols.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", symbol)?;
		}
		f.write_str(")")
	}
}
