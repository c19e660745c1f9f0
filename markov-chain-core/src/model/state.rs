use rand::Rng;

use serde::Serialize;

use super::symbol::Symbol;

/// Successors observed after one window.
///
/// Conceptually, this is the set of outgoing edges of a node in the Markov
/// chain. Frequencies are not counted: a symbol seen `k` times after the
/// window is stored `k` times, in the order it was observed.
///
/// # Responsibilities
/// - Accumulate observed successors during construction
/// - Pick the next symbol uniformly by position during generation
///
/// # Invariants
/// - Once stored in a table, the list holds at least one symbol
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Successors {
	/// Successors in observation order, duplicates kept.
	/// Example: ['a', 'b', 'a', NONWORD]
	symbols: Vec<Symbol>,
}

impl Successors {
	/// Creates an empty successor list.
	pub fn new() -> Self {
		Self { symbols: Vec::new() }
	}

	/// Records one more observation of `next`.
	pub fn push(&mut self, next: Symbol) {
		self.symbols.push(next);
	}

	/// Picks one successor uniformly among stored positions.
	///
	/// A symbol stored `k` times out of `n` is returned with probability `k / n`.
	///
	/// Returns `None` if the list is empty.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Symbol> {
		if self.symbols.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.symbols.len());
		self.symbols.get(index).copied()
	}

	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	/// Number of times `symbol` was observed.
	pub fn count(&self, symbol: Symbol) -> usize {
		self.symbols.iter().filter(|s| **s == symbol).count()
	}

	pub fn as_slice(&self) -> &[Symbol] {
		&self.symbols
	}
}
