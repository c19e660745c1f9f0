use std::collections::HashMap;
use std::iter::FusedIterator;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use super::generation_input::GenerationInput;
use super::state::Successors;
use super::symbol::Symbol;
use super::window::Window;
use crate::error::{ChainError, ChainResult};

/// Mapping from a window to the symbols observed right after it.
///
/// # Invariants
/// - Every key was produced by at least one observed transition
/// - Every `Successors` list is non-empty
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
	entries: HashMap<Window, Successors>,
}

impl TransitionTable {
	fn new() -> Self {
		Self { entries: HashMap::new() }
	}

	/// Appends `next` to the entry of `window`, creating the entry if needed.
	fn record(&mut self, window: &Window, next: Symbol) {
		if let Some(successors) = self.entries.get_mut(window.symbols()) {
			successors.push(next);
		} else {
			let mut successors = Successors::new();
			successors.push(next);
			self.entries.insert(window.clone(), successors);
		}
	}

	/// Successors of the given window, compared slot by slot.
	pub fn get(&self, window: &[Symbol]) -> Option<&Successors> {
		self.entries.get(window)
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over entries in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&Window, &Successors)> {
		self.entries.iter()
	}

	/// Entries sorted by window (`NONWORD` first, then by character).
	pub fn sorted_entries(&self) -> Vec<(&Window, &Successors)> {
		let mut entries: Vec<_> = self.entries.iter().collect();
		entries.sort_by(|a, b| a.0.cmp(b.0));
		entries
	}
}

#[derive(Serialize)]
struct EntryRef<'a> {
	window: &'a Window,
	successors: &'a Successors,
}

/// Serialized as a list of `{ window, successors }` entries sorted by window,
/// so that two dumps of equal tables are byte-identical.
impl Serialize for TransitionTable {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let entries = self.sorted_entries();
		let mut seq = serializer.serialize_seq(Some(entries.len()))?;
		for (window, successors) in entries {
			seq.serialize_element(&EntryRef { window, successors })?;
		}
		seq.end()
	}
}

/// Character-level Markov chain of a fixed order.
///
/// The model is built once from a text and is read-only afterwards. Each
/// generation run owns its own window and random source, so any number of
/// runs can walk the same model side by side.
///
/// # Responsibilities
/// - Build the transition table in a single left-to-right scan
/// - Generate new character sequences by walking the table
/// - Expose the table for inspection
///
/// # Invariants
/// - `order` is always >= 1
/// - Every window reachable from the start window during generation is a key
///   of the table
#[derive(Serialize, Clone, Debug)]
pub struct ChainModel {
	/// Number of symbols in a window.
	order: usize,

	/// Transitions observed in the training text.
	chain: TransitionTable,
}

impl ChainModel {
	/// Builds a model of the given order from `input`.
	///
	/// An `order` of 0 or less is treated as 1.
	pub fn new(input: &str, order: isize) -> Self {
		Self::build(input.chars(), order)
	}

	/// Builds a model from any character sequence.
	///
	/// # Behavior
	/// - Starts from a window filled with `NONWORD`.
	/// - For each character, records it as a successor of the current window,
	///   then advances the window.
	/// - Finally records `NONWORD` after the last window so that generation
	///   can end.
	///
	/// Never fails: an empty input yields a table mapping the start window to
	/// `[NONWORD]`.
	pub fn build<I: IntoIterator<Item = char>>(input: I, order: isize) -> Self {
		let order = Self::normalize_order(order);
		let mut chain = TransitionTable::new();
		let mut window = Window::start(order);
		let mut scanned = 0usize;

		for c in input {
			let symbol = Symbol::Char(c);
			chain.record(&window, symbol);
			window.advance(symbol);
			scanned += 1;
		}
		chain.record(&window, Symbol::NonWord);

		log::debug!(
			"Built order {} chain from {} characters: {} windows, terminal window {}",
			order,
			scanned,
			chain.len(),
			window
		);

		Self { order, chain }
	}

	/// Clamps a requested order to the valid range (`>= 1`).
	pub fn normalize_order(order: isize) -> usize {
		if order < 1 { 1 } else { order as usize }
	}

	/// The chain order `N`.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Read-only view of the transition table.
	pub fn chain(&self) -> &TransitionTable {
		&self.chain
	}

	/// Starts an unbounded generation run using the thread-local RNG.
	pub fn generate(&self) -> Generation<'_, ThreadRng> {
		self.generate_with(rand::rng(), GenerationInput::default())
	}

	/// Starts a generation run with an explicit random source and input.
	///
	/// Pass `&mut rng` to keep using the same generator afterwards.
	pub fn generate_with<R: Rng>(&self, rng: R, input: GenerationInput) -> Generation<'_, R> {
		Generation {
			model: self,
			window: Window::start(self.order),
			rng,
			limit: input.limit(),
			emitted: 0,
			finished: false,
			truncated: false,
			error: None,
		}
	}

	/// Runs a full generation, calling `callback` once per emitted character.
	///
	/// Returns the number of emitted characters.
	///
	/// # Errors
	/// Returns `ChainError::MissingWindow` if the table is inconsistent.
	pub fn each<F: FnMut(char)>(&self, callback: F) -> ChainResult<usize> {
		self.each_with(rand::rng(), GenerationInput::default(), callback)
	}

	/// Same as `each` with an explicit random source and input.
	pub fn each_with<R, F>(&self, rng: R, input: GenerationInput, mut callback: F) -> ChainResult<usize>
	where
		R: Rng,
		F: FnMut(char),
	{
		let mut generation = self.generate_with(rng, input);
		for c in generation.by_ref() {
			callback(c);
		}
		generation.finish()
	}

	/// Runs a full generation and collects it into a `String`.
	pub fn generate_string(&self) -> ChainResult<String> {
		let mut word = String::new();
		self.each(|c| word.push(c))?;
		Ok(word)
	}

	/// Draws the symbol following `window`.
	///
	/// # Errors
	/// Returns `ChainError::MissingWindow` if `window` is not a key of the table.
	fn step<R: Rng + ?Sized>(&self, window: &Window, rng: &mut R) -> ChainResult<Symbol> {
		self.chain
			.get(window.symbols())
			.and_then(|successors| successors.pick(rng))
			.ok_or_else(|| ChainError::MissingWindow { window: window.clone() })
	}
}

/// A lazy generation run over a `ChainModel`.
///
/// Yields characters until `NONWORD` is drawn, the optional cap from
/// `GenerationInput` is reached, or the table turns out to be inconsistent.
/// Dropping the iterator early is always safe.
///
/// After iteration, `finish` reports whether the run ended cleanly.
#[derive(Debug)]
pub struct Generation<'a, R> {
	model: &'a ChainModel,
	window: Window,
	rng: R,
	limit: Option<usize>,
	emitted: usize,
	finished: bool,
	truncated: bool,
	error: Option<ChainError>,
}

impl<'a, R: Rng> Generation<'a, R> {
	/// Current window of this run.
	pub fn window(&self) -> &Window {
		&self.window
	}

	/// Number of characters yielded so far.
	pub fn emitted(&self) -> usize {
		self.emitted
	}

	/// `true` once the run has ended, for any reason.
	pub fn is_finished(&self) -> bool {
		self.finished
	}

	/// `true` if the run was stopped by the `max_len` cap.
	pub fn truncated(&self) -> bool {
		self.truncated
	}

	/// Consumes the run and returns the number of emitted characters, or the
	/// error that stopped it.
	pub fn finish(self) -> ChainResult<usize> {
		match self.error {
			Some(error) => Err(error),
			None => Ok(self.emitted),
		}
	}
}

impl<'a, R: Rng> Iterator for Generation<'a, R> {
	type Item = char;

	fn next(&mut self) -> Option<char> {
		if self.finished {
			return None;
		}

		match self.model.step(&self.window, &mut self.rng) {
			// A run at the cap that draws NONWORD still ends normally
			Ok(Symbol::Char(_)) if self.limit.is_some_and(|limit| self.emitted >= limit) => {
				log::warn!("Generation stopped after {} characters (max_len reached)", self.emitted);
				self.truncated = true;
				self.finished = true;
				None
			}
			Ok(Symbol::Char(c)) => {
				log::trace!("{} -> {:?}", self.window, c);
				self.window.advance(Symbol::Char(c));
				self.emitted += 1;
				Some(c)
			}
			Ok(Symbol::NonWord) => {
				log::trace!("{} -> NONWORD, {} characters emitted", self.window, self.emitted);
				self.finished = true;
				None
			}
			Err(error) => {
				log::error!("{}", error);
				self.error = Some(error);
				self.finished = true;
				None
			}
		}
	}
}

impl<'a, R: Rng> FusedIterator for Generation<'a, R> {}
