/// Parameters controlling a single generation run.
///
/// Built with `GenerationInput::default()` and adjusted with the `with_*`
/// helpers or by setting the public fields directly.
///
/// # Fields
/// - `max_len`: maximum number of symbols a run may emit. `0` means no limit;
///   the run then only stops when `NONWORD` is drawn.
///
/// A cap only matters for chains that can loop for a long time (e.g. `"abab"`
/// at order 1). A run stopped by the cap is reported as truncated by the
/// `Generation` iterator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationInput {
	/// Maximum number of emitted symbols (0 = unbounded).
	pub max_len: usize,
}

impl GenerationInput {
	/// Sets the safety cap.
	pub fn with_max_len(mut self, max_len: usize) -> Self {
		self.max_len = max_len;
		self
	}

	/// Returns the cap, or `None` when unbounded.
	pub fn limit(&self) -> Option<usize> {
		if self.max_len == 0 { None } else { Some(self.max_len) }
	}
}
