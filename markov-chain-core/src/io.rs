use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ChainResult;

/// Reads a whole text file into memory.
///
/// Line endings are kept as-is: they are characters like any other for the
/// chain.
pub fn read_text<P: AsRef<Path>>(filename: P) -> ChainResult<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)?.read_to_string(&mut contents)?;
	log::debug!("Read {} characters from {}", contents.chars().count(), path.display());
	Ok(contents)
}
