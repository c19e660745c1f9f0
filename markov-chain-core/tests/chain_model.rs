use std::collections::HashMap;

use markov_chain_core::{ChainModel, GenerationInput, Symbol, Window};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn c(ch: char) -> Symbol {
	Symbol::Char(ch)
}

const NW: Symbol = Symbol::NonWord;

fn successors(model: &ChainModel, window: &[Symbol]) -> Vec<Symbol> {
	model
		.chain()
		.get(window)
		.unwrap_or_else(|| panic!("missing window {:?}", window))
		.as_slice()
		.to_vec()
}

fn sorted(mut symbols: Vec<Symbol>) -> Vec<Symbol> {
	symbols.sort();
	symbols
}

#[test]
fn single_char_input() {
	let model = ChainModel::new("a", 1);
	assert_eq!(model.order(), 1);
	assert_eq!(model.chain().len(), 2);
	assert_eq!(successors(&model, &[NW]), vec![c('a')]);
	assert_eq!(successors(&model, &[c('a')]), vec![NW]);

	let mut rng = StdRng::seed_from_u64(1);
	for _ in 0..20 {
		let out: String = model.generate_with(&mut rng, GenerationInput::default()).collect();
		assert_eq!(out, "a");
	}
}

#[test]
fn empty_input() {
	let model = ChainModel::new("", 1);
	assert_eq!(model.chain().len(), 1);
	assert_eq!(successors(&model, &[NW]), vec![NW]);

	let mut calls = 0;
	let emitted = model.each(|_| calls += 1).unwrap();
	assert_eq!(emitted, 0);
	assert_eq!(calls, 0);
}

#[test]
fn aab_order_one() {
	let model = ChainModel::new("aab", 1);
	assert_eq!(model.chain().len(), 3);
	assert_eq!(successors(&model, &[NW]), vec![c('a')]);
	assert_eq!(successors(&model, &[c('a')]), vec![c('a'), c('b')]);
	assert_eq!(successors(&model, &[c('b')]), vec![NW]);

	// Every run is some number of 'a' followed by a single 'b'
	let mut rng = StdRng::seed_from_u64(5);
	let mut seen_short = false;
	let mut seen_long = false;
	for _ in 0..200 {
		let out: String = model.generate_with(&mut rng, GenerationInput::default()).collect();
		assert!(out.ends_with('b'), "unexpected output {:?}", out);
		let prefix = &out[..out.len() - 1];
		assert!(!prefix.is_empty() && prefix.chars().all(|ch| ch == 'a'));
		seen_short |= out == "ab";
		seen_long |= out == "aab";
	}
	assert!(seen_short && seen_long);
}

#[test]
fn abab_order_two() {
	let model = ChainModel::new("abab", 2);
	assert_eq!(model.order(), 2);
	for (window, successors) in model.chain().iter() {
		assert_eq!(window.len(), 2);
		assert!(!successors.is_empty(), "empty entry for {}", window);
	}

	assert_eq!(successors(&model, &[NW, NW]), vec![c('a')]);
	assert_eq!(successors(&model, &[NW, c('a')]), vec![c('b')]);
	assert_eq!(successors(&model, &[c('a'), c('b')]), vec![c('a'), NW]);
	assert_eq!(successors(&model, &[c('b'), c('a')]), vec![c('b')]);
	assert_eq!(model.chain().len(), 4);

	// The terminal marker hangs off ('a', 'b') only
	let terminal: Vec<&Window> = model
		.chain()
		.iter()
		.filter(|(_, s)| s.count(NW) > 0)
		.map(|(w, _)| w)
		.collect();
	assert_eq!(terminal.len(), 1);
	assert_eq!(terminal[0].symbols(), &[c('a'), c('b')]);
}

#[test]
fn order_is_normalized() {
	let text = "the quick brown fox";
	let reference = ChainModel::new(text, 1);
	for order in [0, -1, -42] {
		let model = ChainModel::new(text, order);
		assert_eq!(model.order(), 1);
		assert_eq!(model.chain(), reference.chain());
	}
}

#[test]
fn structure_is_deterministic() {
	let text = "abracadabra, said the magician";
	for order in 1..5 {
		let a = ChainModel::new(text, order);
		let b = ChainModel::new(text, order);
		assert_eq!(a.chain().len(), b.chain().len());
		for (window, successors) in a.chain().iter() {
			let other = b.chain().get(window.symbols()).expect("same key set");
			assert_eq!(
				sorted(successors.as_slice().to_vec()),
				sorted(other.as_slice().to_vec())
			);
		}
	}
}

#[test]
fn frequency_fidelity() {
	let text = "she sells sea shells by the sea shore";
	let chars: Vec<char> = text.chars().collect();
	for order in 1..4usize {
		let model = ChainModel::new(text, order as isize);

		// Expected multisets computed independently from the padded text
		let mut padded = vec![NW; order];
		padded.extend(chars.iter().copied().map(Symbol::Char));
		padded.push(NW);
		let mut expected: HashMap<Vec<Symbol>, Vec<Symbol>> = HashMap::new();
		for i in 0..padded.len() - order {
			expected
				.entry(padded[i..i + order].to_vec())
				.or_default()
				.push(padded[i + order]);
		}

		assert_eq!(model.chain().len(), expected.len());
		for (window, next) in expected {
			assert_eq!(sorted(successors(&model, &window)), sorted(next));
		}

		let terminals: usize = model.chain().iter().map(|(_, s)| s.count(NW)).sum();
		assert_eq!(terminals, 1);
	}
}

#[test]
fn seeded_runs_terminate_and_follow_table() {
	let text = "to be or not to be that is the question";
	for order in 1..4 {
		let model = ChainModel::new(text, order);
		let mut rng = StdRng::seed_from_u64(order as u64);
		for _ in 0..200 {
			let mut window = Window::from_symbols(vec![NW; model.order()]).unwrap();
			let mut generation = model.generate_with(&mut rng, GenerationInput::default());
			for ch in generation.by_ref() {
				assert!(successors(&model, window.symbols()).contains(&c(ch)));
				window.advance(c(ch));
			}
			assert!(generation.finish().is_ok());
			assert!(successors(&model, window.symbols()).contains(&NW));
		}
	}
}

#[test]
fn same_seed_same_output() {
	let model = ChainModel::new("mississippi river", 1);
	let input = GenerationInput::default().with_max_len(500);
	let a: String = model.generate_with(StdRng::seed_from_u64(99), input).collect();
	let b: String = model.generate_with(StdRng::seed_from_u64(99), input).collect();
	assert_eq!(a, b);
}

#[test]
fn interleaved_runs_are_isolated() {
	let model = ChainModel::new("banana bandana cabana", 2);
	let input = GenerationInput::default().with_max_len(1000);

	let solo_a: String = model.generate_with(StdRng::seed_from_u64(1), input).collect();
	let solo_b: String = model.generate_with(StdRng::seed_from_u64(2), input).collect();

	let mut run_a = model.generate_with(StdRng::seed_from_u64(1), input);
	let mut run_b = model.generate_with(StdRng::seed_from_u64(2), input);
	let mut out_a = String::new();
	let mut out_b = String::new();
	loop {
		let next_a = run_a.next();
		let next_b = run_b.next();
		if let Some(ch) = next_a {
			out_a.push(ch);
		}
		if let Some(ch) = next_b {
			out_b.push(ch);
		}
		if next_a.is_none() && next_b.is_none() {
			break;
		}
	}

	assert_eq!(out_a, solo_a);
	assert_eq!(out_b, solo_b);
}

#[test]
fn each_reports_every_character_in_order() {
	let model = ChainModel::new("deterministic", 3);
	let mut out = Vec::new();
	let emitted = model
		.each_with(StdRng::seed_from_u64(0), GenerationInput::default(), |ch| out.push(ch))
		.unwrap();
	assert_eq!(emitted, out.len());
	assert_eq!(out.into_iter().collect::<String>(), "deterministic");
}

#[test]
fn early_stop_leaves_model_usable() {
	let model = ChainModel::new("abcabcabd", 1);
	let mut generation = model.generate();
	let _ = generation.next();
	drop(generation);
	let out = model.generate_string().unwrap();
	assert!(out.starts_with('a'));
}

#[test]
fn multibyte_characters() {
	let model = ChainModel::new("日本語", 1);
	assert_eq!(successors(&model, &[c('日')]), vec![c('本')]);
	assert_eq!(model.generate_string().unwrap(), "日本語");
}
