#![no_main]
use keyhuff::{Codebook, Symbol};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|weights: Vec<u16>| {
    if weights.is_empty() {
        return;
    }

    let symbols: Vec<Symbol> = weights
        .iter()
        .enumerate()
        .map(|(i, &w)| Symbol::new(format!("s{i}"), w as u64 + 1))
        .collect();

    let book = Codebook::new(&symbols).unwrap();
    assert_eq!(book.codes().len(), symbols.len());
    assert!(book.codes().is_prefix_free());
    assert_eq!(book.tree().internal_count(), symbols.len() - 1);
    assert!(book.stats().huffman_total_bits <= book.stats().fixed_total_bits);

    let message: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
    let bits = book.encode(&message).unwrap();
    assert_eq!(book.decode(&bits).unwrap(), message);
});
