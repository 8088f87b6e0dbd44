//! Build script to generate embedded word lists
//!
//! Reads whitespace-separated word files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words-5.txt",
        &Path::new(&out_dir).join("words_5.rs"),
        "WORDS_5",
        "Five-letter candidate words",
    );

    generate_word_list(
        "data/starting-words-5.txt",
        &Path::new(&out_dir).join("starting_words_5.rs"),
        "STARTING_WORDS_5",
        "Five-letter opening words",
    );

    println!("cargo:rerun-if-changed=data/words-5.txt");
    println!("cargo:rerun-if-changed=data/starting-words-5.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
