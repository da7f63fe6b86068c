//! Embeds the default ladder dictionary
//!
//! `data/words.txt` holds one word per line. The script writes
//! `OUT_DIR/words.rs` with a `WORDS` slice and its `WORDS_COUNT`, which
//! `src/wordlists/embedded.rs` pulls in with `include!`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const DICTIONARY: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={DICTIONARY}");

    let content = fs::read_to_string(DICTIONARY)
        .unwrap_or_else(|e| panic!("cannot read {DICTIONARY}: {e}"));

    // CRLF checkouts leave '\r' behind; blank lines carry no word
    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    let mut source = String::new();
    source.push_str("// Generated from data/words.txt by build.rs\n\n");
    source.push_str("/// Default ladder dictionary: common three and four letter English words\n");
    source.push_str("pub const WORDS: &[&str] = &[\n");
    for entry in &entries {
        let _ = writeln!(source, "    {entry:?},");
    }
    source.push_str("];\n\n");
    source.push_str("/// Number of entries in `WORDS`\n");
    let _ = writeln!(source, "pub const WORDS_COUNT: usize = {};", entries.len());

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR: {e}")));
    let target = out_dir.join("words.rs");
    fs::write(&target, source)
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));
}
