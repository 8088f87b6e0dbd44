//! Word lists compiled into the binary at build time

include!(concat!(env!("OUT_DIR"), "/words_5.rs"));
include!(concat!(env!("OUT_DIR"), "/starting_words_5.rs"));
