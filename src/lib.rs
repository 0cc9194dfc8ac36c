// Reusable library API — visible to both the CLI and integration tests
pub mod errors;
pub mod index;
pub mod log;
pub mod signature;
pub mod trie;
pub mod word_list;
