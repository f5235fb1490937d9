/// Module for managing the original source text and the cursor's location within it.
pub mod source_buffer;

/// Module for splitting the source text into whitespace delimited words, or raw runs of characters
/// for string literals and comments.
pub mod tokenizing;
