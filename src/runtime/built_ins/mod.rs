/// The core words of the language.
pub mod base_words;

/// Words that write to the interpreter's output.
pub mod io_words;
