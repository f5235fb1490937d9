/// All of the core data structures used by the Scratch interpreter.
pub mod data_structures;

/// Module for defining the built-in native words that are available to the Scratch interpreter.
pub mod built_ins;

/// Module for defining the error reporting of the Scratch interpreter.
pub mod error;

/// Module for defining the core functionality of the Scratch interpreter.  This includes the
/// interpret/compile state machine and the tools for examining the interpreter's state.
pub mod interpreter;
