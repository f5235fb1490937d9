/// Module contains the Value enumeration, the tagged value that lives on the interpreter's stacks
/// and inside variables, constants and compiled words.
pub mod value;

/// The storage cells backing the interpreter's variables.
pub mod cell_arena;

/// The dictionary module provides the core interpreter word dictionary used by the Scratch
/// interpreter.
pub mod dictionary;
