use crate::{
    add_native_immediate_word,
    runtime::{error, interpreter::Interpreter},
};

/// Start the creation of a new word.  Pull the name of the word from the next word of input, then
/// switch to compiling.
///
/// Signature: ` -- `
fn word_start_word(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (location, name) = interpreter.next_word_required()?;

    interpreter.start_compiling(location, name);
    Ok(())
}

/// End the creation of a new word and register it with the interpreter.
///
/// Signature: ` -- `
fn word_end_word(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.stop_compiling()?;
    Ok(())
}

/// Register the word creation words with the interpreter.
pub fn register_word_creation_words(interpreter: &mut dyn Interpreter) {
    for name in [":", "def"] {
        add_native_immediate_word!(
            interpreter,
            name,
            word_start_word,
            "Start a new word definition.",
            " -- "
        );
    }

    for name in [";", "end"] {
        add_native_immediate_word!(
            interpreter,
            name,
            word_end_word,
            "End the definition of the newly created word.",
            " -- "
        );
    }
}
