use crate::{
    add_native_immediate_word,
    runtime::{data_structures::value::ToValue, error, interpreter::Interpreter},
};

/// Read the raw text up to the closing quote and push it.  While compiling the text ends up in the
/// word being defined.
///
/// Signature: ` -- text`
fn word_string(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let text = interpreter.next_chars_up_to('"')?;

    interpreter.push(text.to_value());
    Ok(())
}

/// Skip whole words until one ends with `*/`.
///
/// Signature: ` -- `
fn word_block_comment(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    loop {
        let (_, word) = interpreter.next_word_required()?;

        if word.ends_with("*/") {
            return Ok(());
        }
    }
}

/// Skip the raw text up to the closing parenthesis.
///
/// Signature: ` -- `
fn word_paren_comment(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.next_chars_up_to(')')?;
    Ok(())
}

/// Skip the rest of the line.
///
/// Signature: ` -- `
fn word_line_comment(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.next_chars_up_to('\n')?;
    Ok(())
}

/// Register the string literal and comment words.  They are all immediate so they work the same
/// inside and outside of word definitions.
pub fn register_string_words(interpreter: &mut dyn Interpreter) {
    add_native_immediate_word!(
        interpreter,
        "\"",
        word_string,
        "Read text up to the next \" and push it.",
        " -- text"
    );

    add_native_immediate_word!(
        interpreter,
        "/*",
        word_block_comment,
        "Comment, skip words until one ends with */.",
        " -- "
    );

    add_native_immediate_word!(
        interpreter,
        "(",
        word_paren_comment,
        "Comment, skip text up to the next ).",
        " -- "
    );

    add_native_immediate_word!(
        interpreter,
        "//",
        word_line_comment,
        "Comment, skip the rest of the line.",
        " -- "
    );
}
