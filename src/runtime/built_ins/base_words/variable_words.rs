use crate::{
    add_native_immediate_word, add_native_word,
    runtime::{
        data_structures::{
            dictionary::{WordDefinition, WordRuntime},
            value::Value,
        },
        error,
        interpreter::Interpreter,
    },
};

/// Read the next word of input and make it a new variable.  Every variable gets its own cell, which
/// starts out holding zero.
///
/// Signature: ` -- `
fn word_var(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (location, name) = interpreter.next_word_required()?;
    let cell = interpreter.new_cell(Value::Number(0.0));

    interpreter.add_word(
        location,
        &name,
        WordRuntime::Normal,
        WordDefinition::Variable(cell),
        &format!("Access the cell for variable {}.", name),
        " -- variable",
    );

    Ok(())
}

/// Read the next word of input and bind it to the value on top of the stack.
///
/// Signature: `value -- `
fn word_const(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.require_depth(1)?;

    let (location, name) = interpreter.next_word_required()?;
    let value = interpreter.pop()?;

    interpreter.add_word(
        location,
        &name,
        WordRuntime::Normal,
        WordDefinition::Constant(value),
        &format!("Push the value of constant {}.", name),
        " -- value",
    );

    Ok(())
}

/// Store the second value into the variable on top of the stack.
///
/// Signature: `value variable -- `
fn word_store(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.require_depth(2)?;

    let cell = interpreter.pop_as_cell()?;
    let value = interpreter.pop()?;

    interpreter.write_cell(cell, value)
}

/// Replace the variable on top of the stack with its current value.
///
/// Signature: `variable -- value`
fn word_fetch(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let cell = interpreter.pop_as_cell()?;
    let value = interpreter.read_cell(cell)?;

    interpreter.push(value);
    Ok(())
}

/// Register the variable and constant words.
pub fn register_variable_words(interpreter: &mut dyn Interpreter) {
    add_native_immediate_word!(
        interpreter,
        "var",
        word_var,
        "Define the next word as a new variable.",
        " -- "
    );

    add_native_immediate_word!(
        interpreter,
        "const",
        word_const,
        "Define the next word as a constant holding the top value.",
        "value -- "
    );

    for name in ["store", "!"] {
        add_native_word!(
            interpreter,
            name,
            word_store,
            "Store a value into a variable.",
            "value variable -- "
        );
    }

    for name in ["fetch", "@"] {
        add_native_word!(
            interpreter,
            name,
            word_fetch,
            "Read the current value of a variable.",
            "variable -- value"
        );
    }
}
