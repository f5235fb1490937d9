use crate::{
    add_native_word,
    runtime::{data_structures::value::ToValue, error, interpreter::Interpreter},
};

/// Helper function to handle binary math operations.  Both operands are checked for before
/// anything is popped.  The second value pushed is the right hand side of the operation.
fn math_op(interpreter: &mut dyn Interpreter, fop: fn(f64, f64) -> f64) -> error::Result<()> {
    interpreter.require_depth(2)?;

    let b = interpreter.pop_as_number()?;
    let a = interpreter.pop_as_number()?;

    interpreter.push(fop(a, b).to_value());
    Ok(())
}

/// Division by zero is not an error, it gives an infinity or NaN as usual for floats.
fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    math_op(interpreter, |a, b| a / b)
}

/// The square root of a negative number is NaN.
fn word_sqrt(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = interpreter.pop_as_number()?;

    interpreter.push(a.sqrt().to_value());
    Ok(())
}

pub fn register_simple_arithmetic_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "+",
        |interpreter: &mut dyn Interpreter| math_op(interpreter, |a, b| a + b),
        "Add the top two numbers.",
        "a b -- a+b"
    );

    add_native_word!(
        interpreter,
        "-",
        |interpreter: &mut dyn Interpreter| math_op(interpreter, |a, b| a - b),
        "Subtract the top number from the second.",
        "a b -- a-b"
    );

    add_native_word!(
        interpreter,
        "*",
        |interpreter: &mut dyn Interpreter| math_op(interpreter, |a, b| a * b),
        "Multiply the top two numbers.",
        "a b -- a*b"
    );

    add_native_word!(
        interpreter,
        "/",
        word_divide,
        "Divide the second number by the top one.",
        "a b -- a/b"
    );

    add_native_word!(
        interpreter,
        "sqrt",
        word_sqrt,
        "Replace the top number with its square root.",
        "a -- sqrt(a)"
    );
}
