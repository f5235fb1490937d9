use crate::{ add_native_word,
             runtime::{ error,
                        interpreter::Interpreter } };



/// Pop the top value and write it on its own line.
///
/// Signature: `value -- `
fn word_print(interpreter: &mut dyn Interpreter) -> error::Result<()>
{
    let value = interpreter.pop()?;

    writeln!(interpreter.output(), "{}", value)?;
    Ok(())
}


/// Write the whole stack without changing it, bottom first, after its depth.  Text is quoted so
/// it can be told apart from numbers.
///
/// Signature: ` -- `
fn word_print_stack(interpreter: &mut dyn Interpreter) -> error::Result<()>
{
    let mut line = format!("<{}>", interpreter.stack().len());

    for value in interpreter.stack()
    {
        line.push_str(&format!(" {:?}", value));
    }

    writeln!(interpreter.output(), "{}", line)?;
    Ok(())
}


/// Write the dictionary listing.
///
/// Signature: ` -- `
fn word_print_dictionary(interpreter: &mut dyn Interpreter) -> error::Result<()>
{
    let listing = interpreter.dictionary().to_string();

    write!(interpreter.output(), "{}", listing)?;
    Ok(())
}



/// Register the output words with the given interpreter.
pub fn register_io_words(interpreter: &mut dyn Interpreter)
{
    for name in [ "print", "." ]
    {
        add_native_word!(interpreter, name, word_print,
            "Pop the top value and print it.",
            "value -- ");
    }

    for name in [ "pstack", ".s" ]
    {
        add_native_word!(interpreter, name, word_print_stack,
            "Print the stack, bottom first.",
            " -- ");
    }

    for name in [ "words", ".w" ]
    {
        add_native_word!(interpreter, name, word_print_dictionary,
            "Print every word in the dictionary.",
            " -- ");
    }
}
