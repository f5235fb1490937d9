/// Words that do arithmetic on numbers.
mod simple_arithmetic_words;

/// Words that manipulate the active stack.
mod stack_words;

/// Words that create and access variables and constants.
mod variable_words;

/// Immediate words that read raw input, string literals and comments.
mod string_words;

/// Words that create new words.
mod word_creation_words;

use crate::runtime::{
    built_ins::base_words::{
        simple_arithmetic_words::register_simple_arithmetic_words,
        stack_words::register_stack_words, string_words::register_string_words,
        variable_words::register_variable_words,
        word_creation_words::register_word_creation_words,
    },
    interpreter::Interpreter,
};

/// Called to register all of the core words of the language.
pub fn register_base_words(interpreter: &mut dyn Interpreter) {
    register_stack_words(interpreter);
    register_simple_arithmetic_words(interpreter);
    register_variable_words(interpreter);
    register_string_words(interpreter);
    register_word_creation_words(interpreter);
}
