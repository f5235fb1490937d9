use crate::{
    lang::source_buffer::SourceLocation,
    runtime::{
        data_structures::{
            cell_arena::{CellArena, CellId},
            dictionary::{Dictionary, WordDefinition, WordPtr, WordRuntime},
            value::Value,
        },
        error,
    },
};
use std::{
    fmt::{self, Display, Formatter},
    io::Write,
    rc::Rc,
};

pub mod scratch_interpreter;

/// A call stack item is a record of the executing word's name and the location within the source
/// text it was executed from.  These items are read-only and the fields are accessed by member
/// functions.
#[derive(Clone, Debug)]
pub struct CallItem {
    location: SourceLocation,
    word: String,
}

impl CallItem {
    /// Create a new call stack item.
    pub fn new(word: String, location: SourceLocation) -> CallItem {
        CallItem { location, word }
    }

    /// Where in the source text was the execution of this word found?
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    // The name of the word being executed.
    pub fn word(&self) -> &String {
        &self.word
    }
}

/// Make sure that this word can be nicely displayed to the user in event of an error.
impl Display for CallItem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.word)
    }
}

/// The words currently being executed, innermost last.
pub type CallStack = Vec<CallItem>;

/// The type used for both the data stack and the compile buffer.
pub type ValueStack = Vec<Value>;

/// Which of the two stacks is active, and so what happens to non-immediate words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Words execute as they are read.  The data stack is active.
    Interpreting,

    /// Words are appended to the compile buffer, which is the active stack.
    Compiling,
}

/// What a word from the source text turned out to be.
#[derive(Clone, Debug)]
pub enum Resolved {
    /// The word was found in the dictionary.
    Word(WordPtr),

    /// The word was not in the dictionary but parsed as a number.
    Number(f64),
}

/// Trait for managing the interpreter's active stack.  Intended to be called by words, all of
/// which operate on whichever stack is active at the time.
pub trait InterpreterStack {
    /// The active stack, bottom first.  The data stack while interpreting, the compile buffer
    /// while compiling.
    fn stack(&self) -> &ValueStack;

    /// The data stack, regardless of the current mode.
    fn data_stack(&self) -> &ValueStack;

    /// The compile buffer, regardless of the current mode.
    fn compile_buffer(&self) -> &ValueStack;

    /// Push a value onto the active stack.
    fn push(&mut self, value: Value);

    /// Pop a value from the active stack.  If the stack is empty a stack underflow error is
    /// returned.
    fn pop(&mut self) -> error::Result<Value>;

    /// Fail with a stack underflow unless the active stack holds at least `depth` values.  Words
    /// that take more than one value check first so a failure leaves the stack untouched.
    fn require_depth(&self, depth: usize) -> error::Result<()>;

    /// Pop the top value and require it to be a number.
    fn pop_as_number(&mut self) -> error::Result<f64>;

    /// Pop the top value and require it to be a variable cell reference.
    fn pop_as_cell(&mut self) -> error::Result<CellId>;

    /// Remove every value from the active stack.
    fn clear_stack(&mut self);
}

/// Trait for reading the source text being run and for switching between interpreting and
/// compiling.
///
/// The input functions are only meaningful while a run is in progress, that is from within words
/// that are being executed on behalf of `run`.
pub trait CodeManagement {
    /// Get the next word from the text being run, or None at the end of the text.
    fn next_word(&mut self) -> Option<(SourceLocation, String)>;

    /// Get the next word from the text being run.  Running out of text is an unexpected end of
    /// input error.
    fn next_word_required(&mut self) -> error::Result<(SourceLocation, String)>;

    /// Read the raw characters up to the delimiter.  The delimiter is consumed but not returned.
    fn next_chars_up_to(&mut self, delimiter: char) -> error::Result<String>;

    /// Are we interpreting or compiling?
    fn mode(&self) -> Mode;

    /// Switch to compiling a new word with the given name.  The compile buffer becomes the active
    /// stack.
    fn start_compiling(&mut self, location: SourceLocation, name: String);

    /// Turn the compile buffer into a word bound to the pending name and switch back to
    /// interpreting.
    fn stop_compiling(&mut self) -> error::Result<WordPtr>;

    /// Run a piece of text, using `<run>` to tag its locations.
    fn run(&mut self, source: &str) -> error::Result<()> {
        self.process_source("<run>", source)
    }

    /// Run a piece of text with its own lexer.  The path is used to represent the text in error
    /// locations.  Any lexer already in use is suspended until this text is done.
    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()>;

    /// Read a file and run its contents as a single piece of text.
    fn process_source_file(&mut self, path: &str) -> error::Result<()>;

    /// Execute the body of a compiled word.  Word references are executed, every other value is
    /// pushed onto the active stack.
    fn execute_code(&mut self, body: &[Value]) -> error::Result<()>;
}

/// Definition of a word handler function.  This is the function that is called when a native word
/// is executed.  Can be a lambda, a callable object or a Rust function.
pub type WordHandler = dyn Fn(&mut dyn Interpreter) -> error::Result<()>;

/// Simplify registering a native regular word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word to
/// register.  The word function handler to execute for the word.  A simple description of the word.
/// As well as the word's stack signature.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        use std::rc::Rc;
        use $crate::runtime::data_structures::dictionary::{WordDefinition, WordRuntime};

        $interpreter.add_word(
            $crate::location_here!(),
            $name,
            WordRuntime::Normal,
            WordDefinition::Native(Rc::new($function)),
            $description,
            $signature,
        )
    }};
}

/// Simplify registering a native immediate word with the interpreter.  That is, this word is
/// executed as soon as it is read, even in the middle of compiling a definition.
///
/// Takes the same parameters as `add_native_word!`.
#[macro_export]
macro_rules! add_native_immediate_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        use std::rc::Rc;
        use $crate::runtime::data_structures::dictionary::{WordDefinition, WordRuntime};

        $interpreter.add_word(
            $crate::location_here!(),
            $name,
            WordRuntime::Immediate,
            WordDefinition::Native(Rc::new($function)),
            $description,
            $signature,
        )
    }};
}

/// Trait for managing and executing words known to the interpreter.
pub trait WordManagement {
    /// If currently set, the location of the word most recently read from the source text.
    fn current_location(&self) -> &Option<SourceLocation>;

    /// Add a word to the dictionary, replacing any word of the same name.  The name is uppercased.
    fn add_word(
        &mut self,
        location: SourceLocation,
        name: &str,
        runtime: WordRuntime,
        definition: WordDefinition,
        description: &str,
        signature: &str,
    ) -> WordPtr;

    /// Register a native word.  This is the same path the built-in words take, and is how a host
    /// extends the interpreter.
    fn define(&mut self, name: &str, runtime: WordRuntime, handler: Rc<WordHandler>) -> WordPtr {
        let location = self.current_location().clone().unwrap_or_default();

        self.add_word(
            location,
            name,
            runtime,
            WordDefinition::Native(handler),
            "Host defined word.",
            "",
        )
    }

    /// Find a word in the dictionary by name, ignoring case.
    fn find_word(&self, name: &str) -> Option<&WordPtr>;

    /// Resolve a word from the source text to either a dictionary word or a number.  Anything else
    /// is an unknown word error.
    fn resolve(&self, token: &str) -> error::Result<Resolved>;

    /// Execute a word.  The location is where the word was executed from.
    fn execute_word(&mut self, location: &SourceLocation, word: &WordPtr) -> error::Result<()>;

    /// Find and execute a word by name.  Use the macro `location_here!()` for the location if the
    /// word is executed from native code.
    fn execute_word_named(&mut self, location: &SourceLocation, name: &str) -> error::Result<()>;

    /// The current word execution call stack.
    fn call_stack(&self) -> &CallStack;
}

/// Core interpreter trait.
///
/// Brings together stack management, source and compile state management, and word management
/// along with the variable cells, the dictionary and the output sink.
pub trait Interpreter: InterpreterStack + CodeManagement + WordManagement {
    /// The storage cells of every variable created so far.
    fn cells(&self) -> &CellArena;

    /// Allocate a new variable cell.
    fn new_cell(&mut self, initial: Value) -> CellId;

    /// Read the current contents of a variable cell.
    fn read_cell(&self, cell: CellId) -> error::Result<Value>;

    /// Replace the contents of a variable cell.
    fn write_cell(&mut self, cell: CellId, value: Value) -> error::Result<()>;

    /// The current word dictionary of words known to the interpreter.
    fn dictionary(&self) -> &Dictionary;

    /// Where `print` and friends write to.
    fn output(&mut self) -> &mut dyn Write;
}
