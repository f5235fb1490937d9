
use std::{ error::Error,
           process::Termination,
           fmt::{ self, Debug, Display, Formatter }, process::ExitCode };
use crate::{ runtime::interpreter::CallStack,
             lang::source_buffer::SourceLocation };

use super::interpreter::Interpreter;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// The kinds of failure a Scratch script can run into.  Every one of them aborts the current run.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ErrorKind
{
    /// The word is neither in the dictionary nor a number.  Holds the uppercased word.
    #[error("Unknown word: [{0}]")]
    UnknownWord(String),

    /// A word needed more values than the active stack holds.
    #[error("Stack underflow.")]
    StackUnderflow,

    /// A name, string literal or comment ran off the end of the input.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,

    /// A word was handed a value of the wrong kind, like `@` on a number.
    #[error("Type mismatch: expected {expected}, found {found}.")]
    TypeMismatch
    {
        expected: &'static str,
        found: String
    },

    /// A word definition was closed without one being open.
    #[error("Not compiling a word definition.")]
    NotCompiling,

    /// The output sink or a script file failed.
    #[error("I/O error: {0}")]
    Io(String)
}



/// Any error that occurs during the execution of a Scratch script.
#[derive(Clone)]
pub struct ScriptError
{
    /// The location in the source text the error occurred, if available.
    location: Option<SourceLocation>,

    /// What went wrong.
    kind: ErrorKind,

    /// The words being executed at the time of the error, if available.
    call_stack: Option<CallStack>
}


impl Error for ScriptError
{
}


/// When returned from main, convert the error result to an operating system exit code.
impl Termination for ScriptError
{
    /// Because this type represents an error, the exit code is always FAILURE.
    fn report(self) -> ExitCode
    {
        eprintln!("Error: {}", self);
        ExitCode::FAILURE
    }
}


impl Display for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match &self.location
        {
            Some(location) => write!(f, "{}: {}", location, self.kind)?,
            None => write!(f, "{}", self.kind)?
        }

        if let Some(call_stack) = &self.call_stack
            && !call_stack.is_empty()
        {
            write!(f, "\n\nCall stack\n")?;

            for item in call_stack.iter().rev()
            {
                writeln!(f, "  {}", item)?;
            }
        }

        Ok(())
    }
}


impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl ScriptError
{
    /// Create a new ScriptError.
    pub fn new(location: Option<SourceLocation>,
               kind: ErrorKind,
               call_stack: Option<CallStack>) -> ScriptError
    {
        ScriptError
            {
                location,
                kind,
                call_stack
            }
    }

    /// Create a new Script Error and wrap it in a Result::Err.
    pub fn new_as_result<T>(location: Option<SourceLocation>,
                            kind: ErrorKind,
                            call_stack: Option<CallStack>) -> Result<T>
    {
        Err(ScriptError::new(location, kind, call_stack))
    }

    /// If available, the location in the source text the error occurred.
    pub fn location(&self) -> &Option<SourceLocation>
    {
        &self.location
    }

    /// What kind of error this is.
    pub fn kind(&self) -> &ErrorKind
    {
        &self.kind
    }

    /// If available, the words being executed at the time of the error.
    pub fn call_stack(&self) -> &Option<CallStack>
    {
        &self.call_stack
    }
}


impl From<std::io::Error> for ScriptError
{
    fn from(error: std::io::Error) -> ScriptError
    {
        ScriptError::new(None, ErrorKind::Io(error.to_string()), None)
    }
}



/// Create a ScriptError wrapped in a Result::Err, using the interpreter's current location and
/// call stack.
pub fn script_error<T>(interpreter: &dyn Interpreter, kind: ErrorKind) -> Result<T>
{
    let location = interpreter.current_location().clone();
    let call_stack = interpreter.call_stack().clone();

    ScriptError::new_as_result(location, kind, Some(call_stack))
}



/// Shorthand for reporting a value of the wrong variant.
pub fn type_mismatch<T>(interpreter: &dyn Interpreter,
                        expected: &'static str,
                        found: &impl Display) -> Result<T>
{
    script_error(interpreter, ErrorKind::TypeMismatch { expected, found: found.to_string() })
}
