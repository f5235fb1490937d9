#![allow(dead_code)]

use scratch::runtime::data_structures::value::Value;
use scratch::runtime::error::Result;
use scratch::runtime::interpreter::scratch_interpreter::ScratchInterpreter;
use scratch::runtime::interpreter::{CodeManagement, InterpreterStack};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// An output sink that keeps everything written to it, shared with the test so the interpreter's
/// output can be checked after a run.
#[derive(Clone, Default)]
pub struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(|line| line.to_string()).collect()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A fresh interpreter whose output is captured.
pub fn new_interpreter() -> (ScratchInterpreter, SharedOutput) {
    let output = SharedOutput::default();
    let interpreter = ScratchInterpreter::with_output(Box::new(output.clone()));

    (interpreter, output)
}

/// The data stack as numbers, bottom first.  Panics on anything that isn't a number.
pub fn numbers(interpreter: &ScratchInterpreter) -> Vec<f64> {
    interpreter
        .data_stack()
        .iter()
        .map(|value| match value {
            Value::Number(number) => *number,
            other => panic!("Expected a number on the stack, found {:?}.", other),
        })
        .collect()
}

/// Run the text in a fresh interpreter and return the resulting data stack as numbers.
pub fn eval_and_stack(text: &str) -> Result<Vec<f64>> {
    let (mut interpreter, _) = new_interpreter();

    interpreter.run(text)?;
    Ok(numbers(&interpreter))
}

/// Run the text in a fresh interpreter and return everything it printed.
pub fn eval_and_output(text: &str) -> Result<String> {
    let (mut interpreter, output) = new_interpreter();

    interpreter.run(text)?;
    Ok(output.contents())
}
