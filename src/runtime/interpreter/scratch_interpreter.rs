use std::{ fs::read_to_string,
           io::{ stdout, Write },
           rc::Rc };
use tracing::{ debug, trace, warn };
use crate::{ location_here,
             lang::{ source_buffer::SourceLocation,
                     tokenizing::Lexer },
             runtime::{ built_ins::{ base_words::register_base_words,
                                     io_words::register_io_words },
                        data_structures::{ cell_arena::{ CellArena,
                                                         CellId },
                                           dictionary::{ Dictionary,
                                                         WordDefinition,
                                                         WordInfo,
                                                         WordPtr,
                                                         WordRuntime },
                                           value::Value },
                        error::{ self,
                                 script_error,
                                 type_mismatch,
                                 ErrorKind,
                                 ScriptError },
                        interpreter::{ CallItem,
                                       CallStack,
                                       CodeManagement,
                                       Interpreter,
                                       InterpreterStack,
                                       Mode,
                                       Resolved,
                                       ValueStack,
                                       WordManagement } } };



/// The name and location of the word currently being compiled.
struct PendingDefinition
{
    location: SourceLocation,
    name: String
}



/// The core interpreter implementation for the Scratch language.
pub struct ScratchInterpreter
{
    /// The stack words operate on while interpreting.
    data_stack: ValueStack,

    /// The body of the word being defined, the active stack while compiling.
    compile_buffer: ValueStack,

    /// Which of the two stacks is active.
    mode: Mode,

    /// Set between `:` and `;`.
    pending: Option<PendingDefinition>,


    /// The location of the word most recently read from the source text.
    current_location: Option<SourceLocation>,

    /// The words currently executing, used to give errors some context.
    call_stack: CallStack,


    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary,

    /// Storage for every variable defined so far.
    cells: CellArena,


    /// One lexer per `run` in progress.  Only the last one is read from, the others belong to runs
    /// suspended by a nested call to `run`.
    lexers: Vec<Lexer>,

    /// Where `print` and `pstack` write to.
    output: Box<dyn Write>
}


impl Interpreter for ScratchInterpreter
{
    fn cells(&self) -> &CellArena
    {
        &self.cells
    }

    fn new_cell(&mut self, initial: Value) -> CellId
    {
        self.cells.allocate(initial)
    }

    fn read_cell(&self, cell: CellId) -> error::Result<Value>
    {
        match self.cells.get(cell)
        {
            Some(value) => Ok(value.clone()),
            None => type_mismatch(self, "variable", &cell)
        }
    }

    fn write_cell(&mut self, cell: CellId, value: Value) -> error::Result<()>
    {
        match self.cells.get_mut(cell)
        {
            Some(slot) =>
                {
                    *slot = value;
                    Ok(())
                },

            None => type_mismatch(self, "variable", &cell)
        }
    }

    fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    fn output(&mut self) -> &mut dyn Write
    {
        &mut *self.output
    }
}


impl InterpreterStack for ScratchInterpreter
{
    fn stack(&self) -> &ValueStack
    {
        match self.mode
        {
            Mode::Interpreting => &self.data_stack,
            Mode::Compiling    => &self.compile_buffer
        }
    }

    fn data_stack(&self) -> &ValueStack
    {
        &self.data_stack
    }

    fn compile_buffer(&self) -> &ValueStack
    {
        &self.compile_buffer
    }

    fn push(&mut self, value: Value)
    {
        self.active_stack_mut().push(value);
    }

    fn pop(&mut self) -> error::Result<Value>
    {
        match self.active_stack_mut().pop()
        {
            Some(value) => Ok(value),
            None => script_error(self, ErrorKind::StackUnderflow)
        }
    }

    fn require_depth(&self, depth: usize) -> error::Result<()>
    {
        if self.stack().len() < depth
        {
            script_error(self, ErrorKind::StackUnderflow)?;
        }

        Ok(())
    }

    fn pop_as_number(&mut self) -> error::Result<f64>
    {
        match self.pop()?
        {
            Value::Number(number) => Ok(number),
            other => type_mismatch(self, "number", &other.type_name())
        }
    }

    fn pop_as_cell(&mut self) -> error::Result<CellId>
    {
        match self.pop()?
        {
            Value::Cell(cell) => Ok(cell),
            other => type_mismatch(self, "variable", &other.type_name())
        }
    }

    fn clear_stack(&mut self)
    {
        self.active_stack_mut().clear();
    }
}


impl CodeManagement for ScratchInterpreter
{
    fn next_word(&mut self) -> Option<( SourceLocation, String )>
    {
        self.lexers.last_mut()?.next_word()
    }

    fn next_word_required(&mut self) -> error::Result<( SourceLocation, String )>
    {
        match self.next_word()
        {
            Some(found) => Ok(found),
            None => script_error(self, ErrorKind::UnexpectedEndOfInput)
        }
    }

    fn next_chars_up_to(&mut self, delimiter: char) -> error::Result<String>
    {
        let result =
            match self.lexers.last_mut()
            {
                Some(lexer) => lexer.next_chars_up_to(delimiter),
                None => return script_error(self, ErrorKind::UnexpectedEndOfInput)
            };

        // The lexer knows where the unterminated text started, add the call stack to that.
        result.map_err(|error|
            {
                ScriptError::new(error.location().clone(),
                                 error.kind().clone(),
                                 Some(self.call_stack.clone()))
            })
    }

    fn mode(&self) -> Mode
    {
        self.mode
    }

    fn start_compiling(&mut self, location: SourceLocation, name: String)
    {
        debug!(%name, %location, "Compiling new word.");

        self.pending = Some(PendingDefinition { location, name });
        self.mode = Mode::Compiling;
    }

    fn stop_compiling(&mut self) -> error::Result<WordPtr>
    {
        let Some(pending) = self.pending.take()
        else
        {
            return script_error(self, ErrorKind::NotCompiling);
        };

        let body = std::mem::take(&mut self.compile_buffer);
        self.mode = Mode::Interpreting;

        debug!(name = %pending.name, length = body.len(), "Finished compiling word.");

        Ok(self.add_word(pending.location,
                         &pending.name,
                         WordRuntime::Normal,
                         WordDefinition::Compiled(body),
                         "User defined word.",
                         ""))
    }

    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()>
    {
        self.lexers.push(Lexer::new(path, source));

        let result = self.process_words();

        let _ = self.lexers.pop();
        result
    }

    fn process_source_file(&mut self, path: &str) -> error::Result<()>
    {
        let source = match read_to_string(path)
            {
                Ok(source) => source,
                Err(error) =>
                    {
                        return ScriptError::new_as_result(None,
                                                          ErrorKind::Io(format!("Could not read \
                                                                                 file {}: {}",
                                                                                path,
                                                                                error)),
                                                          None);
                    }
            };

        self.process_source(path, &source)
    }

    fn execute_code(&mut self, body: &[Value]) -> error::Result<()>
    {
        let location = self.current_location.clone().unwrap_or_else(|| location_here!());

        for item in body
        {
            match item
            {
                Value::Word(word) => self.execute_word(&location, word)?,
                literal => self.push(literal.clone())
            }
        }

        Ok(())
    }
}


impl WordManagement for ScratchInterpreter
{
    fn current_location(&self) -> &Option<SourceLocation>
    {
        &self.current_location
    }

    fn add_word(&mut self,
                location: SourceLocation,
                name: &str,
                runtime: WordRuntime,
                definition: WordDefinition,
                description: &str,
                signature: &str) -> WordPtr
    {
        let name = name.to_uppercase();
        let is_native = matches!(definition, WordDefinition::Native(_));

        let mut word_info = WordInfo::new(location, name.clone(), runtime, definition);

        word_info.description = description.to_string();
        word_info.signature = signature.to_string();

        let word = Rc::new(word_info);

        if let Some(previous) = self.dictionary.insert(word.clone())
            && matches!(previous.definition, WordDefinition::Native(_))
            && !is_native
        {
            warn!(%name, "Built-in word redefined.");
        }

        if !is_native
        {
            debug!(%name, "Defined word.");
        }

        word
    }

    fn find_word(&self, name: &str) -> Option<&WordPtr>
    {
        self.dictionary.try_get(name)
    }

    fn resolve(&self, token: &str) -> error::Result<Resolved>
    {
        let name = token.to_uppercase();

        if let Some(word) = self.dictionary.try_get(&name)
        {
            return Ok(Resolved::Word(word.clone()));
        }

        match name.parse::<f64>()
        {
            Ok(number) => Ok(Resolved::Number(number)),
            Err(_) => script_error(self, ErrorKind::UnknownWord(name))
        }
    }

    fn execute_word(&mut self, location: &SourceLocation, word: &WordPtr) -> error::Result<()>
    {
        trace!(name = %word.name, "Executing word.");

        self.call_stack.push(CallItem::new(word.name.clone(), location.clone()));

        let result =
            match &word.definition
            {
                WordDefinition::Native(handler) => (**handler)(self),

                WordDefinition::Variable(cell) =>
                    {
                        self.push(Value::Cell(*cell));
                        Ok(())
                    },

                WordDefinition::Constant(value) =>
                    {
                        self.push(value.clone());
                        Ok(())
                    },

                WordDefinition::Compiled(body) => self.execute_code(body)
            };

        let _ = self.call_stack.pop();

        result
    }

    fn execute_word_named(&mut self, location: &SourceLocation, name: &str) -> error::Result<()>
    {
        match self.dictionary.try_get(name)
        {
            Some(word) =>
                {
                    let word = word.clone();
                    self.execute_word(location, &word)
                },

            None => script_error(self, ErrorKind::UnknownWord(name.to_uppercase()))
        }
    }

    fn call_stack(&self) -> &CallStack
    {
        &self.call_stack
    }
}


impl ScratchInterpreter
{
    /// Create an interpreter with the full built-in word set that writes its output to stdout.
    pub fn new() -> ScratchInterpreter
    {
        ScratchInterpreter::with_output(Box::new(stdout()))
    }

    /// Create an interpreter with the full built-in word set that writes its output to the given
    /// sink.
    pub fn with_output(output: Box<dyn Write>) -> ScratchInterpreter
    {
        let mut interpreter = ScratchInterpreter
            {
                data_stack: Vec::with_capacity(20),
                compile_buffer: Vec::new(),
                mode: Mode::Interpreting,
                pending: None,

                current_location: None,
                call_stack: CallStack::with_capacity(40),

                dictionary: Dictionary::new(),
                cells: CellArena::new(),

                lexers: Vec::new(),
                output
            };

        register_base_words(&mut interpreter);
        register_io_words(&mut interpreter);

        interpreter
    }

    /// The stack that words currently read from and write to.
    fn active_stack_mut(&mut self) -> &mut ValueStack
    {
        match self.mode
        {
            Mode::Interpreting => &mut self.data_stack,
            Mode::Compiling    => &mut self.compile_buffer
        }
    }

    /// Read words from the current lexer until it runs dry.  Immediate words always execute.
    /// Otherwise words execute while interpreting and are appended to the compile buffer while
    /// compiling.  Numbers are pushed onto whichever stack is active.
    fn process_words(&mut self) -> error::Result<()>
    {
        while let Some(( location, token )) = self.next_word()
        {
            self.current_location = Some(location.clone());

            match self.resolve(&token)?
            {
                Resolved::Number(number) =>
                    {
                        trace!(%token, mode = ?self.mode, "Pushing number.");
                        self.push(Value::Number(number));
                    },

                Resolved::Word(word) =>
                    {
                        if word.is_immediate() || self.mode == Mode::Interpreting
                        {
                            self.execute_word(&location, &word)?;
                        }
                        else
                        {
                            trace!(name = %word.name, "Compiling word reference.");
                            self.compile_buffer.push(Value::Word(word));
                        }
                    }
            }
        }

        Ok(())
    }
}


impl Default for ScratchInterpreter
{
    fn default() -> Self
    {
        Self::new()
    }
}
