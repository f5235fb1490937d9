use crate::{
    lang::source_buffer::SourceLocation,
    runtime::{
        data_structures::{cell_arena::CellId, value::Value},
        interpreter::WordHandler,
    },
};
use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

/// When a word runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordRuntime {
    /// The word always executes as soon as it is read, even while a definition is being compiled.
    Immediate,

    /// The word executes when read while interpreting, and is buffered while compiling.
    Normal,
}

/// What a word does when it is executed.
#[derive(Clone)]
pub enum WordDefinition {
    /// A word implemented in Rust, either a built-in or one registered by the host.
    Native(Rc<WordHandler>),

    /// A variable created by `var`.  Executing it pushes a reference to its cell.
    Variable(CellId),

    /// A constant created by `const`.  Executing it pushes a copy of the captured value.
    Constant(Value),

    /// A word created by `:` ... `;`.  Executing it runs the body in order.
    Compiled(Vec<Value>),
}

impl WordDefinition {
    /// A short description of the kind of definition for the dictionary listing.
    pub fn kind(&self) -> &'static str {
        match self {
            WordDefinition::Native(_) => "native",
            WordDefinition::Variable(_) => "variable",
            WordDefinition::Constant(_) => "constant",
            WordDefinition::Compiled(_) => "compiled",
        }
    }
}

/// The information stored in the dictionary for each word.
pub struct WordInfo {
    /// Where the word was defined, either in a script or in the Rust source.
    pub location: SourceLocation,

    /// The uppercased name of the word.
    pub name: String,

    /// When should the word be executed?
    pub runtime: WordRuntime,

    /// A simple description of the word.
    pub description: String,

    /// The stack signature of the word.
    pub signature: String,

    /// The behaviour of the word.
    pub definition: WordDefinition,
}

/// Words are shared between the dictionary and any compiled bodies that reference them.  Replacing
/// a dictionary entry leaves the old definition alive for those bodies.
pub type WordPtr = Rc<WordInfo>;

impl WordInfo {
    /// Create a new word with an empty description and signature.
    pub fn new(
        location: SourceLocation,
        name: String,
        runtime: WordRuntime,
        definition: WordDefinition,
    ) -> WordInfo {
        WordInfo {
            location,
            name,
            runtime,
            description: String::new(),
            signature: String::new(),
            definition,
        }
    }

    pub fn is_immediate(&self) -> bool {
        self.runtime == WordRuntime::Immediate
    }
}

impl Debug for WordInfo {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}, {:?}) defined at {}",
            self.name,
            self.definition.kind(),
            self.runtime,
            self.location
        )
    }
}

/// The word dictionary used by the interpreter.  Names are stored uppercased; the last definition
/// of a name wins.
#[derive(Default)]
pub struct Dictionary {
    words: HashMap<String, WordPtr>,
}

/// Pretty print the dictionary sorted by name.
impl Display for Dictionary {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let max_size = self.words.keys().map(|name| name.len()).max().unwrap_or(0);

        writeln!(formatter, "{} words defined.\n", self.words.len())?;

        let mut keys: Vec<&String> = self.words.keys().collect();
        keys.sort();

        for key in keys {
            let word = &self.words[key];

            write!(
                formatter,
                "{:width$}  {:8}",
                key,
                word.definition.kind(),
                width = max_size
            )?;

            if word.is_immediate() {
                write!(formatter, "  immediate")?;
            } else {
                write!(formatter, "           ")?;
            }

            writeln!(formatter, "  --  {}", word.description)?;
        }

        Ok(())
    }
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Insert or replace a word under its uppercased name.  Returns the definition that was
    /// replaced, if any.
    pub fn insert(&mut self, word: WordPtr) -> Option<WordPtr> {
        self.words.insert(word.name.to_uppercase(), word)
    }

    /// Look a word up by name, ignoring case.
    pub fn try_get(&self, name: &str) -> Option<&WordPtr> {
        self.words.get(&name.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
