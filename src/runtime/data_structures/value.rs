use std::{ fmt::{ self,
                   Debug,
                   Display,
                   Formatter },
           rc::Rc };
use crate::runtime::data_structures::{ cell_arena::CellId,
                                       dictionary::WordPtr };



/// Core value enumeration used by the Scratch interpreter.  Everything that can live on the data
/// stack, in the compile buffer, in a variable cell or in the body of a compiled word.
#[derive(Clone)]
pub enum Value
{
    /// A number, all arithmetic is done in 64-bit floating point.
    Number(f64),

    /// The text of a string literal.
    Text(String),

    /// A reference to a variable's storage cell.  Copying the value copies the reference, not the
    /// cell's contents.
    Cell(CellId),

    /// A direct reference to a word definition.  Found in compile buffers and compiled word
    /// bodies.
    Word(WordPtr)
}


/// Convert an arbitrary data type to a Value.
pub trait ToValue
{
    /// Implement to handle the actual conversion.
    fn to_value(&self) -> Value;
}


impl ToValue for f64
{
    fn to_value(&self) -> Value
    {
        Value::Number(*self)
    }
}


impl ToValue for usize
{
    fn to_value(&self) -> Value
    {
        Value::Number(*self as f64)
    }
}


impl ToValue for &str
{
    fn to_value(&self) -> Value
    {
        Value::Text(self.to_string())
    }
}


impl ToValue for String
{
    fn to_value(&self) -> Value
    {
        Value::Text(self.clone())
    }
}


impl From<f64> for Value
{
    fn from(original: f64) -> Value
    {
        original.to_value()
    }
}


impl From<&str> for Value
{
    fn from(original: &str) -> Value
    {
        original.to_value()
    }
}


/// Numbers compare by value, cells by identity, and words by the definition they point at.
impl PartialEq for Value
{
    fn eq(&self, other: &Value) -> bool
    {
        match ( self, other )
        {
            ( Value::Number(a), Value::Number(b) ) => a == b,
            ( Value::Text(a),   Value::Text(b)   ) => a == b,
            ( Value::Cell(a),   Value::Cell(b)   ) => a == b,
            ( Value::Word(a),   Value::Word(b)   ) => Rc::ptr_eq(a, b),

            _                                      => false
        }
    }
}


/// The plain representation used by `print`.  Text is written as is.
impl Display for Value
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            Value::Number(value) => write!(f, "{}", value),
            Value::Text(value)   => write!(f, "{}", value),
            Value::Cell(cell)    => write!(f, "{}", cell),
            Value::Word(word)    => write!(f, "{}", word.name)
        }
    }
}


/// The stack dump representation.  Same as Display except that text is quoted so that it can be
/// told apart from numbers and words.
impl Debug for Value
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            Value::Text(value) => write!(f, "{}", Value::stringify(value)),
            _                  => write!(f, "{}", self)
        }
    }
}


impl Value
{
    /// Check if the value is a variable cell reference.
    pub fn is_cell(&self) -> bool
    {
        matches!(self, Value::Cell(_))
    }

    /// A short name for the value's variant, used in type mismatch errors.
    pub fn type_name(&self) -> &'static str
    {
        match self
        {
            Value::Number(_) => "number",
            Value::Text(_)   => "text",
            Value::Cell(_)   => "variable",
            Value::Word(_)   => "word"
        }
    }

    /// Convert a string to a form that could be pasted back into source text: enclosed in double
    /// quotes with control characters escaped.
    pub fn stringify(text: &str) -> String
    {
        let mut result = String::with_capacity(text.len() + 2);

        result.push('"');

        for character in text.chars()
        {
            match character
            {
                '"'  => result.push_str("\\\""),
                '\n' => result.push_str("\\n"),
                '\r' => result.push_str("\\r"),
                '\t' => result.push_str("\\t"),
                '\\' => result.push_str("\\\\"),
                _    => result.push(character)
            }
        }

        result.push('"');

        result
    }
}
