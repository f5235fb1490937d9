use std::{ fmt::{ self,
                  Display,
                  Formatter },
           rc::Rc };



/// Where in the source text a word was found.  Used by the lexer to tag each word, and by the
/// error reporting to point at the word that failed.
///
/// This is a read-only structure.  Use the field accessor methods to get the values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation
{
    /// Either the path to a script file or a tag describing the text, for example `<repl>`.
    path: Rc<str>,

    /// The 1 based line number.
    line: usize,

    /// The 1 based column number.
    column: usize
}


impl Default for SourceLocation
{
    fn default() -> Self
    {
        SourceLocation::new_from_path("unspecified")
    }
}


/// Used for error reporting to show where in the source text an error originated.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result
    {
        write!(formatter, "{} ({}, {})", self.path, self.line, self.column)
    }
}


impl SourceLocation
{
    /// Create a location at the very start of the given source.
    pub fn new_from_path(path: &str) -> SourceLocation
    {
        SourceLocation { path: Rc::from(path), line: 1, column: 1 }
    }

    /// Create a location with all of the needed information.  Mostly used with the
    /// `location_here!` macro to tag words registered from Rust code.
    pub fn new_from_info(path: &str, line: usize, column: usize) -> SourceLocation
    {
        SourceLocation { path: Rc::from(path), line, column }
    }

    /// The script path or description of the source.
    pub fn path(&self) -> &str
    {
        &self.path
    }

    /// The 1 based line number.
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// The 1 based column number.
    pub fn column(&self) -> usize
    {
        self.column
    }
}



/// Get the location of the macro invocation within the Rust source.  Native words record this as
/// the place they were defined.
#[macro_export]
macro_rules! location_here
{
    () =>
    {
        $crate::lang::source_buffer::SourceLocation::new_from_info(file!(),
                                                                   line!() as usize,
                                                                   column!() as usize)
    };
}



/// A forward only cursor over a piece of source text.  As characters are consumed the line and
/// column of the cursor are kept up to date.
///
/// The buffer owns its copy of the text so that the interpreter can hold on to it while the words
/// being executed pull more input from it.
pub struct SourceBuffer
{
    chars: Vec<char>,
    position: usize,
    location: SourceLocation
}


impl SourceBuffer
{
    /// Create a new buffer for the given text, tagged with a path or description.
    pub fn new(path: &str, source: &str) -> SourceBuffer
    {
        SourceBuffer
            {
                chars: source.chars().collect(),
                position: 0,
                location: SourceLocation::new_from_path(path)
            }
    }

    /// The location of the cursor in the text.
    pub fn location(&self) -> &SourceLocation
    {
        &self.location
    }

    /// Has every character been consumed?
    pub fn is_at_end(&self) -> bool
    {
        self.position >= self.chars.len()
    }

    /// Look at the next character without consuming it.
    pub fn peek_next(&self) -> Option<char>
    {
        self.chars.get(self.position).copied()
    }

    /// Get and consume the next character.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = self.peek_next()?;

        self.position += 1;
        self.increment_location(next);

        Some(next)
    }

    /// Advance one column for regular characters.  New lines move to the start of the next line.
    fn increment_location(&mut self, next: char)
    {
        if next == '\n'
        {
            self.location.line += 1;
            self.location.column = 1;
        }
        else
        {
            self.location.column += 1;
        }
    }
}
