use crate::runtime::data_structures::value::Value;
use std::fmt::{self, Display, Formatter};

/// Handle to a variable's storage cell.  Handles are never reused, so two distinct variables never
/// share storage even when they hold equal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellId(usize);

impl Display for CellId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "<cell {}>", self.0)
    }
}

/// Storage for every variable created by the interpreter.  Cells are only ever added, so a
/// `CellId` stays valid for the lifetime of the arena.
#[derive(Default)]
pub struct CellArena {
    cells: Vec<Value>,
}

impl CellArena {
    pub fn new() -> CellArena {
        CellArena { cells: Vec::new() }
    }

    /// Allocate a new cell holding the given starting value.
    pub fn allocate(&mut self, initial: Value) -> CellId {
        self.cells.push(initial);
        CellId(self.cells.len() - 1)
    }

    /// Read a cell.  None only for an id that came from a different arena.
    pub fn get(&self, id: CellId) -> Option<&Value> {
        self.cells.get(id.0)
    }

    /// Get mutable access to a cell.
    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Value> {
        self.cells.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
