use std::{fmt};

use super::{model};
use model::{Int, Binary};

/// An operation together with the name it is known by.
#[derive(Copy, Clone)]
pub struct BuiltIn {
    name: &'static str,
    binary: Binary,
}

impl BuiltIn {
    pub fn new(name: &'static str, binary: Binary) -> Self { Self {name, binary} }

    pub fn name(&self) -> &'static str { self.name }

    /// The operation value itself, e.g. to pass to [`crate::apply()`].
    pub fn binary(&self) -> Binary { self.binary }

    pub fn call(&self, a: Int, b: Int) -> Int { (self.binary)(a, b) }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name) }
}

// ----------------------------------------------------------------------------

mod integer;
pub use integer::{add, subtract, BINARY, compile_integer};
