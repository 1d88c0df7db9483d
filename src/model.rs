use std::{fmt};

/// The integer type that operations consume and produce.
///
/// Arithmetic on `Int`s wraps on overflow, like the machine instructions.
pub type Int = i64;

/// A storable operation value: a function from two `Int`s to one `Int`.
///
/// Function items, function pointers and non-capturing closures all coerce
/// to this type.
pub type Binary = &'static dyn Fn(Int, Int) -> Int;

// ----------------------------------------------------------------------------

/// Records one invocation of an operation, for logging.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    pub name: &'a str,
    pub a: Int,
    pub b: Int,
    pub result: Int,
}

impl fmt::Debug for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({}, {}) = {}", self.name, self.a, self.b, self.result)
    }
}

// ----------------------------------------------------------------------------
