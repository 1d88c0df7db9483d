use super::{model, BuiltIn};
use model::{Int, Binary};

/// Returns `a + b`, wrapping on overflow.
pub fn add(a: Int, b: Int) -> Int { a.wrapping_add(b) }

/// Returns `a - b`, wrapping on overflow.
pub fn subtract(a: Int, b: Int) -> Int { a.wrapping_sub(b) }

/// The built-in binary operations, in the order the driver uses them.
pub const BINARY: [(&'static str, Binary); 2] = [
    ("ADD", &add),
    ("SUB", &subtract),
];

/// Constructs the [`BuiltIn`]s for `BINARY`.
pub fn compile_integer() -> Vec<BuiltIn> {
    BINARY.iter().map(|&(name, f)| BuiltIn::new(name, f)).collect()
}

// ----------------------------------------------------------------------------
