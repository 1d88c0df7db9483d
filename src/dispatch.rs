use super::model::{Int};

/// Invoke `operation` once, passing `a` and `b` in that order, and return its
/// result unchanged.
pub fn apply(operation: impl Fn(Int, Int) -> Int, a: Int, b: Int) -> Int {
    operation(a, b)
}

// ----------------------------------------------------------------------------
