use std::io::{self, Write};

use ansi_term::Colour::{Blue};

use super::model::{Int, Step};
use super::built_in::{compile_integer};
use super::dispatch::{apply};

/// The operands passed to every operation.
pub const OPERANDS: (Int, Int) = (1, 2);

/// Select each built-in operation in turn, apply it to [`OPERANDS`], and write
/// each result to `output` on a line of its own.
pub fn run(output: &mut impl Write) -> io::Result<()> {
    let (a, b) = OPERANDS;
    for built_in in compile_integer() {
        let operation = built_in.binary();
        let result = apply(operation, a, b);
        let step = Step {name: built_in.name(), a, b, result};
        log::debug!("{}", Blue.paint(format!("{:?}", step)));
        writeln!(output, "{}", result)?;
    }
    Ok(())
}

// ----------------------------------------------------------------------------
