//! Interactive toolchain menu
//!
//! A pure function from an input stream to a validated selection, so the
//! workflow can be driven by a CLI argument, a test harness, or a terminal
//! uniformly.

use std::io::{self, BufRead, Write};

use crate::core::locale::Messages;
use crate::core::toolchain::Toolchain;

/// Read a toolchain choice from `input`, re-prompting on invalid lines.
///
/// Accepts `1` (MinGW) or `2` (MSVC). Hitting end-of-input before a valid
/// choice is an error; the menu has no other way to terminate.
pub fn select_toolchain<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    messages: &Messages,
) -> io::Result<Toolchain> {
    loop {
        writeln!(output, "{}", messages.menu_header)?;
        writeln!(output, "{}", messages.menu_mingw)?;
        writeln!(output, "{}", messages.menu_msvc)?;
        write!(output, "{}", messages.menu_prompt)?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input while waiting for a toolchain choice",
            ));
        }

        match line.trim() {
            "1" => return Ok(Toolchain::MinGw),
            "2" => return Ok(Toolchain::Msvc),
            _ => {
                writeln!(output, "{}", messages.menu_invalid)?;
                writeln!(output)?;
            }
        }
    }
}
