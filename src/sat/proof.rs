/// DRAT-like proof sink: every added clause is appended as space-separated
/// literals followed by `0` and a newline. No deletion records are emitted,
/// since the kernel never deletes clauses.
use std::io::{self, Write};

use crate::sat::var::Lit;

pub trait ProofSink {
    fn add_clause(&mut self, lits: &[Lit]);
}

/// Writes proof lines to any `std::io::Write`, e.g. a file or `Vec<u8>`.
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        WriterSink { out }
    }

    fn write_line(&mut self, lits: &[Lit]) -> io::Result<()> {
        for l in lits {
            write!(self.out, "{} ", dimacs_int(*l))?;
        }
        writeln!(self.out, "0")
    }
}

impl<W: Write> ProofSink for WriterSink<W> {
    fn add_clause(&mut self, lits: &[Lit]) {
        // Proof output is a side channel with no error variant of its own;
        // a write failure here is dropped rather than threaded back into
        // the solver's own result type.
        let _ = self.write_line(lits);
    }
}

fn dimacs_int(l: Lit) -> i64 {
    let v = l.var().index() as i64;
    if l.is_pos() {
        v
    } else {
        -v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_dimacs_style_lines() {
        let mut buf = Vec::new();
        {
            let mut sink = WriterSink::new(&mut buf);
            sink.add_clause(&[Lit::new(1), Lit::new(-2)]);
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "1 -2 0\n");
    }
}
