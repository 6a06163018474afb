//! Export of an instance as a GLPK MathProg data section.
//!
//! The `instance` parameter is a dense `M x (N + 1)` table: column 0 holds
//! the subset weight and column `e` holds 1 when the subset covers `e`.
//! Rows are numbered from 1, as MathProg sets usually are.

use super::types::Instance;
use std::io::{self, Write};

const CELL: usize = 6;
const ROW_INDENT: &str = "          ";

/// Writes `instance` as a GLPK `.dat` file body.
pub fn write_glpk_dat<W: Write>(instance: &Instance, mut w: W) -> io::Result<()> {
    let n = instance.element_count();
    let m = instance.subset_count();

    writeln!(w, "data;")?;
    writeln!(w, "param elements_count := {n};")?;
    writeln!(w, "param subsets_count := {m};")?;
    write!(w, "param instance : ")?;
    for column in 0..=n {
        write!(w, "{column:>CELL$} ")?;
    }
    writeln!(w, " := ")?;

    let mut row = vec![0u64; n + 1];
    for s in 0..m {
        row.fill(0);
        row[0] = instance.weight(s);
        for &e in instance.elements(s) {
            row[e] = 1;
        }
        write!(w, "{ROW_INDENT}{:>CELL$} ", s + 1)?;
        for value in &row {
            write!(w, "{value:>CELL$} ")?;
        }
        writeln!(w)?;
    }

    writeln!(w, ";")?;
    write!(w, "end;")?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_glpk_dat(instance: &Instance) -> String {
        let mut buf = Vec::new();
        write_glpk_dat(instance, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_glpk_layout() {
        let inst = Instance::new(2, vec![(7, vec![2]), (3, vec![1, 2])]).unwrap();
        let dat = to_glpk_dat(&inst);
        let expected = [
            "data;",
            "param elements_count := 2;",
            "param subsets_count := 2;",
            "param instance :      0      1      2  := ",
            "               1      7      0      1 ",
            "               2      3      1      1 ",
            ";",
            "end;",
        ]
        .join("\n");
        assert_eq!(dat, expected);
    }

    #[test]
    fn test_empty_subset_row() {
        let inst = Instance::new(1, vec![(0, vec![])]).unwrap();
        let dat = to_glpk_dat(&inst);
        assert!(dat.contains("     1      0      0 \n"));
    }
}
