//! Reader for the whitespace-separated SPP instance format.
//!
//! ```text
//! <element_count> <subset_count>
//! <weight> <covered_count> <e_1> ... <e_covered_count>   (once per subset)
//! ```
//!
//! Line breaks carry no meaning; only the token sequence matters.

use super::types::Instance;
use crate::error::{Result, SppError};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Loads [`Instance`]s from files, readers or strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstanceLoader;

impl InstanceLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn from_bufread<R: BufRead>(&self, mut br: R) -> Result<Instance> {
        let mut sc = Scanner::new(&mut br);
        let element_count = sc.next_usize("element count")?;
        let subset_count = sc.next_u64("subset count")?;

        // Declared counts never size an allocation.
        let mut records = Vec::new();
        for s in 0..subset_count {
            let weight = sc.next_u64(&format!("weight of subset {s}"))?;
            let covered = sc.next_u64(&format!("covered count of subset {s}"))?;
            let mut elements = Vec::new();
            for k in 0..covered {
                elements.push(sc.next_usize(&format!("element {} of subset {s}", k + 1))?);
            }
            records.push((weight, elements));
        }
        if let Some(tok) = sc.next_token()? {
            return Err(SppError::MalformedInstance(format!(
                "more records than declared subset count {subset_count}, found `{tok}`"
            )));
        }

        let instance = Instance::new(element_count, records)?;
        tracing::info!(
            elements = instance.element_count(),
            subsets = instance.subset_count(),
            "instance loaded"
        );
        Ok(instance)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Instance> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Instance> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(&self, s: &str) -> Result<Instance> {
        self.from_reader(s.as_bytes())
    }
}

#[derive(Debug)]
struct Scanner<R: BufRead> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    // Ok(false) at end of input.
    #[inline]
    fn fill_line(&mut self) -> Result<bool> {
        self.buf.clear();
        self.pos = 0;
        Ok(self.rdr.read_line(&mut self.buf)? != 0)
    }

    #[inline]
    fn next_token(&mut self) -> Result<Option<&str>> {
        loop {
            let bytes = self.buf.as_bytes();
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < bytes.len() {
                break;
            }
            if !self.fill_line()? {
                return Ok(None);
            }
        }
        let start = self.pos;
        let bytes = self.buf.as_bytes();
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Ok(Some(&self.buf[start..self.pos]))
    }

    #[inline]
    fn next_u64(&mut self, what: &str) -> Result<u64> {
        match self.next_token()? {
            Some(tok) => tok.parse::<u64>().map_err(|_| {
                SppError::MalformedInstance(format!(
                    "expected non-negative integer for {what}, found `{tok}`"
                ))
            }),
            None => Err(SppError::MalformedInstance(format!(
                "unexpected end of input while reading {what}"
            ))),
        }
    }

    #[inline]
    fn next_usize(&mut self, what: &str) -> Result<usize> {
        let value = self.next_u64(what)?;
        usize::try_from(value).map_err(|_| {
            SppError::MalformedInstance(format!("{what} {value} does not fit in memory"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL_OK: &str = r#"
        3 4
        1 1 1
        1 1 2
        1 1 3
        1 3 1 2
        3
    "#;

    #[test]
    fn test_loads_records_across_line_breaks() {
        let inst = InstanceLoader::new().from_str(SMALL_OK).unwrap();
        assert_eq!(inst.element_count(), 3);
        assert_eq!(inst.subset_count(), 4);
        assert_eq!(inst.elements(3), &[1, 2, 3]);
        assert_eq!(inst.coverers(1), &[0, 3]);
    }

    #[test]
    fn test_extra_records_are_malformed() {
        let err = InstanceLoader::new().from_str("2 1\n1 1 1\n1 1 2\n").unwrap_err();
        match err {
            SppError::MalformedInstance(msg) => {
                assert!(msg.contains("more records than declared"), "{msg}")
            }
            other => panic!("unexpected error {other:?}"),
        }

        // Trailing whitespace alone is fine.
        let inst = InstanceLoader::new().from_str("1 1\n4 1 1\n\n  \n").unwrap();
        assert_eq!(inst.weight(0), 4);
    }

    #[test]
    fn test_huge_declared_subset_count_is_malformed() {
        let err = InstanceLoader::new()
            .from_str("1 1000000000000000\n1 1 1\n")
            .unwrap_err();
        match err {
            SppError::MalformedInstance(msg) => assert!(msg.contains("subset 1"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_huge_declared_covered_count_is_malformed() {
        let err = InstanceLoader::new()
            .from_str("1 1\n1 1000000000000000 1\n")
            .unwrap_err();
        assert!(matches!(err, SppError::MalformedInstance(_)));
    }

    #[test]
    fn test_huge_element_count_is_malformed() {
        let err = InstanceLoader::new()
            .from_str("18446744073709551615 0\n")
            .unwrap_err();
        assert!(matches!(err, SppError::MalformedInstance(_)));
    }

    #[test]
    fn test_overflowing_total_weight_is_malformed() {
        let err = InstanceLoader::new()
            .from_str("2 2\n18446744073709551615 1 1\n1 1 2\n")
            .unwrap_err();
        assert!(matches!(err, SppError::MalformedInstance(_)));
    }

    #[test]
    fn test_truncated_record_is_malformed() {
        let err = InstanceLoader::new().from_str("3 2\n1 2 1 2\n1 3 1").unwrap_err();
        match err {
            SppError::MalformedInstance(msg) => assert!(msg.contains("subset 1"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_element_is_malformed() {
        let err = InstanceLoader::new().from_str("2 1\n1 2 1 3\n").unwrap_err();
        assert!(matches!(err, SppError::MalformedInstance(_)));
    }

    #[test]
    fn test_negative_weight_is_malformed() {
        let err = InstanceLoader::new().from_str("1 1\n-1 1 1\n").unwrap_err();
        match err {
            SppError::MalformedInstance(msg) => assert!(msg.contains("`-1`"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_from_path_roundtrips_through_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SMALL_OK}").unwrap();
        let inst = InstanceLoader::new().from_path(file.path()).unwrap();
        assert_eq!(inst.subset_count(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InstanceLoader::new()
            .from_path(dir.path().join("absent.txt"))
            .unwrap_err();
        assert!(matches!(err, SppError::Io(_)));
    }
}
