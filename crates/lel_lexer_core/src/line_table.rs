//! Offset to line/column lookup.

/// Start offset of every line, built once per source.
///
/// `\n`, `\r\n` and a lone `\r` each end a line; `\r\n` counts once.
/// Lookups binary-search the starts.
#[derive(Clone, Debug)]
pub struct LineOffsetTable {
    /// `starts[i]` is the offset of line `i + 1`; `starts[0] == 0`.
    starts: Vec<u32>,
}

impl LineOffsetTable {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scan rejects sources longer than u32::MAX first"
    )]
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let starts = std::iter::once(0)
            .chain(
                memchr::memchr2_iter(b'\n', b'\r', bytes)
                    .filter(|&at| !(bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n')))
                    .map(|at| at as u32 + 1),
            )
            .collect();
        LineOffsetTable { starts }
    }

    /// 1-based line containing `offset`. A line break belongs to the line
    /// it ends.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "there are never more lines than bytes"
    )]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let after = self.starts.partition_point(|&start| start <= offset);
        after.max(1) as u32
    }

    /// 1-based `(line, column)`; the column counts chars, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let start = self.starts[line as usize - 1] as usize;
        let end = (offset as usize).min(source.len());
        let chars = source.get(start..end).map_or(0, |text| text.chars().count());
        (line, u32::try_from(chars).unwrap_or(u32::MAX - 1) + 1)
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}
