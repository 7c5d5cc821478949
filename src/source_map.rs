//! Functionality for looking up lines in the source code.

/// Finds the line with the given 1-based number. Lines are separated by
/// `\n`, the same way the lexer counts them. A line number past the end of
/// the source yields an empty line.
pub fn find_line(source: &str, line_no: usize) -> LineContext {
    let text = source
        .split('\n')
        .nth(line_no.saturating_sub(1))
        .unwrap_or("");

    LineContext {
        source: text,
        line_no,
    }
}

/// Contains a slice pointing to a single line in the program,
/// along with its line number.
pub struct LineContext<'a> {
    source: &'a str,
    line_no: usize,
}
impl LineContext<'_> {
    /// The line without its line ending, with tabs widened to single
    /// spaces so that columns line up with the lexer's.
    pub fn for_display(&self) -> String {
        self.source.trim_end_matches('\r').replace('\t', " ")
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}
