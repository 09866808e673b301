//! Greedy word wrap over a fixed-width character grid.
//!
//! Nothing is cached: every pass re-walks the text from the start, which keeps
//! memory flat at the cost of one scan per call.

/// Length in bytes of the word at the start of `text` (up to the next space).
fn word_len(text: &str) -> usize {
    text.find(' ').unwrap_or(text.len())
}

/// How many bytes of `text` fit on one line of `width` columns.
///
/// Whole words are accumulated while they fit. A run of spaces consumes one
/// column per space. A word wider than the line is taken whole when it starts
/// the line, so every non-empty call makes progress.
pub fn line_width(text: &str, width: usize) -> usize {
    let mut columns = 0;
    let mut consumed = 0;

    while consumed < text.len() {
        let rest = &text[consumed..];
        let (bytes, cols) = match word_len(rest) {
            0 => (1, 1),
            len => (len, rest[..len].chars().count()),
        };

        if columns + cols <= width {
            columns += cols;
            consumed += bytes;
        } else {
            if columns == 0 {
                consumed += bytes;
            }
            break;
        }
    }

    consumed
}

/// Iterator over the wrapped lines of a text.
///
/// Leading spaces of each line are skipped; each yielded line may keep the
/// trailing spaces it consumed.
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    rest: &'a str,
    width: usize,
}

impl<'a> Iterator for WrappedLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.trim_start_matches(' ');
        let len = line_width(rest, self.width);
        if len == 0 {
            self.rest = "";
            return None;
        }

        let (line, tail) = rest.split_at(len);
        self.rest = tail;
        Some(line)
    }
}

/// Wrap `text` into lines of at most `width` columns.
pub fn lines(text: &str, width: usize) -> WrappedLines<'_> {
    WrappedLines { rest: text, width }
}

/// Number of wrapped lines, without materialising them.
pub fn count_lines(text: &str, width: usize) -> usize {
    lines(text, width).count()
}
