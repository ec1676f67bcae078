/// Splits a document into lines on `\n`.
///
/// One trailing `\r` is dropped from each line so CRLF input scans like LF
/// input. A trailing newline yields a final empty line (`"a\n"` is `["a", ""]`),
/// which the scanner skips as blank.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
