//! Line-oriented `key = value` text format.
//!
//! No escaping, quoting or comments. On read the line is split on the first
//! `=` and both sides are trimmed; lines without `=` are skipped.

/// Parse a single line. Returns `None` for lines without a `=`.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// Parse every well-formed line of `text`, in order.
pub fn parse(text: &str) -> impl Iterator<Item = (String, String)> + '_ {
    text.lines().filter_map(parse_line)
}

/// Render one entry the way it is written to disk.
pub fn render_line(key: &str, value: &str) -> String {
    format!("{key} = {value}")
}

/// Render entries as a file body, one line each, newline-terminated.
pub fn render<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(&render_line(key, value));
        out.push('\n');
    }
    out
}
