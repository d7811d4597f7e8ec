/// Splits `line` on `delimiter`, trims every piece and drops the pieces that
/// are empty after trimming.
///
/// Dropping blanks is what lets a stray leading, trailing or doubled
/// delimiter pass silently. It also means an intentionally empty field
/// (`1,,2`) cannot be told apart from a stray delimiter.
pub fn split_fields<'a>(line: &'a str, delimiter: &str) -> Vec<&'a str> {
    line.split(delimiter)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Removes at most one leading and one trailing `"`. Embedded or escaped
/// quotes are left alone.
pub fn strip_quotes(field: &str) -> &str {
    let field = field.strip_suffix('"').unwrap_or(field);
    field.strip_prefix('"').unwrap_or(field)
}

/// Strips the line terminator left by `BufRead::read_line` (`\n` or `\r\n`).
pub fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
