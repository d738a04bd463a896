//! Source normalization.
//!
//! Strips comments and preprocessor directives from raw schema text and
//! trims every line. The number of lines is preserved so that diagnostics
//! produced later refer to the lines of the input file.

/// Normalizes raw schema text.
///
/// - `\r\n` becomes `\n` and tabs become spaces
/// - `// ...` line comments and `/* ... */` block comments are removed
/// - lines starting with `#` (`#ifndef`, `#define`, `#include`, `#endif`, ...)
///   are blanked
/// - leading and trailing whitespace is trimmed from each line
#[must_use]
pub fn normalize(source: &str) -> String {
    let source = source.replace("\r\n", "\n").replace('\t', "    ");
    let stripped = strip_comments(&source);

    stripped
        .split('\n')
        .map(|line| {
            let line = line.trim();
            if line.starts_with('#') { "" } else { line }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes comments, keeping the newlines found inside block comments.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '/' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            Some('*') => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
                // Keep tokens on either side of an inline comment apart.
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comments_removed() {
        let out = normalize("std::string name; // test comment\nint level;");
        assert_eq!(out, "std::string name;\nint level;");
    }

    #[test]
    fn test_block_comments_keep_line_count() {
        let src = "int a;\n/*\n * multiline comments here\n */\nint b;";
        let out = normalize(src);

        assert_eq!(out.lines().count(), src.lines().count());
        assert_eq!(out.lines().nth(4), Some("int b;"));
        assert_eq!(out.lines().nth(1), Some(""));
    }

    #[test]
    fn test_inline_block_comment() {
        assert_eq!(normalize("int/* x */level;"), "int level;");
    }

    #[test]
    fn test_preprocessor_lines_blanked() {
        let src = "#ifndef _TEST_H_\n#define DEF_CONFIG struct\n#include <vector>\n\
                   DEF_CONFIG a {\n};\n#endif // _TEST_H_";
        let out = normalize(src);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "DEF_CONFIG a {");
        assert_eq!(lines[4], "};");
    }

    #[test]
    fn test_crlf_and_tabs() {
        assert_eq!(normalize("\tint a;  \r\n\tu32 b;\r\n"), "int a;\nu32 b;\n");
    }
}
