//! First program: print, read one line, format a few greetings.

use std::io::{self, BufRead, Write};

/// Default prompt shown before reading the name.
pub const DEFAULT_PROMPT: &str = "What's your name? ";

/// The three greetings printed for `name`, each formatted a different way.
// The positional argument is one of the three styles on show.
#[allow(clippy::uninlined_format_args)]
pub fn greetings(name: &str) -> [String; 3] {
    [
        format!("Hello, {name}!"),
        format!("Nice to meet you, {}!", name),
        "Welcome to Rust programming, ".to_string() + name + "!",
    ]
}

/// Read one line from `input`, dropping the line terminator.
///
/// End of input yields an empty string.
pub fn read_name<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Run the interactive greeting. Returns the name that was read.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<String> {
    writeln!(out, "Hello, World!")?;

    write!(out, "{prompt}")?;
    out.flush()?;
    let name = read_name(input)?;
    tracing::debug!(target: "hello", "read name ({} bytes)", name.len());

    for line in greetings(&name) {
        writeln!(out, "{line}")?;
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_greetings() {
        let [plain, nice, welcome] = greetings("Ada");
        assert_eq!(plain, "Hello, Ada!");
        assert_eq!(nice, "Nice to meet you, Ada!");
        assert_eq!(welcome, "Welcome to Rust programming, Ada!");
    }

    #[test]
    fn test_read_name_strips_terminator() {
        assert_eq!(read_name(&mut Cursor::new("Ada\n")).unwrap(), "Ada");
        assert_eq!(read_name(&mut Cursor::new("Ada\r\n")).unwrap(), "Ada");
        assert_eq!(
            read_name(&mut Cursor::new("Grace Hopper\nignored\n")).unwrap(),
            "Grace Hopper"
        );
        // inner and leading whitespace is kept
        assert_eq!(read_name(&mut Cursor::new("  Ada \n")).unwrap(), "  Ada ");
    }

    #[test]
    fn test_read_name_at_eof() {
        assert_eq!(read_name(&mut Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn test_run() {
        let mut input = Cursor::new("Ada\n");
        let mut out = Vec::new();
        let name = run(&mut input, &mut out, DEFAULT_PROMPT).unwrap();

        assert_eq!(name, "Ada");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello, World!\n\
             What's your name? Hello, Ada!\n\
             Nice to meet you, Ada!\n\
             Welcome to Rust programming, Ada!\n"
        );
    }

    #[test]
    fn test_run_custom_prompt() {
        let mut input = Cursor::new("Linus");
        let mut out = Vec::new();
        run(&mut input, &mut out, "Name: ").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Name: Hello, Linus!\n"));
    }
}
