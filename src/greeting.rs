//! Greeting helpers with an empty-name fallback.

use std::io::{self, Write};

/// Greeting used when no name is given.
pub const STRANGER_GREETING: &str = "Hello, stranger!";

/// Greeting printed by `greet_all` when the name list is empty.
pub const WORLD_GREETING: &str = "Hello, World!";

/// Greet `name`, falling back to [`STRANGER_GREETING`] for an empty string.
///
/// ```
/// use tribble::greeting::greet;
/// assert_eq!(greet("Alice"), "Hello, Alice!");
/// assert_eq!(greet(""), "Hello, stranger!");
/// ```
pub fn greet(name: &str) -> String {
    if name.is_empty() {
        return STRANGER_GREETING.to_string();
    }
    format!("Hello, {name}!")
}

/// Add two numbers together.
pub fn add_numbers(a: i64, b: i64) -> i64 {
    a + b
}

/// Numbered greetings for a list of names, one line each.
///
/// With no names, a single [`WORLD_GREETING`] is returned. An empty name
/// goes through [`greet`] and gets the stranger greeting.
pub fn greet_all<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    if names.is_empty() {
        return vec![WORLD_GREETING.to_string()];
    }
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, greet(name.as_ref())))
        .collect()
}

pub fn run_demo<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Greeting Program ===")?;
    writeln!(out)?;

    for name in ["World", "Alice", "Bob", ""] {
        writeln!(out, "greet('{name}') -> {}", greet(name))?;
    }

    writeln!(out)?;

    writeln!(out, "Addition examples:")?;
    for (a, b) in [(5, 3), (10, -2), (0, 0)] {
        writeln!(out, "add_numbers({a}, {b}) -> {}", add_numbers(a, b))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_with_name() {
        assert_eq!(greet("Alice"), "Hello, Alice!");
        assert_eq!(greet("Bob"), "Hello, Bob!");
    }

    #[test]
    fn test_greet_with_empty_string() {
        assert_eq!(greet(""), "Hello, stranger!");
    }

    #[test]
    fn test_greet_with_special_characters() {
        assert_eq!(greet("José"), "Hello, José!");
        assert_eq!(greet("李明"), "Hello, 李明!");
        // whitespace is still a name
        assert_eq!(greet(" "), "Hello,  !");
    }

    #[test]
    fn test_add_numbers() {
        assert_eq!(add_numbers(2, 3), 5);
        assert_eq!(add_numbers(10, 20), 30);
        assert_eq!(add_numbers(-5, -3), -8);
        assert_eq!(add_numbers(-10, -20), -30);
        assert_eq!(add_numbers(5, -3), 2);
        assert_eq!(add_numbers(-5, 10), 5);
        assert_eq!(add_numbers(0, 0), 0);
        assert_eq!(add_numbers(0, -3), -3);
    }

    #[test]
    fn test_greet_all() {
        let empty: [&str; 0] = [];
        assert_eq!(greet_all(&empty), vec!["Hello, World!"]);
        assert_eq!(
            greet_all(&["Alice", "", "Bob"]),
            vec!["1. Hello, Alice!", "2. Hello, stranger!", "3. Hello, Bob!"]
        );
    }

    #[test]
    fn test_run_demo() {
        let mut out = Vec::new();
        run_demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("=== Greeting Program ===\n\n"));
        assert!(text.contains("greet('World') -> Hello, World!\n"));
        assert!(text.contains("greet('') -> Hello, stranger!\n"));
        assert!(text.contains("add_numbers(10, -2) -> 8\n"));
        assert!(text.ends_with("add_numbers(0, 0) -> 0\n"));
    }
}
