//! Working with the standard containers.
//!
//! Each `*_examples` routine runs a fixed script on literal data and prints
//! what happens along the way. The set helpers are plain functions so they can
//! be reused and tested on their own.
//!
//! | Demo      | Container                  |
//! |-----------|----------------------------|
//! | list      | `Vec<&str>`                |
//! | dict      | `IndexMap<&str, Scalar>`   |
//! | tuple     | `(i32, i32)`               |
//! | set       | `BTreeSet<i64>`            |
//! | array     | `[i64; N]`, `[[i64; 3]; 3]`|

use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use indexmap::IndexMap;

/// Which demo to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    List,
    Dict,
    Tuple,
    Set,
    Array,
}

impl Demo {
    /// All demos in presentation order.
    pub const ALL: [Demo; 5] = [Demo::List, Demo::Dict, Demo::Tuple, Demo::Set, Demo::Array];

    pub fn run<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            Demo::List => list_examples(out),
            Demo::Dict => dictionary_examples(out),
            Demo::Tuple => tuple_examples(out),
            Demo::Set => set_examples(out),
            Demo::Array => array_examples(out),
        }
    }
}

/// Run every demo in order.
pub fn run_all<W: Write>(out: &mut W) -> io::Result<()> {
    for demo in Demo::ALL {
        demo.run(out)?;
    }
    Ok(())
}

pub fn list_examples<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== LIST EXAMPLES ===")?;

    let mut fruits = vec!["apple", "banana", "cherry"];
    writeln!(out, "Fruits: {fruits:?}")?;

    fruits.push("date");
    writeln!(out, "After append: {fruits:?}")?;

    writeln!(out, "First fruit: {}", fruits[0])?;
    writeln!(out, "First two fruits: {:?}", &fruits[..2])?;

    writeln!(out, "All fruits:")?;
    for fruit in &fruits {
        writeln!(out, "  - {fruit}")?;
    }

    writeln!(out)
}

/// Heterogeneous value stored in the student record.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{s}"),
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Real(x) => write!(f, "{x:?}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Real(x)
    }
}

/// The record used by the dictionary demo, in insertion order.
pub fn sample_student() -> IndexMap<&'static str, Scalar> {
    IndexMap::from([
        ("name", Scalar::from("John Doe")),
        ("age", Scalar::from(20_i64)),
        ("major", Scalar::from("Computer Science")),
        ("gpa", Scalar::from(3.7_f64)),
    ])
}

/// Render a record as `{"key": value, ...}` with quoted text values.
pub fn render_record(record: &IndexMap<&str, Scalar>) -> String {
    let fields: Vec<String> = record
        .iter()
        .map(|(key, value)| match value {
            Scalar::Text(s) => format!("{key:?}: {s:?}"),
            other => format!("{key:?}: {other}"),
        })
        .collect();
    format!("{{{}}}", fields.join(", "))
}

pub fn dictionary_examples<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== DICTIONARY EXAMPLES ===")?;

    let mut student = sample_student();
    writeln!(out, "Student: {}", render_record(&student))?;

    if let Some(name) = student.get("name") {
        writeln!(out, "Name: {name}")?;
    }
    if let Some(gpa) = student.get("gpa") {
        writeln!(out, "GPA: {gpa}")?;
    }

    student.insert("graduation_year", Scalar::from(2026_i64));
    writeln!(
        out,
        "After adding graduation year: {}",
        render_record(&student)
    )?;

    writeln!(out, "Student details:")?;
    for (key, value) in &student {
        writeln!(out, "  {key}: {value}")?;
    }

    writeln!(out)
}

pub fn tuple_examples<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== TUPLE EXAMPLES ===")?;

    let coordinates = (10, 20);
    writeln!(out, "Coordinates: {coordinates:?}")?;

    let (x, y) = coordinates;
    writeln!(out, "x={x}, y={y}")?;

    // Bindings are immutable: `coordinates.0 = 15;` does not compile.

    writeln!(out)
}

/// Collect `numbers` into a set, dropping duplicates.
pub fn dedup(numbers: &[i64]) -> BTreeSet<i64> {
    numbers.iter().copied().collect()
}

pub fn union(a: &BTreeSet<i64>, b: &BTreeSet<i64>) -> BTreeSet<i64> {
    a | b
}

pub fn intersection(a: &BTreeSet<i64>, b: &BTreeSet<i64>) -> BTreeSet<i64> {
    a & b
}

/// Elements of `a` not in `b`.
pub fn difference(a: &BTreeSet<i64>, b: &BTreeSet<i64>) -> BTreeSet<i64> {
    a - b
}

pub fn set_examples<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== SET EXAMPLES ===")?;

    let set1 = BTreeSet::from([1, 2, 3, 4, 5]);
    let set2 = BTreeSet::from([4, 5, 6, 7, 8]);

    writeln!(out, "Set 1: {set1:?}")?;
    writeln!(out, "Set 2: {set2:?}")?;

    writeln!(out, "Union: {:?}", union(&set1, &set2))?;
    writeln!(out, "Intersection: {:?}", intersection(&set1, &set2))?;
    writeln!(out, "Difference (1-2): {:?}", difference(&set1, &set2))?;

    let numbers = [1, 2, 2, 3, 3, 3, 4];
    writeln!(out, "Original list: {numbers:?}")?;
    writeln!(out, "Unique numbers: {:?}", dedup(&numbers))?;

    writeln!(out)
}

/// Largest element, or `None` for an empty slice.
pub fn find_max(numbers: &[i64]) -> Option<i64> {
    numbers.iter().copied().max()
}

pub fn array_examples<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== ARRAY EXAMPLES ===")?;

    let numbers: [i64; 5] = [10, 25, 8, 42, 15];
    writeln!(out, "Array contents:")?;
    for (i, n) in numbers.iter().enumerate() {
        writeln!(out, "  [{i}] = {n}")?;
    }

    writeln!(out)?;
    writeln!(out, "First element: {}", numbers[0])?;
    writeln!(out, "Last element: {}", numbers[numbers.len() - 1])?;
    if let Some(max) = find_max(&numbers) {
        writeln!(out, "Maximum value: {max}")?;
    }

    writeln!(out)?;
    writeln!(out, "=== STRING EXAMPLE ===")?;
    let greeting = "Hello, Rust!";
    writeln!(out, "String: {greeting}")?;
    writeln!(out, "Length: {}", greeting.len())?;

    writeln!(out)?;
    writeln!(out, "=== 2D ARRAY EXAMPLE ===")?;
    let matrix: [[i64; 3]; 3] = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    writeln!(out, "Matrix:")?;
    for row in &matrix {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        writeln!(out, "  {}", cells.join(" "))?;
    }

    writeln!(out)
}
