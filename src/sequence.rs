//! Building and reshaping sequences.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

/// Integers from `start` to `end`, both inclusive, stepping by ±1.
///
/// # Examples
/// ```
/// use u_mathkit::sequence::range;
/// assert_eq!(range(1, 4), vec![1, 2, 3, 4]);
/// assert_eq!(range(2, -1), vec![2, 1, 0, -1]);
/// ```
///
/// # Panics
/// Allocates `|end − start| + 1` values, so spans wider than memory abort
/// on allocation.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    let span = end.abs_diff(start);
    if end >= start {
        (0..=span).map(|i| start.wrapping_add_unsigned(i)).collect()
    } else {
        (0..=span).map(|i| start.wrapping_sub_unsigned(i)).collect()
    }
}

/// `count` values produced by calling `f` with each index in turn.
pub fn generate<T, F>(count: usize, f: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..count).map(f).collect()
}

/// Maps each key to `f(key)`. Later duplicates overwrite earlier ones.
pub fn obj_map<K, V, F>(keys: &[K], mut f: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    F: FnMut(&K) -> V,
{
    keys.iter().map(|k| (k.clone(), f(k))).collect()
}

/// Extracts one field from every element.
///
/// # Examples
/// ```
/// use u_mathkit::sequence::pluck;
/// struct Point { x: f64, y: f64 }
/// let pts = [Point { x: 1.0, y: 2.0 }, Point { x: 3.0, y: 4.0 }];
/// assert_eq!(pluck(&pts, |p| p.y), vec![2.0, 4.0]);
/// ```
pub fn pluck<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}

/// One element per line, in order, for pasting into a spreadsheet column.
pub fn column<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes [`column`] output followed by a newline.
pub fn write_column<W: Write, T: Display>(out: &mut W, items: &[T]) -> io::Result<()> {
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

/// Prints [`column`] output to stdout.
pub fn print_column<T: Display>(items: &[T]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_column(&mut lock, items)
}
