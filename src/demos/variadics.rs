//! Variadic-style parameters: one function, any container.
//!
//! Generic bounds stand in for variadics: a function taking
//! `impl IntoIterator` accepts arrays, Vecs, slices, or ranges alike.

use crate::error::DemoError;

fn sum(numbers: impl IntoIterator<Item = i64>) -> i64 {
    numbers.into_iter().sum()
}

fn average(numbers: impl IntoIterator<Item = i64>) -> f64 {
    let (count, total) = numbers
        .into_iter()
        .fold((0usize, 0i64), |(count, total), n| (count + 1, total + n));
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

fn max(numbers: &[i64]) -> Option<i64> {
    numbers.iter().copied().max()
}

fn display_items(title: &str, items: &[&str]) {
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

pub fn run() -> Result<(), DemoError> {
    println!("\n=== Variadic-style Parameters Example ===");

    // An array literal...
    println!("Sum of 1, 2, 3: {}", sum([1, 2, 3]));

    // ...a Vec...
    println!("Average of 10, 20, 30, 40: {}", average(vec![10, 20, 30, 40]));

    // ...or a slice all flow through the same signatures.
    println!("Max of 5, 15, 8, 23, 4: {}", max(&[5, 15, 8, 23, 4]).unwrap_or(0));

    // No arguments: an empty iterator.
    println!("Sum of empty: {}", sum(std::iter::empty()));

    display_items("My Items", &["Apple", "Banana", "Cherry"]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_accepts_any_container() {
        assert_eq!(sum([1, 2, 3]), 6);
        assert_eq!(sum(vec![1, 2, 3]), 6);
        assert_eq!(sum(1..=3), 6);
    }

    #[test]
    fn sum_of_empty_is_zero() {
        assert_eq!(sum(std::iter::empty()), 0);
    }

    #[test]
    fn average_of_values() {
        assert_eq!(average(vec![10, 20, 30, 40]), 25.0);
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average(std::iter::empty()), 0.0);
    }

    #[test]
    fn max_picks_the_largest() {
        assert_eq!(max(&[5, 15, 8, 23, 4]), Some(23));
    }

    #[test]
    fn max_of_empty_is_none() {
        assert_eq!(max(&[]), None);
    }

    #[test]
    fn run_succeeds() {
        assert!(run().is_ok());
    }
}
