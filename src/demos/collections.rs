//! Collection literals and how to combine them.

use itertools::Itertools;

use crate::error::DemoError;

pub fn run() -> Result<(), DemoError> {
    println!("\n=== Collection Literals Example ===");

    // Fixed-size array literal.
    let numbers = [1, 2, 3, 4, 5];
    println!("Array: [{}]", numbers.iter().join(", "));

    // Growable Vec via the vec! macro.
    let fruits = vec!["Apple", "Banana", "Orange", "Mango"];
    println!("Vec: [{}]", fruits.iter().join(", "));

    // chain() splices one collection after another.
    let more_numbers = [6, 7, 8];
    let combined: Vec<i32> = numbers.iter().chain(&more_numbers).copied().collect();
    println!("Combined with chain: [{}]", combined.iter().join(", "));

    // Single elements and whole collections mix freely.
    let more_fruits = ["Grape", "Pear"];
    let all_fruits: Vec<&str> = std::iter::once("Strawberry")
        .chain(fruits.iter().copied())
        .chain(std::iter::once("Kiwi"))
        .chain(more_fruits.iter().copied())
        .collect();
    println!("Mixed fruits: [{}]", all_fruits.iter().join(", "));

    // An empty collection still needs an element type.
    let empty: Vec<i32> = Vec::new();
    println!("Empty collection: [{}]", empty.iter().join(", "));

    // Any contiguous collection borrows as a slice.
    let window: &[i32] = &combined[..4];
    println!("Slice view: [{}]", window.iter().join(", "));

    Ok(())
}
