//! Closures with defaulted arguments.
//!
//! Rust closures have no default parameter values; the idiomatic
//! stand-in is an `Option` argument resolved with `unwrap_or`.

use crate::error::DemoError;

pub fn run() -> Result<(), DemoError> {
    println!("\n=== Closures with Defaults Example ===");

    let greet = |name: Option<&str>| format!("Hello, {}!", name.unwrap_or("Guest"));

    println!("{}", greet(None));
    println!("{}", greet(Some("Alice")));

    // Several defaults at once.
    let calculate_total = |price: f64, tax: Option<f64>, discount: Option<f64>| {
        let subtotal = price + price * tax.unwrap_or(0.10);
        subtotal - discount.unwrap_or(0.0)
    };

    println!(
        "Total (no tax/discount specified): ${:.2}",
        calculate_total(100.0, None, None)
    );
    println!(
        "Total (with custom tax): ${:.2}",
        calculate_total(100.0, Some(0.15), None)
    );
    println!(
        "Total (with tax and discount): ${:.2}",
        calculate_total(100.0, Some(0.15), Some(10.0))
    );

    // Defaults compose with iterator adapters.
    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let above = |n: i32, threshold: Option<i32>| n > threshold.unwrap_or(5);
    let filtered: Vec<i32> = numbers.into_iter().filter(|&n| above(n, None)).collect();
    println!("Numbers > 5: {filtered:?}");

    Ok(())
}
