//! Type aliases: friendlier names for tuples, maps, and nested types.

use std::collections::HashMap;

use itertools::Itertools;

use crate::error::DemoError;

type Point2D = (f64, f64);
type Point3D = (f64, f64, f64);
type Matrix = Vec<Vec<i32>>;
type StringTable = HashMap<String, String>;
type People = Vec<(String, u32)>;

pub fn run() -> Result<(), DemoError> {
    println!("\n=== Type Aliases Example ===");

    let point_2d: Point2D = (10.5, 20.3);
    println!("2D Point: x={}, y={}", point_2d.0, point_2d.1);

    let point_3d: Point3D = (5.0, 10.0, 15.0);
    println!("3D Point: x={}, y={}, z={}", point_3d.0, point_3d.1, point_3d.2);

    let matrix: Matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    println!("Matrix:");
    for row in &matrix {
        println!("  [{}]", row.iter().join(", "));
    }

    let mut config: StringTable = StringTable::new();
    config.insert("app_name".to_string(), "rust-feature-tour".to_string());
    config.insert("version".to_string(), "1.0".to_string());
    config.insert("author".to_string(), "Demo".to_string());

    // HashMap iteration order is unspecified; sort for stable output.
    println!("Configuration:");
    for key in config.keys().sorted() {
        println!("  {key}: {}", config[key]);
    }

    let people: People = vec![
        ("Alice".to_string(), 30),
        ("Bob".to_string(), 25),
        ("Charlie".to_string(), 35),
    ];
    println!("People:");
    for (name, age) in &people {
        println!("  {name}, Age: {age}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_interchangeable_with_their_targets() {
        let point: Point2D = (1.0, 2.0);
        let raw: (f64, f64) = point;
        assert_eq!(raw.1, 2.0);

        let mut table: StringTable = HashMap::new();
        table.insert("k".to_string(), "v".to_string());
        assert_eq!(table.get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn run_succeeds() {
        assert!(run().is_ok());
    }
}
