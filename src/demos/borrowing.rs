//! Read-only borrows: share a value without copying or moving it.

use crate::error::DemoError;

struct LargeRecord {
    id: u32,
    name: String,
    data: Vec<i32>,
}

// A shared borrow: no copy of the record, no way to mutate it.
fn process_record(record: &LargeRecord) {
    println!("Processing record with id: {}", record.id);
    println!("Data length: {}", record.data.len());
    let first_ten: i32 = record.data.iter().take(10).sum();
    println!("Sum of first 10 elements: {first_ten}");
}

#[derive(Debug, Clone, Copy)]
struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

// Copy types can be passed by value cheaply...
fn process_by_value(point: Vector3) {
    println!("  Point: ({}, {}, {})", point.x, point.y, point.z);
}

// ...or borrowed when the callee only needs to look.
fn process_by_ref(point: &Vector3) {
    println!("  Point: ({}, {}, {})", point.x, point.y, point.z);
}

pub fn run() -> Result<(), DemoError> {
    println!("\n=== Read-only Borrows Example ===");

    let record = LargeRecord {
        id: 1,
        name: "Large Data Structure".to_string(),
        data: (0..100).collect(),
    };

    process_record(&record);

    // The record is still ours once the borrow ends.
    println!("Original record id: {}", record.id);
    println!("Original record name: {}", record.name);

    let point = Vector3 {
        x: 10.0,
        y: 20.0,
        z: 30.0,
    };

    println!("\nPassing by value (copies the struct):");
    process_by_value(point);

    println!("\nPassing by reference (no copy):");
    process_by_ref(&point);

    Ok(())
}
