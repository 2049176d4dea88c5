//! Constructor shorthand: `new()`, field-init shorthand, struct update.

use std::fmt;

use crate::error::DemoError;

struct Person {
    name: String,
    age: u32,
}

impl Person {
    // Local names match the fields, so shorthand fills them in.
    fn new(name: impl Into<String>, age: u32) -> Self {
        let name = name.into();
        Self { name, age }
    }

    fn display_info(&self) {
        println!("Person: {}, Age: {}", self.name, self.age);
    }
}

// Composition instead of inheritance: an Employee has a Person.
struct Employee {
    person: Person,
    department: String,
}

impl Employee {
    fn new(name: impl Into<String>, age: u32, department: impl Into<String>) -> Self {
        Self {
            person: Person::new(name, age),
            department: department.into(),
        }
    }

    fn display_info(&self) {
        println!(
            "Employee: {}, Age: {}, Department: {}",
            self.person.name, self.person.age, self.department
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

impl Point {
    fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub fn run() -> Result<(), DemoError> {
    println!("\n=== Constructor Shorthand Example ===");

    let person = Person::new("John Doe", 30);
    person.display_info();

    let employee = Employee::new("Jane Smith", 28, "Engineering");
    employee.display_info();

    let point = Point::new(10, 20);
    println!("Point: {point}");

    // Struct update syntax reuses every field you don't spell out.
    let shifted = Point { x: 0, ..point };
    println!("Updated point: {shifted}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_displays_as_pair() {
        assert_eq!(Point::new(10, 20).to_string(), "(10, 20)");
    }

    #[test]
    fn struct_update_keeps_remaining_fields() {
        let point = Point::new(3, 7);
        assert_eq!(Point { x: 0, ..point }, Point::new(0, 7));
    }

    #[test]
    fn employee_wraps_a_person() {
        let employee = Employee::new("Jane Smith", 28, "Engineering");
        assert_eq!(employee.person.name, "Jane Smith");
        assert_eq!(employee.person.age, 28);
        assert_eq!(employee.department, "Engineering");
    }

    #[test]
    fn run_succeeds() {
        assert!(run().is_ok());
    }
}
