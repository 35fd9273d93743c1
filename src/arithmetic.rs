use std::ops::{Add, Mul};

/// Adds two numbers together.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Multiplies two numbers.
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}
