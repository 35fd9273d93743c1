pub mod arithmetic;
pub mod greeting;
pub mod utils;

pub use arithmetic::{add, multiply};
pub use greeting::greet;
