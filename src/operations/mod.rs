pub mod arithmetic;

pub use arithmetic::BinaryOperation;
