pub mod highlight;
pub mod segment;
