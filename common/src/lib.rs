pub mod dish;
pub mod ingredient;
