pub mod fill;
pub mod validate;
