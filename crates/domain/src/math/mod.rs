pub mod constant_product;
pub mod fraction;
pub mod significant;
