pub mod bag;
pub mod order;
pub mod product;
