pub mod attribute;
pub mod item;
pub mod range;

pub use attribute::bind_attributes;
pub use item::Item;
pub use range::bind_ranges;
