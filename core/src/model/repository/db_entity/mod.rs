mod content_item;

pub use content_item::*;
