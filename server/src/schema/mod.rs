pub mod content_item;
pub mod id_types;
pub use content_item::*;
pub use id_types::*;
