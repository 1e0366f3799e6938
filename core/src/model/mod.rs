pub mod repository;

mod content_item;
mod id_types;
pub use content_item::*;
pub use id_types::*;

mod util;
