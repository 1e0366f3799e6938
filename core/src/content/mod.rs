pub mod dates;
pub mod example_data;
pub mod form;
pub mod listing;
