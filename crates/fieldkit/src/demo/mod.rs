pub mod auto_storage;
pub mod line_item;

pub use auto_storage::{AutoStorage, StorageClass};
pub use line_item::{LineItem, LineItemFields, as_tuple};
