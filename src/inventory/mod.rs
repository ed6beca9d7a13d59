/// Inventory domain layer: the Ansible inventory shape and how it is built.
pub mod build;
pub mod errors;
pub mod model;

pub use build::build_inventory;
pub use errors::InventoryError;
pub use model::Inventory;
