pub use crate::cli::{Console, command, export_contacts, import_contacts, run_app, run_menu};
pub use crate::domain::{
    CAPACITY, Command,
    contact::{self, Contact},
    store::{ContactStore, Listing},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStorage, CsvStorage, DatStorage, codec};
