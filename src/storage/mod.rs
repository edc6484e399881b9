pub mod codec;
pub mod stores;

use crate::domain::Contact;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use stores::{CsvStorage, DatStorage};

/// Default record file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "contacts.dat";

pub trait ContactStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;

    fn location(&self) -> &Path;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
