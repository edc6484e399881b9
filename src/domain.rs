pub mod contact;
pub mod store;

use crate::errors::AppError;
pub use contact::Contact;
pub use store::{CAPACITY, ContactStore};

/// Interactive menu selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddContact,
    ListContacts,
    SearchContacts,
    DeleteContact,
    SaveAndExit,
}

impl Command {
    pub fn parse(choice: &str) -> Result<Self, AppError> {
        match choice.trim().parse::<i32>() {
            Ok(1) => Ok(Command::AddContact),
            Ok(2) => Ok(Command::ListContacts),
            Ok(3) => Ok(Command::SearchContacts),
            Ok(4) => Ok(Command::DeleteContact),
            Ok(5) => Ok(Command::SaveAndExit),
            _ => Err(AppError::ParseCommand(choice.trim().to_string())),
        }
    }
}
