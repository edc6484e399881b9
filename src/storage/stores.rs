use super::*;

use csv::{Reader, Writer};
use log::info;
use std::path::PathBuf;

const IMPORT_PATH: &str = "./csv/contacts.csv";
const EXPORT_PATH: &str = "./csv/exported.csv";

/// The binary record file behind the interactive contact book.
pub struct DatStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl DatStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "dat".to_string(),
            path: path.into(),
        }
    }
}

pub struct CsvStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl CsvStorage {
    pub fn for_import(src: Option<&str>) -> Self {
        Self {
            medium: "csv".to_string(),
            path: PathBuf::from(src.unwrap_or(IMPORT_PATH)),
        }
    }

    /// A directory destination gets `exported.csv` inside it.
    pub fn for_export(des: Option<&str>) -> Result<Self, AppError> {
        let mut file_path = PathBuf::from(des.unwrap_or(EXPORT_PATH));

        if file_path.is_dir() {
            file_path = file_path.join("exported.csv");
        } else if file_path.extension().is_none_or(|ext| ext != "csv") {
            return Err(AppError::Validation(
                "Export file must be a .csv file".to_string(),
            ));
        }

        Ok(Self {
            medium: "csv".to_string(),
            path: file_path,
        })
    }
}

impl ContactStorage for DatStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(codec::load(&self.path)?.into_contacts())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let store = crate::domain::ContactStore::from_contacts(contacts.to_vec())?;
        codec::save(&store, &self.path)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

impl ContactStorage for CsvStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !self.path.exists() {
            return Err(AppError::NotFound("CSV file".to_string()));
        }

        if self.path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation("File not .csv".to_string()));
        }

        let mut reader = Reader::from_path(&self.path)?;

        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let record: Contact = result?;
            contacts.push(record);
        }

        info!("read {} contacts from {:?}", contacts.len(), self.path);
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut writer = Writer::from_path(&self.path)?;

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;

        info!("wrote {} contacts to {:?}", contacts.len(), self.path);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn dat_storage_round_trips() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = DatStorage::new(dir.path().join("contacts.dat"));
        let contacts = vec![
            Contact::new("Uche", "01234567890", "ucheuche@gmail.com"),
            Contact::new("Alex", "01234567890", ""),
        ];

        storage.save(&contacts)?;

        assert_eq!(storage.load()?, contacts);
        assert_eq!(storage.get_medium(), "dat");
        Ok(())
    }

    #[test]
    fn dat_storage_refuses_more_than_capacity() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = DatStorage::new(dir.path().join("contacts.dat"));
        let contacts = vec![Contact::default(); crate::domain::CAPACITY + 1];

        assert!(matches!(storage.save(&contacts), Err(AppError::Capacity(_))));
        assert!(!storage.location().exists());
        Ok(())
    }

    #[test]
    fn csv_storage_round_trips_with_header() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("out.csv");
        let storage = CsvStorage::for_export(path.to_str())?;
        let contacts = vec![Contact::new("Mom", "98765432109", "mom@example.com")];

        storage.save(&contacts)?;

        let written = fs::read_to_string(&path)?;
        assert!(written.starts_with("name,phone,email\n"));
        assert_eq!(CsvStorage::for_import(path.to_str()).load()?, contacts);
        Ok(())
    }

    #[test]
    fn csv_import_truncates_long_fields() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            format!("name,phone,email\n{},{},\n", "a".repeat(60), "1".repeat(25)),
        )?;

        let contacts = CsvStorage::for_import(path.to_str()).load()?;

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name.len(), 49);
        assert_eq!(contacts[0].phone.len(), 19);
        assert_eq!(contacts[0].email, "");
        Ok(())
    }

    #[test]
    fn export_into_directory_uses_default_name() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = CsvStorage::for_export(dir.path().to_str())?;

        assert_eq!(storage.location(), dir.path().join("exported.csv"));
        Ok(())
    }

    #[test]
    fn export_rejects_non_csv_file() {
        let result = CsvStorage::for_export(Some("contacts.txt"));

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn import_missing_file_is_not_found() {
        let result = CsvStorage::for_import(Some("./definitely/not/here.csv")).load();

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
