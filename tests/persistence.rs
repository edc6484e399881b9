use contact_book::prelude::*;
use std::fs;
use tempfile::tempdir;

fn store_with(n: usize) -> ContactStore {
    let contacts = (0..n)
        .map(|i| {
            let email = if i % 3 == 0 {
                String::new()
            } else {
                format!("u{i}@mail.com")
            };
            Contact::new(format!("Ünïcode {i}"), format!("+234{i:010}"), email)
        })
        .collect();
    ContactStore::from_contacts(contacts).unwrap()
}

#[test]
fn save_load_round_trip_for_every_size() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.dat");

    for n in [0, 1, 2, 17, 99, CAPACITY] {
        let store = store_with(n);
        codec::save(&store, &path)?;

        assert_eq!(fs::metadata(&path)?.len() as usize, 4 + n * codec::RECORD_WIDTH);
        assert_eq!(codec::load(&path)?, store);
    }
    Ok(())
}

#[test]
fn max_width_fields_round_trip() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.dat");
    let store = ContactStore::from_contacts(vec![Contact::new(
        "n".repeat(100),
        "p".repeat(100),
        "e".repeat(100),
    )])?;

    codec::save(&store, &path)?;
    let loaded = codec::load(&path)?;

    assert_eq!(loaded, store);
    assert_eq!(loaded.contacts()[0].name.len(), 49);
    assert_eq!(loaded.contacts()[0].phone.len(), 19);
    assert_eq!(loaded.contacts()[0].email.len(), 49);
    Ok(())
}

#[test]
fn struct_literal_contacts_round_trip_after_add() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.dat");
    let mut store = ContactStore::new();
    store.add(Contact {
        name: "Ä".repeat(40),
        phone: "0".repeat(25),
        email: "e".repeat(80),
    })?;

    codec::save(&store, &path)?;

    assert_eq!(codec::load(&path)?, store);
    Ok(())
}

#[test]
fn nonexistent_path_loads_empty() -> Result<(), AppError> {
    let dir = tempdir()?;

    let store = codec::load(&dir.path().join("first-run.dat"))?;

    assert!(store.is_empty());
    Ok(())
}

#[test]
fn truncated_after_count_loads_empty() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.dat");
    codec::save(&store_with(5), &path)?;

    let bytes = fs::read(&path)?;
    fs::write(&path, &bytes[..4])?;
    assert!(codec::load(&path)?.is_empty());

    // cut inside the last record
    fs::write(&path, &bytes[..bytes.len() - 1])?;
    assert!(codec::load(&path)?.is_empty());

    // not even a whole count
    fs::write(&path, &bytes[..3])?;
    assert!(codec::load(&path)?.is_empty());
    Ok(())
}

#[test]
fn storage_trait_uses_the_record_file() -> Result<(), AppError> {
    let dir = tempdir()?;
    let storage: Box<dyn ContactStorage> =
        Box::new(DatStorage::new(dir.path().join("contacts.dat")));
    let contacts = store_with(3).into_contacts();

    storage.save(&contacts)?;

    assert_eq!(storage.load()?, contacts);
    assert_eq!(codec::load(storage.location())?.len(), 3);
    Ok(())
}
