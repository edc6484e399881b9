//! Fixed-layout binary record file.
//!
//! ```text
//! [ count : i32 little-endian ]
//! [ count x record ]
//!   record = name[50] | phone[20] | email[50]   (zero padded)
//! ```
//!
//! Each text field is written into its full fixed-width buffer, so the
//! bytes after the terminator are always present on disk. A missing,
//! truncated or otherwise corrupt file loads as an empty store.

use super::*;
use crate::domain::contact::{EMAIL_WIDTH, NAME_WIDTH, PHONE_WIDTH, fit};
use crate::domain::{CAPACITY, ContactStore};
use log::{debug, info, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Read, Write};

pub const COUNT_WIDTH: usize = 4;
pub const RECORD_WIDTH: usize = NAME_WIDTH + PHONE_WIDTH + EMAIL_WIDTH;

pub fn encode(store: &ContactStore) -> Vec<u8> {
    let mut buf = Vec::with_capacity(COUNT_WIDTH + store.len() * RECORD_WIDTH);
    buf.extend_from_slice(&(store.len() as i32).to_le_bytes());

    for contact in store.contacts() {
        put_field(&mut buf, &contact.name, NAME_WIDTH);
        put_field(&mut buf, &contact.phone, PHONE_WIDTH);
        put_field(&mut buf, &contact.email, EMAIL_WIDTH);
    }
    buf
}

pub fn decode<R: Read>(reader: &mut R) -> Result<ContactStore, AppError> {
    let mut count_buf = [0u8; COUNT_WIDTH];
    if !read_full(reader, &mut count_buf)? {
        warn!("record file too short to hold a contact count, starting empty");
        return Ok(ContactStore::new());
    }

    let count = i32::from_le_bytes(count_buf);
    if count < 0 || count as usize > CAPACITY {
        warn!("record file claims {} contacts, starting empty", count);
        return Ok(ContactStore::new());
    }

    let mut contacts = Vec::with_capacity(count as usize);
    let mut record = [0u8; RECORD_WIDTH];
    for _ in 0..count {
        if !read_full(reader, &mut record)? {
            warn!(
                "record file holds fewer than {} contact records, starting empty",
                count
            );
            return Ok(ContactStore::new());
        }
        contacts.push(decode_record(&record));
    }

    ContactStore::from_contacts(contacts)
}

/// Writes `store` to `path`, replacing whatever was there.
pub fn save(store: &ContactStore, path: &Path) -> Result<(), AppError> {
    create_file_parent(path)?;

    let data = encode(store);
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(&data)?;
    file.flush()?;

    info!("saved {} contacts to {:?}", store.len(), path);
    Ok(())
}

/// Reads the store at `path`. A missing file is the first-run state and
/// yields an empty store.
pub fn load(path: &Path) -> Result<ContactStore, AppError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no record file at {:?}, starting empty", path);
            return Ok(ContactStore::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = BufReader::new(file);
    let store = decode(&mut reader)?;

    info!("loaded {} contacts from {:?}", store.len(), path);
    Ok(store)
}

fn put_field(buf: &mut Vec<u8>, text: &str, width: usize) {
    let text = fit(text, width).as_bytes();
    buf.extend_from_slice(text);
    buf.resize(buf.len() + width - text.len(), 0);
}

fn decode_record(record: &[u8; RECORD_WIDTH]) -> Contact {
    let (name, rest) = record.split_at(NAME_WIDTH);
    let (phone, email) = rest.split_at(PHONE_WIDTH);

    Contact {
        name: field_text(name),
        phone: field_text(phone),
        email: field_text(email),
    }
}

// Stops at the first zero byte or the end of the field, whichever is first.
fn field_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

// Ok(false) when the reader ran dry before `buf` was filled.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<bool, AppError> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}
