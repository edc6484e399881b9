use super::*;

/// Maximum number of contacts a store (and a record file) can hold.
pub const CAPACITY: usize = 100;

/// Ordered, capacity-bounded contact collection.
///
/// Contacts are addressed by their 1-based position in storage order.
/// Positions are not stable: deleting position `k` moves every later
/// contact one position down.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactStore {
    data: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(CAPACITY),
        }
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Result<Self, AppError> {
        if contacts.len() > CAPACITY {
            return Err(AppError::Capacity(CAPACITY));
        }
        Ok(Self { data: contacts })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= CAPACITY
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.data
    }

    pub fn into_contacts(self) -> Vec<Contact> {
        self.data
    }

    pub fn get(&self, position: i64) -> Option<&Contact> {
        let index = self.index_of(position)?;
        self.data.get(index)
    }

    pub fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        if self.is_full() {
            return Err(AppError::Capacity(CAPACITY));
        }
        self.data.push(contact.into_bounded());
        Ok(())
    }

    pub fn list(&self) -> Listing<'_> {
        Listing {
            inner: &self.data,
            idx: 0,
        }
    }

    pub fn search(&self, term: &str) -> Vec<(usize, &Contact)> {
        self.list().filter(|(_, c)| c.matches(term)).collect()
    }

    pub fn delete(&mut self, position: i64) -> Result<Contact, AppError> {
        match self.index_of(position) {
            Some(index) => Ok(self.data.remove(index)),
            None => Err(AppError::NotFound(format!("Contact with ID {}", position))),
        }
    }

    fn index_of(&self, position: i64) -> Option<usize> {
        if position < 1 || position > self.data.len() as i64 {
            return None;
        }
        Some(position as usize - 1)
    }
}

/// Iterator over `(position, contact)` pairs in storage order.
pub struct Listing<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for Listing<'a> {
    type Item = (usize, &'a Contact);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some((self.idx, contact))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.inner.len() - self.idx;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Listing<'_> {}
