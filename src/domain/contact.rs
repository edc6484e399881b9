use serde::{Deserialize, Deserializer, Serialize};

/// On-disk width of the name field, terminator included.
pub const NAME_WIDTH: usize = 50;
/// On-disk width of the phone field, terminator included.
pub const PHONE_WIDTH: usize = 20;
/// On-disk width of the email field, terminator included.
pub const EMAIL_WIDTH: usize = 50;

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "deserialize_name")]
    pub name: String,

    #[serde(deserialize_with = "deserialize_phone")]
    pub phone: String,

    #[serde(default, deserialize_with = "deserialize_email")]
    pub email: String,
}

impl Contact {
    /// Builds a contact, silently truncating every field to the content its
    /// fixed-width record slot can hold.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Contact {
            name: bounded(name.into(), NAME_WIDTH),
            phone: bounded(phone.into(), PHONE_WIDTH),
            email: bounded(email.into(), EMAIL_WIDTH),
        }
    }

    /// Same contact with every field cut to its record width.
    pub fn into_bounded(self) -> Self {
        Contact::new(self.name, self.phone, self.email)
    }

    pub fn matches(&self, term: &str) -> bool {
        self.name.contains(term) || self.phone.contains(term)
    }
}

/// Longest prefix of `text` that fits a `width`-byte field with its terminator.
pub fn fit(text: &str, width: usize) -> &str {
    let max = width.saturating_sub(1);
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

pub fn bounded(mut text: String, width: usize) -> String {
    let end = fit(&text, width).len();
    text.truncate(end);
    text
}

fn deserialize_bounded<'de, D>(deserializer: D, width: usize) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(bounded(value.unwrap_or_default(), width))
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_bounded(deserializer, NAME_WIDTH)
}

fn deserialize_phone<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_bounded(deserializer, PHONE_WIDTH)
}

fn deserialize_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_bounded(deserializer, EMAIL_WIDTH)
}
