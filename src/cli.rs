pub mod command;
pub mod run;

pub use run::{export_contacts, import_contacts, run_app, run_menu};

use crate::domain::Contact;
use crate::errors::AppError;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-oriented terminal I/O, generic so the menu can be driven without a tty.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "========== Contact Book ==========")?;
        writeln!(self.output, "1. Add contact")?;
        writeln!(self.output, "2. View all contacts")?;
        writeln!(self.output, "3. Search contacts")?;
        writeln!(self.output, "4. Delete contact")?;
        writeln!(self.output, "5. Save and exit")?;
        writeln!(self.output, "==================================")?;
        self.prompt("Enter your choice: ")
    }

    pub fn prompt(&mut self, label: &str) -> Result<(), AppError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn print_line(&mut self, message: impl Display) -> Result<(), AppError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// One line of input without its line terminator, `None` at end of input.
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    pub fn get_input(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    pub fn ask(&mut self, label: &str) -> Result<Option<String>, AppError> {
        self.prompt(label)?;
        self.get_input()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "  Name:  {}\n  \
        Phone: {}\n  \
        Email: {}",
        contact.name, contact.phone, contact.email
    )
}
