use super::{Console, display_contact};
use crate::{
    domain::{CAPACITY, Command, Contact, ContactStore, contact},
    errors::AppError,
    storage::{ContactStorage, CsvStorage, DatStorage},
};
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::command::{Cli, Commands};

/// Outcome of a CSV import into the record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub path: PathBuf,
    pub imported: usize,
    pub skipped: usize,
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let book = DatStorage::new(&cli.data_file);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut console = Console::new(stdin.lock(), stdout.lock());

            let mut store = open_book(&book, &mut console)?;
            run_menu(&mut store, &book, &mut console)
        }

        Commands::Import { src } => {
            let source = CsvStorage::for_import(src.as_deref());
            let summary = import_contacts(&book, &source)?;

            println!(
                "Successfully imported {} contacts from {:?}.",
                summary.imported, summary.path
            );
            if summary.skipped > 0 {
                println!("{}", AppError::Capacity(CAPACITY));
                println!("{} contacts were skipped.", summary.skipped);
            }
            Ok(())
        }

        Commands::Export { des } => {
            let destination = CsvStorage::for_export(des.as_deref())?;
            let total = export_contacts(&book, &destination)?;

            println!(
                "Successfully exported {} contacts to {:?}.",
                total,
                destination.location()
            );
            Ok(())
        }
    }
}

/// Loads the book at startup. Failures are reported and the session starts
/// empty.
fn open_book<R: BufRead, W: Write>(
    book: &dyn ContactStorage,
    console: &mut Console<R, W>,
) -> Result<ContactStore, AppError> {
    let loaded = book.load().and_then(ContactStore::from_contacts);

    match loaded {
        Ok(store) => {
            if !store.is_empty() {
                console.print_line(format!("Loaded {} contacts.", store.len()))?;
            }
            Ok(store)
        }
        Err(e) => {
            console.print_line(format!("Could not load contacts: {}", e))?;
            Ok(ContactStore::new())
        }
    }
}

/// Runs the numbered menu until option 5 saves successfully or input ends.
/// End of input leaves without saving.
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut ContactStore,
    storage: &dyn ContactStorage,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    loop {
        console.show_menu()?;

        let Some(choice) = console.get_input()? else {
            console.print_line("\nInput closed, changes were not saved.")?;
            info!("input closed with {} unsaved contacts", store.len());
            return Ok(());
        };

        let outcome = match Command::parse(&choice) {
            Ok(Command::AddContact) => add_contact(store, console),
            Ok(Command::ListContacts) => list_contacts(store, console),
            Ok(Command::SearchContacts) => search_contacts(store, console),
            Ok(Command::DeleteContact) => delete_contact(store, console),
            Ok(Command::SaveAndExit) => match storage.save(store.contacts()) {
                Ok(()) => {
                    console.print_line("Contacts saved. Bye!")?;
                    return Ok(());
                }
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            console.print_line(e)?;
        }
        console.print_line("")?;
    }
}

fn add_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if store.is_full() {
        return Err(AppError::Capacity(CAPACITY));
    }

    console.print_line("--- Add contact ---")?;
    let Some(name) = console.ask("Name: ")? else {
        return Ok(());
    };
    let Some(phone) = console.ask("Phone: ")? else {
        return Ok(());
    };
    let Some(email) = console.ask("Email: ")? else {
        return Ok(());
    };

    store.add(Contact::new(name, phone, email))?;
    console.print_line("Contact added successfully!")?;
    Ok(())
}

fn list_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if store.is_empty() {
        console.print_line("Contact book is empty.")?;
        return Ok(());
    }

    console.print_line(format!("--- All contacts ({}) ---", store.len()))?;
    for (position, c) in store.list() {
        console.print_line(format!("ID: {}", position))?;
        console.print_line(display_contact(c))?;
        console.print_line("------------------------")?;
    }
    Ok(())
}

fn search_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if store.is_empty() {
        console.print_line("Contact book is empty, nothing to search.")?;
        return Ok(());
    }

    console.print_line("--- Search contacts ---")?;
    let Some(term) = console.ask("Name or phone to search for: ")? else {
        return Ok(());
    };
    let term = contact::fit(&term, contact::NAME_WIDTH);

    let found = store.search(term);
    for (position, c) in &found {
        console.print_line(format!("--- Match (ID: {}) ---", position))?;
        console.print_line(display_contact(c))?;
        console.print_line("---------------------------")?;
    }

    if found.is_empty() {
        console.print_line("No matching contacts found.")?;
    } else {
        console.print_line(format!("Found {} matching contacts.", found.len()))?;
    }
    Ok(())
}

fn delete_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if store.is_empty() {
        console.print_line("Contact book is empty, nothing to delete.")?;
        return Ok(());
    }

    console.print_line("--- Delete contact ---")?;
    let label = format!("ID of the contact to delete (1 to {}): ", store.len());
    let Some(input) = console.ask(&label)? else {
        return Ok(());
    };

    let position = input.trim().parse::<i64>()?;
    let removed = store.delete(position)?;

    console.print_line(format!(
        "Contact (ID: {}) {} deleted successfully!",
        position, removed.name
    ))?;
    Ok(())
}

/// Appends every contact from `source` to the book until it is full, then
/// saves the book. Contacts past the capacity are counted as skipped.
pub fn import_contacts(
    book: &dyn ContactStorage,
    source: &dyn ContactStorage,
) -> Result<ImportSummary, AppError> {
    let mut store = ContactStore::from_contacts(book.load()?)?;
    let incoming = source.load()?;
    let total = incoming.len();

    let mut imported = 0;
    for c in incoming {
        if store.add(c).is_err() {
            break;
        }
        imported += 1;
    }

    book.save(store.contacts())?;

    info!(
        "imported {} of {} contacts from {} into {}",
        imported,
        total,
        source.get_medium(),
        book.get_medium()
    );
    Ok(ImportSummary {
        path: source.location().to_path_buf(),
        imported,
        skipped: total - imported,
    })
}

pub fn export_contacts(
    book: &dyn ContactStorage,
    destination: &dyn ContactStorage,
) -> Result<usize, AppError> {
    let contacts = book.load()?;
    destination.save(&contacts)?;
    Ok(contacts.len())
}
