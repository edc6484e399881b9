use crate::storage::DEFAULT_DATA_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Binary record file holding the contact book
    #[arg(long, env = "CONTACTS_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu (default when no subcommand is given)
    Menu,

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu_on_default_file() {
        let cli = Cli::try_parse_from(["contact-book"]).unwrap();

        assert_eq!(cli.command, None);
        assert_eq!(cli.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn parses_import_and_export_paths() {
        let cli = Cli::try_parse_from([
            "contact-book",
            "--data-file",
            "x.dat",
            "import",
            "-s",
            "in.csv",
        ])
        .unwrap();
        assert_eq!(cli.data_file, PathBuf::from("x.dat"));
        assert_eq!(
            cli.command,
            Some(Commands::Import {
                src: Some("in.csv".to_string())
            })
        );

        let cli = Cli::try_parse_from(["contact-book", "export", "--des", "out.csv"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Export {
                des: Some("out.csv".to_string())
            })
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
