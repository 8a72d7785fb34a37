#![forbid(unsafe_code)]

mod archive;
mod ui;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "xlsar",
    version,
    about = "Pack files into an archive that looks like a legacy .xls document"
)]
struct Cli {
    /// Log more (repeatable: -v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pack files into an archive. ".xls" is appended to the name if missing.
    Pack {
        /// Archive to create.
        archive: PathBuf,
        /// Files to store, in order. Only base names are kept.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Overwrite an existing archive without asking.
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },

    /// Extract every file of an archive into an existing directory.
    Unpack {
        archive: PathBuf,
        output_dir: PathBuf,
    },

    /// List the records of an archive.
    List {
        archive: PathBuf,
        /// Print offsets and sizes too.
        #[arg(short, long, default_value_t = false)]
        long: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cmd: Command) -> archive::ArchiveResult<()> {
    match cmd {
        Command::Pack {
            archive: name,
            files,
            yes,
        } => {
            let archive_path = ui::ensure_xls_ext(&name);
            if !ui::may_overwrite(&archive_path, yes)? {
                println!("Operation cancelled.");
                return Ok(());
            }
            archive::pack(&archive_path, &files)?;
            println!("Archive created: {}", archive_path.display());
        }
        Command::Unpack {
            archive: path,
            output_dir,
        } => {
            archive::unpack(&path, &output_dir)?;
            println!("Archive extracted to: {}", output_dir.display());
        }
        Command::List {
            archive: path,
            long,
        } => {
            for rec in archive::list(&path)? {
                if long {
                    println!("{}  off={} size={}", rec.name, rec.offset, rec.size);
                } else {
                    println!("{}", rec.name);
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.cmd) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn pack_keeps_file_order() {
        let cli = Cli::try_parse_from(["xlsar", "pack", "out", "b.txt", "a.txt", "--yes"]).unwrap();
        match cli.cmd {
            Command::Pack {
                archive,
                files,
                yes,
            } => {
                assert_eq!(archive, PathBuf::from("out"));
                assert_eq!(files, [PathBuf::from("b.txt"), PathBuf::from("a.txt")]);
                assert!(yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn pack_requires_at_least_one_file() {
        assert!(Cli::try_parse_from(["xlsar", "pack", "out"]).is_err());
    }

    #[test]
    fn verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["xlsar", "unpack", "a.xls", "dir", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.cmd, Command::Unpack { .. }));
    }
}
