use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use namecase::{Convention, Name};

#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the convention followed by each name.
    Detect {
        /// The names to inspect
        #[clap(value_name = "NAMES", required = true)]
        names: Vec<String>,
    },
    /// Convert each name to another convention.
    Convert {
        /// The convention to convert to, such as 'snake' or 'PascalCase'.
        #[clap(short, long, value_name = "CONVENTION")]
        to: Convention,
        /// The convention the names follow. Detected from each name if omitted.
        #[clap(short, long, value_name = "CONVENTION")]
        from: Option<Convention>,
        /// The names to convert
        #[clap(value_name = "NAMES", required = true)]
        names: Vec<String>,
    },
    /// Print the single convention followed by all names.
    Infer {
        /// The names to inspect
        #[clap(value_name = "NAMES", required_unless_present = "json")]
        names: Vec<String>,
        /// A JSON file whose object keys are inspected instead.
        #[clap(long, value_name = "PATH", conflicts_with = "names")]
        json: Option<PathBuf>,
    },
    /// Check whether each name follows a convention.
    Validate {
        /// The convention to check against
        #[clap(short, long, value_name = "CONVENTION")]
        convention: Convention,
        /// The names to check
        #[clap(value_name = "NAMES", required = true)]
        names: Vec<String>,
    },
}

pub fn main() -> Result<()> {
    miette::set_panic_hook();

    let args = Args::parse();
    match args.command {
        Command::Detect { names } => {
            for name in names {
                let name = Name::detect(&name)?;
                println!("{}\t{}", name.convention(), name);
            }
        }
        Command::Convert { to, from, names } => {
            for name in names {
                let name = match from {
                    Some(from) => Name::new(from, name)?,
                    None => Name::detect(&name)?,
                };
                println!("{}", name.convert_to(to));
            }
        }
        Command::Infer { names, json } => {
            let convention = match json {
                Some(path) => {
                    let source = fs::read_to_string(&path)
                        .into_diagnostic()
                        .wrap_err_with(|| format!("error opening file '{}'", path.display()))?;
                    let data: serde_json::Value = serde_json::from_str(&source)
                        .into_diagnostic()
                        .wrap_err_with(|| format!("file '{}' is not valid JSON", path.display()))?;
                    Convention::infer_from_json(&data)?
                }
                None => Convention::infer_from_list(&names)?,
            };
            println!("{}", convention);
        }
        Command::Validate { convention, names } => {
            for name in names {
                println!("{}\t{}", convention.validate(&name), name);
            }
        }
    }
    Ok(())
}
