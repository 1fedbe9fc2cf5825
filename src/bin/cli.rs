//! Command-line interface for the EnzymeML document store
//!
//! # Usage
//!
//! ```bash
//! # Create the tables of a new store
//! enzymeml-db --db lab.db init
//!
//! # Store documents, refusing inconsistent ones
//! enzymeml-db --db lab.db save doc1.json doc2.json --check
//!
//! # Inspect and export what is stored
//! enzymeml-db --db lab.db list --limit 10
//! enzymeml-db --db lab.db show 1
//! enzymeml-db --db lab.db export -o exported/
//! ```
//!
//! The database path can also be given through `ENZYMEML_DB`. Logging is
//! controlled with `-v`/`-vv` or `RUST_LOG`.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use enzymeml_db::{
    prelude::*,
    store::{LoadProfile, Relation, Storage},
    unit,
    validation::{check_consistency, validate_json},
};
use log::info;
use tabled::{builder::Builder, settings::Style};

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the database file
    #[arg(long, global = true, env = "ENZYMEML_DB", default_value = "enzymeml.db")]
    db: PathBuf,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Create or migrate the tables of every entity type
    Init,
    /// Save EnzymeML JSON documents
    Save {
        /// Paths to the JSON documents
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Refuse documents that fail the consistency check
        #[arg(long)]
        check: bool,
    },
    /// List stored documents
    List {
        /// Maximum number of documents to list
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a stored document as tables
    Show {
        /// Id of the document
        id: i64,
    },
    /// Export stored documents as JSON files
    Export {
        /// Id of the document, all documents when omitted
        id: Option<i64>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Delete a stored document
    Delete {
        /// Id of the document
        id: i64,
    },
    /// Validate an EnzymeML JSON document without storing it
    Check {
        /// Path to the JSON document
        path: PathBuf,
    },
    /// Store an example document
    Demo,
    /// Print the tables and relations of the store schema
    Schema,
}

/// Main entry point for the CLI application
pub fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err}", "Error:".bold().red());
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    if let Commands::Check { path } = &cli.command {
        return check(path);
    }
    if let Commands::Schema = &cli.command {
        print_schema();
        return Ok(ExitCode::SUCCESS);
    }

    let mut store = Store::open_all(&cli.db)?;

    match cli.command {
        Commands::Init => {
            println!(
                "Initialized {} with {} entity types",
                store.location().bold(),
                store.registered().len()
            );
        }
        Commands::Save { paths, check } => {
            for path in paths {
                let doc = load_enzmldoc(&path)?;

                if check {
                    let report = check_consistency(&doc);
                    if !report.is_valid {
                        for result in &report.errors {
                            eprintln!("{result}");
                        }
                        return Err(format!("{} is inconsistent", path.display()).into());
                    }
                }

                let id = store.save_document(&doc)?;
                println!("{} {} as document {id}", "Saved".green(), path.display());
            }
        }
        Commands::List { limit } => {
            let docs = match limit {
                Some(limit) => store.get_documents(limit)?,
                None => store.get_all_documents()?,
            };
            println!("{}", document_table(&docs));
        }
        Commands::Show { id } => {
            println!("{}", store.get_document(id)?);
        }
        Commands::Export { id, output_dir } => {
            let docs = match id {
                Some(id) => vec![store.get_document(id)?],
                None => store.get_all_documents()?,
            };

            fs::create_dir_all(&output_dir)?;
            for doc in &docs {
                let id = doc.id.unwrap_or_default();
                let path = output_dir.join(format!("enzymeml_doc_{id}.json"));
                save_enzmldoc(&path, doc)?;
                println!("{} {}", "Exported".green(), path.display());
            }
        }
        Commands::Delete { id } => {
            store.delete_document(id)?;
            println!("{} document {id}", "Deleted".green());
        }
        Commands::Demo => {
            let id = store.save_document(&example_document())?;
            info!("event=demo id={id}");

            let docs = store.get_all_documents()?;
            println!("{} document {id}", "Saved example as".green());
            println!("{}", serde_json::to_string_pretty(&store.get_document(id)?)?);
            println!("{} documents in store", docs.len());
        }
        Commands::Check { .. } | Commands::Schema => {}
    }

    store.close()?;
    Ok(ExitCode::SUCCESS)
}

/// Runs the schema and consistency checks. Exits with failure when either
/// finds an error.
fn check(path: &Path) -> Result<ExitCode, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;

    let schema_report = validate_json(&content)?;
    if !schema_report.valid {
        println!("{}", "Schema violations".bold());
        for error in &schema_report.errors {
            println!("{error}");
        }
        return Ok(ExitCode::FAILURE);
    }

    let doc = parse_enzmldoc(&content)?;
    let report = check_consistency(&doc);
    for result in &report.errors {
        println!("{result}");
    }

    if report.is_valid {
        println!("{} {}", path.display(), "is valid".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} {}", path.display(), "is inconsistent".red().bold());
        Ok(ExitCode::FAILURE)
    }
}

fn document_table(docs: &[EnzymeMLDocument]) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "ID",
        "Name",
        "Version",
        "Vessels",
        "Species",
        "Reactions",
        "Measurements",
    ]);

    for doc in docs {
        let species = doc.small_molecules.len() + doc.proteins.len() + doc.complexes.len();
        builder.push_record([
            doc.id.map_or("-".to_string(), |id| id.to_string()),
            doc.name.clone(),
            doc.version.clone(),
            doc.vessels.len().to_string(),
            species.to_string(),
            doc.reactions.len().to_string(),
            doc.measurements.len().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn print_schema() {
    let mut tables = Builder::default();
    tables.push_record(["Entity", "Table", "Key", "Depends on"]);
    for kind in EntityKind::ALL {
        let dependencies = kind
            .dependencies()
            .iter()
            .map(|dep| dep.name())
            .collect::<Vec<_>>()
            .join(", ");
        tables.push_record([
            kind.name().to_string(),
            kind.table().to_string(),
            format!("{:?}", kind.key()),
            dependencies,
        ]);
    }

    let mut relations = Builder::default();
    relations.push_record(["Relation", "Child", "Stored in"]);
    for relation in Relation::ALL {
        let stored = match relation.storage() {
            Storage::JoinTable { table, .. } => format!("join table {table}"),
            Storage::ForeignKey { table, column } => format!("column {table}.{column}"),
        };
        relations.push_record([
            relation.to_string(),
            relation.child().name().to_string(),
            stored,
        ]);
    }

    let profile = LoadProfile::of(EntityKind::Document);
    let paths = profile
        .paths()
        .iter()
        .map(|path| {
            path.iter()
                .map(|relation| relation.field())
                .collect::<Vec<_>>()
                .join(".")
        })
        .collect::<Vec<_>>();

    let mut tables = tables.build();
    tables.with(Style::rounded());
    let mut relations = relations.build();
    relations.with(Style::rounded());

    println!("{}", "Tables".bold());
    println!("{tables}");
    println!("{}", "Relations".bold());
    println!("{relations}");
    println!("{}", "Document load paths".bold());
    for path in paths {
        println!("  {path}");
    }
}

/// The example document: one vessel, an enzyme converting a substrate into a
/// product, and one measurement at pH 7 and 298.15 K.
fn example_document() -> EnzymeMLDocument {
    let substrate = |id: &str, name: &str| SmallMolecule {
        id: id.to_string(),
        name: name.to_string(),
        constant: false,
        vessel_id: Some("vessel1".to_string()),
        ..Default::default()
    };

    EnzymeMLDocument {
        name: "Example EnzymeML Document".to_string(),
        version: "2.0".to_string(),
        creators: vec![Creator {
            given_name: "John".to_string(),
            family_name: "Doe".to_string(),
            mail: "john.doe@example.com".to_string(),
        }],
        vessels: vec![Vessel {
            id: "vessel1".to_string(),
            name: "Reaction Vessel 1".to_string(),
            volume: 1.0,
            unit: unit!([_ litre]),
            constant: true,
        }],
        proteins: vec![Protein {
            id: "protein1".to_string(),
            name: "Example Enzyme".to_string(),
            constant: false,
            vessel_id: Some("vessel1".to_string()),
            ecnumber: Some("1.1.1.1".to_string()),
            ..Default::default()
        }],
        small_molecules: vec![
            substrate("substrate1", "Example Substrate"),
            substrate("product1", "Example Product"),
        ],
        reactions: vec![Reaction {
            id: "reaction1".to_string(),
            name: "Example Reaction".to_string(),
            reversible: false,
            kinetic_law: None,
            species: vec![
                ReactionElement::reactant("substrate1", 1.0),
                ReactionElement::product("product1", 1.0),
            ],
            modifiers: vec!["protein1".to_string()],
        }],
        measurements: vec![Measurement {
            id: "measurement1".to_string(),
            name: "Example Measurement".to_string(),
            ph: Some(7.0),
            temperature: Some(298.15),
            temperature_unit: Some(unit!([_ kelvin])),
            ..Default::default()
        }],
        ..Default::default()
    }
}
