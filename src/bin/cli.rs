//! studentdb CLI
//!
//! Command-line front end for the student record store.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use studentdb::record::{self, StudentRecord};
use studentdb::{Command, Config, Engine, Field, Outcome, StudentError};
use tracing_subscriber::{fmt, EnvFilter};

/// studentdb CLI
#[derive(Parser, Debug)]
#[command(name = "studentdb-cli")]
#[command(about = "Manage student records")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./student_data")]
    data_dir: String,

    /// Table name
    #[arg(short, long, default_value = "students")]
    table: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new student
    Add {
        id: String,
        name: String,
        age: String,
        grade: String,
    },

    /// Update an existing student
    Update {
        id: String,
        name: String,
        age: String,
        grade: String,
    },

    /// Delete a student by id
    #[command(alias = "del")]
    Delete {
        id: String,
    },

    /// Show one student by id
    Show {
        id: String,
    },

    /// List all students
    List {
        /// Column to sort by
        #[arg(short, long, value_enum, default_value_t = FieldArg::Id)]
        sort_by: FieldArg,
    },

    /// Search students by a column
    Search {
        /// Column to search
        #[arg(short, long, value_enum)]
        by: FieldArg,

        /// Value to look for
        value: String,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FieldArg {
    Id,
    Name,
    Age,
    Grade,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Id => Field::Id,
            FieldArg::Name => Field::Name,
            FieldArg::Age => Field::Age,
            FieldArg::Grade => Field::Grade,
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging (stderr, so stdout carries only the table)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,studentdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .table_name(&args.table)
        .build();

    let engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to open table: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = parse_command(args.command).and_then(|command| engine.execute(command));
    match result {
        Ok(outcome) => {
            render(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Turn raw arguments into a typed command
fn parse_command(command: Commands) -> Result<Command, StudentError> {
    Ok(match command {
        Commands::Add {
            id,
            name,
            age,
            grade,
        } => Command::Add {
            record: record::parse_record(&id, &name, &age, &grade)?,
        },
        Commands::Update {
            id,
            name,
            age,
            grade,
        } => {
            let parsed = record::parse_record(&id, &name, &age, &grade)?;
            Command::Update {
                id: parsed.id,
                name: parsed.name,
                age: parsed.age,
                grade: parsed.grade,
            }
        }
        Commands::Delete { id } => Command::Delete { id: parse_id(&id)? },
        Commands::Show { id } => Command::Show { id: parse_id(&id)? },
        Commands::List { sort_by } => Command::List {
            sort_by: sort_by.into(),
        },
        Commands::Search { by, value } => {
            let field = Field::from(by);
            Command::Search {
                field,
                value: field.parse_value(&value)?,
            }
        }
    })
}

fn parse_id(raw: &str) -> Result<i64, StudentError> {
    let id = record::parse_int("ID", raw)?;
    record::validate_id(id)?;
    Ok(id)
}

fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Added(id) => println!("Student ID {} added successfully!", id),
        Outcome::Updated(id) => println!("Student ID {} updated successfully!", id),
        Outcome::Deleted(id) => println!("Student ID {} deleted successfully!", id),
        Outcome::Record(Some(record)) => print_rows(std::slice::from_ref(record), None),
        Outcome::Record(None) => println!("No student found."),
        Outcome::Listing(rows) if rows.is_empty() => println!("No student records found."),
        Outcome::Listing(rows) => print_rows(rows, None),
        Outcome::Found(result) => match result.position {
            Some(position) => {
                println!("Student found!");
                print_rows(&result.rows, Some(position));
            }
            None => println!("No student found."),
        },
    }
}

/// Print an aligned table; `highlight` marks one row with `*`
fn print_rows(rows: &[StudentRecord], highlight: Option<usize>) {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    println!(
        "  {:>6}  {:<name_width$}  {:>4}  {:>6}",
        "ID", "Name", "Age", "Grade"
    );
    for (i, r) in rows.iter().enumerate() {
        let marker = if highlight == Some(i) { '*' } else { ' ' };
        println!(
            "{} {:>6}  {:<name_width$}  {:>4}  {:>6.2}",
            marker, r.id, r.name, r.age, r.grade
        );
    }
}
