use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate JSON input against a record shape.
    Validate(ValidateArgs),
    /// Print a registered JSON Schema.
    Schema(SchemaArgs),
    /// List the record kinds and their schemas.
    Kinds,
}

/// Arguments for `forma validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Record kind: order, patient, todo, user (collection names also accepted).
    pub kind: String,

    /// Input file with a JSON object, an array of objects, or JSON Lines.
    /// Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Catalog of known ids and usernames (JSON or TOML) for reference checks.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Stop at the first invalid input.
    #[arg(long)]
    pub fail_fast: bool,
}

/// Arguments for `forma schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name, e.g. `order_input` or `user`. Collection names such as
    /// `orders` map to the kind's input schema.
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// List registered schema names instead.
    #[arg(long, conflicts_with = "name")]
    pub list: bool,
}
