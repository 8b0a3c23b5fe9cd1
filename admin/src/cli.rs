use crate::resource_kind::{ImportKind, ResourceKind};
use clap::{Parser, Subcommand};
use protocol::Environment;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tools-admin")]
#[command(
    author,
    version,
    about = "Administration client for the course scheduling tools API",
    long_about = None
)]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/admin.toml")]
    pub config: String,

    /// Override target environment (development, production)
    #[arg(short, long)]
    pub environment: Option<Environment>,

    /// Override deployed host used in production
    #[arg(long)]
    pub host: Option<String>,

    /// Override the full API base address
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override session storage file
    #[arg(long)]
    pub session_file: Option<String>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override log directory
    #[arg(long)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store a session issued by the backend sign-in flow
    Login {
        #[arg(long, env = "TOOLS_TOKEN", hide_env_values = true)]
        token: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        user_id: Option<i64>,
    },
    /// Sign out on the server and forget the stored session
    Logout,
    /// Show the stored identity
    Whoami,
    /// List a resource
    List {
        resource: ResourceKind,
        /// Query parameter as key=value, repeatable
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// Fetch one record
    Get { resource: ResourceKind, id: String },
    /// Create a record from a JSON document
    Create {
        resource: ResourceKind,
        #[arg(long)]
        data: String,
    },
    /// Replace a record with a JSON document
    Update {
        resource: ResourceKind,
        id: String,
        #[arg(long)]
        data: String,
    },
    /// Delete one record
    Delete { resource: ResourceKind, id: String },
    /// Bulk import a CSV file
    Import {
        kind: ImportKind,
        file: PathBuf,
        /// Semester the imported sections belong to (sections only)
        #[arg(long)]
        semester_id: Option<i64>,
    },
    /// Courses and sections of a faculty member
    Schedule {
        /// Defaults to the signed-in user's e-mail
        #[arg(long)]
        email: Option<String>,
    },
    /// Print the client-side route table
    Routes,
    /// Write a configuration file with default settings
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    if key.is_empty() {
        return Err(format!("invalid key=value: empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
