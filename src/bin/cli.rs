//! SlotDB CLI
//!
//! Command-line front end over a single store file. Each invocation opens
//! the store, runs one command, persists if the command mutates, and closes.
//! Any store error is logged and the process exits with status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use slotdb::config::{SyncStrategy, DEFAULT_CAPACITY, DEFAULT_FIELD_LEN};
use slotdb::{Config, Connection, OpenMode, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// SlotDB CLI
#[derive(Parser, Debug)]
#[command(name = "slotdb")]
#[command(about = "Fixed-slot address record store")]
#[command(version)]
struct Args {
    /// Store file
    file: PathBuf,

    /// Number of slots in the store
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Width in bytes of the name and email fields
    #[arg(short, long, default_value_t = DEFAULT_FIELD_LEN)]
    field_len: usize,

    /// fsync after every persist
    #[arg(long)]
    sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create (or wipe) the store file with every slot empty
    Create,

    /// Print one record
    Get {
        /// Slot id
        #[arg(allow_hyphen_values = true)]
        id: i64,
    },

    /// Fill an empty slot
    Set {
        /// Slot id
        #[arg(allow_hyphen_values = true)]
        id: i64,

        /// Name (cut to the field width)
        name: String,

        /// Email (cut to the field width)
        email: String,
    },

    /// Clear a slot
    #[command(alias = "del")]
    Delete {
        /// Slot id
        #[arg(allow_hyphen_values = true)]
        id: i64,
    },

    /// Print every occupied record
    List,

    /// Print layout and checksum of the store
    Info,
}

impl Commands {
    fn open_mode(&self) -> OpenMode {
        match self {
            Commands::Create => OpenMode::Create,
            _ => OpenMode::Existing,
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,slotdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .path(&args.file)
        .capacity(args.capacity)
        .field_len(args.field_len)
        .sync_strategy(if args.sync {
            SyncStrategy::Sync
        } else {
            SyncStrategy::Flush
        })
        .build();

    match run(&config, &args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(file = %args.file.display(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run one command against the store
///
/// On error the connection is dropped before returning, which releases the
/// file without persisting.
fn run(config: &Config, command: &Commands) -> Result<()> {
    let mut conn = Connection::open(config, command.open_mode())?;

    match command {
        Commands::Create => {
            conn.initialize();
            conn.persist()?;
        }
        Commands::Get { id } => {
            println!("{}", conn.get(*id)?);
        }
        Commands::Set { id, name, email } => {
            conn.set(*id, name, email)?;
            conn.persist()?;
        }
        Commands::Delete { id } => {
            conn.delete(*id)?;
            conn.persist()?;
        }
        Commands::List => {
            for record in conn.list() {
                println!("{}", record);
            }
        }
        Commands::Info => {
            println!("path:       {}", conn.path().display());
            println!("capacity:   {}", conn.capacity());
            println!("field_len:  {}", conn.field_len());
            println!("occupied:   {}", conn.occupied_count());
            println!("image_size: {}", conn.image_len());
            println!("crc32:      {:08x}", conn.checksum());
        }
    }

    conn.close()
}
