//! Command-line argument definitions.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use waypost_core::DocumentStatus;

/// Waypost back-office administration tool
#[derive(Parser, Debug)]
#[command(name = "waypost")]
#[command(about = "Waypost back-office administration tool", long_about = None)]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "WAYPOST_CONFIG", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Store a bearer token for subsequent commands
    SignIn {
        /// Token issued by the backend
        #[arg(long)]
        token: String,
    },

    /// Clear the stored bearer token
    SignOut,

    /// Branch operations
    Branch {
        #[command(subcommand)]
        action: CrudAction,
    },

    /// Employee operations
    Employee {
        #[command(subcommand)]
        action: CrudAction,
    },

    /// Consignment operations
    Consignment {
        #[command(subcommand)]
        action: StatusCrudAction,
    },

    /// Booking order operations
    BookingOrder {
        #[command(subcommand)]
        action: StatusCrudAction,
    },

    /// Charge operations
    Charge {
        #[command(subcommand)]
        action: CrudAction,
    },

    /// Invoice operations
    Invoice {
        #[command(subcommand)]
        action: CrudAction,
    },

    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: CrudAction,
    },

    /// Upload a document and attach it to a file-bearing record
    Attach {
        /// Which resource carries the file list
        #[arg(value_enum)]
        resource: FileResource,

        /// Record id
        id: String,

        /// Path of the file to upload
        file: String,
    },

    /// Ledger hierarchy operations (accounts, contracts, terms, notes)
    Ledger {
        /// Which chart-of-accounts style resource to read
        #[arg(value_enum)]
        resource: LedgerResource,
    },

    /// Export a charges report
    Report {
        /// Output format
        #[arg(value_enum)]
        format: ReportFormat,

        /// Report-type label the title derives from
        #[arg(long, default_value = "Charges")]
        label: String,

        /// First day covered (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last day covered (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,

        /// Output path; defaults to a timestamp-suffixed name
        #[arg(long)]
        out: Option<String>,
    },
}

/// List / get / delete over one resource.
#[derive(Subcommand, Debug)]
pub enum CrudAction {
    /// List a page of records
    List {
        /// 1-based page index
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Records per page
        #[arg(long, default_value_t = 25)]
        size: u32,

        /// Optional SearchQuery filter
        #[arg(long)]
        search: Option<String>,
    },

    /// Fetch one record
    Get {
        /// Record id
        id: String,
    },

    /// Delete a record
    Delete {
        /// Record id
        id: String,
    },
}

/// CRUD plus the status endpoint.
#[derive(Subcommand, Debug)]
pub enum StatusCrudAction {
    /// List a page of records
    List {
        /// 1-based page index
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Records per page
        #[arg(long, default_value_t = 25)]
        size: u32,

        /// Optional Status filter (Pending or Completed)
        #[arg(long)]
        status: Option<DocumentStatus>,
    },

    /// Fetch one record
    Get {
        /// Record id
        id: String,
    },

    /// Delete a record
    Delete {
        /// Record id
        id: String,
    },

    /// Change a record's status
    Status {
        /// Record id
        id: String,

        /// New status (Pending or Completed)
        status: DocumentStatus,
    },
}

/// Resources that carry an attachment list.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum FileResource {
    /// `/Consignment`
    Consignment,
    /// `/Charge`
    Charge,
}

/// The chart-of-accounts style resources.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum LedgerResource {
    /// `/Account`
    Accounts,
    /// `/CapitalAccount`
    CapitalAccounts,
    /// `/Contract`
    Contracts,
    /// `/DeliveryTerm`
    DeliveryTerms,
    /// `/InspectionNote`
    InspectionNotes,
}

/// Report output formats.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ReportFormat {
    /// Landscape A4 PDF
    Pdf,
    /// Excel workbook
    Xlsx,
}

/// Config subcommands, dotted-key style.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Get a configuration value by dotted key
    Get {
        /// Dotted key (`api.base_url`)
        key: String,
    },

    /// Set a configuration value by dotted key
    Set {
        /// Dotted key (`api.base_url`)
        key: String,

        /// New value
        value: String,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
