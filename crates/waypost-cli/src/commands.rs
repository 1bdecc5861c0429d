//! Command dispatch and handlers.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use waypost_client::abl::{
    BookingOrders, Branches, Charges, Consignments, Employees, Invoices, Payments,
};
use waypost_client::zms::HierarchyClient;
use waypost_client::{FileRef, HttpConnection, MediaClient};
use waypost_core::{ConfigManager, PageQuery, WaypostConfig};
use waypost_ledger::AccountNode;
use waypost_reports::{render_pdf, render_xlsx, report_filename, Letterhead, Period, ReportRow};
use waypost_session::Session;

use crate::cli::{
    Args, Command, CrudAction, FileResource, LedgerResource, ReportFormat, StatusCrudAction,
};
use crate::config_handlers::handle_config_command;
use crate::token_store;

/// Everything a command needs to talk to the backend.
pub struct Context {
    /// Loaded configuration.
    pub config: WaypostConfig,

    /// Shared HTTP connection.
    pub conn: Arc<HttpConnection>,
}

impl Context {
    /// Loads config and the stored token, and opens the connection.
    pub fn build(config_path: Option<&str>) -> Result<Self> {
        let config = WaypostConfig::load(config_path)?;
        let session = Session::new();
        if let Some(token) = token_store::load()? {
            session.sign_in(token);
        }
        let conn = Arc::new(HttpConnection::from_config(&config, session)?);
        Ok(Self { config, conn })
    }
}

/// Routes a parsed command line to its handler.
pub async fn dispatch(args: Args) -> Result<()> {
    let config_path = args.config.as_deref();
    match args.command {
        Command::Config { action } => handle_config_command(config_path, action),
        Command::SignIn { token } => {
            token_store::store(&token)?;
            println!("Signed in.");
            Ok(())
        }
        Command::SignOut => {
            token_store::clear()?;
            println!("Signed out.");
            Ok(())
        }
        Command::Branch { action } => {
            let ctx = Context::build(config_path)?;
            let client = Branches::new(ctx.conn.clone());
            match action {
                CrudAction::List { page, size, search } => {
                    print_json(&client.list(&search_query(page, size, search)).await?)
                }
                CrudAction::Get { id } => print_json(&client.get(&id).await?),
                CrudAction::Delete { id } => deleted(client.delete(&id).await, &id),
            }
        }
        Command::Employee { action } => {
            let ctx = Context::build(config_path)?;
            let client = Employees::new(ctx.conn.clone());
            match action {
                CrudAction::List { page, size, search } => {
                    print_json(&client.list(&search_query(page, size, search)).await?)
                }
                CrudAction::Get { id } => print_json(&client.get(&id).await?),
                CrudAction::Delete { id } => deleted(client.delete(&id).await, &id),
            }
        }
        Command::Consignment { action } => {
            let ctx = Context::build(config_path)?;
            let client = Consignments::new(ctx.conn.clone());
            match action {
                StatusCrudAction::List { page, size, status } => {
                    print_json(&client.list(&status_query(page, size, status)).await?)
                }
                StatusCrudAction::Get { id } => print_json(&client.get(&id).await?),
                StatusCrudAction::Delete { id } => deleted(client.delete(&id).await, &id),
                StatusCrudAction::Status { id, status } => {
                    client.set_status(&id, status).await?;
                    println!("Consignment {id} is now {status}.");
                    Ok(())
                }
            }
        }
        Command::BookingOrder { action } => {
            let ctx = Context::build(config_path)?;
            let client = BookingOrders::new(ctx.conn.clone());
            match action {
                StatusCrudAction::List { page, size, status } => {
                    print_json(&client.list(&status_query(page, size, status)).await?)
                }
                StatusCrudAction::Get { id } => print_json(&client.get(&id).await?),
                StatusCrudAction::Delete { id } => deleted(client.delete(&id).await, &id),
                StatusCrudAction::Status { id, status } => {
                    client.set_status(&id, status).await?;
                    println!("Booking order {id} is now {status}.");
                    Ok(())
                }
            }
        }
        Command::Charge { action } => {
            let ctx = Context::build(config_path)?;
            let client = Charges::new(ctx.conn.clone());
            match action {
                CrudAction::List { page, size, search } => {
                    let mut query = PageQuery::new(page, size);
                    if let Some(receipt) = search {
                        query = query.with_filter("ReceiptNo", receipt);
                    }
                    print_json(&client.list(&query).await?)
                }
                CrudAction::Get { id } => print_json(&client.get(&id).await?),
                CrudAction::Delete { id } => deleted(client.delete(&id).await, &id),
            }
        }
        Command::Invoice { action } => {
            let ctx = Context::build(config_path)?;
            let client = Invoices::new(ctx.conn.clone());
            match action {
                CrudAction::List { page, size, search } => {
                    print_json(&client.list(&search_query(page, size, search)).await?)
                }
                CrudAction::Get { id } => print_json(&client.get(&id).await?),
                CrudAction::Delete { id } => deleted(client.delete(&id).await, &id),
            }
        }
        Command::Payment { action } => {
            let ctx = Context::build(config_path)?;
            let client = Payments::new(ctx.conn.clone());
            match action {
                CrudAction::List { page, size, search } => {
                    print_json(&client.list(&search_query(page, size, search)).await?)
                }
                CrudAction::Get { id } => print_json(&client.get(&id).await?),
                CrudAction::Delete { id } => deleted(client.delete(&id).await, &id),
            }
        }
        Command::Attach { resource, id, file } => {
            let ctx = Context::build(config_path)?;
            let bytes = std::fs::read(&file)?;
            let file_name = std::path::Path::new(&file)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("attachment")
                .to_string();

            let media = MediaClient::new(&ctx.config.media)?;
            let url = media.upload(&file_name, bytes).await?;
            let attachment = FileRef {
                name: file_name,
                url,
            };

            match resource {
                FileResource::Consignment => {
                    let client = Consignments::new(ctx.conn.clone());
                    let mut files = client.get(&id).await?.files;
                    files.push(attachment);
                    client.update_files(&id, &files).await?;
                }
                FileResource::Charge => {
                    let client = Charges::new(ctx.conn.clone());
                    let mut files = client.get(&id).await?.files;
                    files.push(attachment);
                    client.update_files(&id, &files).await?;
                }
            }
            println!("Attached {file} to {id}.");
            Ok(())
        }
        Command::Ledger { resource } => {
            let ctx = Context::build(config_path)?;
            let client = match resource {
                LedgerResource::Accounts => HierarchyClient::accounts(ctx.conn.clone()),
                LedgerResource::CapitalAccounts => {
                    HierarchyClient::capital_accounts(ctx.conn.clone())
                }
                LedgerResource::Contracts => HierarchyClient::contracts(ctx.conn.clone()),
                LedgerResource::DeliveryTerms => {
                    HierarchyClient::delivery_terms(ctx.conn.clone())
                }
                LedgerResource::InspectionNotes => {
                    HierarchyClient::inspection_notes(ctx.conn.clone())
                }
            };
            let nodes = client.hierarchy().await?;
            print_tree(&nodes, 0);
            Ok(())
        }
        Command::Report {
            format,
            label,
            from,
            to,
            out,
        } => {
            let ctx = Context::build(config_path)?;
            let period = Period { from, to };
            let rows = fetch_charge_rows(&ctx, &period).await?;

            let letterhead = Letterhead::default();
            let (bytes, extension) = match format {
                ReportFormat::Pdf => (render_pdf(&letterhead, &label, &period, &rows)?, "pdf"),
                ReportFormat::Xlsx => (render_xlsx(&letterhead, &label, &period, &rows)?, "xlsx"),
            };
            let out = out.unwrap_or_else(|| report_filename(&label, extension, Utc::now()));
            std::fs::write(&out, bytes)?;
            println!("Wrote {out} ({} rows).", rows.len());
            Ok(())
        }
    }
}

/// Fetches the charges in the period as report rows.
async fn fetch_charge_rows(ctx: &Context, period: &Period) -> Result<Vec<ReportRow>> {
    let client = Charges::new(ctx.conn.clone());
    let page = client.list(&PageQuery::first(500)).await?;
    let rows = page
        .items
        .into_iter()
        .filter(|charge| charge.charge_date >= period.from && charge.charge_date <= period.to)
        .map(|charge| ReportRow {
            date: charge.charge_date,
            reference: charge.receipt_no,
            party: charge.party,
            detail: charge.detail,
            amount: charge.amount,
        })
        .collect();
    Ok(rows)
}

fn search_query(page: u32, size: u32, search: Option<String>) -> PageQuery {
    let mut query = PageQuery::new(page, size);
    if let Some(search) = search {
        query = query.with_filter("SearchQuery", search);
    }
    query
}

fn status_query(
    page: u32,
    size: u32,
    status: Option<waypost_core::DocumentStatus>,
) -> PageQuery {
    let mut query = PageQuery::new(page, size);
    if let Some(status) = status {
        query = query.with_filter("Status", status.as_str());
    }
    query
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn deleted(result: waypost_client::Result<()>, id: &str) -> Result<()> {
    result?;
    println!("Deleted {id}.");
    Ok(())
}

fn print_tree(nodes: &[AccountNode], depth: usize) {
    for node in nodes {
        let code = node.listid.as_deref().unwrap_or("-");
        let description = node.description.as_deref().unwrap_or("");
        println!("{}{code}  {description}", "  ".repeat(depth));
        print_tree(&node.children, depth + 1);
    }
}
