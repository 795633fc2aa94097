use anyhow::{bail, Context, Result};
use clap::Parser;
use dynect::{config::Config, tool, ClientOptions, Credentials, DynectClient, DynectError};
use log::warn;
use std::net::Ipv4Addr;

#[derive(Debug, Parser)]
#[command(name = "dynect", version, about = "DynECT Platform API client")]
struct Cli {
    /// YAML file with credentials and connection settings
    #[arg(long, env = "DYNECT_CONFIG")]
    config: Option<String>,

    /// Dynect customer name
    #[arg(short, long)]
    customer: Option<String>,

    /// Dynect user name
    #[arg(short, long = "username")]
    user: Option<String>,

    /// Dynect user password
    #[arg(short, long)]
    password: Option<String>,

    /// Zone name (example: domain.tld)
    #[arg(short, long)]
    zone: String,

    /// Node name (example: node.domain.tld)
    #[arg(short = 'n', long = "node")]
    fqdn: String,

    /// Object type
    #[arg(short, long)]
    object: String,

    /// Command name: list, add or del
    #[arg(short = 'w', long)]
    command: String,

    /// TTL for created records
    #[arg(long)]
    ttl: Option<u32>,

    /// Don't print status messages to stdout
    #[arg(short, long)]
    quiet: bool,

    args: Vec<String>,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        println!("ERROR: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let (credentials, options, ttl) = settings(&cli)?;

    let mut client = DynectClient::connect(credentials, options)
        .await
        .context("Login failed")?;
    let result = execute(&mut client, &cli, ttl).await;

    // Close even when the command failed so the session does not linger.
    let closed = client.close().await;
    finish(result, closed)
}

/// The command error wins over a logout error, which is only logged then.
fn finish(result: Result<()>, closed: Result<(), DynectError>) -> Result<()> {
    if let (Err(_), Err(e)) = (&result, &closed) {
        warn!("Logout failed: {}", e);
    }
    result?;
    closed.context("Logout failed")
}

fn settings(cli: &Cli) -> Result<(Credentials, ClientOptions, u32)> {
    let config = cli.config.as_deref().map(Config::load).transpose()?;

    let customer = cli
        .customer
        .clone()
        .or_else(|| config.as_ref().map(|c| c.customer_name.to_string()))
        .context("Customer name must be set")?;
    let user = cli
        .user
        .clone()
        .or_else(|| config.as_ref().map(|c| c.user_name.to_string()))
        .context("User name must be set")?;
    let password = cli
        .password
        .clone()
        .or_else(|| config.as_ref().map(|c| c.password.to_string()))
        .context("Password must be set")?;

    let options = config
        .as_ref()
        .map(Config::client_options)
        .unwrap_or_default();
    let ttl = cli
        .ttl
        .or_else(|| config.as_ref().map(|c| c.record_ttl))
        .unwrap_or(0);

    Ok((Credentials::new(customer, user, password), options, ttl))
}

async fn execute(client: &mut DynectClient, cli: &Cli, ttl: u32) -> Result<()> {
    client.keepalive().await?;

    let object = cli.object.to_lowercase();
    let command = cli.command.to_lowercase();
    match (object.as_str(), command.as_str()) {
        ("a", "list") => {
            let records = tool::list_a(client, &cli.zone, &cli.fqdn).await?;
            if records.is_empty() {
                println!("No A records found");
            }
            for record in records {
                println!("{} (record id: {})", record.address, record.record_id);
            }
        }
        ("a", "add") => {
            let address = address_arg(cli)?;
            tool::add_a(client, &cli.zone, &cli.fqdn, &address.to_string(), ttl).await?;
            if !cli.quiet {
                println!("OK");
            }
        }
        ("a", "del") => {
            let address = address_arg(cli)?;
            tool::del_a(client, &cli.zone, &cli.fqdn, &address.to_string()).await?;
            if !cli.quiet {
                println!("OK");
            }
        }
        _ => bail!("Invalid arguments"),
    }
    Ok(())
}

fn address_arg(cli: &Cli) -> Result<Ipv4Addr> {
    let arg = cli.args.first().context("Missing record address argument")?;
    arg.parse()
        .with_context(|| format!("Failed to parse IP address: {}", arg))
}
