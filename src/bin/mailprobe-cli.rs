use anyhow::{Context, Result};
use clap::Parser;
use mailprobe::{ProbeConfig, check_mailbox_exists, email_exists, mx};

use std::net::IpAddr;

#[derive(Parser)]
#[command(name = "mailprobe-cli")]
struct Cli {
    /// adresse e-mail à sonder
    email: String,

    /// affiche les enregistrements MX triés sans sonder
    #[arg(long = "mx-only")]
    mx_only: bool,

    /// port SMTP
    #[arg(long, default_value_t = 25)]
    port: u16,

    /// nom annoncé dans HELO
    #[arg(long)]
    helo: Option<String>,

    /// enveloppe MAIL FROM
    #[arg(long = "from")]
    sender: Option<String>,

    /// timeout de connexion (secondes)
    #[arg(long = "connect-timeout", default_value_t = 3)]
    connect_timeout: u64,

    /// timeout de lecture (secondes)
    #[arg(long = "read-timeout", default_value_t = 5)]
    read_timeout: u64,

    /// serveur DNS à interroger (répétable)
    #[arg(long = "nameserver")]
    name_servers: Vec<IpAddr>,

    /// code RCPT TO accepté comme positif (répétable, défaut 250/451/452)
    #[arg(long = "code")]
    codes: Vec<u16>,

    /// trace le dialogue SMTP brut sur stderr
    #[arg(long)]
    debug: bool,

    /// format: human|json
    #[arg(long, default_value = "human")]
    format: String,

    /// sonde sans vérifier le format de l'adresse
    #[arg(long = "skip-format-check")]
    skip_format_check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.mx_only {
        return print_mx(&cli);
    }

    let config = probe_config(&cli);
    let exists = if cli.skip_format_check {
        check_mailbox_exists(&cli.email, &config)?
    } else {
        email_exists(&cli.email, &config)?
    };

    match cli.format.as_str() {
        "human" => {
            if exists {
                println!("[FOUND]     {}", cli.email);
            } else {
                println!("[NOT FOUND] {}", cli.email);
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                let report = serde_json::json!({ "email": cli.email, "exists": exists });
                println!("{report}");
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=json nécessite la feature 'with-serde'");
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json", other);
            std::process::exit(1);
        }
    }

    // codes de sortie : 0 trouvé, 2 non confirmé, 1 fatal
    if !exists {
        std::process::exit(2);
    }
    Ok(())
}

fn probe_config(cli: &Cli) -> ProbeConfig {
    let defaults = ProbeConfig::default();
    ProbeConfig {
        debug: cli.debug,
        port: cli.port,
        connect_timeout_secs: cli.connect_timeout,
        read_timeout_secs: cli.read_timeout,
        helo_hostname: cli.helo.clone().unwrap_or(defaults.helo_hostname),
        name_servers: cli.name_servers.clone(),
        valid_response_codes: if cli.codes.is_empty() {
            defaults.valid_response_codes
        } else {
            cli.codes.clone()
        },
        sender_address: cli.sender.clone().unwrap_or(defaults.sender_address),
    }
}

fn print_mx(cli: &Cli) -> Result<()> {
    // Accepte une adresse complète ou un domaine nu.
    let domain = cli
        .email
        .rsplit_once('@')
        .map_or(cli.email.as_str(), |(_, domain)| domain);

    let resolver = mx::build_resolver(&cli.name_servers).context("build resolver")?;
    let records = mx::query_mx_with(&resolver, domain).context("MX lookup")?;

    match cli.format.as_str() {
        "human" => {
            if records.is_empty() {
                println!("no MX records for {domain}");
            } else {
                for record in &records {
                    println!("{}:{}", record.preference, record.exchange);
                }
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                println!("{}", serde_json::to_string_pretty(&records)?);
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=json nécessite la feature 'with-serde'");
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json", other);
            std::process::exit(1);
        }
    }

    if records.is_empty() {
        std::process::exit(2);
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "mailprobe=debug" } else { "mailprobe=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
