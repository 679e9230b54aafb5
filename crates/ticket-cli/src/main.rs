//! Command line PDF ticket generator
//!
//! Reads an order as a JSON string from `--json` (or falls back to a
//! built-in example order) and writes a 58mm thermal printer ticket to
//! `--output`.
//!
//! The outcome is reported on a single machine-readable line:
//! `SUCCESS:<path>` on stdout, or `ERROR:<message>` on stderr with a
//! non-zero exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ticket::{parse_ticket, render_to_file};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Example order rendered when no `--json` payload is given
const EXAMPLE_PAYLOAD: &str = r#"{
    "comercio": {
        "nombre": "Casalena Pizza & Grill",
        "telefono": "741-101-1595",
        "direccion": "Blvd. Juan N Alvarez, CP 41706"
    },
    "pedido": {
        "id": "00015423",
        "tipo": "Domicilio",
        "subtotal": 450.00,
        "total": 450.00,
        "metodo_pago": "Efectivo",
        "pago_con": 500.00,
        "cambio": 50.00,
        "cliente": {
            "nombre": "Luis Angel",
            "telefono": "7411234567",
            "direccion": "Calle Principal #123, Col. Centro, Ometepec"
        }
    },
    "productos": [
        {"cantidad": 1, "nombre": "Pizza Carnivora", "precio": 255.00, "detalle": "Grande + Extra Queso"},
        {"cantidad": 2, "nombre": "Refresco 600ml", "precio": 70.00, "detalle": "Coca-Cola"}
    ]
}"#;

#[derive(Parser)]
#[command(
    name = "ticket58",
    author,
    version,
    about = "Generate 58mm thermal printer ticket PDFs"
)]
struct Cli {
    /// Ticket data as a JSON string
    #[arg(long)]
    json: Option<String>,

    /// Output PDF path
    #[arg(long, default_value = "ticket_output.pdf")]
    output: PathBuf,
}

/// Route log output to stderr so stdout stays reserved for the
/// SUCCESS line
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let payload = cli.json.as_deref().unwrap_or(EXAMPLE_PAYLOAD);
    let data = parse_ticket(payload)?;
    render_to_file(&data, &cli.output)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    debug!(output = %cli.output.display(), "ticket58 started");

    match run(&cli) {
        Ok(()) => {
            println!("SUCCESS:{}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR:{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn example_payload_parses() {
        assert!(parse_ticket(EXAMPLE_PAYLOAD).is_ok());
    }
}
