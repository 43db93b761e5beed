use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pf_api::{CalcRequest, CalcResponse, calculate, validate_request};
use pf_catalog::{Catalogs, accessories, pipe_materials, reference_fluids};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "Pumpflow CLI - centrifugal pump sizing tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a sizing calculation from a request JSON file
    Calc {
        /// Path to the request JSON file
        request_path: PathBuf,
        /// Print the raw wire response instead of a summary
        #[arg(long)]
        json: bool,
        /// Write the wire response JSON to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a request file without computing
    Validate {
        /// Path to the request JSON file
        request_path: PathBuf,
    },
    /// List the pipe material catalog
    Materials,
    /// List the fitting accessory catalog
    Accessories,
    /// List the reference fluid catalog
    Fluids,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    Invalid(#[from] pf_api::ValidationError),
}

fn main() -> Result<(), CliError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            request_path,
            json,
            output,
        } => cmd_calc(&request_path, json, output.as_deref()),
        Commands::Validate { request_path } => cmd_validate(&request_path),
        Commands::Materials => {
            cmd_materials();
            Ok(())
        }
        Commands::Accessories => {
            cmd_accessories();
            Ok(())
        }
        Commands::Fluids => {
            cmd_fluids();
            Ok(())
        }
    }
}

fn load_request(path: &Path) -> Result<CalcRequest, CliError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn cmd_calc(request_path: &Path, json: bool, output: Option<&Path>) -> Result<(), CliError> {
    let request = load_request(request_path)?;
    let catalogs = Catalogs::standard();
    let response = calculate(&request, &catalogs);

    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&response)?)?;
        println!("✓ Response written to {}", path.display());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_summary(&response);
    }
    Ok(())
}

fn cmd_validate(request_path: &Path) -> Result<(), CliError> {
    println!("Validating request: {}", request_path.display());
    let request = load_request(request_path)?;
    validate_request(&request, &Catalogs::standard())?;
    println!("✓ Request is valid");
    Ok(())
}

fn print_summary(response: &CalcResponse) {
    if !response.sucesso {
        println!("✗ Calculation failed: {}", response.mensagem);
        return;
    }

    println!("✓ Calculation complete");
    println!();
    print_leg(
        "Suction",
        response.velocidade_succao,
        response.reynolds_succao,
        response.tipo_fluxo_succao.as_deref(),
        response.fator_atrito_succao,
        response.perda_carga_total_succao,
    );
    print_leg(
        "Discharge",
        response.velocidade_recalque,
        response.reynolds_recalque,
        response.tipo_fluxo_recalque.as_deref(),
        response.fator_atrito_recalque,
        response.perda_carga_total_recalque,
    );
    println!();
    if let Some(q) = response.vazao {
        println!("  Flow:            {:.6} m³/s", q);
    }
    if let Some(head) = response.altura_manometrica {
        println!("  Manometric head: {:.3} m", head);
    }
    if let Some(power) = response.potencia_estimada {
        println!("  Hydraulic power: {:.3} kW", power);
    }
    println!("  {}", response.mensagem);
}

fn print_leg(
    label: &str,
    velocity: Option<f64>,
    reynolds: Option<f64>,
    regime: Option<&str>,
    friction: Option<f64>,
    total_loss: Option<f64>,
) {
    println!("  {label} leg:");
    if let (Some(v), Some(re), Some(regime), Some(f), Some(loss)) =
        (velocity, reynolds, regime, friction, total_loss)
    {
        println!("    velocity        {v:.3} m/s");
        println!("    Reynolds        {re:.0} ({regime})");
        println!("    friction factor {f:.5}");
        println!("    total head loss {loss:.3} m");
    }
}

fn cmd_materials() {
    println!("Pipe materials (absolute roughness):");
    for material in pipe_materials() {
        println!(
            "  {:<20} {:<20} {:.4} mm",
            material.id, material.display_name, material.roughness_mm
        );
    }
}

fn cmd_accessories() {
    println!("Fitting accessories (K-factors):");
    for accessory in accessories() {
        println!(
            "  {:<26} {:<30} K = {:.2}",
            accessory.id, accessory.display_name, accessory.k_factor
        );
    }
}

fn cmd_fluids() {
    println!("Reference fluids:");
    for fluid in reference_fluids() {
        println!(
            "  {:<16} {:<18} ρ = {:>7.1} kg/m³   μ = {:.6} Pa·s",
            fluid.id, fluid.display_name, fluid.density_kg_m3, fluid.dynamic_viscosity_pa_s
        );
    }
}
