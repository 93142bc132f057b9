//! Inspect command - show what would be extracted from a single PDF.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use rorename_core::models::vehicle::{ScanType, VehicleInfo};
use rorename_core::rename::target_name;
use rorename_core::{ExtractedFields, PdfTextSource, TextSource};

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Also print the extracted text of every page
    #[arg(long)]
    show_text: bool,
}

#[derive(Serialize)]
struct InspectOutput {
    file: String,
    page_count: usize,
    repair_order_number: Option<String>,
    scan_type: ScanType,
    target_name: Option<String>,
    vehicle_info: Option<VehicleInfo>,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Inspecting file: {}", args.input.display());
    let pages = PdfTextSource.pages(&args.input)?;

    let file = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let fields = ExtractedFields::from_pages(&file, &pages);

    if args.show_text {
        for (i, page) in pages.iter().enumerate() {
            println!("--- page {} ---", i + 1);
            println!("{}", page);
        }
        println!("---");
    }

    let target = fields
        .repair_order_number
        .as_deref()
        .and_then(|number| target_name(number, fields.scan_type));

    let output = InspectOutput {
        file,
        page_count: pages.len(),
        repair_order_number: fields.repair_order_number,
        scan_type: fields.scan_type,
        target_name: target,
        vehicle_info: fields.vehicle_info,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
