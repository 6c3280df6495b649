//! # thermal-printer CLI
//!
//! Render JSON print jobs to receipt printer bytes.
//!
//! ## Usage
//!
//! ```bash
//! # Render a job and write the bytes to a file
//! thermal-printer render job.json --output job.bin
//!
//! # Render for a Star printer and send it to a device
//! thermal-printer render job.json --type star --device /dev/usb/lp0
//!
//! # Override the paper width
//! thermal-printer render job.json --width 32 --output job.bin
//!
//! # List code pages a dialect understands
//! thermal-printer code-pages --type star
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use thermal_printer::{
    PrinterError,
    job::PrintJob,
    printer::PrinterType,
    transport::{DeviceTransport, Transport},
};

/// thermal-printer - Receipt printer command builder
#[derive(Parser, Debug)]
#[command(name = "thermal-printer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a JSON print job
    Render {
        /// Job file
        job: PathBuf,

        /// Write the rendered bytes to a file
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Send the rendered bytes to a printer device
        #[arg(long, value_name = "PATH")]
        device: Option<PathBuf>,

        /// Printer type, overriding the job's
        #[arg(long = "type", value_name = "epson|star")]
        printer_type: Option<PrinterType>,

        /// Paper width in columns, overriding the job's
        #[arg(long)]
        width: Option<usize>,
    },

    /// List the code pages a printer type supports
    CodePages {
        /// Printer type
        #[arg(long = "type", value_name = "epson|star", default_value = "epson")]
        printer_type: PrinterType,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), PrinterError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            job,
            output,
            device,
            printer_type,
            width,
        } => {
            let json = tokio::fs::read_to_string(&job).await?;
            let mut print_job = PrintJob::from_json(&json)?;
            if let Some(printer_type) = printer_type {
                print_job.printer.printer_type = printer_type;
            }
            if let Some(width) = width {
                print_job.printer.width = width;
            }

            eprintln!(
                "[job] Rendering {} commands for {} ({} columns)",
                print_job.commands.len(),
                print_job.printer.printer_type,
                print_job.printer.width
            );
            let bytes = print_job.render().await?;
            eprintln!("[job] Rendered {} bytes", bytes.len());

            if let Some(path) = &output {
                tokio::fs::write(path, &bytes).await?;
                eprintln!("[job] Saved to {}", path.display());
            }

            if let Some(path) = device {
                send_to_device(path, bytes).await?;
            } else if output.is_none() {
                return Err(PrinterError::InvalidConfig(
                    "Nothing to do: pass --output and/or --device".to_string(),
                ));
            }
        }
        Commands::CodePages { printer_type } => {
            println!("Code pages for {}:", printer_type);
            for name in printer_type.dialect().code_pages() {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}

/// Write job bytes to a device off the async runtime.
async fn send_to_device(path: PathBuf, bytes: Vec<u8>) -> Result<(), PrinterError> {
    eprintln!("[transport] Sending {} bytes to {}", bytes.len(), path.display());
    tokio::task::spawn_blocking(move || {
        let mut transport = DeviceTransport::open(&path)?;
        transport.write_all(&bytes)
    })
    .await
    .map_err(|e| PrinterError::Transport(format!("Print task failed: {}", e)))??;
    eprintln!("[transport] Printed successfully");
    Ok(())
}
