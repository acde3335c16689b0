//! Advice Reader - CLI tool for turning a settlement advice document into a
//! structured record.

use clap::Parser;
use std::fs::File;
use std::io::{self, Read, Write};
use settlement_advice::{
    advice_format::SettlementAdvice, csv_format::CsvAdvice, Format, Result, SettlementRecord,
};

#[derive(Parser)]
#[command(name = "advice_reader")]
#[command(about = "Parse a settlement advice text document and export the record (JSON, CSV, advice)", long_about = None)]
struct Cli {
    /// Input file path (or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Output format (json, csv, advice)
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output file path (or stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format.parse::<Format>()?;

    // Parse from input file or stdin
    let record = if let Some(ref input_path) = cli.input {
        let mut file = File::open(input_path)?;
        parse_input(&mut file)?
    } else {
        let mut stdin = io::stdin();
        parse_input(&mut stdin)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = cli.output {
        let mut file = File::create(output_path)?;
        write_output(&mut file, record, format)?;
    } else {
        let mut stdout = io::stdout();
        write_output(&mut stdout, record, format)?;
    }

    Ok(())
}

fn parse_input<R: Read>(reader: &mut R) -> Result<SettlementRecord> {
    let advice = SettlementAdvice::from_read(reader)?;
    Ok(advice.record)
}

fn write_output<W: Write>(writer: &mut W, record: SettlementRecord, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *writer, &record)?;
            writeln!(writer)?;
        }
        Format::Csv => {
            let csv = CsvAdvice { record };
            csv.write_to(writer)?;
        }
        Format::Advice => {
            let advice = SettlementAdvice { record };
            advice.write_to(writer)?;
        }
    }
    Ok(())
}
