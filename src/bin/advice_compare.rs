//! Advice Compare - CLI tool for comparing two settlement advice documents.

use clap::Parser;
use std::fs::File;
use settlement_advice::{advice_format::SettlementAdvice, Result, SettlementRecord};

#[derive(Parser)]
#[command(name = "advice_compare")]
#[command(about = "Compare the records parsed from two settlement advice documents", long_about = None)]
struct Cli {
    /// First advice file path
    #[arg(long = "file1")]
    file1: String,

    /// Second advice file path
    #[arg(long = "file2")]
    file2: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut file1 = File::open(&cli.file1)?;
    let record1 = SettlementAdvice::from_read(&mut file1)?.record;

    let mut file2 = File::open(&cli.file2)?;
    let record2 = SettlementAdvice::from_read(&mut file2)?.record;

    let result = compare_records(&record1, &record2);

    println!("{}", result);

    Ok(())
}

fn compare_records(record1: &SettlementRecord, record2: &SettlementRecord) -> String {
    let mut differences = Vec::new();

    if record1.title != record2.title {
        differences.push(format!(
            "Title differs: {:?} vs {:?}",
            record1.title, record2.title
        ));
    }

    if record1.account_number != record2.account_number {
        differences.push(format!(
            "Account number differs: {:?} vs {:?}",
            record1.account_number, record2.account_number
        ));
    }

    if record1.opening_collateral != record2.opening_collateral {
        differences.push(format!(
            "Opening collateral differs: {:?} vs {:?}",
            record1.opening_collateral, record2.opening_collateral
        ));
    }

    if (record1.debit_currency, record1.credit_currency)
        != (record2.debit_currency, record2.credit_currency)
    {
        differences.push(format!(
            "Currencies differ: {:?}/{:?} vs {:?}/{:?}",
            record1.debit_currency,
            record1.credit_currency,
            record2.debit_currency,
            record2.credit_currency
        ));
    }

    if record1.transactions.len() != record2.transactions.len() {
        differences.push(format!(
            "Number of transactions differs: {} vs {}",
            record1.transactions.len(),
            record2.transactions.len()
        ));
    }

    let min_len = std::cmp::min(record1.transactions.len(), record2.transactions.len());
    for i in 0..min_len {
        let tx1 = &record1.transactions[i];
        let tx2 = &record2.transactions[i];

        if tx1.serial_number != tx2.serial_number {
            differences.push(format!(
                "Transaction {} serial number differs: {} vs {}",
                i + 1,
                tx1.serial_number,
                tx2.serial_number
            ));
        }

        if tx1.payment_scheme != tx2.payment_scheme {
            differences.push(format!(
                "Transaction {} payment scheme differs: {} vs {}",
                i + 1,
                tx1.payment_scheme,
                tx2.payment_scheme
            ));
        }

        if tx1.scheme_type != tx2.scheme_type {
            differences.push(format!(
                "Transaction {} scheme type differs: {} vs {}",
                i + 1,
                tx1.scheme_type,
                tx2.scheme_type
            ));
        }

        if tx1.debit_amount != tx2.debit_amount {
            differences.push(format!(
                "Transaction {} debit amount differs: {} vs {}",
                i + 1,
                tx1.debit_amount,
                tx2.debit_amount
            ));
        }

        if tx1.credit_amount != tx2.credit_amount {
            differences.push(format!(
                "Transaction {} credit amount differs: {} vs {}",
                i + 1,
                tx1.credit_amount,
                tx2.credit_amount
            ));
        }
    }

    if record1.total_debit != record2.total_debit {
        differences.push(format!(
            "Total debit differs: {:?} vs {:?}",
            record1.total_debit, record2.total_debit
        ));
    }

    if record1.total_credit != record2.total_credit {
        differences.push(format!(
            "Total credit differs: {:?} vs {:?}",
            record1.total_credit, record2.total_credit
        ));
    }

    if record1.overall_net_position != record2.overall_net_position {
        differences.push(format!(
            "Overall net position differs: {:?} vs {:?}",
            record1.overall_net_position, record2.overall_net_position
        ));
    }

    if differences.is_empty() {
        "The settlement records are identical.".to_string()
    } else {
        let mut result = String::from("Differences found:\n");
        for diff in differences {
            result.push_str("  - ");
            result.push_str(&diff);
            result.push('\n');
        }
        result
    }
}
