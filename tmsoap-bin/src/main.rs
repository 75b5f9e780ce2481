use std::path::PathBuf;

use clap::Parser;
use tmsoap_bin::{Options, run};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Response body to decode; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Decode a typed entity (e.g. customer, job, price-line) instead of
    /// printing the raw tree.
    #[arg(short, long)]
    entity: Option<String>,

    /// Collect every instance instead of the first.
    #[arg(short, long)]
    list: bool,

    /// Print the status/fault check instead of the payload.
    #[arg(short, long)]
    status: bool,

    /// Single-line JSON output.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(&Options {
        input: args.input,
        entity: args.entity,
        list: args.list,
        status: args.status,
        compact: args.compact,
    })
}
