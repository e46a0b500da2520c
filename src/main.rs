use std::fs::File;
use std::io::{self, BufReader};

use structopt::StructOpt;
use tracing::warn;

use ngxmetrics::cliopt::CliOpt;
use ngxmetrics::output::{encoder::JsonEncoder, writer::LineWriter, Output};
use ngxmetrics::parse;
use ngxmetrics::reader::LineReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| if opt.verbose { "debug" } else { "warn" }.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let reader = LineReader::new(BufReader::new(File::open(&opt.file)?));
    let mut output = Output::new(
        Box::new(LineWriter::new(io::stdout())),
        Box::new(JsonEncoder::new()),
    );

    for line in reader {
        let line = line?;
        // A failed line must not block the rest of the file.
        match parse(&line) {
            Ok(metrics) => output.write(&metrics)?,
            Err(err) => warn!(%err, line = %line, "skipping line"),
        }
    }

    Ok(())
}
