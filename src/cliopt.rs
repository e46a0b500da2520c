use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ngxmetrics",
    about = "Parse an nginx access log and print the derived metric tuples"
)]
pub struct CliOpt {
    /// Access-log file to read.
    pub file: PathBuf,

    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}
