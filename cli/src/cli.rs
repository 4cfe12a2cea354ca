use std::path::PathBuf;

/// Weighted population share tables (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "popshare", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Write both share tables and print the marginal report
    Tables(TablesArgs),

    /// Print the marginal report only (writes nothing)
    Summary(InputArgs),
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Survey microdata file (delimited text with header)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// City code to keep
    #[arg(long, default_value_t = popshare::DEFAULT_CITY)]
    pub city: i64,

    /// Field separator of the input file
    #[arg(long, default_value_t = ',')]
    pub separator: char,
}

#[derive(clap::Args, Debug)]
pub struct TablesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

impl InputArgs {
    /// Separator as a single byte.
    pub fn separator_byte(&self) -> anyhow::Result<u8> {
        anyhow::ensure!(self.separator.is_ascii(), "separator must be a single ASCII character, got {:?}", self.separator);
        Ok(self.separator as u8)
    }
}
