use clap::Args;
use std::path::PathBuf;

/// Edge-list input shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Edge-list CSV file with a header row
    pub file: PathBuf,

    /// Column holding the first endpoint [default: auto-detect]
    #[arg(long)]
    pub u_col: Option<String>,

    /// Column holding the second endpoint [default: auto-detect]
    #[arg(long)]
    pub v_col: Option<String>,

    /// Column holding the edge weight [default: auto-detect]
    #[arg(long)]
    pub w_col: Option<String>,

    /// Field delimiter, one character or `tab` [default: ,]
    #[arg(long)]
    pub delimiter: Option<String>,
}
