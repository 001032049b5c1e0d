use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "churn-console",
    version,
    about = "Customer churn prediction form for the terminal"
)]
pub(crate) struct Args {
    /// Optional TOML config; built-in defaults apply when omitted.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Overrides `backend.base_url` from the config.
    #[arg(long)]
    pub(crate) base_url: Option<String>,
    #[arg(long, default_value = "logs")]
    pub(crate) log_dir: PathBuf,
    #[arg(long, default_value_t = false)]
    pub(crate) log_to_stderr: bool,
    /// Submit once with the field flags below and print the result.
    #[arg(long, default_value_t = false)]
    pub(crate) headless: bool,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) recency: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) frequency: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) monetary: String,
}
