use clap::{Parser, Subcommand, ValueEnum};
use platesight_types::ProfileDraft;

#[derive(Parser)]
#[command(name = "platesight")]
#[command(about = "Predict restaurant business outcomes from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the prediction service (overrides PLATESIGHT_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path to an alternate config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard (the default when no command is given)
    Dashboard,

    /// Run one prediction from flags and print the result
    Predict(PredictArgs),
}

#[derive(clap::Args)]
pub struct PredictArgs {
    #[arg(long)]
    pub restaurant_name: Option<String>,

    #[arg(long)]
    pub cuisine: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Expected monthly sales amount
    #[arg(long, allow_hyphen_values = true)]
    pub sales_amount: Option<String>,

    /// Expected monthly order quantity
    #[arg(long, allow_hyphen_values = true)]
    pub sales_quantity: Option<String>,

    /// Date of establishment, YYYY-MM-DD
    #[arg(long)]
    pub established: Option<String>,

    /// Known rating, 0 to 5
    #[arg(long, allow_hyphen_values = true)]
    pub rating: Option<String>,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,
}

impl PredictArgs {
    /// Flags map onto the same draft the interactive form edits, so one
    /// validation path serves both entry points.
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft {
            restaurant_name: self.restaurant_name.clone().unwrap_or_default(),
            cuisine: self.cuisine.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            sales_amount: self.sales_amount.clone().unwrap_or_default(),
            sales_quantity: self.sales_quantity.clone().unwrap_or_default(),
            established: self.established.clone().unwrap_or_default(),
            rating: self.rating.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
