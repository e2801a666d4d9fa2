//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use slotmatch::{MatchConfig, ProposalOrder, RegressionCheck, ValidationMode};

#[derive(Parser, Debug)]
#[command(
    name = "slotmatch",
    about = "Assign applicants to capacity-bounded slots by preference and talent fit",
    version
)]
pub struct Cli {
    /// Problem file with C (slot) and J (applicant) records
    pub input: PathBuf,

    /// TOML or YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format for the assignments
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Order in which applicants make their first proposal
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Seed for shuffled proposal order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fail if the validator reports any violation
    #[arg(long)]
    pub strict: bool,

    /// Expected member sum for a slot, as SLOT=SUM (repeatable)
    #[arg(long = "expect", value_name = "SLOT=SUM", value_parser = parse_expectation)]
    pub expect: Vec<RegressionCheck>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "slotmatch=info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Name,
    Input,
    Shuffled,
}

impl From<OrderArg> for ProposalOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Name => ProposalOrder::Name,
            OrderArg::Input => ProposalOrder::Input,
            OrderArg::Shuffled => ProposalOrder::Shuffled,
        }
    }
}

impl Cli {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, mut config: MatchConfig) -> MatchConfig {
        if let Some(order) = self.order {
            config = config.with_proposal_order(order.into());
        }
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if self.strict {
            config = config.with_validation(ValidationMode::Strict);
        }
        for check in &self.expect {
            config = config.with_regression(check.clone());
        }
        config
    }
}

fn parse_expectation(s: &str) -> Result<RegressionCheck, String> {
    let (slot, sum) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SLOT=SUM, got '{s}'"))?;
    if slot.is_empty() {
        return Err(format!("missing slot name in '{s}'"));
    }
    let sum = sum
        .parse()
        .map_err(|_| format!("invalid member sum in '{s}'"))?;
    Ok(RegressionCheck::new(slot, sum))
}
