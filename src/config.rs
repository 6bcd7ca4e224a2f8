use std::env;

use crate::{
    engine::SalesAnalyzer,
    error::{AnalysisError, ConfigError},
    strategy::{BonusByProfit, SimpleRevenue},
};

const REVENUE_KEY: &str = "SALES_REPORT_REVENUE";
const BONUS_KEY: &str = "SALES_REPORT_BONUS";
const FORMAT_KEY: &str = "SALES_REPORT_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenuePolicy {
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusPolicy {
    ByProfit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub revenue: RevenuePolicy,
    pub bonus: BonusPolicy,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            revenue: RevenuePolicy::Simple,
            bonus: BonusPolicy::ByProfit,
            format: OutputFormat::Csv,
        }
    }
}

impl ReportConfig {
    /// Reads the report settings from `SALES_REPORT_*` environment variables.
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let revenue = match lookup(REVENUE_KEY).as_deref() {
            None | Some("simple") => RevenuePolicy::Simple,
            Some(other) => return Err(unknown(REVENUE_KEY, other, "simple")),
        };
        let bonus = match lookup(BONUS_KEY).as_deref() {
            None | Some("by-profit") => BonusPolicy::ByProfit,
            Some(other) => return Err(unknown(BONUS_KEY, other, "by-profit")),
        };
        let format = match lookup(FORMAT_KEY).as_deref() {
            None => defaults.format,
            Some("csv") => OutputFormat::Csv,
            Some("json") => OutputFormat::Json,
            Some(other) => return Err(unknown(FORMAT_KEY, other, "csv, json")),
        };

        Ok(Self {
            revenue,
            bonus,
            format,
        })
    }

    pub fn analyzer(&self) -> Result<SalesAnalyzer, AnalysisError> {
        let builder = SalesAnalyzer::builder();
        let builder = match self.revenue {
            RevenuePolicy::Simple => builder.revenue(SimpleRevenue),
        };
        let builder = match self.bonus {
            BonusPolicy::ByProfit => builder.bonus(BonusByProfit),
        };
        builder.build()
    }
}

fn unknown(key: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::UnknownValue {
        key,
        value: value.to_string(),
        expected,
    }
}
