use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fxboard_api::{CurrencyPayload, DEFAULT_PAGE_SIZE, SortDirection, SortField, symbols};
use rust_decimal::Decimal;

/// fxboard: query and edit the currency service
#[derive(Parser, Debug)]
#[command(name = "fxboard", version)]
pub struct Cli {
    /// Server address (overrides the config file)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print raw JSON instead of TSV
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one page of currencies
    Page(PageArgs),

    /// List every currency
    All,

    /// Show one currency by code
    Get {
        /// ISO 4217 code, e.g. EUR
        code: String,
    },

    /// Create a currency
    Create(CurrencyArgs),

    /// Replace a currency by id
    Update {
        id: i64,
        #[command(flatten)]
        currency: CurrencyArgs,
    },

    /// Delete a currency by id
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Items per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Sort field: code, name, exchangeRate or createdAt
    #[arg(long, default_value = "code")]
    pub sort: SortField,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "asc")]
    pub dir: SortDirection,
}

#[derive(Args, Debug)]
pub struct CurrencyArgs {
    /// ISO 4217 code
    #[arg(long)]
    pub code: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Symbol; defaults to the well-known symbol for the code
    #[arg(long)]
    pub symbol: Option<String>,

    /// Rate against USD
    #[arg(long)]
    pub rate: Decimal,
}

impl CurrencyArgs {
    pub fn into_payload(self) -> CurrencyPayload {
        let symbol = self.symbol.unwrap_or_else(|| {
            symbols::symbol_for(&self.code).map_or_else(
                || self.code.trim().to_ascii_uppercase(),
                str::to_string,
            )
        });
        CurrencyPayload {
            code: self.code,
            name: self.name,
            symbol,
            exchange_rate: self.rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults() {
        let cli = Cli::try_parse_from(["fxboard", "page"]).unwrap();
        let Command::Page(args) = cli.command else {
            panic!("expected page command");
        };
        assert_eq!(args.page, 0);
        assert_eq!(args.size, 10);
        assert_eq!(args.sort, SortField::Code);
        assert_eq!(args.dir, SortDirection::Asc);
    }

    #[test]
    fn test_page_rejects_zero_size() {
        assert!(Cli::try_parse_from(["fxboard", "page", "--size", "0"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fxboard", "page", "--sort", "exchangeRate", "--dir", "desc", "--json", "-s",
            "http://fx:9000",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.server.as_deref(), Some("http://fx:9000"));
        let Command::Page(args) = cli.command else {
            panic!("expected page command");
        };
        assert_eq!(args.sort, SortField::ExchangeRate);
        assert_eq!(args.dir, SortDirection::Desc);
    }

    #[test]
    fn test_symbol_defaults_from_code() {
        let cli = Cli::try_parse_from([
            "fxboard", "create", "--code", "eur", "--name", "Euro", "--rate", "0.92",
        ])
        .unwrap();
        let Command::Create(args) = cli.command else {
            panic!("expected create command");
        };
        let payload = args.into_payload();
        assert_eq!(payload.symbol, "€");
        assert_eq!(payload.exchange_rate, Decimal::new(92, 2));
    }

    #[test]
    fn test_unknown_code_symbol_falls_back_to_code() {
        let args = CurrencyArgs {
            code: "xau".to_string(),
            name: "Gold".to_string(),
            symbol: None,
            rate: Decimal::ONE,
        };
        assert_eq!(args.into_payload().symbol, "XAU");
    }

    #[test]
    fn test_update_takes_id_and_fields() {
        let cli = Cli::try_parse_from([
            "fxboard", "update", "7", "--code", "GBP", "--name", "Pound", "--symbol", "£",
            "--rate", "0.79",
        ])
        .unwrap();
        let Command::Update { id, currency } = cli.command else {
            panic!("expected update command");
        };
        assert_eq!(id, 7);
        assert_eq!(currency.symbol.as_deref(), Some("£"));
    }
}
