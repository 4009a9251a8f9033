use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;

/// Price of one quota when `QUOTA_PRICE` is not set.
pub const DEFAULT_QUOTA_PRICE: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub quota_price: Decimal,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            quota_price: parse_quota_price(std::env::var("QUOTA_PRICE").ok().as_deref())?,
        })
    }
}

fn parse_quota_price(raw: Option<&str>) -> Result<Decimal> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_QUOTA_PRICE);
    };

    let price: Decimal = raw
        .parse()
        .with_context(|| format!("QUOTA_PRICE must be a decimal amount, got '{raw}'"))?;

    if price <= Decimal::ZERO {
        bail!("QUOTA_PRICE must be positive, got {price}");
    }

    Ok(price)
}
