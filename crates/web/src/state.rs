use axum::extract::FromRef;
use rust_decimal::Decimal;
use storage::Database;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub quota_price: Decimal,
}

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub pricing: Pricing,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Pricing {
    fn from_ref(state: &AppState) -> Self {
        state.pricing
    }
}
