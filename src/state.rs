use std::sync::Arc;

use crate::{chapa::PaymentProvider, store::StatusStore, tx_ref::TxRefGenerator};

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub provider: Arc<dyn PaymentProvider>,
    pub store: Arc<dyn StatusStore>,
    pub tx_refs: TxRefGenerator,
}

impl AppState {
    pub fn new(provider: Arc<dyn PaymentProvider>, store: Arc<dyn StatusStore>) -> Self {
        Self {
            provider,
            store,
            tx_refs: TxRefGenerator,
        }
    }
}
