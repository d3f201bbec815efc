use crate::{
    chapa::payin::{Customizations, InitializeRequest},
    checkout::api::CheckoutRequest,
    config::Config,
};

impl<'a> InitializeRequest<'a> {
    pub fn from_checkout(checkout: &'a CheckoutRequest, config: &'a Config, tx_ref: &'a str) -> Self {
        Self {
            // Chapa accepts decimal strings
            amount: format!("{:.2}", checkout.amount),
            currency: &checkout.currency,
            email: &checkout.email,
            first_name: &checkout.first_name,
            last_name: &checkout.last_name,
            phone_number: &checkout.phone_number,
            tx_ref,
            callback_url: config.callback_url(),
            return_url: config.return_url(),
            customizations: Customizations {
                title: &config.checkout_title,
                description: &config.checkout_description,
            },
        }
    }
}
