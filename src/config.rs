/// Process configuration, read once at startup after the `.env` file is
/// loaded.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the Chapa API.
    pub secret_key: String,
    pub api_url: String,
    /// Externally reachable base URL of this relay. Chapa is told to send
    /// the callback and the post-payment redirect here.
    pub public_url: String,
    pub port: u16,
    pub checkout_title: String,
    pub checkout_description: String,
}

impl Config {
    pub fn from_env() -> Self {
        let secret_key =
            std::env::var("CHAPA_SECRET_KEY").expect("CHAPA_SECRET_KEY env is defined");
        let api_url = std::env::var("CHAPA_API_URL")
            .unwrap_or_else(|_| "https://api.chapa.co/v1".to_string());
        let public_url = std::env::var("PUBLIC_URL").unwrap_or_else(|_| {
            tracing::warn!("PUBLIC_URL is not defined, using default one");
            "http://localhost:5400".to_string()
        });
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5400);
        let checkout_title =
            std::env::var("CHECKOUT_TITLE").unwrap_or_else(|_| "Checkout".to_string());
        let checkout_description = std::env::var("CHECKOUT_DESCRIPTION")
            .unwrap_or_else(|_| "Payment for your order".to_string());
        Self {
            secret_key,
            api_url,
            public_url,
            port,
            checkout_title,
            checkout_description,
        }
    }

    /// Where Chapa posts the payment outcome notification.
    pub fn callback_url(&self) -> String {
        format!("{}/callback", self.public_url)
    }

    /// Where the buyer lands after finishing the hosted checkout.
    pub fn return_url(&self) -> String {
        format!("{}/thank-you", self.public_url)
    }
}
