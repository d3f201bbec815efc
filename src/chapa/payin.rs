/// Wire payload for `POST /transaction/initialize`.
#[derive(Debug, serde::Serialize)]
pub struct InitializeRequest<'a> {
    pub amount: String,
    pub currency: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: &'a str,
    pub tx_ref: &'a str,
    pub callback_url: String,
    pub return_url: String,
    pub customizations: Customizations<'a>,
}

/// Branding shown on the hosted checkout page.
#[derive(Debug, serde::Serialize)]
pub struct Customizations<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Hosted checkout handle returned by a successful initialize call.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct InitializeData {
    pub checkout_url: String,
}
