use folio_models::contact::ContactMessage;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    /// Full name of the visitor
    pub name: String,
    /// Email address a reply should go to
    pub email: String,
    /// Content of the message
    pub message: String,
}

impl From<ApiContactMessage> for ContactMessage {
    fn from(value: ApiContactMessage) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}
