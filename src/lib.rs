//! Client for the Mollie payments API
//!
//! Authenticates with a `live_` or `test_` API key, maps the payments, methods,
//! issuers and refunds collections onto HTTP calls, and decodes responses into
//! typed objects.
//!
//! ```no_run
//! use mollie_api::MollieClient;
//! use rust_decimal::Decimal;
//!
//! async fn checkout() -> mollie_api::Result<()> {
//!     let mut client = MollieClient::new()?;
//!     client.set_api_key("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM")?;
//!
//!     let payment = client
//!         .payments()
//!         .create(
//!             Decimal::new(1000, 2),
//!             None,
//!             "Order #12345",
//!             "https://webshop.example.org/order/12345/",
//!             None,
//!         )
//!         .await?;
//!
//!     println!("Send the customer to {:?}", payment.payment_url());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod objects;
pub mod resource;

#[cfg(test)]
mod testing;

pub use api::auth::ApiKey;
pub use api::client::{MollieClient, API_ENDPOINT, API_VERSION};
pub use api::http::{HttpTransport, Transport};
pub use config::Config;
pub use error::{ApiError, Error, Result};
pub use objects::{
    Issuer, Payment, PaymentLinks, PaymentMethod, PaymentRefund, PaymentStatus, RefundStatus,
};
pub use resource::PaymentRequest;

/// Crate version, sent in the user agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
