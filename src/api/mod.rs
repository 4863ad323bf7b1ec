//! Mollie API interaction module
//!
//! This module provides the plumbing shared by every resource: the API key,
//! the HTTP transport and the client that ties them together.
//!
//! # Module Structure
//!
//! - [`auth`] - API key validation
//! - [`client`] - Main client holding key, endpoint and transport
//! - [`http`] - Transport capability and its reqwest implementation
//!
//! # Example
//!
//! ```no_run
//! use mollie_api::MollieClient;
//!
//! async fn example() -> mollie_api::Result<()> {
//!     let mut client = MollieClient::new()?;
//!     client.set_api_key("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM")?;
//!     let payment = client.payments().get("tr_d0b0E3EA3v").await?;
//!     println!("{} is {}", payment.id, payment.status);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod http;
