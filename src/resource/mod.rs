//! Resource abstraction layer
//!
//! Every API collection is accessed through the generic [`Resource`], bound at
//! construction to a collection name and the object type its responses decode
//! into. The specialized accessors add resource specific helpers on top.
//!
//! # Architecture
//!
//! - [`base`] - Generic list/get/create, query strings and response decoding
//! - [`payments`] - Payment creation and refunds
//! - [`refunds`] - Refunds of one payment
//! - [`methods`] - Payment methods
//! - [`issuers`] - Issuers (e.g. iDEAL banks)
//!
//! # Example
//!
//! ```no_run
//! use mollie_api::MollieClient;
//!
//! async fn list_methods(client: &MollieClient) -> mollie_api::Result<()> {
//!     for method in client.methods().list(0, 0, &[("locale", "nl")]).await? {
//!         println!("{}: {:?}", method.id, method.description);
//!     }
//!     Ok(())
//! }
//! ```

pub mod base;
pub mod issuers;
pub mod methods;
pub mod payments;
pub mod refunds;

pub use base::{build_query, parse_response, Resource};
pub use issuers::Issuers;
pub use methods::Methods;
pub use payments::{PaymentRequest, Payments};
pub use refunds::PaymentRefunds;
