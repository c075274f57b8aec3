//! Library layer for the eCourts portal: markup extraction, interpretation
//! of location lists, case status panels and cause lists, and the
//! [`PortalClient`] facade that ties them to the transport.
//!
//! Everything except [`PortalClient`] is pure: the interpreters take HTML
//! (and, for case status, an evaluation date) and never perform I/O.

pub mod case_status;
pub mod cause_list;
pub mod client;
pub mod clock;
pub mod dates;
pub mod error;
pub mod extract;
pub mod location;
pub mod validation;

pub use ecourts_api;
pub use ecourts_api::types;
pub use ecourts_api::{Client, PortalConfig};

pub use client::PortalClient;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::EcourtsError;
