#[macro_use]
extern crate serde;

pub mod acs;
pub mod acs_signer;
pub mod acs_sms;
pub mod acs_string_to_sign;
pub mod constant;
pub mod error;

pub use acs::*;
pub use acs_signer::*;
pub use acs_sms::*;
pub use acs_string_to_sign::*;
pub use constant::*;
pub use error::*;
