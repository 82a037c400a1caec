//! Typed access to the claims of JSON Web Token sections.
//!
//! A token header or payload is wrapped in a [`ClaimSet`]. Values are read
//! on demand as any supported Rust type through [`FromClaim`], or flattened
//! into string-typed [`Claim`]s tagged with a [`ClaimValueType`].
//!
//! ```
//! use jwtclaims::{ClaimSet, ClaimValueType};
//!
//! let claims = ClaimSet::from_json(r#"{"sub":"user","roles":["a","b"],"age":42}"#)?;
//! let roles: Vec<String> = claims.get_value("roles")?;
//! let age: i32 = claims.get_value("age")?;
//! assert_eq!(roles, ["a", "b"]);
//! assert_eq!(age, 42);
//!
//! let materialized = claims.claims();
//! assert_eq!(materialized[1].value(), r#"["a","b"]"#);
//! assert_eq!(materialized[1].value_type(), ClaimValueType::JsonArray);
//! # Ok::<(), jwtclaims::Error>(())
//! ```
//!
//! Signatures are never verified here.

mod claim;
mod claim_set;
mod coerce;
mod discovery;
mod error;
mod from_claim;
mod shape;
mod token;
mod value;
mod value_type;

pub mod remote;
pub mod utils;

// Internal modules
pub(crate) mod limits;
pub(crate) mod url;

// Public Interface
pub use claim::Claim;
pub use claim_set::ClaimSet;
pub use coerce::coerce;
pub use discovery::{OpenIdConfiguration, OpenIdConfigurationRetriever};
pub use error::{ConversionCause, ConversionError, Error, Result};
pub use from_claim::FromClaim;
pub use shape::{IntWidth, Scalar, Shape};
pub use token::JsonWebToken;
pub use value::ClaimValue;
pub use value_type::classify;

pub use claimtype::{
    ClaimValueType, DEFAULT_ISSUER, StandardClaims, UnknownValueType, header, registered,
};
