//! Swagger document generation with per-locale translated variants.
//!
//! Feed an API description (anything `serde::Serialize`) to a
//! [`generator::Generator`] and it writes the base document as
//! `swagger.json`/`swagger.yaml`, then one merged pair per locale override
//! found in the locales directory. Overrides are partial YAML documents;
//! [`merge::merge`] folds each one over the base, recursing into objects and
//! replacing everything else wholesale.

pub mod cli;
pub mod codec;
pub mod error;
pub mod generator;
pub mod locales;
pub mod merge;

pub use error::GenerateError;
pub use generator::Generator;
