//! Static HTML documentation sites from compiler-emitted XML documentation
//! comments.
//!
//! The pipeline is a single pass:
//!
//! 1. [`parser::XmlDocParser`] turns each `member` element into a
//!    [`model::MemberRecord`].
//! 2. [`aggregate::DocSet`] groups the records by owning type and namespace.
//! 3. [`search::build_search_index`] and [`generator::site::SiteGenerator`]
//!    turn the aggregate into the search index and the HTML pages.

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod generator;
pub mod locator;
pub mod logging;
pub mod model;
pub mod parser;
pub mod search;

pub use aggregate::{DocSet, DocSetBuilder, DocStats};
pub use error::{DocError, DocResult};
