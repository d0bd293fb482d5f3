#![forbid(unsafe_code)]
#![warn(
    clippy::cognitive_complexity,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::doc_link_with_quotes,
    clippy::doc_markdown,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::float_equality_without_abs,
    keyword_idents,
    clippy::missing_const_for_fn,
    missing_copy_implementations,
    missing_debug_implementations,
    // clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::mod_module_files,
    non_ascii_idents,
    noop_method_call,
    clippy::option_if_let_else,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::semicolon_if_nothing_returned,
    clippy::unseparated_literal_suffix,
    clippy::shadow_unrelated,
    clippy::similar_names,
    clippy::suspicious_operation_groupings,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    clippy::unused_self,
    clippy::use_debug,
    clippy::used_underscore_binding,
    clippy::useless_let_if_seq,
    clippy::wildcard_dependencies,
    clippy::wildcard_imports
)]

//! **Wikibase data model** is a Rust library for reading and writing the items and
//! statements of a [Wikibase](https://www.mediawiki.org/wiki/Wikibase) instance,
//! like [Wikidata](https://www.wikidata.org), through its
//! [REST API](https://www.wikidata.org/wiki/Wikidata:REST_API).
//!
//! Values are decoded into the closed `DataValue` type, dispatched on the data type
//! declared by the property. Values of data types this crate does not know are
//! skipped with a warning, so the rest of an item can still be used.

pub mod client;
pub mod client_builder;
pub mod config;
pub mod data_type;
pub mod data_value;
pub mod edit_metadata;
pub mod entity_id;
pub mod error;
pub mod globe_coordinate;
pub mod item;
pub mod language_codes;
pub mod monolingual_text;
pub mod prelude;
pub mod quantity;
pub mod reference;
pub mod sitelink;
pub mod snak;
pub mod snak_type;
pub mod statement;
pub mod statement_rank;
pub mod term;
pub mod time_value;
pub mod transport;
pub mod wikibase_item;

pub use client::Client;
pub use client_builder::ClientBuilder;
pub use config::{Config, WIKIDATA_CONFIG};
pub use data_type::DataType;
pub use data_value::{DataValue, ValueContent};
pub use edit_metadata::EditMetadata;
pub use entity_id::{ItemId, PropertyId, StatementId};
pub use error::{RestApiError, RestApiErrorPayload};
pub use globe_coordinate::{GlobeCoordinate, EARTH};
pub use item::Item;
pub use monolingual_text::MonolingualText;
pub use quantity::{Quantity, NO_UNIT};
pub use reference::Reference;
pub use sitelink::Sitelink;
pub use snak::{Qualifier, ReferencePart, Snak};
pub use snak_type::SnakType;
pub use statement::Statement;
pub use statement_rank::StatementRank;
pub use term::{Language, Term};
pub use time_value::{Time, TimePrecision, GREGORIAN_CALENDAR, JULIAN_CALENDAR};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use wikibase_item::WikibaseItem;
