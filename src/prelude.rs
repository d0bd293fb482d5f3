// Traits
pub use crate::data_value::ValueContent;
pub use crate::transport::HttpTransport;

// Structs and enums
pub use crate::client::Client;
pub use crate::client_builder::ClientBuilder;
pub use crate::data_type::DataType;
pub use crate::data_value::DataValue;
pub use crate::edit_metadata::EditMetadata;
pub use crate::entity_id::{ItemId, PropertyId, StatementId};
pub use crate::error::RestApiError;
pub use crate::globe_coordinate::GlobeCoordinate;
pub use crate::item::Item;
pub use crate::monolingual_text::MonolingualText;
pub use crate::quantity::Quantity;
pub use crate::reference::Reference;
pub use crate::sitelink::Sitelink;
pub use crate::snak::{Qualifier, ReferencePart, Snak};
pub use crate::snak_type::SnakType;
pub use crate::statement::Statement;
pub use crate::statement_rank::StatementRank;
pub use crate::term::Term;
pub use crate::time_value::{Time, TimePrecision};
pub use crate::wikibase_item::WikibaseItem;
