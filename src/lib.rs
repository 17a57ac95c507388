pub mod error;
pub mod extract;
pub mod format;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod resolve;
pub mod schema;
pub mod xml;

pub use error::{RelgraphError, Result};
pub use extract::{extract, RelationshipTriple};
pub use format::format_name;
pub use pipeline::{extract_document, ExtractionReport};
pub use resolve::resolve_name;
