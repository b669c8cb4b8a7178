pub mod id_type;
pub mod query;
pub mod record;
pub mod search;

pub use id_type::IdType;
pub use query::Query;
pub use record::{QueryResult, ResultRecord};
pub use search::{SearchRequest, SearchResponse};
