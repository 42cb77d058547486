//! Transfer schemas with validation at the edge
//!
//! Create shapes never carry ids or timestamps. Response shapes mirror
//! stored rows and are what every handler serializes.

pub mod article;
pub mod math_model;
pub mod pagination;
pub mod principle;
pub mod procedure;
pub mod stats;
pub mod validation;

pub use article::{ArticleCreate, ArticleFilter, ArticleQuery, ArticleResponse, SearchQuery};
pub use math_model::{MathModelCreate, MathModelQuery, MathModelResponse};
pub use pagination::{Page, PageParams, DEFAULT_LIMIT, MAX_LIMIT};
pub use principle::{PrincipleCreate, PrincipleQuery, PrincipleResponse};
pub use procedure::{ProcedureCreate, ProcedureQuery, ProcedureResponse};
pub use stats::{decade_label, StatsResponse};
pub use validation::{Validate, ValidationError};
