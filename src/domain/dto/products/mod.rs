pub mod request;
pub mod response;

pub use request::{ProductListQuery, ProductRequest, ProductSearchQuery};
pub use response::ProductPageResponse;
