//! shoplist-client
//!
//! Typed access to the shopping-list API plus the view state a front end
//! keeps in sync with it. Every call returns an explicit `Result`; callers
//! branch on [`ClientError`] kinds rather than on raw status codes.

pub mod api;
pub mod error;
pub mod view;

pub use api::{HttpListApi, ListApi};
pub use error::ClientError;
pub use view::ListView;
