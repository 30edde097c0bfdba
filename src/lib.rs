//! # posts
//!
//! An in-memory "posts" service over HTTP. Six fixed pathnames, arguments in
//! the query string, JSON out.
//!
//! | Path | Query | Does |
//! |---|---|---|
//! | `/posts.get` | | list active posts, newest first |
//! | `/posts.getById` | `id` | fetch one active post |
//! | `/posts.post` | `content` | create a post |
//! | `/posts.edit` | `id`, `content` | replace a post's content |
//! | `/posts.delete` | `id` | soft-delete a post |
//! | `/posts.restore` | `id` | undo a soft delete |
//!
//! Routing is by exact pathname only; the HTTP method is ignored. Failures
//! are bare status codes (`400`, `404`) with an empty body.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use posts::{App, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), posts::Error> {
//!     Server::bind("0.0.0.0:9999".parse()?)
//!         .await?
//!         .serve(App::new())
//!         .await
//! }
//! ```
//!
//! The dispatcher can also be driven without a socket:
//!
//! ```rust
//! use posts::{App, Status};
//!
//! let app = App::new();
//! let res = app.dispatch(&"/posts.post?content=hi".parse().unwrap());
//! assert_eq!(res.status_code(), Status::Ok);
//! ```

mod app;
mod error;
mod request;
mod response;
mod router;
mod server;
mod status;
mod store;

pub mod config;
pub mod handlers;

pub use app::App;
pub use error::{ApiError, Error};
pub use request::{Query, Request, coerce_number};
pub use response::{IntoResponse, Json, Response};
pub use router::{Route, Router};
pub use server::Server;
pub use status::Status;
pub use store::{Post, PostStore, RestoreOutcome};
