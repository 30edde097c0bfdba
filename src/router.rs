//! Route table.
//!
//! The six post routes form a closed set, so they are an enum rather than a
//! map of boxed closures. A [`matchit`] radix tree resolves a pathname to its
//! [`Route`]; every registered path is static, which makes the lookup an
//! exact, case-sensitive string match. The HTTP method plays no part.

use std::fmt;

use matchit::Router as MatchitRouter;

use crate::handlers;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::store::PostStore;

/// One registered pathname and the handler bound to it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Route {
    List,
    GetById,
    Create,
    Edit,
    Delete,
    Restore,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::List,
        Route::GetById,
        Route::Create,
        Route::Edit,
        Route::Delete,
        Route::Restore,
    ];

    /// The pathname this route answers on.
    pub fn path(self) -> &'static str {
        match self {
            Self::List    => "/posts.get",
            Self::GetById => "/posts.getById",
            Self::Create  => "/posts.post",
            Self::Edit    => "/posts.edit",
            Self::Delete  => "/posts.delete",
            Self::Restore => "/posts.restore",
        }
    }

    /// Runs the bound handler against `store`.
    pub fn handle(self, store: &mut PostStore, req: &Request) -> Response {
        match self {
            Self::List    => handlers::list(store, req).into_response(),
            Self::GetById => handlers::get_by_id(store, req).into_response(),
            Self::Create  => handlers::create(store, req).into_response(),
            Self::Edit    => handlers::edit(store, req).into_response(),
            Self::Delete  => handlers::delete(store, req).into_response(),
            Self::Restore => handlers::restore(store, req).into_response(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Pathname → [`Route`] lookup. Built once, read on every request.
pub struct Router {
    tree: MatchitRouter<Route>,
}

impl Router {
    /// Registers every [`Route`].
    pub fn new() -> Self {
        let mut tree = MatchitRouter::new();
        for route in Route::ALL {
            // Static, distinct paths: insertion cannot conflict.
            tree.insert(route.path(), route)
                .unwrap_or_else(|e| panic!("invalid route `{route}`: {e}"));
        }
        Self { tree }
    }

    pub fn lookup(&self, path: &str) -> Option<Route> {
        self.tree.at(path).ok().map(|matched| *matched.value)
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
