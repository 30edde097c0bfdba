//! Request dispatcher: the route table plus the one store it serves.

use std::time::Instant;

use parking_lot::Mutex;
use tracing::debug;

use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::router::Router;
use crate::status::Status;
use crate::store::PostStore;

/// The posts application.
///
/// Holds the [`Router`] and the [`PostStore`]. Build it once at startup and
/// pass it to [`Server::serve`](crate::Server::serve); it lives as long as
/// the server does.
///
/// Handlers run to completion while holding the store lock and never await,
/// so mutations apply in one total order no matter how many runtime threads
/// deliver requests.
pub struct App {
    router: Router,
    store: Mutex<PostStore>,
}

impl App {
    pub fn new() -> Self {
        Self::with_store(PostStore::new())
    }

    pub fn with_store(store: PostStore) -> Self {
        Self { router: Router::new(), store: Mutex::new(store) }
    }

    /// Routes one request target and produces one response.
    pub fn dispatch(&self, uri: &http::Uri) -> Response {
        match Request::from_uri(uri) {
            Ok(req) => self.handle(&req),
            Err(e) => {
                debug!(target_uri = %uri, "unparsable request target");
                e.into_response()
            }
        }
    }

    /// Like [`dispatch`](App::dispatch), for an already-parsed request.
    pub fn handle(&self, req: &Request) -> Response {
        let started = Instant::now();

        let Some(route) = self.router.lookup(req.path()) else {
            debug!(path = req.path(), status = 404, reason = Status::NotFound.reason(), "no route");
            return Response::status(Status::NotFound);
        };

        let response = {
            let mut store = self.store.lock();
            route.handle(&mut store, req)
        };

        debug!(
            path = req.path(),
            %route,
            status = response.status_code().as_u16(),
            reason = response.status_code().reason(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "request handled"
        );
        response
    }

    /// Runs `f` with shared access to the store.
    pub fn with_store_ref<R>(&self, f: impl FnOnce(&PostStore) -> R) -> R {
        f(&*self.store.lock())
    }
}

impl Default for App {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn call(app: &App, target: &str) -> (u16, Value) {
        let uri: http::Uri = target.parse().unwrap();
        let res = app.dispatch(&uri);
        let body = if res.body().is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(res.body()).unwrap()
        };
        (res.status_code().as_u16(), body)
    }

    #[test]
    fn unknown_path_is_404_with_empty_body() {
        let app = App::new();
        let res = app.dispatch(&"/nope".parse().unwrap());
        assert_eq!(res.status_code(), Status::NotFound);
        assert!(res.body().is_empty());
    }

    #[test]
    fn create_returns_fresh_post_listed_first() {
        let app = App::new();
        call(&app, "/posts.post?content=first");
        let (status, post) = call(&app, "/posts.post?content=hello");

        assert_eq!(status, 200);
        assert_eq!(post["id"], 2);
        assert_eq!(post["content"], "hello");
        assert_eq!(post["removed"], false);
        assert!(post["created"].as_i64().is_some_and(|t| t > 0));

        let (_, list) = call(&app, "/posts.get");
        assert_eq!(list[0], post);
    }

    #[test]
    fn dot_segments_route_like_the_plain_path() {
        let app = App::new();
        call(&app, "/posts.post?content=a");

        let (status, list) = call(&app, "/x/../posts.get");
        assert_eq!(status, 200);
        assert_eq!(list[0]["content"], "a");
        assert_eq!(call(&app, "/./posts.getById?id=1").0, 200);
    }

    #[test]
    fn json_responses_carry_content_type() {
        let app = App::new();
        let res = app.dispatch(&"/posts.get".parse().unwrap());
        assert_eq!(res.header("content-type"), Some("application/json"));
        assert_eq!(res.body(), b"[]");
    }

    #[test]
    fn non_numeric_id_is_400_in_any_state() {
        let app = App::new();
        assert_eq!(call(&app, "/posts.getById?id=abc").0, 400);
        call(&app, "/posts.post?content=a");
        assert_eq!(call(&app, "/posts.getById?id=abc").0, 400);
        assert_eq!(call(&app, "/posts.getById").0, 400);
        assert_eq!(call(&app, "/posts.getById?id=2").0, 404);
    }

    #[test]
    fn edit_keeps_id_and_created() {
        let app = App::new();
        let (_, before) = call(&app, "/posts.post?content=a");
        let (status, after) = call(&app, "/posts.edit?id=1&content=b");

        assert_eq!(status, 200);
        assert_eq!(after["id"], before["id"]);
        assert_eq!(after["created"], before["created"]);
        assert_eq!(after["content"], "b");
        assert_eq!(call(&app, "/posts.edit?id=1").0, 400);
    }

    #[test]
    fn delete_and_restore_round_trip() {
        let app = App::new();
        call(&app, "/posts.post?content=a");

        let (status, removed) = call(&app, "/posts.delete?id=1");
        assert_eq!(status, 200);
        assert_eq!(removed["removed"], true);
        assert_eq!(call(&app, "/posts.get").1, serde_json::json!([]));
        assert_eq!(call(&app, "/posts.getById?id=1").0, 404);

        let (status, restored) = call(&app, "/posts.restore?id=1");
        assert_eq!(status, 200);
        assert_eq!(restored["removed"], false);
        assert_eq!(call(&app, "/posts.get").1[0]["id"], 1);

        assert_eq!(call(&app, "/posts.restore?id=1").0, 400);
        assert_eq!(call(&app, "/posts.restore?id=5").0, 404);
    }

    #[test]
    fn list_is_idempotent() {
        let app = App::new();
        call(&app, "/posts.post?content=a");
        call(&app, "/posts.post?content=b");
        let first = call(&app, "/posts.get");
        let second = call(&app, "/posts.get");
        assert_eq!(first, second);
        assert_eq!(first.1[0]["content"], "b");
        assert_eq!(first.1[1]["content"], "a");
        app.with_store_ref(|store| assert_eq!(store.len(), 2));
    }
}
