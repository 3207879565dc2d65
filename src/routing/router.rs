//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in evaluation order
//! - Look up the target for a request
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Single ordered pass, first match wins
//! - Anything unmatched falls through to static file serving

use axum::body::Body;
use axum::http::{Method, Request};

use crate::config::UpstreamConfig;
use crate::routing::matcher::{AndMatcher, Matcher, MethodMatcher, PathPrefixMatcher};

/// What a matched request is handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Answer a CORS preflight locally.
    Preflight,
    /// Forward to the media player control API.
    Upstream,
    /// Serve from the static file root.
    Static,
}

/// A compiled route.
#[derive(Debug)]
pub struct Route {
    pub name: &'static str,
    pub matcher: Box<dyn Matcher>,
    pub target: RouteTarget,
}

/// Ordered route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build from an explicit route list, evaluated in the given order.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Compile the proxy's route table: preflight first, then the forwarding prefix.
    pub fn from_config(upstream: &UpstreamConfig) -> Self {
        Self::new(vec![
            Route {
                name: "preflight",
                matcher: Box::new(MethodMatcher::new(Method::OPTIONS)),
                target: RouteTarget::Preflight,
            },
            Route {
                name: "upstream",
                matcher: Box::new(AndMatcher::new(vec![
                    Box::new(MethodMatcher::new(Method::GET)),
                    Box::new(PathPrefixMatcher::new(upstream.path_prefix.clone())),
                ])),
                target: RouteTarget::Upstream,
            },
        ])
    }

    /// Find the target for a request.
    pub fn match_request(&self, req: &Request<Body>) -> RouteTarget {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(req))
            .map(|route| {
                tracing::trace!(route = route.name, "Route matched");
                route.target
            })
            .unwrap_or(RouteTarget::Static)
    }
}
