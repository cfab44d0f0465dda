//! Route table and resolution
//!
//! Routes are an ordered list of descriptors. Resolution checks exact paths
//! first through a lookup index, then prefix routes in registration order, so
//! when two prefixes could match a path the one registered first wins.

use std::collections::HashMap;

use axum::http::Method;

/// Handler a route dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListExercises,
    BodyPartList,
    EquipmentList,
    TargetList,
    ByBodyPart,
    ByEquipment,
    ByTarget,
    ById,
    ByName,
    IssueApiKey,
    Docs,
    Health,
}

/// Whether a route sits behind the API key gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    ApiKey,
}

/// How a route matches a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatcher {
    /// The path must equal this string
    Exact(&'static str),
    /// The path must be `prefix` or start with `prefix/`; the rest is a
    /// positional parameter named `param`
    Prefix {
        prefix: &'static str,
        param: &'static str,
    },
}

impl PathMatcher {
    /// Human-readable pattern, e.g. `/exercises/name/{value}`
    pub fn pattern(&self) -> String {
        match self {
            Self::Exact(path) => path.to_string(),
            Self::Prefix { prefix, param } => format!("{}/{{{}}}", prefix, param),
        }
    }

    /// Raw (still URL-encoded) remainder after a prefix; empty when the
    /// parameter is absent
    fn remainder<'p>(&self, path: &'p str) -> Option<&'p str> {
        match self {
            Self::Exact(_) => None,
            Self::Prefix { prefix, .. } => {
                let rest = path.strip_prefix(prefix)?;
                if rest.is_empty() {
                    Some(rest)
                } else {
                    rest.strip_prefix('/')
                }
            }
        }
    }
}

/// A route descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub matcher: PathMatcher,
    pub endpoint: Endpoint,
    pub access: Access,
    pub description: &'static str,
    pub query_params: &'static [&'static str],
}

impl Route {
    pub fn get(matcher: PathMatcher, endpoint: Endpoint) -> Self {
        Self {
            method: Method::GET,
            matcher,
            endpoint,
            access: Access::ApiKey,
            description: "",
            query_params: &[],
        }
    }

    pub fn public(mut self) -> Self {
        self.access = Access::Public;
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn with_query_params(mut self, params: &'static [&'static str]) -> Self {
        self.query_params = params;
        self
    }

    pub fn pattern(&self) -> String {
        self.matcher.pattern()
    }

    pub fn is_public(&self) -> bool {
        self.access == Access::Public
    }
}

/// Outcome of resolving a request against the table
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'r, 'p> {
    /// A route matched; `param` is set for prefix routes and may be empty
    Matched {
        route: &'r Route,
        param: Option<&'p str>,
    },
    /// The path is routed, but not for this method; `route` is the first
    /// route whose path matched
    MethodNotAllowed { route: &'r Route },
    NotFound,
}

/// Ordered route table
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    exact_index: HashMap<&'static str, Vec<usize>>,
}

const PAGINATION_PARAMS: &[&str] = &["limit", "offset"];
const SEARCH_PARAMS: &[&str] = &["name", "bodyPart", "equipment", "target", "limit", "offset"];

impl RouteTable {
    /// Build a table; registration order is resolution order for prefixes
    pub fn new(routes: Vec<Route>) -> Self {
        let mut exact_index: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (i, route) in routes.iter().enumerate() {
            if let PathMatcher::Exact(path) = route.matcher {
                exact_index.entry(path).or_default().push(i);
            }
        }

        Self {
            routes,
            exact_index,
        }
    }

    /// The exercise catalog API
    pub fn exercise_api() -> Self {
        use Endpoint::*;

        let prefix = |prefix, param| PathMatcher::Prefix { prefix, param };

        Self::new(vec![
            Route::get(PathMatcher::Exact("/exercises"), ListExercises)
                .describe("List exercises, filtered by any of name (substring), bodyPart, equipment and target")
                .with_query_params(SEARCH_PARAMS),
            Route::get(PathMatcher::Exact("/exercises/bodyPartList"), BodyPartList)
                .describe("Sorted list of distinct body parts"),
            Route::get(PathMatcher::Exact("/exercises/equipmentList"), EquipmentList)
                .describe("Sorted list of distinct equipment"),
            Route::get(PathMatcher::Exact("/exercises/targetList"), TargetList)
                .describe("Sorted list of distinct target muscles"),
            Route::get(prefix("/exercises/bodyPart", "value"), ByBodyPart)
                .describe("Exercises for a body part")
                .with_query_params(PAGINATION_PARAMS),
            Route::get(prefix("/exercises/equipment", "value"), ByEquipment)
                .describe("Exercises using a piece of equipment")
                .with_query_params(PAGINATION_PARAMS),
            Route::get(prefix("/exercises/target", "value"), ByTarget)
                .describe("Exercises for a target muscle")
                .with_query_params(PAGINATION_PARAMS),
            Route::get(prefix("/exercises/exercise", "id"), ById)
                .describe("A single exercise by id"),
            Route::get(prefix("/exercises/name", "value"), ByName)
                .describe("Exercises whose name contains the value")
                .with_query_params(PAGINATION_PARAMS),
            Route::get(PathMatcher::Exact("/get-api-key"), IssueApiKey)
                .public()
                .describe("Issue a new API key"),
            Route::get(PathMatcher::Exact("/docs"), Docs)
                .public()
                .describe("This documentation"),
            Route::get(PathMatcher::Exact("/health"), Health)
                .public()
                .describe("Service health"),
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve `method` and `path` to a route
    ///
    /// `HEAD` resolves to the `GET` route for the same path.
    pub fn resolve<'r, 'p>(&'r self, method: &Method, path: &'p str) -> Resolution<'r, 'p> {
        let method = if *method == Method::HEAD {
            Method::GET
        } else {
            method.clone()
        };

        if let Some(indices) = self.exact_index.get(path) {
            let mut candidates = indices.iter().map(|i| &self.routes[*i]);
            let first = candidates.clone().next();
            return match candidates.find(|route| route.method == method) {
                Some(route) => Resolution::Matched { route, param: None },
                None => match first {
                    Some(route) => Resolution::MethodNotAllowed { route },
                    None => Resolution::NotFound,
                },
            };
        }

        let mut path_routed = None;
        for route in &self.routes {
            if let Some(param) = route.matcher.remainder(path) {
                if route.method == method {
                    return Resolution::Matched {
                        route,
                        param: Some(param),
                    };
                }
                path_routed.get_or_insert(route);
            }
        }

        match path_routed {
            Some(route) => Resolution::MethodNotAllowed { route },
            None => Resolution::NotFound,
        }
    }
}
