use smol_str::SmolStr;

use crate::route::{PAGE_PARAM, Params, Route};

/// The request-binding convenience: a route identifier plus every query
/// parameter of the incoming request, so generated links preserve filters
/// and sorts.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    route: SmolStr,
    params: Params,
}

impl PageRequest {
    pub fn new<N>(route: N) -> Self
    where
        N: Into<SmolStr>,
    {
        Self {
            route: route.into(),
            params: Params::new(),
        }
    }

    pub fn param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<SmolStr>,
        V: Into<SmolStr>,
    {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn from_query<N, I, K, V>(route: N, query: I) -> Self
    where
        N: Into<SmolStr>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<SmolStr>,
        V: Into<SmolStr>,
    {
        Self {
            route: route.into(),
            params: query
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn route_name(&self) -> &str {
        self.route.as_str()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The `page` query parameter; absent or non-numeric values read as
    /// page 1.
    pub fn page(&self) -> i64 {
        self.params
            .get(PAGE_PARAM)
            .and_then(|value| value.parse().ok())
            .unwrap_or(1)
    }

    pub fn to_route(&self) -> Route {
        Route::with_params(self.route.clone(), self.params.clone())
    }
}
