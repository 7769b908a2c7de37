use indexmap::IndexMap;
use smol_str::{SmolStr, format_smolstr};

use crate::error::LinkError;

/// Query parameters in insertion order.
pub type Params = IndexMap<SmolStr, SmolStr>;

pub const PAGE_PARAM: &str = "page";

/// A route name plus the base parameters every generated link carries.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    name: SmolStr,
    params: Params,
}

impl Route {
    pub fn new<N>(name: N) -> Self
    where
        N: Into<SmolStr>,
    {
        Self {
            name: name.into(),
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

    pub fn with_params<N, I, K, V>(name: N, params: I) -> Self
    where
        N: Into<SmolStr>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<SmolStr>,
        V: Into<SmolStr>,
    {
        Self {
            name: name.into(),
            params: params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Generate the href for one page, the page number merged over any
    /// inbound `page` parameter.
    pub(crate) fn link(
        &self,
        router: &dyn LinkGenerator,
        page: i64,
    ) -> Result<String, LinkError> {
        let mut params = self.params.clone();
        params.insert(SmolStr::new_static(PAGE_PARAM), format_smolstr!("{page}"));
        router.generate(self.name.as_str(), &params)
    }
}

pub trait LinkGenerator {
    fn generate(&self, route: &str, params: &Params) -> Result<String, LinkError>;
}

/// Route-table link generator: maps a route name to a path and appends the
/// parameters as a query string.
#[derive(Debug, Default)]
pub struct QueryRouter {
    routes: IndexMap<SmolStr, SmolStr>,
}

impl QueryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<N, P>(mut self, name: N, path: P) -> Self
    where
        N: Into<SmolStr>,
        P: Into<SmolStr>,
    {
        self.routes.insert(name.into(), path.into());
        self
    }
}

impl LinkGenerator for QueryRouter {
    fn generate(&self, route: &str, params: &Params) -> Result<String, LinkError> {
        let path = self
            .routes
            .get(route)
            .ok_or_else(|| LinkError::UnknownRoute(SmolStr::new(route)))?;

        let size_hint = path.len() + params.len() * 16;
        let mut href = String::with_capacity(size_hint);
        href.push_str(path);
        for (index, (key, value)) in params.iter().enumerate() {
            href.push(if index == 0 { '?' } else { '&' });
            href.push_str(key);
            href.push('=');
            href.push_str(value);
        }
        Ok(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_plain_path() {
        let router = QueryRouter::new().route("users.index", "/users");
        let href = router.generate("users.index", &Params::new()).unwrap();
        assert_eq!("/users", href);
    }

    #[test]
    fn test_generate_query_string_order() {
        let router = QueryRouter::new().route("users.index", "/users");
        let route = Route::new("users.index")
            .param("sort", "name")
            .param("dir", "desc");
        let href = route.link(&router, 3).unwrap();
        assert_eq!("/users?sort=name&dir=desc&page=3", href);
    }

    #[test]
    fn test_page_param_overwrites_inbound() {
        let router = QueryRouter::new().route("users.index", "/users");
        let route = Route::new("users.index").param("page", "9");
        let href = route.link(&router, 2).unwrap();
        assert_eq!("/users?page=2", href);
    }

    #[test]
    fn test_unknown_route() {
        let router = QueryRouter::new();
        let err = router.generate("missing", &Params::new()).unwrap_err();
        assert!(matches!(err, LinkError::UnknownRoute(name) if name == "missing"));
    }

    #[test]
    fn test_with_params_collects() {
        let route = Route::with_params("users.index", [("q", "bob")]);
        assert_eq!("users.index", route.name());
        assert_eq!("bob", route.params().get("q").unwrap());
    }
}
