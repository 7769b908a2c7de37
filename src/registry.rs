use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::{
    error::Error,
    pager::{Pager, SourcePager},
    route::LinkGenerator,
};

pub type PagerCtor<T> = Box<dyn Fn() -> Box<dyn Pager<Row = T>>>;

pub const DEFAULT_KIND: &str = "source";

/// Startup-time table of pager constructors, keyed by a kind tag. Every
/// created pager gets the shared link generator injected.
pub struct PagerRegistry<T> {
    router: Arc<dyn LinkGenerator>,
    ctors: IndexMap<SmolStr, PagerCtor<T>>,
}

impl<T: 'static> PagerRegistry<T> {
    pub fn new(router: Arc<dyn LinkGenerator>) -> Self {
        let mut registry = Self {
            router,
            ctors: IndexMap::new(),
        };
        registry.register(DEFAULT_KIND, || Box::new(SourcePager::new()));
        registry
    }

    pub fn register<N, F, P>(&mut self, kind: N, ctor: F) -> &mut Self
    where
        N: Into<SmolStr>,
        F: Fn() -> Box<P> + 'static,
        P: Pager<Row = T> + 'static,
    {
        let ctor = move || -> Box<dyn Pager<Row = T>> { ctor() };
        self.ctors.insert(kind.into(), Box::new(ctor));
        self
    }

    /// Build a pager of the canonical kind.
    pub fn create(&self) -> Box<dyn Pager<Row = T>> {
        self.create_kind(DEFAULT_KIND)
            .expect("the canonical kind is registered in new")
    }

    /// Build a pager of a named kind; unknown kinds fail fast.
    pub fn create_kind(&self, kind: &str) -> Result<Box<dyn Pager<Row = T>>, Error> {
        let ctor = self
            .ctors
            .get(kind)
            .ok_or_else(|| Error::UnknownKind(SmolStr::new(kind)))?;
        let mut pager = ctor();
        pager.set_router(self.router.clone());
        Ok(pager)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        pager::DEFAULT_PER_PAGE,
        route::{QueryRouter, Route},
        source::MemorySource,
    };

    use super::*;

    fn users_router() -> Arc<QueryRouter> {
        Arc::new(QueryRouter::new().route("users.index", "/users"))
    }

    #[test]
    fn test_create_default_kind() {
        let registry = PagerRegistry::<i32>::new(users_router());
        let mut pager = registry.create();
        assert_eq!(DEFAULT_PER_PAGE, pager.per_page());

        // the router is injected, only the route is left to configure
        pager.set_route(Route::new("users.index"));
        assert_eq!("/users?page=1", pager.page_link(1).unwrap());
    }

    #[test]
    fn test_create_custom_kind() {
        let mut registry = PagerRegistry::<i32>::new(users_router());
        registry.register("compact", || {
            let mut pager = SourcePager::with_source(MemorySource::new(vec![1, 2, 3]));
            pager.set_per_page(2);
            Box::new(pager)
        });

        let mut pager = registry.create_kind("compact").unwrap();
        assert_eq!(2, pager.per_page());
        assert_eq!(3, pager.num_results().unwrap());
        assert_eq!(2, pager.max_pages().unwrap());
    }

    #[test]
    fn test_register_replaces_kind() {
        let mut registry = PagerRegistry::<i32>::new(users_router());
        registry.register(DEFAULT_KIND, || {
            let mut pager = SourcePager::new();
            pager.set_per_page(50);
            Box::new(pager)
        });
        assert_eq!(50, registry.create().per_page());
    }

    #[test]
    fn test_unknown_kind_fails() {
        let registry = PagerRegistry::<i32>::new(users_router());
        let err = match registry.create_kind("cursor") {
            Ok(_) => panic!("expected create_kind to fail for unknown kind"),
            Err(err) => err,
        };
        assert!(matches!(err, Error::UnknownKind(kind) if kind == "cursor"));
    }
}
