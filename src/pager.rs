use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    error::{Error, SourceError},
    links::{PageLink, PageLinks},
    request::PageRequest,
    route::{LinkGenerator, Route},
    source::PageSource,
    window::adjacent_window,
};

pub const DEFAULT_PER_PAGE: u64 = 20;

/// The pager contract. Configuration happens before the first result
/// access; results and the total count are computed once and cached for
/// the pager's lifetime. Link derivation is shared across implementations
/// through the default methods.
pub trait Pager {
    type Row;

    // configuration

    fn set_source(&mut self, source: Box<dyn PageSource<Row = Self::Row>>);

    fn set_router(&mut self, router: Arc<dyn LinkGenerator>);

    /// The route name and base parameters pagination links are generated
    /// from.
    fn set_route(&mut self, route: Route);

    fn set_per_page(&mut self, per_page: u64);

    fn set_current_page(&mut self, page: i64);

    /// Inject a precomputed total, bypassing the count query entirely.
    /// Computation never overwrites it.
    fn set_num_results(&mut self, count: u64);

    /// Drop both cached values so the next access recomputes them.
    fn reset(&mut self);

    // accessors

    fn current_page(&self) -> i64;

    fn per_page(&self) -> u64;

    fn results(&mut self) -> Result<&[Self::Row], Error>;

    fn num_results(&mut self) -> Result<u64, Error>;

    fn page_link(&self, page: i64) -> Result<String, Error>;

    // derived

    fn max_pages(&mut self) -> Result<u64, Error> {
        let num_results = self.num_results()?;
        Ok(num_results.div_ceil(self.per_page()))
    }

    fn first_page_link(&self) -> Result<String, Error> {
        self.page_link(1)
    }

    fn previous_page_link(&self) -> Result<Option<String>, Error> {
        let current_page = self.current_page();
        if current_page > 1 {
            return self.page_link(current_page - 1).map(Some);
        }
        Ok(None)
    }

    fn next_page_link(&mut self) -> Result<Option<String>, Error> {
        let current_page = self.current_page();
        if current_page < self.max_pages()? as i64 {
            return self.page_link(current_page + 1).map(Some);
        }
        Ok(None)
    }

    fn last_page_link(&mut self) -> Result<String, Error> {
        let last_page = self.max_pages()? as i64;
        self.page_link(last_page)
    }

    /// True when the page number is at or below 1.
    fn is_first_page(&self) -> bool {
        self.current_page() <= 1
    }

    /// True when the page number is at or past the last page.
    fn is_last_page(&mut self) -> Result<bool, Error> {
        Ok(self.current_page() >= self.max_pages()? as i64)
    }

    /// Up to five page numbers surrounding the current page, all within
    /// the real page range.
    fn adjacent_page_numbers(&mut self) -> Result<Vec<i64>, Error> {
        let max_pages = self.max_pages()? as i64;
        Ok(adjacent_window(self.current_page(), max_pages))
    }

    /// The full navigation bundle. The boundary entries carry their
    /// disabled state in `active`; adjacent entries flag the current page.
    fn page_links(&mut self) -> Result<PageLinks, Error> {
        // settle the count, and any page clamp, before deriving links
        self.num_results()?;

        let first = PageLink::new(self.first_page_link()?, self.is_first_page());
        let previous = PageLink::new(self.previous_page_link()?, self.is_first_page());

        let mut adjacent = IndexMap::new();
        for page in self.adjacent_page_numbers()? {
            let link = PageLink::new(self.page_link(page)?, page == self.current_page());
            adjacent.insert(page, link);
        }

        let next = PageLink::new(self.next_page_link()?, self.is_last_page()?);
        let last = PageLink::new(self.last_page_link()?, self.is_last_page()?);

        Ok(PageLinks {
            first,
            previous,
            adjacent,
            next,
            last,
        })
    }

    /// Configure the current page and the link route from an incoming
    /// request: the `page` query parameter and every other query parameter
    /// as the link template.
    fn bind(&mut self, request: &PageRequest) {
        self.set_current_page(request.page());
        self.set_route(request.to_route());
    }
}

/// The canonical pager, driven by an injected [`PageSource`].
pub struct SourcePager<T> {
    per_page: u64,
    current_page: i64,
    maybe_source: Option<Box<dyn PageSource<Row = T>>>,
    maybe_router: Option<Arc<dyn LinkGenerator>>,
    maybe_route: Option<Route>,
    maybe_results: Option<Vec<T>>,
    maybe_num_results: Option<u64>,
}

impl<T> Default for SourcePager<T> {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            current_page: 1,
            maybe_source: None,
            maybe_router: None,
            maybe_route: None,
            maybe_results: None,
            maybe_num_results: None,
        }
    }
}

impl<T> SourcePager<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source<S>(source: S) -> Self
    where
        S: PageSource<Row = T> + 'static,
    {
        let mut pager = Self::new();
        pager.maybe_source = Some(Box::new(source));
        pager
    }

    /// Run the data and count queries and cache both values. The page is
    /// clamped to 1 for the offset only; the stored page moves down to the
    /// last real page afterward when it points past the end.
    fn compute_results(&mut self) -> Result<(), Error> {
        let per_page = self.per_page;
        let page = self.current_page.max(1) as u64;
        let offset = (page - 1) * per_page;
        let skip_count = self.maybe_num_results.is_some();

        let source = self
            .maybe_source
            .as_mut()
            .ok_or(Error::Misconfigured("data source"))?;

        debug!(offset, limit = per_page, "fetching page window");
        let rows = source.fetch_page(offset, per_page)?;

        let counted = if skip_count {
            None
        } else {
            match source.count() {
                Ok(count) => Some(count),
                Err(SourceError::NoCountRow) => {
                    debug!("count query matched no rows, assuming an empty set");
                    Some(0)
                }
                Err(err) => return Err(err.into()),
            }
        };

        self.maybe_results = Some(rows);
        if let Some(count) = counted {
            self.maybe_num_results = Some(count);
        }

        let count = self
            .maybe_num_results
            .expect("count is either computed or overridden above");
        let max_pages = count.div_ceil(per_page) as i64;
        if max_pages >= 1 && self.current_page > max_pages {
            self.current_page = max_pages;
        }

        Ok(())
    }
}

impl<T> Pager for SourcePager<T> {
    type Row = T;

    fn set_source(&mut self, source: Box<dyn PageSource<Row = T>>) {
        self.maybe_source = Some(source);
    }

    fn set_router(&mut self, router: Arc<dyn LinkGenerator>) {
        self.maybe_router = Some(router);
    }

    fn set_route(&mut self, route: Route) {
        self.maybe_route = Some(route);
    }

    fn set_per_page(&mut self, per_page: u64) {
        // a size below one would corrupt the window math
        self.per_page = per_page.max(1);
    }

    fn set_current_page(&mut self, page: i64) {
        self.current_page = page;
    }

    fn set_num_results(&mut self, count: u64) {
        self.maybe_num_results = Some(count);
    }

    fn reset(&mut self) {
        self.maybe_results = None;
        self.maybe_num_results = None;
    }

    fn current_page(&self) -> i64 {
        self.current_page
    }

    fn per_page(&self) -> u64 {
        self.per_page
    }

    fn results(&mut self) -> Result<&[T], Error> {
        if self.maybe_results.is_none() {
            self.compute_results()?;
        }
        Ok(self
            .maybe_results
            .as_deref()
            .expect("results are computed above"))
    }

    fn num_results(&mut self) -> Result<u64, Error> {
        if let Some(count) = self.maybe_num_results {
            return Ok(count);
        }
        self.compute_results()?;
        Ok(self
            .maybe_num_results
            .expect("count is computed above"))
    }

    fn page_link(&self, page: i64) -> Result<String, Error> {
        let router = self
            .maybe_router
            .as_deref()
            .ok_or(Error::Misconfigured("link generator"))?;
        let route = self
            .maybe_route
            .as_ref()
            .ok_or(Error::Misconfigured("route"))?;
        Ok(route.link(router, page)?)
    }
}
