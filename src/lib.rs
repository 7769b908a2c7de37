mod error;
mod links;
mod pager;
mod registry;
mod request;
mod route;
mod source;
mod window;

pub use error::{BoxError, Error, LinkError, SourceError};
pub use links::{PageLink, PageLinks};
pub use pager::{DEFAULT_PER_PAGE, Pager, SourcePager};
pub use registry::{DEFAULT_KIND, PagerCtor, PagerRegistry};
pub use request::PageRequest;
pub use route::{LinkGenerator, PAGE_PARAM, Params, QueryRouter, Route};
pub use source::{FnSource, MemorySource, PageSource};

pub fn source<F, C>(fetch: F, count: C) -> FnSource<F, C> {
    FnSource::new(fetch, count)
}

pub fn memory<T>(rows: Vec<T>) -> MemorySource<T> {
    MemorySource::new(rows)
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{PageLink, PageLinks, PageRequest};

    #[test]
    fn test_request_round_trip() {
        let request = PageRequest::new("users.index")
            .param("q", "bob")
            .param("page", "3");
        let json = serde_json::to_string(&request).unwrap();
        let back: PageRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(3, back.page());
        assert_eq!("users.index", back.route_name());
        assert_eq!("bob", back.params().get("q").unwrap());
    }

    #[test]
    fn test_links_round_trip() {
        let mut links = PageLinks::default();
        links.first = PageLink::new(String::from("/users?page=1"), true);
        links.next = PageLink::new(String::from("/users?page=2"), false);
        links
            .adjacent
            .insert(1, PageLink::new(String::from("/users?page=1"), true));
        links
            .adjacent
            .insert(2, PageLink::new(String::from("/users?page=2"), false));

        let json = serde_json::to_string(&links).unwrap();
        let back: PageLinks = serde_json::from_str(&json).unwrap();
        assert_eq!(links, back);
    }
}
