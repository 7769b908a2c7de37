use indexmap::IndexMap;

/// One navigation entry. `active` mirrors the disabled state of a nav
/// button for the boundary links, and current-page identity for the
/// adjacent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLink {
    pub href: Option<String>,
    pub active: bool,
}

impl PageLink {
    pub fn new<H>(href: H, active: bool) -> Self
    where
        H: Into<Option<String>>,
    {
        Self {
            href: href.into(),
            active,
        }
    }
}

/// The full navigation bundle for one page of results, adjacent entries in
/// ascending page order. `previous` and `next` carry no href on their
/// respective boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLinks {
    pub first: PageLink,
    pub previous: PageLink,
    pub adjacent: IndexMap<i64, PageLink>,
    pub next: PageLink,
    pub last: PageLink,
}
