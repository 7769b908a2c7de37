use crate::error::SourceError;

/// The data-source contract: a row window and a total count. Implementations
/// must keep the ordering deterministic for the window to stay stable across
/// pages.
pub trait PageSource {
    type Row;

    fn fetch_page(&mut self, offset: u64, limit: u64) -> Result<Vec<Self::Row>, SourceError>;

    fn count(&mut self) -> Result<u64, SourceError>;
}

/// Closure-backed source, for gluing the pager onto any query layer.
#[derive(Debug)]
pub struct FnSource<F, C> {
    fetch: F,
    count: C,
}

impl<F, C> FnSource<F, C> {
    pub fn new(fetch: F, count: C) -> Self {
        Self { fetch, count }
    }
}

impl<T, F, C> PageSource for FnSource<F, C>
where
    F: FnMut(u64, u64) -> Result<Vec<T>, SourceError>,
    C: FnMut() -> Result<u64, SourceError>,
{
    type Row = T;

    fn fetch_page(&mut self, offset: u64, limit: u64) -> Result<Vec<T>, SourceError> {
        (self.fetch)(offset, limit)
    }

    fn count(&mut self) -> Result<u64, SourceError> {
        (self.count)()
    }
}

/// Slice-backed source. Rows keep their insertion order.
#[derive(Debug, Default)]
pub struct MemorySource<T> {
    rows: Vec<T>,
}

impl<T> MemorySource<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

impl<T> PageSource for MemorySource<T>
where
    T: Clone,
{
    type Row = T;

    fn fetch_page(&mut self, offset: u64, limit: u64) -> Result<Vec<T>, SourceError> {
        let start = usize::try_from(offset)
            .unwrap_or(usize::MAX)
            .min(self.rows.len());
        let end = start
            .saturating_add(usize::try_from(limit).unwrap_or(usize::MAX))
            .min(self.rows.len());
        Ok(self.rows[start..end].to_vec())
    }

    fn count(&mut self) -> Result<u64, SourceError> {
        Ok(self.rows.len() as u64)
    }
}
