//! Where series come from.
//!
//! Reading tables (CSV files, …) is left to the application; it hands
//! its loader to the code that needs data as a [`SeriesSource`] and
//! decides whether to cache what it loads with [`Memoized`].

use once_cell::sync::OnceCell;
use log::debug;
use crate::Entry;

/// Trait for loaders of labelled values.
pub trait SeriesSource {
    type Error;

    /// Load all entries, in the order of the underlying table.  Loading
    /// twice must give the same entries.
    fn load(&self) -> Result<Vec<Entry>, Self::Error>;
}

/// Entries known at compile time or built by hand.
#[derive(Clone, Debug, Default)]
pub struct Embedded(pub Vec<Entry>);

impl SeriesSource for Embedded {
    type Error = std::convert::Infallible;

    fn load(&self) -> Result<Vec<Entry>, Self::Error> { Ok(self.0.clone()) }
}

/// Loads from the inner source once; later loads return the entries
/// of the first successful one.  Failures are not cached.
pub struct Memoized<S> {
    source: S,
    entries: OnceCell<Vec<Entry>>,
}

impl<S: SeriesSource> Memoized<S> {
    pub fn new(source: S) -> Self {
        Memoized { source, entries: OnceCell::new() }
    }

    /// The memoized entries, loading them if needed.
    pub fn entries(&self) -> Result<&[Entry], S::Error> {
        self.entries.get_or_try_init(|| {
            debug!("loading series");
            self.source.load()
        }).map(Vec::as_slice)
    }

    /// Whether a load already succeeded.
    pub fn is_loaded(&self) -> bool { self.entries.get().is_some() }

    pub fn into_inner(self) -> S { self.source }
}

impl<S: SeriesSource> SeriesSource for Memoized<S> {
    type Error = S::Error;

    fn load(&self) -> Result<Vec<Entry>, Self::Error> {
        self.entries().map(<[Entry]>::to_vec)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Fails on the first call, then counts the loads.
    struct Flaky { calls: Cell<u32> }

    impl SeriesSource for Flaky {
        type Error = String;

        fn load(&self) -> Result<Vec<Entry>, String> {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            if n == 1 { Err("not yet".into()) }
            else { Ok(vec![Entry::new("Hongdae", n as f64)]) }
        }
    }

    #[test]
    fn embedded() {
        let e = Embedded(vec![Entry::new("Insadong", 1.)]);
        assert_eq!(e.load().unwrap(), e.load().unwrap());
    }

    #[test]
    fn memoized_loads_once() {
        let m = Memoized::new(Flaky { calls: Cell::new(0) });
        assert_eq!(m.entries(), Err("not yet".to_string()));
        assert!(!m.is_loaded());
        assert_eq!(m.entries().unwrap(), [Entry::new("Hongdae", 2.)]);
        assert_eq!(m.load().unwrap(), [Entry::new("Hongdae", 2.)]);
        assert!(m.is_loaded());
        assert_eq!(m.into_inner().calls.get(), 2);
    }
}
