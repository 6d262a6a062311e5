//! # Variadic handler arguments.
//!
//! A dispatch carries an ordered list of opaque values. [`Args`] stores them
//! behind one `Arc<[Arg]>`, so handing the same arguments to N concurrently
//! scheduled handlers costs N reference-count bumps and no copies.
//!
//! ## Example
//! ```rust
//! use gode::{args, Args};
//!
//! let a: Args = args![1_i32, "two", 3.0_f64];
//! assert_eq!(a.len(), 3);
//! assert_eq!(a.get::<i32>(0), Some(&1));
//! assert_eq!(a.get::<&str>(1), Some(&"two"));
//! assert_eq!(a.get::<i32>(2), None); // wrong type
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A single opaque argument.
pub type Arg = Arc<dyn Any + Send + Sync>;

/// Ordered, cheaply clonable argument list passed to every handler of a dispatch.
#[derive(Clone)]
pub struct Args(Arc<[Arg]>);

impl Args {
    /// Wraps already type-erased values.
    pub fn new(values: Vec<Arg>) -> Self {
        Self(values.into())
    }

    /// An empty argument list.
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the argument at `index` if it exists and has type `T`.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.0.get(index).and_then(|v| v.downcast_ref::<T>())
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args").field("len", &self.len()).finish()
    }
}

impl From<Vec<Arg>> for Args {
    fn from(values: Vec<Arg>) -> Self {
        Self::new(values)
    }
}

/// Packs values into [`Args`]. Each value must be `Send + Sync + 'static`.
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::new(vec![
            $(::std::sync::Arc::new($value) as $crate::Arg),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args() {
        let a = args![];
        assert!(a.is_empty());
        assert_eq!(a.get::<i32>(0), None);
        assert_eq!(format!("{a:?}"), "Args { len: 0 }");
    }

    #[test]
    fn test_typed_access() {
        let a = args![String::from("data"), 42_u64];
        assert_eq!(a.get::<String>(0).map(String::as_str), Some("data"));
        assert_eq!(a.get::<u64>(1), Some(&42));
        assert_eq!(a.get::<u32>(1), None);
        assert_eq!(a.get::<String>(2), None);
    }

    #[test]
    fn test_clone_shares_storage() {
        let a = args![1_i32];
        let b = a.clone();
        let pa = a.get::<i32>(0).expect("arg");
        let pb = b.get::<i32>(0).expect("arg");
        assert!(std::ptr::eq(pa, pb));
    }
}
