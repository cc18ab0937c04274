//! Type aliases for commonly used complex types.
//!
//! The engine is single-threaded and event-driven, so everything here is
//! built on `Rc<RefCell<T>>` and non-`Send` boxed closures.
//!
//! ## Usage
//!
//! ```rust
//! use annokit_core::types::{shared, Shared};
//!
//! let log: Shared<Vec<usize>> = shared(Vec::new());
//! let sink = log.clone();
//! sink.borrow_mut().push(3);
//! assert_eq!(log.borrow().as_slice(), &[3]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Hosts typically hold one of these to collect what a change callback
/// reports while the engine keeps ownership of the callback itself.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a [`Shared`] cell.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// A change listener receiving the full, ordered item list.
///
/// Invoked synchronously on the thread that dispatched the mutation.
pub type ShapesCallback<T> = Box<dyn FnMut(&[T])>;
