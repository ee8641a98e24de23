//! Fluent builder utilities.
//!
//! [`Fluent`] is implemented for every sized type and lets a caller run a
//! side-effecting action on a value inside a call chain, optionally gated by
//! a condition. The receiver is moved in and handed back, so the value that
//! comes out is the value that went in.
//!
//! [`FluentOption`] adds presence-aware callbacks and lazy defaults for
//! `Option<T>`.
//!
//! ```
//! use fluent_ext::fluent::{Fluent, FluentOption};
//!
//! let verbose = true;
//! let args = Vec::new()
//!     .apply(|a: &mut Vec<&str>| a.push("build"))
//!     .apply_if(verbose, |a| a.push("--verbose"))
//!     .apply_if_by(|a| a.len() > 5, |a| a.clear());
//! assert_eq!(args, ["build", "--verbose"]);
//!
//! let name: Option<String> = None;
//! assert_eq!(name.with_default(|| "anonymous".into()), "anonymous");
//! ```

use crate::error::{ExtError, ExtResult};

/// Chainable actions on any value.
pub trait Fluent: Sized {
    /// Runs `action` on the value and returns it.
    ///
    /// # Examples
    /// ```
    /// use fluent_ext::fluent::Fluent;
    /// let v = vec![1].apply(|v| v.push(2));
    /// assert_eq!(v, [1, 2]);
    /// ```
    fn apply<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        action(&mut self);
        self
    }

    /// Runs `action` if one was supplied; an absent action is a no-op.
    ///
    /// # Examples
    /// ```
    /// use fluent_ext::fluent::Fluent;
    /// let none: Option<fn(&mut u32)> = None;
    /// assert_eq!(5u32.apply_opt(none), 5);
    /// assert_eq!(5u32.apply_opt(Some(|n: &mut u32| *n += 1)), 6);
    /// ```
    fn apply_opt<F>(self, action: Option<F>) -> Self
    where
        F: FnOnce(&mut Self),
    {
        match action {
            Some(action) => self.apply(action),
            None => self,
        }
    }

    /// Runs `action` only when `condition` is true.
    fn apply_if<F>(self, condition: bool, action: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        if condition {
            self.apply(action)
        } else {
            self
        }
    }

    /// Runs `action` only when `condition()` returns true.
    ///
    /// The condition is evaluated exactly once, when this method is called.
    fn apply_if_with<C, F>(self, condition: C, action: F) -> Self
    where
        C: FnOnce() -> bool,
        F: FnOnce(&mut Self),
    {
        let fire = condition();
        self.apply_if(fire, action)
    }

    /// Runs `action` only when `condition` holds for the value itself.
    ///
    /// # Examples
    /// ```
    /// use fluent_ext::fluent::Fluent;
    /// let s = String::from("id").apply_if_by(|s| s.len() < 3, |s| s.insert(0, '#'));
    /// assert_eq!(s, "#id");
    /// ```
    fn apply_if_by<C, F>(self, condition: C, action: F) -> Self
    where
        C: FnOnce(&Self) -> bool,
        F: FnOnce(&mut Self),
    {
        let fire = condition(&self);
        self.apply_if(fire, action)
    }

    /// [`Fluent::apply_if`] for an action that may be absent.
    fn apply_if_opt<F>(self, condition: bool, action: Option<F>) -> Self
    where
        F: FnOnce(&mut Self),
    {
        if condition {
            self.apply_opt(action)
        } else {
            self
        }
    }

    /// [`Fluent::apply_if_with`] for an action that may be absent.
    ///
    /// The condition is still evaluated exactly once.
    fn apply_if_with_opt<C, F>(self, condition: C, action: Option<F>) -> Self
    where
        C: FnOnce() -> bool,
        F: FnOnce(&mut Self),
    {
        let fire = condition();
        self.apply_if_opt(fire, action)
    }

    /// [`Fluent::apply_if_by`] for an action that may be absent.
    ///
    /// # Examples
    /// ```
    /// use fluent_ext::fluent::Fluent;
    /// let none: Option<fn(&mut Vec<u8>)> = None;
    /// assert_eq!(vec![1u8].apply_if_by_opt(|v| v.len() == 1, none), [1]);
    /// ```
    fn apply_if_by_opt<C, F>(self, condition: C, action: Option<F>) -> Self
    where
        C: FnOnce(&Self) -> bool,
        F: FnOnce(&mut Self),
    {
        let fire = condition(&self);
        self.apply_if_opt(fire, action)
    }
}

impl<T> Fluent for T {}

/// Presence-aware callbacks and defaults for values that may be absent.
pub trait FluentOption<T>: Sized {
    /// Runs `action` if and only if the value is absent.
    fn on_absent<F>(self, action: F) -> Self
    where
        F: FnOnce();

    /// Runs `action` on the inner value if and only if it is present.
    fn on_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&mut T);

    /// [`FluentOption::on_absent`] for an action that may itself be absent.
    fn on_absent_opt<F>(self, action: Option<F>) -> Self
    where
        F: FnOnce();

    /// [`FluentOption::on_present`] for an action that may itself be absent.
    fn on_present_opt<F>(self, action: Option<F>) -> Self
    where
        F: FnOnce(&mut T);

    /// Returns the inner value, or the result of `default_factory` when absent.
    ///
    /// The factory is never called for a present value.
    fn with_default<F>(self, default_factory: F) -> T
    where
        F: FnOnce() -> T;

    /// Checked form of [`FluentOption::with_default`] for a factory that may
    /// itself be absent.
    ///
    /// # Errors
    ///
    /// [`ExtError::InvalidArgument`] when both the value and the factory are
    /// absent. A present value never needs the factory.
    ///
    /// # Examples
    /// ```
    /// use fluent_ext::fluent::FluentOption;
    /// let no_factory: Option<fn() -> u8> = None;
    /// assert_eq!(Some(3u8).try_with_default(no_factory).unwrap(), 3);
    /// assert!(None::<u8>.try_with_default(no_factory).is_err());
    /// ```
    fn try_with_default<F>(self, default_factory: Option<F>) -> ExtResult<T>
    where
        F: FnOnce() -> T;
}

impl<T> FluentOption<T> for Option<T> {
    fn on_absent<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    fn on_present<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut T),
    {
        if let Some(value) = self.as_mut() {
            action(value);
        }
        self
    }

    fn on_absent_opt<F>(self, action: Option<F>) -> Self
    where
        F: FnOnce(),
    {
        match action {
            Some(action) => self.on_absent(action),
            None => self,
        }
    }

    fn on_present_opt<F>(self, action: Option<F>) -> Self
    where
        F: FnOnce(&mut T),
    {
        match action {
            Some(action) => self.on_present(action),
            None => self,
        }
    }

    fn with_default<F>(self, default_factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Some(value) => value,
            None => default_factory(),
        }
    }

    fn try_with_default<F>(self, default_factory: Option<F>) -> ExtResult<T>
    where
        F: FnOnce() -> T,
    {
        match (self, default_factory) {
            (Some(value), _) => Ok(value),
            (None, Some(factory)) => Ok(factory()),
            (None, None) => Err(ExtError::missing("default_factory")),
        }
    }
}
