//! # Transgate I18n
//!
//! Deferred-binding translation facade.
//!
//! Application code calls [`gettext`], [`ngettext`], [`activate`] and friends
//! without knowing which translation engine serves them. The engine is picked
//! per operation on that operation's first call, from the `use_i18n` flag of
//! the process-wide settings: the catalog-backed [`RealBackend`] when it is
//! set, the passthrough [`NullBackend`] otherwise. Configuring the settings
//! after this crate is linked is therefore fine as long as it happens before
//! the first translation call.
//!
//! Lazy variants ([`gettext_lazy`] and friends) defer the lookup until the
//! value is rendered and repeat it on every rendering; [`override_locale`]
//! switches the language for a scope.
//!
//! ```
//! use transgate_i18n::{gettext, ngettext};
//!
//! assert_eq!(gettext("Hello")?, "Hello");
//! assert_eq!(ngettext("apple", "apples", 3)?, "apples");
//! # Ok::<(), transgate_i18n::I18nError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod catalog;
pub mod error;
pub mod facade;
pub mod lang_info;
pub mod lazy;
pub mod locale_override;
pub mod null;
pub mod proxy;
pub mod real;
pub mod registry;
pub mod templatize;

pub use backend::*;
pub use catalog::*;
pub use error::*;
pub use facade::*;
pub use lang_info::*;
pub use lazy::*;
pub use locale_override::*;
pub use null::*;
pub use proxy::*;
pub use real::*;
pub use registry::*;
pub use templatize::blankout;
