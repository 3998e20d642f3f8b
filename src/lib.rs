//! Typed `--name=value` flags bound to caller-owned variables.
//!
//! ```
//! use parse_flags as pf;
//!
//! let (mut jobs, mut verbose) = (1u32, false);
//! let mut flags = pf::FlagSet::new()
//!     .message("demo tool")
//!     .required("jobs", &mut jobs, "worker count")
//!     .optional("verbose", &mut verbose, "chatty output");
//! pf::parse(&pf::Env::default(), &mut flags, &["--jobs=4"]).unwrap();
//! drop(flags);
//! assert_eq!((jobs, verbose), (4, false));
//! ```

mod error;
pub use error::*;
mod spec;
pub use spec::*;
pub mod value;
pub use value::{FlagValue, Slot};
mod parse;
pub use parse::*;
mod help;
pub use help::*;

#[cfg(feature = "suggest")]
mod suggest;

#[cfg(feature = "suggest")]
pub use suggest::*;

pub mod util;
