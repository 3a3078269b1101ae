//! Catalog source adapters
//!
//! Implementations of the application layer's
//! [`CatalogSource`](compass_application::CatalogSource) port:
//!
//! - [`BuiltinCatalog`](builtin::BuiltinCatalog) — the compiled-in candidate
//!   pool, used when no catalog file is configured.
//! - [`FileCatalog`](file::FileCatalog) — loads a TOML catalog file and
//!   validates its topic map at load time.

pub mod builtin;
pub mod file;

pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;
