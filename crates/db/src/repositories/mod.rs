//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Every method issues a
//! single parameterized statement.

pub mod cat_repo;
pub mod cat_type_repo;
pub mod master_repo;

pub use cat_repo::CatRepo;
pub use cat_type_repo::CatTypeRepo;
pub use master_repo::MasterRepo;

/// SQL expression for the current UTC time as RFC 3339 with milliseconds.
///
/// Matches the column defaults in the initial migration. `%f` stops at
/// milliseconds, so an update landing in the same millisecond as the
/// previous write leaves `updated_at` unchanged rather than advancing it.
pub(crate) const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";
