//! In-memory query engine.
//!
//! A [`Query`] describes search, filter, order and page; [`Dataset::query`]
//! runs it over a vector of [`Record`]s and returns a [`Page`].
//!
//! ```
//! use console_lib::query::{Dataset, Filter, OrderBy, Query};
//! # use console_lib::MockData;
//! # let data = MockData::load().unwrap();
//! let tenants = Dataset::new(data.tenants);
//! let page = tenants
//!     .query(
//!         &Query::new()
//!             .search("acme")
//!             .filter(Filter::eq("status", "active"))
//!             .order(OrderBy::desc("created_at"))
//!             .page(1, 10),
//!     )
//!     .unwrap();
//! assert_eq!(page.total_count(), 1);
//! ```

mod dataset;
mod filter;
mod order;
mod page;
mod record;
mod value;

pub use dataset::{DEFAULT_PAGE_SIZE, Dataset, Query};
pub use filter::Filter;
pub use order::{Direction, OrderBy};
pub use page::Page;
pub use record::Record;
pub use value::Value;
