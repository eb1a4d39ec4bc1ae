//! Domain logic: the ledger of records and the pure functions that
//! derive a period's dashboard from it.

pub mod ledger;
pub mod period_filter;
pub mod summary;
