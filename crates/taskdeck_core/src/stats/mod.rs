//! Dashboard statistics derived from task/project snapshots.
//!
//! Every call recomputes from the snapshot it is given; nothing is cached.

pub mod dashboard;
