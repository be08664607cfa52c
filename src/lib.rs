//! Point-in-time `MySQL`/`MariaDB` operational event collection: the server's
//! process list and a replica's replication status, fetched on a timer and
//! emitted as structured JSON events on stdout.

pub mod agent;
pub mod cli;
pub mod collectors;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
