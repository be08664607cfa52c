//! Replication status collection (`SHOW SLAVE STATUS`).

mod replica_status;

pub use replica_status::ReplicaStatusCollector;
