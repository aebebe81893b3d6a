//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweeper: removes expired todo records on a fixed interval

mod sweeper;

pub use sweeper::spawn_sweeper;
