//! An unofficial [zeebe](https://zeebe.io/) client for activating jobs.
//!
//! A `Client` connects to a zeebe gateway and hands out `ActivateJobsCommand`s. A command is
//! configured with chained calls and sent once; it streams job batches from the gateway and
//! returns every activated job in the order it arrived.
//!
//! The gateway is reached through the `ActivateJobsGateway` trait, so the command can be driven
//! by any implementation, not only the tonic client.
//!

mod activate_jobs;
mod activator;
mod client;
mod config;
mod data;
mod error;
#[cfg(test)]
mod gateway_mock;

/// Messages and service stubs generated from `proto/gateway.proto`.
pub mod gateway {
    tonic::include_proto!("gateway_protocol");
}

pub use activate_jobs::*;
pub use activator::{ActivateJobsGateway, Delivery, JobBatchStream};
pub use client::*;
pub use config::*;
pub use data::client_data::*;
pub use error::Error;
