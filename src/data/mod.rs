pub mod activate_jobs;
pub mod activated_job;

pub mod client_data {
    pub use super::activate_jobs::*;
    pub use super::activated_job::*;
}
