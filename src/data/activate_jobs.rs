use crate::{gateway, Error};
use std::time::Duration;

/// A job activation request with every field resolved.
///
/// `validate` checks what the gateway would otherwise reject, so a request that fails it is
/// never transmitted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActivateJobs {
    pub job_type: String,
    pub worker: String,
    /// lock duration of the activated jobs, in milliseconds
    pub timeout: i64,
    pub amount: i32,
}

impl ActivateJobs {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        job_type: S1,
        worker: S2,
        timeout: Duration,
        amount: i32,
    ) -> Self {
        ActivateJobs {
            job_type: job_type.into(),
            worker: worker.into(),
            timeout: duration_to_millis(timeout),
            amount,
        }
    }

    /// The job lock duration. Sub-millisecond precision is not carried.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.timeout).unwrap_or(0))
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.job_type.is_empty() {
            return Err(Error::InvalidJobType);
        }
        if self.amount <= 0 {
            return Err(Error::InvalidAmount(self.amount));
        }
        if self.worker.is_empty() {
            return Err(Error::InvalidWorkerName);
        }
        Ok(())
    }
}

impl From<ActivateJobs> for gateway::ActivateJobsRequest {
    fn from(activate_jobs: ActivateJobs) -> Self {
        gateway::ActivateJobsRequest {
            r#type: activate_jobs.job_type,
            worker: activate_jobs.worker,
            timeout: activate_jobs.timeout,
            amount: activate_jobs.amount,
        }
    }
}

/// Whole milliseconds, truncated. Saturates at `i64::MAX`.
pub(crate) fn duration_to_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timeout_is_sent_in_whole_milliseconds() {
        let request = ActivateJobs::new("foo", "bar", Duration::from_micros(2_500_999), 5);
        assert_eq!(request.timeout, 2500);
        assert_eq!(request.timeout(), Duration::from_millis(2500));

        let wire = gateway::ActivateJobsRequest::from(request);
        assert_eq!(wire.timeout, 2500);
        assert_eq!(wire.r#type, "foo");
        assert_eq!(wire.worker, "bar");
        assert_eq!(wire.amount, 5);
    }

    #[test]
    fn oversized_timeout_saturates() {
        assert_eq!(duration_to_millis(Duration::MAX), i64::MAX);
        assert_eq!(duration_to_millis(Duration::from_micros(1999)), 1);
        assert_eq!(duration_to_millis(Duration::ZERO), 0);
    }

    #[test]
    fn validate_checks_each_field() {
        let valid = ActivateJobs::new("foo", "bar", Duration::from_secs(1), 1);
        assert!(valid.validate().is_ok());

        let no_type = ActivateJobs {
            job_type: String::new(),
            ..valid.clone()
        };
        assert!(matches!(no_type.validate(), Err(Error::InvalidJobType)));

        let no_amount = ActivateJobs {
            amount: 0,
            ..valid.clone()
        };
        assert!(matches!(no_amount.validate(), Err(Error::InvalidAmount(0))));

        let no_worker = ActivateJobs {
            worker: String::new(),
            ..valid
        };
        assert!(matches!(no_worker.validate(), Err(Error::InvalidWorkerName)));
    }

    #[test]
    fn zero_timeout_is_allowed() {
        let request = ActivateJobs::new("foo", "bar", Duration::ZERO, 1);
        assert!(request.validate().is_ok());
        assert_eq!(request.timeout, 0);
    }
}
