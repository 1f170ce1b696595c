use crate::activator::{ActivateJobsGateway, Delivery};
use crate::{gateway, ActivateJobs, ActivatedJob, Error};
use std::sync::Arc;
use std::time::Duration;

/// The number of jobs requested when `amount` is never set.
pub const DEFAULT_JOB_AMOUNT: i32 = 32;
/// How long activated jobs stay locked to this worker when `timeout` is never set.
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(5 * 60);
/// `DEFAULT_JOB_TIMEOUT` as it is sent on the wire.
pub const DEFAULT_JOB_TIMEOUT_IN_MS: i64 = 5 * 60 * 1000;
/// The worker name sent when `worker_name` is never set.
pub const DEFAULT_JOB_WORKER_NAME: &str = "default";
/// The call timeout used by clients that are not configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// `grpc-timeout` carries at most eight digits; longer call timeouts are only enforced locally.
const MAX_GRPC_TIMEOUT: Duration = Duration::from_secs(99_999_999 * 60 * 60);

/// Activates jobs of a single type and collects every job the gateway streams back.
///
/// Configure the command with chained calls, then consume it with `send`. Any setting that is
/// not configured falls back to the `DEFAULT_*` constants of this module. A command is sent at
/// most once; create a fresh one for the next activation.
///
/// ```no_run
/// # async fn run(client: zeebest_jobs::Client) -> Result<(), zeebest_jobs::Error> {
/// let jobs = client
///     .new_activate_jobs_command()
///     .job_type("payment-service")
///     .amount(5)
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ActivateJobsCommand {
    gateway: Arc<dyn ActivateJobsGateway>,
    request_timeout: Duration,
    job_type: Option<String>,
    amount: Option<i32>,
    timeout: Option<Duration>,
    worker_name: Option<String>,
}

impl ActivateJobsCommand {
    pub fn new(gateway: Arc<dyn ActivateJobsGateway>, request_timeout: Duration) -> Self {
        ActivateJobsCommand {
            gateway,
            request_timeout,
            job_type: None,
            amount: None,
            timeout: None,
            worker_name: None,
        }
    }

    /// The job type to activate. Required.
    pub fn job_type<S: Into<String>>(mut self, job_type: S) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    /// The maximum number of jobs to activate.
    pub fn amount(mut self, amount: i32) -> Self {
        self.amount = Some(amount);
        self
    }

    /// How long the activated jobs are locked to this worker. Sent in whole milliseconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn worker_name<S: Into<String>>(mut self, worker_name: S) -> Self {
        self.worker_name = Some(worker_name.into());
        self
    }

    /// The request this command would send, with defaults applied to every unset field.
    pub fn build_request(&self) -> Result<ActivateJobs, Error> {
        let request = ActivateJobs::new(
            self.job_type.clone().unwrap_or_default(),
            self.worker_name
                .clone()
                .unwrap_or_else(|| DEFAULT_JOB_WORKER_NAME.to_string()),
            self.timeout.unwrap_or(DEFAULT_JOB_TIMEOUT),
            self.amount.unwrap_or(DEFAULT_JOB_AMOUNT),
        );
        request.validate()?;
        Ok(request)
    }

    /// Send the activation request and wait for the gateway to close the stream.
    ///
    /// Returns every activated job, in the order the gateway sent them. If opening the stream
    /// or any receive fails, or the whole exchange outlasts the request timeout, the error is
    /// returned and jobs received so far are dropped.
    pub async fn send(self) -> Result<Vec<ActivatedJob>, Error> {
        let activate_jobs = self.build_request()?;
        let request_timeout = self.request_timeout;
        tracing::debug!(
            job_type = %activate_jobs.job_type,
            worker = %activate_jobs.worker,
            amount = activate_jobs.amount,
            timeout_ms = activate_jobs.timeout,
            "activating jobs"
        );

        let mut request = tonic::Request::new(gateway::ActivateJobsRequest::from(activate_jobs));
        request.set_timeout(request_timeout.min(MAX_GRPC_TIMEOUT));

        let jobs = tokio::time::timeout(
            request_timeout,
            receive_jobs(self.gateway.as_ref(), request),
        )
        .await
        .map_err(|_| Error::RequestTimeout(request_timeout))??;

        tracing::debug!(jobs = jobs.len(), "activated jobs");
        Ok(jobs)
    }
}

async fn receive_jobs(
    gateway: &dyn ActivateJobsGateway,
    request: tonic::Request<gateway::ActivateJobsRequest>,
) -> Result<Vec<ActivatedJob>, Error> {
    let mut stream = gateway
        .activate_jobs(request)
        .await
        .map_err(Error::ActivateJobsError)?;
    let mut jobs = Vec::new();
    loop {
        match stream.recv().await.map_err(Error::ReceiveJobsError)? {
            Delivery::Batch(batch) => {
                tracing::trace!(batch_size = batch.jobs.len(), "received job batch");
                jobs.extend(batch.jobs.into_iter().map(ActivatedJob::from));
            }
            Delivery::EndOfStream => return Ok(jobs),
        }
    }
}
