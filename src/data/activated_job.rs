use crate::gateway;
use crate::Error;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

/// Headers tying an activated job to the workflow instance and task that created it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobHeaders {
    /// the unique key identifying the associated task, unique within the scope of the
    /// workflow instance
    pub element_instance_key: i64,
    /// the key of the job workflow definition
    pub workflow_key: i64,
    /// the bpmn process ID of the job workflow definition
    pub bpmn_process_id: String,
    /// the job's workflow instance key
    pub workflow_instance_key: i64,
    /// the associated task element ID
    pub element_id: String,
    /// the version of the job workflow definition
    pub workflow_definition_version: i32,
}

impl From<gateway::JobHeaders> for JobHeaders {
    fn from(jh: gateway::JobHeaders) -> Self {
        JobHeaders {
            element_instance_key: jh.element_instance_key,
            workflow_key: jh.workflow_key,
            bpmn_process_id: jh.bpmn_process_id,
            workflow_instance_key: jh.workflow_instance_key,
            element_id: jh.element_id,
            workflow_definition_version: jh.workflow_definition_version,
        }
    }
}

/// Describes an activated zeebe job. Use this to do work and respond with completion or failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivatedJob {
    /// the key, a unique identifier for the job
    pub key: i64,
    /// the type of the job (should match what was requested)
    pub job_type: String,
    /// the amount of retries left to this job (should always be positive)
    pub retries: i32,
    /// when the job can be activated again, sent as a UNIX epoch timestamp in milliseconds
    pub deadline: i64,
    /// the name of the worker which activated this job
    pub worker: String,
    pub job_headers: JobHeaders,
    /// a set of custom headers defined during modelling; returned as a serialized JSON document
    pub custom_headers: String,
    /// JSON document, computed at activation time, consisting of all visible variables to the task scope
    pub payload: String,
}

impl ActivatedJob {
    /// The deadline as a point in time, or `None` if the gateway sent a value out of range.
    pub fn deadline_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.deadline)
    }

    /// Deserialize the payload document. An empty payload reads as JSON `null`.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, Error> {
        from_json_document(&self.payload)
    }

    /// Deserialize the custom headers document. Empty headers read as JSON `null`.
    pub fn custom_headers_as<T: DeserializeOwned>(&self) -> Result<T, Error> {
        from_json_document(&self.custom_headers)
    }
}

fn from_json_document<T: DeserializeOwned>(document: &str) -> Result<T, Error> {
    let document = if document.trim().is_empty() {
        "null"
    } else {
        document
    };
    Ok(serde_json::from_str(document)?)
}

impl From<gateway::ActivatedJob> for ActivatedJob {
    fn from(aj: gateway::ActivatedJob) -> Self {
        ActivatedJob {
            key: aj.key,
            job_type: aj.r#type,
            retries: aj.retries,
            deadline: aj.deadline,
            worker: aj.worker,
            job_headers: aj.job_headers.map(From::from).unwrap_or_default(),
            custom_headers: aj.custom_headers,
            payload: aj.payload,
        }
    }
}
