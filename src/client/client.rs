use crate::activator::ActivateJobsGateway;
use crate::client::client_builder::ClientBuilder;
use crate::{ActivateJobsCommand, ClientConfig, Error};
use std::sync::Arc;
use std::time::Duration;
use tonic::codegen::http;

/// The primary type for interacting with zeebe.
#[derive(Clone)]
pub struct Client {
    pub(crate) gateway: Arc<dyn ActivateJobsGateway>,
    pub(crate) request_timeout: Duration,
}

impl Client {
    /// Start building a `Client` that connects to the gateway at `uri`.
    pub fn builder(uri: http::Uri) -> ClientBuilder {
        ClientBuilder::new(uri)
    }

    /// Connect to the gateway described by `config`.
    pub async fn from_config(config: &ClientConfig) -> Result<Client, Error> {
        let mut builder = Client::builder(config.gateway_uri()?);
        builder.request_timeout(config.request_timeout());
        if let Some(path) = &config.ca_certificate_path {
            let pem = tokio::fs::read(path).await?;
            builder.ca_certificate(pem);
        }
        builder.connect().await
    }

    /// Use any gateway implementation, e.g. an in-process one.
    pub fn with_gateway<G>(gateway: G, request_timeout: Duration) -> Self
    where
        G: ActivateJobsGateway + 'static,
    {
        Client {
            gateway: Arc::new(gateway),
            request_timeout,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// A fresh command for activating jobs through this client.
    pub fn new_activate_jobs_command(&self) -> ActivateJobsCommand {
        ActivateJobsCommand::new(self.gateway.clone(), self.request_timeout)
    }
}
