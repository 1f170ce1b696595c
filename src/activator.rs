use crate::gateway;
use crate::gateway::gateway_client::GatewayClient;
use futures::{Future, FutureExt};
use std::pin::Pin;
use tonic::transport::Channel;

/// The outcome of a single successful receive on an activation stream.
#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    /// One message from the gateway; may hold zero jobs.
    Batch(gateway::ActivateJobsResponse),
    /// The gateway will send no more batches.
    EndOfStream,
}

/// A server-streamed sequence of job batches, received one at a time.
pub trait JobBatchStream: Send {
    fn recv(
        &mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Delivery, tonic::Status>> + Send + '_>>;
}

/// Something that can open a job activation stream. The production implementation is the
/// tonic `GatewayClient`; tests substitute their own.
pub trait ActivateJobsGateway: Send + Sync {
    fn activate_jobs(
        &self,
        request: tonic::Request<gateway::ActivateJobsRequest>,
    ) -> Pin<Box<dyn Future<Output = Result<Box<dyn JobBatchStream>, tonic::Status>> + Send + '_>>;
}

impl JobBatchStream for tonic::codec::Streaming<gateway::ActivateJobsResponse> {
    fn recv(
        &mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Delivery, tonic::Status>> + Send + '_>> {
        async move {
            match self.message().await? {
                Some(batch) => Ok(Delivery::Batch(batch)),
                None => Ok(Delivery::EndOfStream),
            }
        }
        .boxed()
    }
}

impl ActivateJobsGateway for GatewayClient<Channel> {
    fn activate_jobs(
        &self,
        request: tonic::Request<gateway::ActivateJobsRequest>,
    ) -> Pin<Box<dyn Future<Output = Result<Box<dyn JobBatchStream>, tonic::Status>> + Send + '_>>
    {
        // the generated client needs `&mut self`; clones share the underlying channel
        let mut client = self.clone();
        async move {
            let stream = GatewayClient::activate_jobs(&mut client, request)
                .await?
                .into_inner();
            Ok(Box::new(stream) as Box<dyn JobBatchStream>)
        }
        .boxed()
    }
}
