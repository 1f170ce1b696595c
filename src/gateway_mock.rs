use crate::activator::{ActivateJobsGateway, Delivery, JobBatchStream};
use crate::gateway;
use futures::{Future, FutureExt};
use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A gateway that records every activation request and replays scripted deliveries, in order.
#[derive(Clone, Default)]
pub struct MockGateway {
    setup_error: Option<tonic::Status>,
    deliveries: Arc<Mutex<VecDeque<Result<Delivery, tonic::Status>>>>,
    stall_when_drained: bool,
    requests: Arc<Mutex<Vec<gateway::ActivateJobsRequest>>>,
    deadlines: Arc<Mutex<Vec<Option<String>>>>,
    receives: Arc<AtomicUsize>,
}

impl MockGateway {
    pub fn with_deliveries(deliveries: Vec<Result<Delivery, tonic::Status>>) -> Self {
        MockGateway {
            deliveries: Arc::new(Mutex::new(deliveries.into())),
            ..Default::default()
        }
    }

    pub fn failing(status: tonic::Status) -> Self {
        MockGateway {
            setup_error: Some(status),
            ..Default::default()
        }
    }

    /// Once the scripted deliveries run out, further receives never complete.
    pub fn stalling(mut self) -> Self {
        self.stall_when_drained = true;
        self
    }

    pub fn requests(&self) -> Vec<gateway::ActivateJobsRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The `grpc-timeout` header of every request, if it was set.
    pub fn deadlines(&self) -> Vec<Option<String>> {
        self.deadlines.lock().unwrap().clone()
    }

    pub fn receive_count(&self) -> usize {
        self.receives.load(Ordering::SeqCst)
    }
}

impl ActivateJobsGateway for MockGateway {
    fn activate_jobs(
        &self,
        request: tonic::Request<gateway::ActivateJobsRequest>,
    ) -> Pin<Box<dyn Future<Output = Result<Box<dyn JobBatchStream>, tonic::Status>> + Send + '_>>
    {
        let deadline = request
            .metadata()
            .get("grpc-timeout")
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        self.deadlines.lock().unwrap().push(deadline);
        self.requests.lock().unwrap().push(request.into_inner());

        let result = match &self.setup_error {
            Some(status) => Err(status.clone()),
            None => {
                let deliveries = std::mem::take(&mut *self.deliveries.lock().unwrap());
                let stream: Box<dyn JobBatchStream> = Box::new(MockStream {
                    deliveries,
                    stall_when_drained: self.stall_when_drained,
                    receives: self.receives.clone(),
                });
                Ok(stream)
            }
        };
        futures::future::ready(result).boxed()
    }
}

struct MockStream {
    deliveries: VecDeque<Result<Delivery, tonic::Status>>,
    stall_when_drained: bool,
    receives: Arc<AtomicUsize>,
}

impl JobBatchStream for MockStream {
    fn recv(
        &mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Delivery, tonic::Status>> + Send + '_>> {
        self.receives.fetch_add(1, Ordering::SeqCst);
        match self.deliveries.pop_front() {
            Some(delivery) => futures::future::ready(delivery).boxed(),
            None if self.stall_when_drained => futures::future::pending().boxed(),
            None => panic!("received past the end of the scripted deliveries"),
        }
    }
}
