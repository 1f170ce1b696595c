use std::time::Duration;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;
use zeebest_jobs::{Client, ClientConfig};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "activate_jobs",
    about = "Activate jobs of one type and print them. The gateway is read from ZEEBE_* variables."
)]
struct Opt {
    /// the job type to activate
    job_type: String,
    /// maximum number of jobs to activate
    #[structopt(short, long)]
    amount: Option<i32>,
    /// how long the jobs stay locked to this worker, in seconds
    #[structopt(short, long)]
    timeout: Option<u64>,
    /// the worker name reported to the gateway
    #[structopt(short, long)]
    worker: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), zeebest_jobs::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opt = Opt::from_args();
    let config = ClientConfig::from_env()?;
    let client = Client::from_config(&config).await?;

    let mut command = client.new_activate_jobs_command().job_type(opt.job_type);
    if let Some(amount) = opt.amount {
        command = command.amount(amount);
    }
    if let Some(timeout) = opt.timeout {
        command = command.timeout(Duration::from_secs(timeout));
    }
    if let Some(worker) = opt.worker {
        command = command.worker_name(worker);
    }

    let jobs = command.send().await?;
    println!("activated {} jobs", jobs.len());
    for job in jobs {
        println!(
            "#{} type={} retries={} deadline={:?} payload={}",
            job.key,
            job.job_type,
            job.retries,
            job.deadline_time(),
            job.payload
        );
    }
    Ok(())
}
