use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use jobrec_app::{logging, JobStore, Session};
use jobrec_client::{ClientSettings, ReqwestJobsClient};

fn main() -> Result<()> {
    logging::initialize(logging::LogDestination::Terminal);

    let mut settings = ClientSettings::default();
    if let Ok(base_url) = env::var("JOBREC_BASE_URL") {
        settings.base_url = base_url;
    }

    let session = Arc::new(Session::new(env::var("JOBREC_TOKEN").ok()));
    let store = JobStore::new(Arc::new(ReqwestJobsClient::new(settings)), session);

    let updates = store.subscribe();
    store.fetch_recommended_jobs();

    // Block until the fetch settles, then print what the UI would render.
    let view = loop {
        let view = updates.recv_timeout(Duration::from_secs(60))?;
        if !view.loading {
            break view;
        }
    };

    if !view.message.is_empty() {
        println!("{}", view.message);
    }
    for job in &view.jobs {
        println!("{}", job.0);
    }

    Ok(())
}
