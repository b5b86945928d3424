//! Headless questionnaire runner.
//!
//! Replays a response file through a session step by step, submits it to
//! the prediction service and prints the resulting summary.

use std::path::PathBuf;

use eyre::Result;
use mindcheck_core::models::region::Region;
use mindcheck_instruments::InstrumentId;
use mindcheck_predict::client::PredictClient;
use mindcheck_session::events::SessionEvent;
use mindcheck_session::handle::SessionHandle;
use mindcheck_session::session::{Session, SubmissionState};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing_subscriber::EnvFilter;

mod config;
mod responses;

use responses::Responses;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| eyre::eyre!("usage: mindcheck-run <responses.json>"))?;

    let config = config::load_config()?;
    let responses = responses::load(&path)?;
    let client = PredictClient::new(&config.predict)?;
    tracing::info!(endpoint = client.endpoint(), "prediction client ready");

    let (tx, mut events) = mpsc::unbounded_channel();
    let handle = SessionHandle::new(Session::with_events(tx));

    answer_all(&handle, &responses, &mut events).await?;
    handle.advance(&client).await?;

    let summary = handle.lock().await.summary(config.locale);
    println!("{summary}");

    if let SubmissionState::Failed { kind, .. } = &summary.submission {
        return Err(eyre::eyre!("risk prediction failed ({kind:?})"));
    }
    Ok(())
}

/// Walk every step up to the final one, answering from `responses`.
async fn answer_all(
    handle: &SessionHandle,
    responses: &Responses,
    events: &mut UnboundedReceiver<SessionEvent>,
) -> Result<()> {
    let region: Region = responses.region.parse()?;
    let mut session = handle.lock().await;

    session.select_region(region)?;
    session.advance()?;
    session.advance()?;

    for (instrument, values) in [
        (InstrumentId::Phq9a, &responses.phq9a),
        (InstrumentId::Gad7, &responses.gad7),
        (InstrumentId::K10, &responses.k10),
    ] {
        for (index, &value) in values.iter().enumerate() {
            session.answer_item(instrument, index, value)?;
        }
        session.advance()?;
    }

    for (index, &yes) in responses.asq.iter().enumerate() {
        session.answer_asq(index, yes)?;
        while let Ok(SessionEvent::CrisisHelp { item, .. }) = events.try_recv() {
            print_crisis_notice(item);
        }
    }

    Ok(())
}

fn print_crisis_notice(item: usize) {
    eprintln!(
        "\n!! You answered \"yes\" to ASQ question {}.\n\
         !! If you are thinking about harming yourself, please reach out now:\n\
         !! suicide prevention line 109, or 112 / 119 in an emergency.\n",
        item + 1
    );
}
