//! Background loading of the page shown in the document panel.

use crate::constants::USER_AGENT;
use eframe::egui;
use responsive_panel::{DocumentSummary, Event};
use std::sync::mpsc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// State of the document currently assigned to the panel.
pub enum DocumentState {
    /// Nothing has been loaded yet.
    Idle,
    /// Fetch in flight on the runtime.
    Loading {
        url: String,
        rx: mpsc::Receiver<Result<DocumentSummary, DocumentError>>,
    },
    Ready(DocumentSummary),
    /// Loading failed; the reason has been logged.
    Failed,
}

impl DocumentState {
    /// Starts fetching `url`, replacing whatever was shown before. A fetch
    /// still in flight is abandoned: its result has nowhere to go.
    pub fn load(&mut self, ctx: &egui::Context, runtime: &tokio::runtime::Runtime, url: String) {
        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();
        let target = url.clone();

        runtime.spawn(async move {
            let result = fetch_document(target).await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        *self = Self::Loading { url, rx };
    }

    /// Checks for a finished fetch and returns the event to report.
    pub fn poll(&mut self) -> Option<Event> {
        let Self::Loading { url, rx } = self else {
            return None;
        };

        let (next, event) = match rx.try_recv() {
            Ok(Ok(summary)) => {
                let event = Event::PanelLoaded(summary.url.clone());
                (Self::Ready(summary), event)
            }
            Ok(Err(err)) => (
                Self::Failed,
                Event::PanelLoadFailed {
                    url: url.clone(),
                    reason: err.to_string(),
                },
            ),
            Err(mpsc::TryRecvError::Disconnected) => (
                Self::Failed,
                Event::PanelLoadFailed {
                    url: url.clone(),
                    reason: "channel disconnected".to_owned(),
                },
            ),
            Err(mpsc::TryRecvError::Empty) => return None,
        };

        *self = next;
        Some(event)
    }
}

async fn fetch_document(url: String) -> Result<DocumentSummary, DocumentError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let response = client.get(&url).send().await?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let body = response.text().await?;

    Ok(DocumentSummary::from_html(final_url, status, &body))
}
