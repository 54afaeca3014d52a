// src/lifecycle.rs
//! Request lifecycle: `Idle → Loading → Success | Failed`, re-enterable forever.
//!
//! `ClientState` is the one owned object the frontends mutate and the composer
//! reads. The outbound request runs on a worker thread; its outcome comes back
//! over a channel and is applied by `poll` (GUI, once per frame) or `wait`
//! (CLI, blocking). Nothing else can change the phase while a request is out:
//! `submit` refuses with `Submit::Busy`.

use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use crate::accordion::Accordion;
use crate::backend::Backend;
use crate::error::ClientError;
use crate::model::{ScrapeRequest, ScrapeResult};

type Outcome = Result<ScrapeResult, ClientError>;
type Job = Box<dyn FnOnce() + Send + 'static>;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success(ScrapeResult),
    /// User-facing message, already resolved from the error.
    Failed(String),
}

/// What `submit` did with the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submit {
    /// Now `Loading`; one request is out.
    Started,
    /// Empty URL; nothing changed.
    Ignored,
    /// A request is already in flight; nothing changed.
    Busy,
    /// The worker could not be started; now `Failed`.
    Failed,
}

#[derive(Debug, Default)]
pub struct ClientState {
    phase: Phase,
    accordion: Accordion,
    pending: Option<mpsc::Receiver<Outcome>>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> &Phase { &self.phase }

    #[inline]
    pub fn accordion(&self) -> &Accordion { &self.accordion }

    #[inline]
    pub fn is_loading(&self) -> bool { matches!(self.phase, Phase::Loading) }

    pub fn result(&self) -> Option<&ScrapeResult> {
        match &self.phase {
            Phase::Success(r) => Some(r),
            _ => None,
        }
    }

    /// Start one scrape of `url` against `backend`.
    ///
    /// `notify` runs on the worker thread after the outcome is queued, so a GUI
    /// can wake itself up (`ctx.request_repaint()`).
    pub fn submit<F>(&mut self, url: &str, backend: Arc<dyn Backend>, notify: F) -> Submit
    where
        F: FnOnce() + Send + 'static,
    {
        self.submit_with(url, backend, notify, spawn_worker)
    }

    fn submit_with<F, S>(&mut self, url: &str, backend: Arc<dyn Backend>, notify: F, spawn: S) -> Submit
    where
        F: FnOnce() + Send + 'static,
        S: FnOnce(Job) -> io::Result<()>,
    {
        if url.is_empty() {
            logd!("Scrape: Refused empty URL");
            return Submit::Ignored;
        }
        if self.is_loading() {
            logd!("Scrape: Refused, request already in flight");
            return Submit::Busy;
        }

        // Drop the old payload and selection before anything can render again.
        self.phase = Phase::Loading;
        self.accordion.reset();
        logf!("Scrape: Begin url={}", url);

        let request = ScrapeRequest { url: s!(url) };
        let (tx, rx) = mpsc::channel();

        let job: Job = Box::new(move || {
            let outcome = backend.scrape(&request);
            // Receiver may be gone if the client was dropped; nothing to do then.
            let _ = tx.send(outcome);
            notify();
        });

        match spawn(job) {
            Ok(()) => {
                self.pending = Some(rx);
                Submit::Started
            }
            Err(e) => {
                loge!("Scrape: Could not start worker: {}", e);
                self.resolve(Err(ClientError::Io(e)));
                Submit::Failed
            }
        }
    }

    /// Apply the outcome if it has arrived. Returns `true` when the phase changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else { return false };
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.resolve(outcome);
                true
            }
            Err(mpsc::TryRecvError::Empty) => false,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending = None;
                self.resolve(Err(ClientError::Interrupted));
                true
            }
        }
    }

    /// Block until the in-flight request (if any) resolves.
    pub fn wait(&mut self) {
        if let Some(rx) = self.pending.take() {
            let outcome = rx.recv().unwrap_or(Err(ClientError::Interrupted));
            self.resolve(outcome);
        }
    }

    /// Expand/collapse a section of the current result. No-op without a result.
    pub fn toggle(&mut self, id: &str) {
        if self.result().is_some() {
            self.accordion.toggle(id);
            logd!("UI: Toggle section id={} → {:?}", id, self.accordion.selected());
        }
    }

    /// Back to `Idle`, dropping any result or error. Refused while loading.
    pub fn reset(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = Phase::Idle;
        self.accordion.reset();
        true
    }

    fn resolve(&mut self, outcome: Outcome) {
        if !self.is_loading() {
            logw!("Scrape: Outcome arrived outside Loading; ignored");
            return;
        }

        self.accordion.reset();
        self.phase = match outcome {
            Ok(result) => {
                logf!(
                    "Scrape: OK url={} sections={} scrolls={} clicks={}",
                    result.url,
                    result.sections.len(),
                    result.interactions.scrolls,
                    result.interactions.clicks.len()
                );
                for id in result.duplicate_ids() {
                    logw!("Scrape: Duplicate section id={} (only the first row expands)", id);
                }
                Phase::Success(result)
            }
            Err(e) => {
                loge!("Scrape: Error: {}", e);
                Phase::Failed(e.user_message())
            }
        };
    }
}

fn spawn_worker(job: Job) -> io::Result<()> {
    thread::Builder::new()
        .name(s!("scrape-request"))
        .spawn(job)
        .map(drop)
}
