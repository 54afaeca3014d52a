// tests/common/mod.rs
//
// Scripted backends for driving the lifecycle without a network.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{mpsc, Arc, Mutex};

use scrape_viewer::backend::{decode_response, Backend};
use scrape_viewer::error::ClientError;
use scrape_viewer::lifecycle::{ClientState, Submit};
use scrape_viewer::model::{ScrapeRequest, ScrapeResult};

pub const EXAMPLE_OK: &str = r#"{
  "result": {
    "url": "https://example.com",
    "meta": { "title": "Example" },
    "sections": [
      {
        "id": "s1",
        "type": "article",
        "label": "Intro",
        "content": { "text": "hello", "headings": [], "links": [], "images": [], "lists": [], "tables": [] },
        "truncated": false
      }
    ],
    "interactions": { "scrolls": 3, "clicks": [{}, {}] }
  }
}"#;

/// Backend contract payload with every optional field filled in.
pub const FULL_OK: &str = r#"{
  "result": {
    "url": "https://news.example.org/story",
    "scrapedAt": "2026-10-18T09:30:00Z",
    "meta": {
      "title": "Story",
      "description": "A long story",
      "language": "en",
      "canonical": "https://news.example.org/story"
    },
    "sections": [
      {
        "id": "hero",
        "type": "heading-block",
        "label": "Hero",
        "sourceUrl": "https://news.example.org/story",
        "content": {
          "headings": ["Breaking"],
          "text": "Top of page",
          "links": [{ "text": "Home", "href": "/" }, { "text": "About", "href": "/about" }],
          "images": [{ "src": "/a.png", "alt": "a" }],
          "lists": [["one", "two"]],
          "tables": []
        },
        "rawHtml": "<section>…</section>",
        "truncated": true
      },
      {
        "id": "body",
        "type": "article",
        "label": "Body",
        "sourceUrl": "https://news.example.org/story",
        "content": { "headings": [], "text": "", "links": [], "images": [], "lists": [], "tables": [{ "rows": [] }] },
        "rawHtml": "<article></article>",
        "truncated": false
      }
    ],
    "interactions": { "clicks": ["button.more"], "scrolls": 5, "pages": ["https://news.example.org/story?page=2"] },
    "errors": [{ "message": "timeout waiting for selector", "phase": "interact" }]
  }
}"#;

/// What the backend sends for a sparse page: explicit nulls, empty lists, and
/// keys this client does not render.
pub const NULLS_OK: &str = r#"{
  "result": {
    "url": "https://plain.example.net",
    "scrapedAt": "2026-10-18T10:00:00Z",
    "meta": { "title": "Plain", "description": null, "language": "en", "canonical": null, "robots": "index" },
    "sections": [
      {
        "id": "main",
        "type": "article",
        "label": "Main",
        "sourceUrl": null,
        "content": { "text": "body", "headings": [], "links": [], "images": [], "lists": [], "tables": [], "wordCount": 1 },
        "rawHtml": null,
        "truncated": false,
        "depth": 2
      }
    ],
    "interactions": { "scrolls": 0, "clicks": [], "pages": [], "durationMs": 812 },
    "errors": [],
    "engine": "playwright"
  }
}"#;

/// Sections keyed by bare numbers instead of strings.
pub const NUMERIC_IDS_OK: &str = r#"{
  "result": {
    "url": "https://n.example.com",
    "meta": { "title": "Numbers" },
    "sections": [
      { "id": 1, "type": "article", "label": "One", "content": { "text": "first" }, "truncated": false },
      { "id": 2, "type": "article", "label": "Two", "content": { "text": "second" }, "truncated": false }
    ],
    "interactions": { "scrolls": 0, "clicks": [] }
  }
}"#;

pub fn ok_body(url: &str, title: &str, section_ids: &[&str]) -> String {
    let sections: Vec<String> = section_ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"id":"{id}","type":"article","label":"Label {id}","content":{{"text":"t"}},"truncated":false}}"#
            )
        })
        .collect();
    format!(
        r#"{{"result":{{"url":"{url}","meta":{{"title":"{title}"}},"sections":[{}],"interactions":{{"scrolls":0,"clicks":[]}}}}}}"#,
        sections.join(",")
    )
}

/// Replies with canned (status, body) pairs in order and records each URL it saw.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<(u16, String)>>,
    pub seen: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<(u16, String)>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Backend for ScriptedBackend {
    fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ClientError> {
        self.seen.lock().unwrap().push(request.url.clone());
        let (status, body) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("backend called more often than scripted");
        decode_response(status, &body)
    }
}

/// Holds its reply until the test opens the gate.
pub struct GatedBackend {
    gate: Mutex<mpsc::Receiver<()>>,
    reply: (u16, String),
}

impl GatedBackend {
    pub fn new(status: u16, body: impl Into<String>) -> (Arc<Self>, mpsc::Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let backend = Arc::new(Self { gate: Mutex::new(rx), reply: (status, body.into()) });
        (backend, tx)
    }
}

impl Backend for GatedBackend {
    fn scrape(&self, _request: &ScrapeRequest) -> Result<ScrapeResult, ClientError> {
        let _ = self.gate.lock().unwrap().recv();
        decode_response(self.reply.0, &self.reply.1)
    }
}

/// Submit and block until resolved.
pub fn submit_and_wait(client: &mut ClientState, url: &str, backend: Arc<dyn Backend>) -> Submit {
    let outcome = client.submit(url, backend, || {});
    client.wait();
    outcome
}
