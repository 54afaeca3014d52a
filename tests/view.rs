// tests/view.rs
//
// Composer output for each lifecycle phase, without a window.
mod common;

use pretty_assertions::assert_eq;
use scrape_viewer::config::consts::{ELLIPSIS, NO_TITLE};
use scrape_viewer::lifecycle::ClientState;
use scrape_viewer::view::{compose, text_preview, Preview, Stat};

use common::*;

fn success(body: &str) -> ClientState {
    let backend = ScriptedBackend::new(vec![(200, body.to_string())]);
    let mut client = ClientState::new();
    submit_and_wait(&mut client, "https://example.com", backend);
    client
}

#[test]
fn idle_view_has_disabled_submit_for_empty_url() {
    let client = ClientState::new();
    let v = compose(&client, "");
    assert!(!v.input.submit_enabled);
    assert!(!v.input.busy);
    assert!(v.error.is_none() && v.result.is_none());
    assert!(!v.export_enabled);

    let v = compose(&client, "https://example.com");
    assert!(v.input.submit_enabled);
    assert_eq!(v.input.submit_label, "Scrape URL");
}

#[test]
fn loading_view_is_busy_and_disabled() {
    let (backend, gate) = GatedBackend::new(200, EXAMPLE_OK);
    let mut client = ClientState::new();
    client.submit("https://example.com", backend, || {});

    let v = compose(&client, "https://example.com");
    assert!(v.input.busy);
    assert!(!v.input.submit_enabled);
    assert_eq!(v.input.submit_label, "Processing...");
    assert!(v.result.is_none());

    gate.send(()).unwrap();
    client.wait();
}

#[test]
fn example_scenario_summary() {
    let client = success(EXAMPLE_OK);
    let v = compose(&client, "https://example.com");
    let r = v.result.as_ref().expect("result view");

    assert_eq!(r.title, "Example");
    assert_eq!(r.url, "https://example.com");
    assert_eq!(r.sections_label, "1 found");
    assert_eq!(r.interactions_label, "3 scrolls, 2 clicks");
    assert_eq!(r.pages_label, None);
    assert!(v.export_enabled);

    assert_eq!(r.sections.len(), 1);
    assert_eq!(r.sections[0].kind, "article");
    assert_eq!(r.sections[0].label, "Intro");
    assert!(!r.sections[0].is_expanded());

    let text = v.to_string();
    assert!(text.contains("Example\n"));
    assert!(text.contains("Sections: 1 found"));
    assert!(text.contains("Interactions: 3 scrolls, 2 clicks"));
}

#[test]
fn failure_scenario_shows_message_and_keeps_url() {
    let backend = ScriptedBackend::new(vec![
        (200, EXAMPLE_OK.to_string()),
        (400, r#"{"detail":"invalid URL"}"#.to_string()),
    ]);
    let mut client = ClientState::new();
    submit_and_wait(&mut client, "https://example.com", backend.clone());
    client.toggle("s1");
    submit_and_wait(&mut client, "not a url", backend);

    let v = compose(&client, "not a url");
    assert_eq!(v.error.as_deref(), Some("invalid URL"));
    assert_eq!(v.input.url, "not a url");
    assert!(v.input.submit_enabled, "retry without retyping");
    assert!(v.result.is_none());
    assert_eq!(client.accordion().selected(), None);
}

#[test]
fn toggle_shows_then_hides_detail() {
    let mut client = success(FULL_OK);

    client.toggle("hero");
    let v = compose(&client, "");
    let rows = &v.result.as_ref().unwrap().sections;
    assert!(rows[0].is_expanded());
    assert!(!rows[1].is_expanded());

    let d = rows[0].detail.as_ref().unwrap();
    assert_eq!(d.preview, Preview::Text("Top of page".into()));
    assert_eq!(
        d.stats,
        vec![
            Stat { label: "Headings", count: 1 },
            Stat { label: "Links", count: 2 },
            Stat { label: "Images", count: 1 },
            Stat { label: "Lists", count: 1 },
            Stat { label: "Tables", count: 0 },
        ]
    );
    assert_eq!(d.truncated, "Yes");
    assert!(d.raw_json.contains("\"id\": \"hero\""));
    assert!(!d.raw_json.contains("\"id\": \"body\""), "JSON view holds one section");

    client.toggle("hero");
    let v = compose(&client, "");
    assert!(v.result.unwrap().sections.iter().all(|r| !r.is_expanded()));
}

#[test]
fn switching_rows_keeps_one_open() {
    let mut client = success(FULL_OK);
    client.toggle("hero");
    client.toggle("body");

    let v = compose(&client, "");
    let rows = &v.result.as_ref().unwrap().sections;
    assert!(!rows[0].is_expanded());
    let d = rows[1].detail.as_ref().unwrap();
    assert_eq!(d.preview, Preview::Empty);
    assert_eq!(d.preview.to_string(), "Empty text content");
    assert_eq!(d.truncated, "No");
}

#[test]
fn supplemented_metadata_is_surfaced() {
    let client = success(FULL_OK);
    let r = compose(&client, "").result.unwrap();

    assert_eq!(r.description.as_deref(), Some("A long story"));
    assert_eq!(r.language.as_deref(), Some("en"));
    assert_eq!(r.scraped_at.as_deref(), Some("2026-10-18T09:30:00Z"));
    assert_eq!(r.interactions_label, "5 scrolls, 1 clicks");
    assert_eq!(r.pages_label.as_deref(), Some("1 page visited"));
    assert_eq!(r.backend_errors, vec!["interact: timeout waiting for selector".to_string()]);
}

#[test]
fn pages_label_pluralizes() {
    let client = success(
        r#"{"result":{"url":"https://x","interactions":{"scrolls":1,"clicks":[],"pages":["/a","/b","/c"]}}}"#,
    );
    let r = compose(&client, "").result.unwrap();
    assert_eq!(r.pages_label.as_deref(), Some("3 pages visited"));

    let client = success(NULLS_OK);
    let r = compose(&client, "").result.unwrap();
    assert_eq!(r.pages_label, None);
    assert_eq!(r.canonical, None);
    assert_eq!(r.description, None);
    assert!(r.backend_errors.is_empty());
}

#[test]
fn numeric_section_ids_toggle() {
    let mut client = success(NUMERIC_IDS_OK);
    client.toggle("2");

    let r = compose(&client, "").result.unwrap();
    assert_eq!(r.sections[1].id, "2");
    let open: Vec<bool> = r.sections.iter().map(|s| s.is_expanded()).collect();
    assert_eq!(open, vec![false, true]);
    let d = r.sections[1].detail.as_ref().unwrap();
    assert_eq!(d.preview, Preview::Text("second".to_string()));
    assert!(d.raw_json.contains("\"id\": 2"));

    client.toggle("2");
    let r = compose(&client, "").result.unwrap();
    assert!(r.sections.iter().all(|s| !s.is_expanded()));
}

#[test]
fn missing_title_falls_back() {
    let client = success(r#"{"result":{"url":"https://x","meta":{},"sections":[],"interactions":{"scrolls":0,"clicks":[]}}}"#);
    let r = compose(&client, "").result.unwrap();
    assert_eq!(r.title, NO_TITLE);
    assert_eq!(r.sections_label, "0 found");
}

#[test]
fn section_without_content_reads_as_empty() {
    let mut client = success(
        r#"{"result":{"url":"https://x","sections":[{"id":"a","type":"nav","label":"Nav","truncated":false}]}}"#,
    );
    client.toggle("a");
    let r = compose(&client, "").result.unwrap();
    let d = r.sections[0].detail.as_ref().unwrap();
    assert_eq!(d.preview, Preview::Empty);
    assert!(d.stats.iter().all(|s| s.count == 0));
}

#[test]
fn duplicate_ids_expand_first_row_only() {
    let backend = ScriptedBackend::new(vec![(200, ok_body("https://d", "D", &["dup", "x", "dup"]))]);
    let mut client = ClientState::new();
    submit_and_wait(&mut client, "https://d", backend);
    client.toggle("dup");

    let r = compose(&client, "").result.unwrap();
    let open: Vec<bool> = r.sections.iter().map(|s| s.is_expanded()).collect();
    assert_eq!(open, vec![true, false, false]);
}

#[test]
fn preview_truncates_at_200_chars() {
    let long = "a".repeat(250);
    assert_eq!(text_preview(&long), Preview::Text(format!("{}{}", "a".repeat(200), ELLIPSIS)));

    let short = "b".repeat(150);
    assert_eq!(text_preview(&short), Preview::Text(short.clone()));
}

#[test]
fn preview_does_not_touch_the_model() {
    let long = "z".repeat(250);
    let body = format!(
        r#"{{"result":{{"url":"https://x","sections":[{{"id":"a","type":"p","label":"P","content":{{"text":"{long}"}},"truncated":false}}]}}}}"#
    );
    let mut client = success(&body);
    client.toggle("a");
    let _ = compose(&client, "");
    assert_eq!(client.result().unwrap().sections[0].content.text.len(), 250);
}

#[test]
fn one_backend_serves_successive_submissions() {
    let backend = ScriptedBackend::new(vec![(200, EXAMPLE_OK.to_string()), (200, EXAMPLE_OK.to_string())]);
    let mut client = ClientState::new();
    submit_and_wait(&mut client, "one", backend.clone());
    submit_and_wait(&mut client, "two", backend.clone());
    assert_eq!(backend.calls(), vec!["one".to_string(), "two".to_string()]);
}
