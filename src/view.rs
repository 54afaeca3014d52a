// src/view.rs
//! Presentation composer: `(ClientState, URL field)` → `View`.
//!
//! Pure and owned: the GUI and the CLI both render from the same `View`, and
//! tests assert on it without a window. Every number here is derived from the
//! result on each call; nothing is cached back into the model.

use std::fmt;

use crate::accordion::Accordion;
use crate::config::consts::{ELLIPSIS, EMPTY_TEXT, NO_TITLE, PREVIEW_CHARS};
use crate::export::to_pretty_json;
use crate::lifecycle::{ClientState, Phase};
use crate::model::{present, ScrapeResult, Section};

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub input: InputView,
    /// Inline error under the URL field (`Failed` only).
    pub error: Option<String>,
    /// Present only in `Success`.
    pub result: Option<ResultView>,
    pub export_enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputView {
    pub url: String,
    pub busy: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub canonical: Option<String>,
    pub scraped_at: Option<String>,
    pub section_count: usize,
    /// "N found"
    pub sections_label: String,
    /// "S scrolls, C clicks"
    pub interactions_label: String,
    pub pages_label: Option<String>,
    /// Backend-reported non-fatal errors, "phase: message".
    pub backend_errors: Vec<String>,
    pub sections: Vec<SectionRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionRow {
    pub id: String,
    pub kind: String,
    pub label: String,
    /// Filled for the one expanded row.
    pub detail: Option<SectionDetail>,
}

impl SectionRow {
    #[inline]
    pub fn is_expanded(&self) -> bool { self.detail.is_some() }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionDetail {
    pub preview: Preview,
    pub stats: Vec<Stat>,
    /// "Yes" / "No"
    pub truncated: &'static str,
    pub raw_json: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preview {
    Empty,
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub count: usize,
}

pub fn compose(state: &ClientState, url_input: &str) -> View {
    let busy = state.is_loading();
    let input = InputView {
        url: s!(url_input),
        busy,
        submit_enabled: !busy && !url_input.is_empty(),
        submit_label: if busy { "Processing..." } else { "Scrape URL" },
    };

    let (error, result) = match state.phase() {
        Phase::Failed(msg) => (Some(msg.clone()), None),
        Phase::Success(r) => (None, Some(compose_result(r, state.accordion()))),
        Phase::Idle | Phase::Loading => (None, None),
    };

    View {
        input,
        error,
        export_enabled: result.is_some(),
        result,
    }
}

fn compose_result(r: &ScrapeResult, accordion: &Accordion) -> ResultView {
    // Duplicate ids: only the first matching row opens.
    let mut opened = false;
    let sections = r
        .sections
        .iter()
        .map(|section| {
            let id = section.id.key();
            let open = !opened && accordion.is_expanded(&id);
            opened |= open;
            SectionRow {
                id: id.into_owned(),
                kind: section.kind.clone(),
                label: section.label.clone(),
                detail: open.then(|| section_detail(section)),
            }
        })
        .collect();

    let pages = r.interactions.pages.as_ref().map_or(0, Vec::len);

    ResultView {
        title: s!(r.title().unwrap_or(NO_TITLE)),
        url: r.url.clone(),
        description: present(&r.meta.description).map(String::from),
        language: present(&r.meta.language).map(String::from),
        canonical: present(&r.meta.canonical).map(String::from),
        scraped_at: r.scraped_at().map(String::from),
        section_count: r.sections.len(),
        sections_label: format!("{} found", r.sections.len()),
        interactions_label: format!(
            "{} scrolls, {} clicks",
            r.interactions.scrolls,
            r.interactions.clicks.len()
        ),
        pages_label: match pages {
            0 => None,
            1 => Some(s!("1 page visited")),
            n => Some(format!("{n} pages visited")),
        },
        backend_errors: r
            .errors()
            .iter()
            .map(|e| if e.phase.is_empty() { e.message.clone() } else { format!("{}: {}", e.phase, e.message) })
            .collect(),
        sections,
    }
}

fn section_detail(section: &Section) -> SectionDetail {
    SectionDetail {
        preview: text_preview(&section.content.text),
        stats: section
            .content
            .counts()
            .into_iter()
            .map(|(label, count)| Stat { label, count })
            .collect(),
        truncated: if section.truncated { "Yes" } else { "No" },
        raw_json: to_pretty_json(section).unwrap_or_else(|e| format!("<unserializable section: {e}>")),
    }
}

/// First 200 characters, plus `...` when the text is longer. Display only.
pub fn text_preview(text: &str) -> Preview {
    if text.is_empty() {
        return Preview::Empty;
    }
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Preview::Text(join!(&text[..cut], ELLIPSIS)),
        None => Preview::Text(s!(text)),
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preview::Empty => f.write_str(EMPTY_TEXT),
            Preview::Text(t) => write!(f, "\"{t}\""),
        }
    }
}

/// Plain-text rendering, used by the CLI.
impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.input.busy {
            writeln!(f, "{}", self.input.submit_label)?;
        }
        if let Some(err) = &self.error {
            writeln!(f, "Error: {err}")?;
        }
        let Some(r) = &self.result else { return Ok(()) };

        writeln!(f, "{}", r.title)?;
        writeln!(f, "{}", r.url)?;
        if let Some(d) = &r.description { writeln!(f, "  {d}")?; }
        if let Some(l) = &r.language { writeln!(f, "  Language: {l}")?; }
        if let Some(c) = &r.canonical { writeln!(f, "  Canonical: {c}")?; }
        if let Some(at) = &r.scraped_at { writeln!(f, "  Scraped at: {at}")?; }
        for e in &r.backend_errors {
            writeln!(f, "  Warning: {e}")?;
        }
        writeln!(f)?;
        writeln!(f, "Sections: {}", r.sections_label)?;
        write!(f, "Interactions: {}", r.interactions_label)?;
        match &r.pages_label {
            Some(p) => writeln!(f, ", {p}")?,
            None => writeln!(f)?,
        }

        for row in &r.sections {
            let marker = if row.is_expanded() { '-' } else { '+' };
            writeln!(f, "{marker} [{}] {}", row.kind, row.label)?;
            if let Some(d) = &row.detail {
                writeln!(f, "    Text: {}", d.preview)?;
                for s in &d.stats {
                    writeln!(f, "    {}: {}", s.label, s.count)?;
                }
                writeln!(f, "    HTML Truncated: {}", d.truncated)?;
                for line in d.raw_json.lines() {
                    writeln!(f, "    | {line}")?;
                }
            }
        }
        Ok(())
    }
}
