//! Turns message text into typed spans for the chat-style preview.
//!
//! Field values understand line breaks, `[text](url)`, `**bold**` and
//! `~~strike~~`. Message content only understands role mentions. Nothing
//! else is interpreted: the output is data, not markup.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{timestamp, Embed, Message};

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.*?)~~").expect("valid regex"));
static ROLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<@&(\d+)>").expect("valid regex"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub strike: bool,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Text { text: String, style: Style },
    LineBreak,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSpan {
    Text(String),
    Role(String),
}

#[derive(Copy, Clone)]
enum Marker {
    Link,
    Bold,
    Strike,
}

impl Marker {
    const ALL: [Self; 3] = [Self::Link, Self::Bold, Self::Strike];

    fn regex(self) -> &'static Regex {
        match self {
            Self::Link => &LINK,
            Self::Bold => &BOLD,
            Self::Strike => &STRIKE,
        }
    }

    fn apply(self, style: &Style, target: Option<&str>) -> Style {
        let mut style = style.clone();
        match self {
            Self::Link => style.link = target.map(ToString::to_string),
            Self::Bold => style.bold = true,
            Self::Strike => style.strike = true,
        }
        style
    }
}

struct Hit<'a> {
    marker: Marker,
    start: usize,
    end: usize,
    inner: &'a str,
    target: Option<&'a str>,
}

impl<'a> Hit<'a> {
    fn find(marker: Marker, input: &'a str) -> Option<Self> {
        let caps = marker.regex().captures(input)?;
        let whole = caps.get(0)?;
        Some(Self {
            marker,
            start: whole.start(),
            end: whole.end(),
            inner: caps.get(1)?.as_str(),
            target: caps.get(2).map(|m| m.as_str()),
        })
    }
}

/// Tokenizes a field value. Markers nest: `**[a](b)**` is a bold link.
pub fn parse_markdown(input: &str) -> Vec<Fragment> {
    let mut out = vec![];
    for (i, line) in input.split('\n').enumerate() {
        if i > 0 {
            out.push(Fragment::LineBreak);
        }
        parse_inline(line, &Style::default(), &mut out);
    }
    out
}

fn parse_inline(mut input: &str, style: &Style, out: &mut Vec<Fragment>) {
    while !input.is_empty() {
        let next = Marker::ALL
            .into_iter()
            .filter_map(|marker| Hit::find(marker, input))
            .min_by_key(|hit| hit.start);

        let Some(hit) = next else {
            push_text(out, input, style);
            return;
        };

        push_text(out, &input[..hit.start], style);
        parse_inline(hit.inner, &hit.marker.apply(style, hit.target), out);
        input = &input[hit.end..];
    }
}

fn push_text(out: &mut Vec<Fragment>, text: &str, style: &Style) {
    if text.is_empty() {
        return;
    }
    out.push(Fragment::Text {
        text: text.to_string(),
        style: style.clone(),
    })
}

/// Splits message content around `<@&id>` role mentions.
pub fn parse_content(input: &str) -> Vec<ContentSpan> {
    let mut spans = vec![];
    let mut cursor = 0;

    for caps in ROLE.captures_iter(input) {
        let (Some(whole), Some(id)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() != cursor {
            spans.push(ContentSpan::Text(input[cursor..whole.start()].to_string()));
        }
        spans.push(ContentSpan::Role(id.as_str().to_string()));
        cursor = whole.end();
    }

    if cursor != input.len() {
        spans.push(ContentSpan::Text(input[cursor..].to_string()));
    }
    spans
}

/// The footer line, `text • dd/MM/yyyy`, if the embed has either part.
pub fn footer_line(embed: &Embed) -> Option<String> {
    let text = embed
        .footer
        .as_ref()
        .map(|f| f.text.as_str())
        .filter(|t| !t.is_empty());
    let date = embed.timestamp.as_deref().and_then(timestamp::display_date);

    match (text, date) {
        (Some(text), Some(date)) => Some(format!("{text} • {date}")),
        (Some(text), None) => Some(text.to_string()),
        (None, Some(date)) => Some(date),
        (None, None) => None,
    }
}

pub fn raw_json(message: &Message) -> serde_json::Result<String> {
    serde_json::to_string_pretty(message)
}
