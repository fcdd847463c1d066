//! Rewrites bare URLs in scanner prose into anchors.
//!
//! Text is split into alternating runs of whitespace and non-whitespace. A
//! non-whitespace token starting with `http://` or `https://` becomes a link
//! labelled "here"; everything else, including the original spacing, is kept.

use minijinja::HtmlEscape;

enum Segment<'a> {
    Space(&'a str),
    Word(&'a str),
}

struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let is_space = first.is_whitespace();
        let end = self
            .rest
            .find(|c: char| c.is_whitespace() != is_space)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(if is_space { Segment::Space(head) } else { Segment::Word(head) })
    }
}

const fn segments(input: &str) -> Segments<'_> {
    Segments { rest: input }
}

pub fn is_url(token: &str) -> bool {
    token.starts_with("http://") || token.starts_with("https://")
}

fn anchor(href: &str) -> String {
    format!("<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">here</a>")
}

/// Replace every whitespace-delimited URL with an anchor. Non-URL text is returned untouched.
pub fn normalize_links(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for segment in segments(input) {
        match segment {
            Segment::Word(token) if is_url(token) => output.push_str(&anchor(token)),
            Segment::Word(text) | Segment::Space(text) => output.push_str(text),
        }
    }
    output
}

/// Same rewrite as [`normalize_links`], producing markup that is safe to embed in the page.
pub fn render_rich_text(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for segment in segments(input) {
        match segment {
            Segment::Word(token) if is_url(token) => {
                output.push_str(&anchor(&HtmlEscape(token).to_string()));
            }
            Segment::Word(token) => output.push_str(&HtmlEscape(token).to_string()),
            Segment::Space(space) => output.push_str(space),
        }
    }
    output
}
