use crate::core::model::{ReportSection, Status};
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

pub const END_MARKER: &str = ">>END_MODULE";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ParseState {
    #[default]
    Idle,
    InSection(ReportSection),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind<'a> {
    SectionStart {
        section: ReportSection,
        status: Status,
        /// Section that was still open when this header arrived.
        interrupted: Option<ReportSection>,
    },
    SectionData(ReportSection, &'a str),
    SectionEnd(ReportSection),
    Unclassified(&'a str),
}

fn header_patterns() -> &'static [(ReportSection, Regex)] {
    static PATTERNS: OnceLock<Vec<(ReportSection, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        ReportSection::ALL
            .iter()
            .map(|&section| {
                let pattern = format!(r"^>>{}(?:\s+(\S+))?\s*$", regex::escape(section.title()));
                (section, Regex::new(&pattern).expect("section header pattern"))
            })
            .collect()
    })
}

pub fn match_header(line: &str) -> Option<(ReportSection, Status)> {
    if !line.starts_with(">>") {
        return None;
    }
    header_patterns().iter().find_map(|(section, re)| {
        re.captures(line).map(|caps| {
            let status = caps
                .get(1)
                .map(|m| Status::from_token(m.as_str()))
                .unwrap_or_default();
            (*section, status)
        })
    })
}

#[derive(Debug, Default)]
pub struct LineClassifier {
    state: ParseState,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn classify<'a>(&mut self, line: &'a str) -> LineKind<'a> {
        match self.state {
            ParseState::InSection(current) => {
                if line.trim_end() == END_MARKER {
                    self.state = ParseState::Idle;
                    return LineKind::SectionEnd(current);
                }
                if let Some((section, status)) = match_header(line) {
                    warn!(
                        "section '{}' not terminated before '{}'",
                        current.title(),
                        section.title()
                    );
                    self.state = ParseState::InSection(section);
                    return LineKind::SectionStart {
                        section,
                        status,
                        interrupted: Some(current),
                    };
                }
                LineKind::SectionData(current, line)
            }
            ParseState::Idle => match match_header(line) {
                Some((section, status)) => {
                    self.state = ParseState::InSection(section);
                    LineKind::SectionStart {
                        section,
                        status,
                        interrupted: None,
                    }
                }
                None => LineKind::Unclassified(line),
            },
        }
    }
}
