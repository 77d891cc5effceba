//! Routing into the practice-question browser.
//!
//! The remote question store is an external collaborator; this module only
//! defines the interface the dashboard drills through and the "jump to the
//! first matching item" lookup used when a section card is clicked.

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// The four IELTS exam sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Listening,
    Reading,
    Writing,
    Speaking,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Listening,
        Section::Reading,
        Section::Writing,
        Section::Speaking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Listening => "listening",
            Section::Reading => "reading",
            Section::Writing => "writing",
            Section::Speaking => "speaking",
        }
    }
}

/// Collaborator that knows which question IDs exist for a section,
/// in presentation order.
pub trait QuestionDirectory {
    fn question_ids(&self, section: Section) -> Result<Vec<String>>;
}

/// First practice item for a section, or `None` when the section has no
/// questions yet. The caller routes the user to the returned ID.
pub fn first_question_id(
    directory: &impl QuestionDirectory,
    section: Section,
) -> Result<Option<String>> {
    Ok(directory.question_ids(section)?.into_iter().next())
}

/// Fixed in-memory directory for tests and offline demos.
#[derive(Debug, Default, Clone)]
pub struct StaticQuestionDirectory {
    by_section: HashMap<Section, Vec<String>>,
}

impl StaticQuestionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: Section, ids: Vec<String>) {
        self.by_section.insert(section, ids);
    }
}

impl QuestionDirectory for StaticQuestionDirectory {
    fn question_ids(&self, section: Section) -> Result<Vec<String>> {
        Ok(self.by_section.get(&section).cloned().unwrap_or_default())
    }
}
