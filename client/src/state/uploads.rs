//! Answer-sheet upload list for the evaluator view.

#[cfg(test)]
#[path = "uploads_test.rs"]
mod uploads_test;

use classroom::{EvaluationRequest, FileRef};

pub const UPLOADED_TITLE: &str = "Files uploaded successfully";

/// Files picked so far; later picks append rather than replace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadList {
    files: Vec<FileRef>,
}

impl UploadList {
    /// Append picked files and return how many were added.
    pub fn add(&mut self, files: impl IntoIterator<Item = FileRef>) -> usize {
        let before = self.files.len();
        self.files.extend(files);
        self.files.len() - before
    }

    #[must_use]
    pub fn files(&self) -> &[FileRef] {
        &self.files
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn to_request(&self) -> EvaluationRequest {
        EvaluationRequest { files: self.files.clone() }
    }
}

/// Toast description after a pick.
#[must_use]
pub fn added_message(count: usize) -> String {
    format!("{count} answer sheet(s) added for evaluation")
}
