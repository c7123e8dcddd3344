use crate::model::FileDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Current,
    Draft,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Current => "Current Content",
            ViewMode::Draft => "Draft Preview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    NoDraft,
    DraftIsReadOnly,
    AlreadyEditing,
    NotEditing,
}

impl std::fmt::Display for DetailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            DetailError::NoDraft => "this file has no draft",
            DetailError::DraftIsReadOnly => "drafts are read-only; switch to current content to edit",
            DetailError::AlreadyEditing => "an edit session is already open for this file",
            DetailError::NotEditing => "not editing",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for DetailError {}

/// One selected file: authoritative content, optional draft, and the edit buffer.
#[derive(Debug, Clone)]
pub struct FileDetailPanel {
    detail: FileDetail,
    mode: ViewMode,
    // Survives a switch to draft mode, but only usable in current mode.
    edit: Option<String>,
    error: Option<String>,
}

impl FileDetailPanel {
    /// Files with a pending draft open on the draft.
    pub fn open(detail: FileDetail) -> Self {
        let mode = if detail.has_draft {
            ViewMode::Draft
        } else {
            ViewMode::Current
        };
        Self {
            detail,
            mode,
            edit: None,
            error: None,
        }
    }

    pub fn detail(&self) -> &FileDetail {
        &self.detail
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn has_draft(&self) -> bool {
        self.detail.has_draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(super) fn set_error(&mut self, msg: Option<String>) {
        self.error = msg;
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ViewMode::Current && self.edit.is_some()
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        if self.mode == ViewMode::Current {
            self.edit.as_deref()
        } else {
            None
        }
    }

    /// Text to show for the active mode.
    pub fn displayed(&self) -> &str {
        match self.mode {
            ViewMode::Draft => self.detail.draft().unwrap_or(""),
            ViewMode::Current => self.edit.as_deref().unwrap_or(&self.detail.content),
        }
    }

    pub fn set_mode(&mut self, mode: ViewMode) -> Result<(), DetailError> {
        if mode == ViewMode::Draft && !self.detail.has_draft {
            return Err(DetailError::NoDraft);
        }
        self.mode = mode;
        Ok(())
    }

    pub fn toggle_mode(&mut self) -> Result<ViewMode, DetailError> {
        let next = match self.mode {
            ViewMode::Current => ViewMode::Draft,
            ViewMode::Draft => ViewMode::Current,
        };
        self.set_mode(next)?;
        Ok(next)
    }

    pub fn begin_edit(&mut self) -> Result<(), DetailError> {
        if self.mode == ViewMode::Draft {
            return Err(DetailError::DraftIsReadOnly);
        }
        if self.edit.is_some() {
            return Err(DetailError::AlreadyEditing);
        }
        self.edit = Some(self.detail.content.clone());
        self.error = None;
        Ok(())
    }

    pub fn edit_buffer_mut(&mut self) -> Result<&mut String, DetailError> {
        if self.mode == ViewMode::Draft {
            return Err(DetailError::DraftIsReadOnly);
        }
        self.edit.as_mut().ok_or(DetailError::NotEditing)
    }

    pub fn set_edit_buffer(&mut self, text: String) -> Result<(), DetailError> {
        *self.edit_buffer_mut()? = text;
        Ok(())
    }

    /// Discards the buffer and leaves edit mode.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.error = None;
    }

    /// Content to send for a save; only available while editing.
    pub(super) fn pending_save(&self) -> Result<String, DetailError> {
        if self.mode == ViewMode::Draft {
            return Err(DetailError::DraftIsReadOnly);
        }
        self.edit.clone().ok_or(DetailError::NotEditing)
    }

    pub(super) fn finish_save(&mut self, saved: FileDetail) {
        self.detail = saved;
        self.edit = None;
        self.error = None;
    }

    /// Takes the post-apply record: draft gone, current mode, buffer resynced.
    pub(super) fn finish_apply(&mut self, applied: FileDetail) {
        if let Some(buf) = self.edit.as_mut() {
            *buf = applied.content.clone();
        }
        self.detail = applied;
        self.mode = ViewMode::Current;
        self.error = None;
    }

    /// Swaps in a fresher record without touching the mode or an open edit.
    pub(super) fn replace_detail(&mut self, detail: FileDetail) {
        if !detail.has_draft {
            self.mode = ViewMode::Current;
        }
        self.detail = detail;
    }
}

#[cfg(test)]
#[path = "../tests/explorer/detail_tests.rs"]
mod tests;
