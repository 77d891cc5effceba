//! State for the target-date editing dialog.
//!
//! Framework-free: the rendering layer draws whatever widget it likes and
//! drives this struct. The dialog owns the presentation-layer lower bound
//! (no dates before today); the controller separately rejects only the
//! absent-date case.

use chrono::NaiveDate;

pub struct TargetDateDialog {
    open: bool,
    draft: Option<NaiveDate>,
    min_date: NaiveDate,
    pub error_message: Option<String>,
}

impl TargetDateDialog {
    /// Open the dialog pre-filled with the currently saved target date.
    /// `today` becomes the minimum selectable date for this showing.
    pub fn open_for(current: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            open: true,
            draft: current,
            min_date: today,
            error_message: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> Option<NaiveDate> {
        self.draft
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    /// Pick a date. Dates before the minimum are rejected with an error
    /// message and the previous draft is kept.
    pub fn select(&mut self, date: NaiveDate) {
        if date < self.min_date {
            self.error_message = Some(format!(
                "Exam date cannot be before {}",
                self.min_date.format("%Y-%m-%d")
            ));
            return;
        }
        self.draft = Some(date);
        self.error_message = None;
    }

    /// Confirm the dialog, yielding the chosen date for the caller to pass
    /// to the controller. Closes the dialog either way.
    pub fn confirm(&mut self) -> Option<NaiveDate> {
        self.open = false;
        self.error_message = None;
        self.draft.take()
    }

    /// Dismiss without saving anything.
    pub fn cancel(&mut self) {
        self.open = false;
        self.draft = None;
        self.error_message = None;
    }
}
