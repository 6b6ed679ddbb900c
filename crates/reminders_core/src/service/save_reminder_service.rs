//! Save-reminder use-case service.
//!
//! # Responsibility
//! - Hold the reminder form while the user fills it in.
//! - Validate entered data and persist valid reminders through the store.
//!
//! # Invariants
//! - Nothing reaches the store unless title and location are non-empty.
//! - Title is checked before location.

use crate::data::data_source::ReminderDataSource;
use crate::model::reminder::{Reminder, ReminderDataItem};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown after a reminder has been persisted.
pub const REMINDER_SAVED_MESSAGE: &str = "Reminder Saved !";

/// Field-level rejection of a reminder draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    MissingLocation,
}

impl ValidationError {
    /// User-facing message for the rejected field.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyTitle => "Please enter title",
            Self::MissingLocation => "Please select location",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ValidationError {}

/// Editable form state backing the save screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub selected_location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ReminderForm {
    /// Records the place picked on the map.
    pub fn select_location(&mut self, name: impl Into<String>, latitude: f64, longitude: f64) {
        self.selected_location = Some(name.into());
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds a draft item with a fresh id from the current fields.
    pub fn to_data_item(&self) -> ReminderDataItem {
        ReminderDataItem::new(
            self.title.clone(),
            self.description.clone(),
            self.selected_location.clone(),
            self.latitude,
            self.longitude,
        )
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// Record as handed to the store.
    pub reminder: Reminder,
    pub message: &'static str,
}

/// Save controller over any reminder store handle.
pub struct SaveReminderService<S: ReminderDataSource> {
    store: S,
    form: ReminderForm,
}

impl<S: ReminderDataSource> SaveReminderService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            form: ReminderForm::default(),
        }
    }

    pub fn form(&self) -> &ReminderForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReminderForm {
        &mut self.form
    }

    /// Resets the form once the save screen is gone.
    pub fn on_clear(&mut self) {
        self.form.clear();
    }

    /// Checks that the draft carries a title and a location.
    pub fn validate_entered_data(&self, item: &ReminderDataItem) -> Result<(), ValidationError> {
        if is_blank(item.title.as_deref()) {
            return Err(ValidationError::EmptyTitle);
        }
        if is_blank(item.location.as_deref()) {
            return Err(ValidationError::MissingLocation);
        }
        Ok(())
    }

    /// Persists the draft without validation.
    pub fn save_reminder(&self, item: &ReminderDataItem) -> SaveOutcome {
        let reminder = item.to_reminder();
        self.store.save_reminder(&reminder);
        info!(
            "event=reminder_save module=service status=ok id={} has_coordinates={}",
            reminder.id,
            reminder.coordinates().is_some()
        );
        SaveOutcome {
            reminder,
            message: REMINDER_SAVED_MESSAGE,
        }
    }

    /// Validates the draft and persists it when valid.
    pub fn validate_and_save_reminder(
        &self,
        item: &ReminderDataItem,
    ) -> Result<SaveOutcome, ValidationError> {
        if let Err(err) = self.validate_entered_data(item) {
            warn!(
                "event=reminder_save module=service status=rejected id={} reason={:?}",
                item.id, err
            );
            return Err(err);
        }
        Ok(self.save_reminder(item))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
