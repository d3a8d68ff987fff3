//! Form state and its reducer
//!
//! All edits to the form go through [`reduce`], a pure function from the
//! current state and an event to the next state. The cascading resets live
//! here and nowhere else:
//!
//! - department change: clears province and district
//! - province change: clears district
//! - district change: clears nothing

use crate::cascade::{self, CascadeOptions};
use crate::draft::{ClaimDraft, ClaimField};
use crate::reference::ReferenceData;

/// The draft plus the two selections that key the cascade filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: ClaimDraft,
    pub selected_department: String,
    pub selected_province: String,
}

/// A user edit to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A plain field was edited
    FieldChanged { field: ClaimField, value: String },
    /// The department selector changed
    DepartmentChanged(String),
    /// The province selector changed
    ProvinceChanged(String),
    /// The district selector changed
    DistrictChanged(String),
    /// Return to the empty initial state
    Reset,
}

impl FormEvent {
    /// Builds the event for editing `field`, routing location fields to
    /// their cascading events
    pub fn edit(field: ClaimField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ClaimField::Department => FormEvent::DepartmentChanged(value),
            ClaimField::Province => FormEvent::ProvinceChanged(value),
            ClaimField::District => FormEvent::DistrictChanged(value),
            field => FormEvent::FieldChanged { field, value },
        }
    }
}

/// Computes the next form state
pub fn reduce(state: FormState, event: FormEvent) -> FormState {
    let FormState {
        mut draft,
        mut selected_department,
        mut selected_province,
    } = state;

    match event {
        FormEvent::FieldChanged { field, value } if field.is_location() => {
            return reduce(
                FormState {
                    draft,
                    selected_department,
                    selected_province,
                },
                FormEvent::edit(field, value),
            );
        }
        FormEvent::FieldChanged { field, value } => {
            draft.set(field, value);
        }
        FormEvent::DepartmentChanged(value) => {
            draft.department = value.clone();
            draft.province.clear();
            draft.district.clear();
            selected_department = value;
            selected_province.clear();
        }
        FormEvent::ProvinceChanged(value) => {
            draft.province = value.clone();
            draft.district.clear();
            selected_province = value;
        }
        FormEvent::DistrictChanged(value) => {
            draft.district = value;
        }
        FormEvent::Reset => return FormState::default(),
    }

    FormState {
        draft,
        selected_department,
        selected_province,
    }
}

impl FormState {
    /// The empty state shown on first load
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an event in place
    pub fn apply(&mut self, event: FormEvent) {
        let current = std::mem::take(self);
        *self = reduce(current, event);
    }

    /// Selector options for the current selection
    pub fn options<'a>(&self, reference: &'a ReferenceData) -> CascadeOptions<'a> {
        cascade::options(
            reference.locations(),
            &self.selected_department,
            &self.selected_province,
        )
    }

    /// True when nothing has been entered
    pub fn is_pristine(&self) -> bool {
        self.draft.is_empty()
            && self.selected_department.is_empty()
            && self.selected_province.is_empty()
    }
}
