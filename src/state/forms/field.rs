//! Field identities and the fixed focus-advance ordering

use serde::{Deserialize, Serialize};

/// Gender choice offered by the radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn next(&self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Other,
            Self::Other => Self::Male,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Male => Self::Other,
            Self::Female => Self::Male,
            Self::Other => Self::Female,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Widget class backing a control; determines how the commit key and
/// forward-tab are intercepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    TextInput,
    DateOverlay,
    RadioGroup,
    Dropdown,
    Checkbox,
    SubmitButton,
}

/// How a focus move reaches its target: immediately, or queued to run after
/// the current event-handling pass (overlay controls need the extra tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Immediate(FieldId),
    Deferred(FieldId),
}

/// Identity of a focusable control on the enrollment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldId {
    #[default]
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    Gender,
    Grade,
    Address,
    PhoneNumber,
    ParentName,
    ParentEmail,
    SchoolBus,
    Submit,
}

impl FieldId {
    /// Sequential focus order, ending at the submit control. The school-bus
    /// checkbox sits between parent email and submit for shift-tab purposes,
    /// but the commit key on parent email skips straight to submit (see
    /// `commit_target`).
    pub const TAB_ORDER: [FieldId; 12] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::DateOfBirth,
        FieldId::Gender,
        FieldId::Grade,
        FieldId::Address,
        FieldId::PhoneNumber,
        FieldId::ParentName,
        FieldId::ParentEmail,
        FieldId::SchoolBus,
        FieldId::Submit,
    ];

    pub fn control_kind(self) -> ControlKind {
        match self {
            FieldId::DateOfBirth => ControlKind::DateOverlay,
            FieldId::Gender => ControlKind::RadioGroup,
            FieldId::Grade => ControlKind::Dropdown,
            FieldId::SchoolBus => ControlKind::Checkbox,
            FieldId::Submit => ControlKind::SubmitButton,
            _ => ControlKind::TextInput,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::DateOfBirth => "Date of Birth",
            FieldId::Gender => "Gender",
            FieldId::Grade => "Grade",
            FieldId::Address => "Address",
            FieldId::PhoneNumber => "Phone Number",
            FieldId::ParentName => "Parent/Guardian Name",
            FieldId::ParentEmail => "Parent/Guardian Email",
            FieldId::SchoolBus => "Requires School Bus Service",
            FieldId::Submit => "Submit",
        }
    }

    /// Required fields checked by validation
    pub fn is_required(self) -> bool {
        matches!(
            self,
            FieldId::FirstName
                | FieldId::LastName
                | FieldId::Email
                | FieldId::DateOfBirth
                | FieldId::Grade
                | FieldId::PhoneNumber
        )
    }

    /// Advance target for the commit key. Returns `None` on the submit
    /// control itself (Enter there submits instead of moving).
    ///
    /// Two entries diverge from plain tab order: parent email advances
    /// straight to submit (the checkbox is reachable by shift-tab or mouse
    /// only), and the checkbox reaches submit through the deferred path so
    /// its toggle settles before focus leaves it.
    pub fn commit_target(self) -> Option<FocusMove> {
        match self {
            FieldId::ParentEmail => Some(FocusMove::Immediate(FieldId::Submit)),
            FieldId::SchoolBus => Some(FocusMove::Deferred(FieldId::Submit)),
            FieldId::Submit => None,
            other => other.tab_successor().map(FocusMove::Immediate),
        }
    }

    /// Next control in plain tab order; `None` at the end of the form
    pub fn tab_successor(self) -> Option<FieldId> {
        let pos = Self::TAB_ORDER.iter().position(|f| *f == self)?;
        Self::TAB_ORDER.get(pos + 1).copied()
    }

    /// Previous control in plain tab order; `None` at the first field
    pub fn tab_predecessor(self) -> Option<FieldId> {
        let pos = Self::TAB_ORDER.iter().position(|f| *f == self)?;
        pos.checked_sub(1).and_then(|p| Self::TAB_ORDER.get(p)).copied()
    }
}
