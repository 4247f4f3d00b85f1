//! Enrollment form state: the student record, validation, focus movement

use super::field::{ControlKind, FieldId, FocusMove, Gender};
use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Permissive email shape check: non-whitespace, "@", non-whitespace, ".",
/// non-whitespace. Deliberately unanchored.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid pattern"));

pub const GRADE_MIN: u8 = 1;
pub const GRADE_MAX: u8 = 12;

/// Format expected by the date-of-birth overlay buffer
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The student record backing the enrollment form.
///
/// Every field has a well-defined default; the record is reset wholesale to
/// these defaults after a successful submission. Values are stored verbatim,
/// without normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub grade: Option<u8>,
    pub address: String,
    pub phone_number: String,
    pub parent_name: String,
    pub parent_email: String,
    pub extracurricular: Vec<String>,
    pub has_school_bus: bool,
}

/// Typed entry buffer for the date-of-birth overlay picker
#[derive(Debug, Clone, Default)]
pub struct DateOverlay {
    pub open: bool,
    pub buffer: String,
}

/// Dropdown state for the grade select
#[derive(Debug, Clone)]
pub struct GradeMenu {
    pub open: bool,
    /// Row highlighted while the menu is open
    pub highlight: u8,
}

impl Default for GradeMenu {
    fn default() -> Self {
        Self {
            open: false,
            highlight: GRADE_MIN,
        }
    }
}

/// Outcome of pressing the commit key on the focused control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Move(FocusMove),
    Submit,
    None,
}

/// Enrollment form controller state.
///
/// Focus is modeled explicitly as a `FieldId` pointer into the tab order,
/// rather than delegated to a toolkit focus system.
#[derive(Debug, Clone, Default)]
pub struct EnrollForm {
    pub record: StudentRecord,
    /// Per-field validation messages; an entry exists only while the field
    /// is failing validation
    pub errors: HashMap<FieldId, String>,
    pub focus: FieldId,
    pub date_overlay: DateOverlay,
    pub grade_menu: GradeMenu,
}

impl EnrollForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus directly to a control
    pub fn focus_to(&mut self, field: FieldId) {
        self.focus = field;
    }

    /// Shift-tab: move to the predecessor in tab order (clamped at the first
    /// field)
    pub fn focus_prev(&mut self) {
        if let Some(prev) = self.focus.tab_predecessor() {
            self.focus = prev;
        }
    }

    /// Commit key on the focused control. Overlays are closed before the
    /// move is reported; the submit control reports `Submit` instead.
    pub fn commit_advance(&mut self) -> CommitOutcome {
        match self.focus.control_kind() {
            ControlKind::DateOverlay => {
                self.close_date_overlay();
            }
            ControlKind::Dropdown => {
                if self.grade_menu.open {
                    self.set_grade(self.grade_menu.highlight);
                    self.grade_menu.open = false;
                }
            }
            ControlKind::SubmitButton => return CommitOutcome::Submit,
            _ => {}
        }
        match self.focus.commit_target() {
            Some(mv) => CommitOutcome::Move(mv),
            None => CommitOutcome::None,
        }
    }

    /// Unmodified forward-tab on the focused control.
    ///
    /// Every control except the grade dropdown intercepts forward-tab and
    /// takes the same path as the commit key. The dropdown does not: tab
    /// there falls back to the plain sequential move and leaves the menu
    /// open. Enter is the only commit path on that control.
    pub fn tab_advance(&mut self) -> CommitOutcome {
        match self.focus.control_kind() {
            ControlKind::Dropdown => match self.focus.tab_successor() {
                Some(next) => CommitOutcome::Move(FocusMove::Immediate(next)),
                None => CommitOutcome::None,
            },
            ControlKind::SubmitButton => CommitOutcome::None,
            _ => self.commit_advance(),
        }
    }

    /// Character input routed to the focused control. Any edit clears the
    /// focused field's error entry immediately, even if the new value is
    /// still invalid; it is only re-flagged by the next `validate()`.
    pub fn input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        match self.focus {
            FieldId::FirstName => self.record.first_name.push(ch),
            FieldId::LastName => self.record.last_name.push(ch),
            FieldId::Email => self.record.email.push(ch),
            FieldId::Address => self.record.address.push(ch),
            FieldId::PhoneNumber => self.record.phone_number.push(ch),
            FieldId::ParentName => self.record.parent_name.push(ch),
            FieldId::ParentEmail => self.record.parent_email.push(ch),
            FieldId::DateOfBirth => {
                if c.is_ascii_digit() || c == '-' {
                    self.date_overlay.open = true;
                    self.date_overlay.buffer.push(c);
                } else {
                    return;
                }
            }
            FieldId::Gender => {
                if c == ' ' {
                    self.record.gender = self.record.gender.next();
                } else {
                    return;
                }
            }
            FieldId::Grade => {
                if c == ' ' {
                    self.grade_menu.open = true;
                    self.grade_menu.highlight =
                        self.record.grade.unwrap_or(GRADE_MIN);
                } else if let Some(d) = c.to_digit(10) {
                    if (GRADE_MIN as u32..=9).contains(&d) {
                        self.set_grade(d as u8);
                    } else {
                        return;
                    }
                } else {
                    return;
                }
            }
            FieldId::SchoolBus => {
                if c == ' ' {
                    self.record.has_school_bus = !self.record.has_school_bus;
                } else {
                    return;
                }
            }
            FieldId::Submit => return,
        }
        self.clear_error(self.focus);
    }

    /// Backspace on the focused control
    pub fn backspace(&mut self) {
        match self.focus {
            FieldId::FirstName => {
                self.record.first_name.pop();
            }
            FieldId::LastName => {
                self.record.last_name.pop();
            }
            FieldId::Email => {
                self.record.email.pop();
            }
            FieldId::Address => {
                self.record.address.pop();
            }
            FieldId::PhoneNumber => {
                self.record.phone_number.pop();
            }
            FieldId::ParentName => {
                self.record.parent_name.pop();
            }
            FieldId::ParentEmail => {
                self.record.parent_email.pop();
            }
            FieldId::DateOfBirth => {
                self.date_overlay.buffer.pop();
            }
            _ => return,
        }
        self.clear_error(self.focus);
    }

    /// Directional key on the focused control: cycles the radio group,
    /// nudges the date by a day, moves the dropdown highlight.
    pub fn direction_key(&mut self, forward: bool) {
        match self.focus {
            FieldId::Gender => {
                self.record.gender = if forward {
                    self.record.gender.next()
                } else {
                    self.record.gender.prev()
                };
                self.clear_error(self.focus);
            }
            FieldId::DateOfBirth => {
                let base = self
                    .record
                    .date_of_birth
                    .unwrap_or_else(|| NaiveDate::from_ymd_opt(2010, 1, 1).expect("valid date"));
                let nudged = if forward {
                    base.checked_add_days(Days::new(1))
                } else {
                    base.checked_sub_days(Days::new(1))
                };
                if let Some(date) = nudged {
                    self.record.date_of_birth = Some(date);
                    self.date_overlay.open = true;
                    self.date_overlay.buffer = date.format(DATE_FORMAT).to_string();
                    self.clear_error(self.focus);
                }
            }
            FieldId::Grade if self.grade_menu.open => {
                let h = self.grade_menu.highlight;
                self.grade_menu.highlight = if forward {
                    if h >= GRADE_MAX {
                        GRADE_MIN
                    } else {
                        h + 1
                    }
                } else if h <= GRADE_MIN {
                    GRADE_MAX
                } else {
                    h - 1
                };
            }
            _ => {}
        }
    }

    /// Close the date overlay, committing the typed buffer if it parses
    pub fn close_date_overlay(&mut self) {
        if let Ok(date) = NaiveDate::parse_from_str(&self.date_overlay.buffer, DATE_FORMAT) {
            self.record.date_of_birth = Some(date);
            self.clear_error(FieldId::DateOfBirth);
        }
        self.date_overlay.open = false;
    }

    /// Whether either overlay (date picker or grade menu) is showing
    pub fn overlay_open(&self) -> bool {
        self.date_overlay.open || self.grade_menu.open
    }

    /// Dismiss any open overlay without committing
    pub fn dismiss_overlays(&mut self) {
        self.date_overlay.open = false;
        self.grade_menu.open = false;
    }

    fn set_grade(&mut self, grade: u8) {
        self.record.grade = Some(grade.clamp(GRADE_MIN, GRADE_MAX));
        self.clear_error(FieldId::Grade);
    }

    fn clear_error(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    /// Scan required fields for presence, plus the email shape check.
    /// Rebuilds the error map from scratch; returns true when it is empty.
    pub fn validate(&mut self) -> bool {
        let mut errors = HashMap::new();

        if self.record.first_name.trim().is_empty() {
            errors.insert(FieldId::FirstName, "First name is required".to_string());
        }
        if self.record.last_name.trim().is_empty() {
            errors.insert(FieldId::LastName, "Last name is required".to_string());
        }
        if self.record.email.trim().is_empty() {
            errors.insert(FieldId::Email, "Email is required".to_string());
        } else if !EMAIL_RE.is_match(&self.record.email) {
            errors.insert(FieldId::Email, "Invalid email format".to_string());
        }
        if self.record.date_of_birth.is_none() {
            errors.insert(FieldId::DateOfBirth, "Date of birth is required".to_string());
        }
        if self.record.grade.is_none() {
            errors.insert(FieldId::Grade, "Grade is required".to_string());
        }
        if self.record.phone_number.trim().is_empty() {
            errors.insert(FieldId::PhoneNumber, "Phone number is required".to_string());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Reset the record to defaults after a successful submission
    pub fn reset(&mut self) {
        self.record = StudentRecord::default();
        self.errors.clear();
        self.focus = FieldId::FirstName;
        self.date_overlay = DateOverlay::default();
        self.grade_menu = GradeMenu::default();
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
