//! Confirm/cancel protocol between the checklist and its host.

use crate::config::ChecklistConfig;
use crate::control::SearchableChecklist;
use crate::error::ChecklistError;
use crate::item::{Item, ItemRef};

/// How the dialog was closed.
///
/// The numeric values are part of the host contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ResultCode {
    Confirmed = 0,
    Cancelled = 4,
}

impl ResultCode {
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<ResultCode> for i32 {
    fn from(code: ResultCode) -> Self {
        code.code()
    }
}

impl TryFrom<i32> for ResultCode {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ResultCode::Confirmed),
            4 => Ok(ResultCode::Cancelled),
            other => Err(other),
        }
    }
}

/// Lifecycle of a checklist dialog. Both closed states are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Open,
    Confirmed,
    Cancelled,
}

impl DialogState {
    pub fn is_closed(self) -> bool {
        !matches!(self, DialogState::Open)
    }

    pub fn result_code(self) -> Option<ResultCode> {
        match self {
            DialogState::Open => None,
            DialogState::Confirmed => Some(ResultCode::Confirmed),
            DialogState::Cancelled => Some(ResultCode::Cancelled),
        }
    }
}

impl From<ResultCode> for DialogState {
    fn from(code: ResultCode) -> Self {
        match code {
            ResultCode::Confirmed => DialogState::Confirmed,
            ResultCode::Cancelled => DialogState::Cancelled,
        }
    }
}

/// What the host gets back once the dialog has closed.
#[derive(Debug)]
pub struct DialogOutcome<T> {
    pub code: ResultCode,
    pub items: Vec<ItemRef<T>>,
}

impl<T> DialogOutcome<T> {
    pub fn is_confirmed(&self) -> bool {
        self.code == ResultCode::Confirmed
    }
}

/// A modal checklist dialog.
///
/// Wraps a [`SearchableChecklist`] and registers the close listener it
/// needs to be created. The host drives it until [`is_closed`](Self::is_closed) and then
/// reads [`result_code`](Self::result_code) and
/// [`all_items`](Self::all_items).
///
/// # Example
///
/// ```ignore
/// let mut dialog = ChecklistDialog::new(&items, ChecklistConfig::new().title("Select"))?;
/// while !dialog.is_closed() {
///     shell.dispatch(dialog.control_mut(), next_event()?)?;
/// }
/// if dialog.result_code() == Some(ResultCode::Confirmed) {
///     items = dialog.all_items()?.to_vec();
/// }
/// ```
#[derive(Debug)]
pub struct ChecklistDialog<T: Item> {
    control: SearchableChecklist<T>,
}

impl<T: Item> ChecklistDialog<T> {
    pub fn new(items: &[ItemRef<T>], config: ChecklistConfig) -> Result<Self, ChecklistError> {
        let mut control = SearchableChecklist::new(items, config)?;
        control.on_close(|code| log::trace!("[checklist] dialog result {}", code.code()));
        control.create_control()?;
        Ok(Self { control })
    }

    /// Register an additional close observer.
    pub fn on_close(&mut self, listener: impl FnMut(ResultCode) + 'static) {
        self.control.on_close(listener);
    }

    pub fn control(&self) -> &SearchableChecklist<T> {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut SearchableChecklist<T> {
        &mut self.control
    }

    pub fn is_closed(&self) -> bool {
        self.control.state().is_closed()
    }

    /// The code the dialog closed with, or `None` while open.
    pub fn result_code(&self) -> Option<ResultCode> {
        self.control.state().result_code()
    }

    pub fn all_items(&self) -> Result<&[ItemRef<T>], ChecklistError> {
        self.control.all_items()
    }

    /// Consume the dialog once closed.
    pub fn into_outcome(self) -> Result<DialogOutcome<T>, ChecklistError> {
        let code = self.result_code().ok_or(ChecklistError::StillOpen)?;
        let items = self.control.all_items()?.to_vec();
        Ok(DialogOutcome { code, items })
    }
}
