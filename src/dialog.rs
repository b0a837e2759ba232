// src/dialog.rs

//! Modal message overlay state.

use crate::color::Color;

/// Contents of a shown message dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDialog {
    pub message: String,
    /// `Color::None` means the text is drawn without a backing rectangle.
    pub background: Color,
    pub text_color: Color,
    /// Font size of the message in pixels.
    pub text_size: u32,
}

impl MessageDialog {
    pub fn fills_background(&self) -> bool {
        !self.background.is_none()
    }
}

/// Whether a modal message is currently covering the board.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dialog {
    #[default]
    Hidden,
    Shown(MessageDialog),
}

impl Dialog {
    pub fn is_shown(&self) -> bool {
        matches!(self, Dialog::Shown(_))
    }

    pub fn message(&self) -> Option<&MessageDialog> {
        match self {
            Dialog::Shown(dialog) => Some(dialog),
            Dialog::Hidden => None,
        }
    }

    pub fn show(&mut self, dialog: MessageDialog) {
        *self = Dialog::Shown(dialog);
    }

    /// Hides the dialog, returning what was shown.
    pub fn hide(&mut self) -> Option<MessageDialog> {
        match std::mem::take(self) {
            Dialog::Shown(dialog) => Some(dialog),
            Dialog::Hidden => None,
        }
    }
}
