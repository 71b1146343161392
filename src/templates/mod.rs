pub mod dialog;
pub mod locale;
pub mod menu;
pub mod naming;
pub mod odf;
pub mod types;

pub use dialog::{ConfirmOutcome, DialogPhase, NameDialog, NameDialogState};
pub use menu::{MenuProvider, TemplateMenuProvider};
pub use types::*;
