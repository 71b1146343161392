use super::naming::{check_name, target_path};
use super::types::{CreationRequest, NameProblem, TemplateResult};
use serde::Serialize;
use std::path::PathBuf;

pub const LABEL_FILENAME: &str = "Filename";
pub const LABEL_CREATE: &str = "Create";
pub const LABEL_CANCEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DialogPhase {
    Editing,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameDialogState {
    pub current_text: String,
    pub problem: Option<NameProblem>,
    /// Message from the last failed creation attempt.
    pub error: Option<String>,
}

impl NameDialogState {
    pub fn is_valid(&self) -> bool {
        self.problem.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Created(PathBuf),
    Rejected(NameProblem),
    /// The dialog was already confirmed or cancelled.
    Closed,
}

/// Modal filename prompt, independent of any widget toolkit.
///
/// Adapters forward text edits, confirm (button or enter) and cancel
/// events; the dialog owns validation and invokes the creation callback.
pub struct NameDialog<W> {
    request: CreationRequest,
    parent: Option<W>,
    state: NameDialogState,
    phase: DialogPhase,
}

impl<W> NameDialog<W> {
    pub fn new(request: CreationRequest, parent: Option<W>) -> Self {
        let current_text = request.default_name.clone();
        let problem = check_name(&request.base_path, &current_text, &request.extension);

        log::debug!("Opening dialog {:?} with {:?}", request.title, current_text);

        Self {
            request,
            parent,
            state: NameDialogState {
                current_text,
                problem,
                error: None,
            },
            phase: DialogPhase::Editing,
        }
    }

    pub fn title(&self) -> String {
        format!("{} (.{})", self.request.title, self.request.extension)
    }

    pub fn parent(&self) -> Option<&W> {
        self.parent.as_ref()
    }

    pub fn state(&self) -> &NameDialogState {
        &self.state
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase != DialogPhase::Editing
    }

    pub fn confirm_enabled(&self) -> bool {
        !self.is_closed() && self.state.is_valid()
    }

    /// Path the current text would be created at.
    pub fn target_path(&self) -> PathBuf {
        target_path(
            &self.request.base_path,
            &self.state.current_text,
            &self.request.extension,
        )
    }

    /// Returns whether confirm is enabled afterwards.
    pub fn on_text_changed(&mut self, text: impl Into<String>) -> bool {
        if self.is_closed() {
            return false;
        }

        self.state.current_text = text.into();
        self.state.error = None;
        self.revalidate();
        self.confirm_enabled()
    }

    pub fn on_confirm(&mut self) -> TemplateResult<ConfirmOutcome> {
        if self.is_closed() {
            return Ok(ConfirmOutcome::Closed);
        }

        // Enter in the text field reaches here without the button's enablement check.
        self.revalidate();
        if let Some(problem) = self.state.problem {
            log::debug!("Rejected {:?}: {}", self.state.current_text, problem);
            return Ok(ConfirmOutcome::Rejected(problem));
        }

        let path = self.target_path();
        match (self.request.create)(&path) {
            Ok(()) => {
                self.phase = DialogPhase::Confirmed;
                self.state.error = None;
                Ok(ConfirmOutcome::Created(path))
            }
            Err(e) => {
                log::warn!("Creating {} failed: {}", path.display(), e);
                self.state.error = Some(e.to_string());
                self.revalidate();
                Err(e)
            }
        }
    }

    pub fn on_cancel(&mut self) {
        if self.phase == DialogPhase::Editing {
            log::debug!("Dialog {:?} cancelled", self.request.title);
            self.phase = DialogPhase::Cancelled;
        }
    }

    fn revalidate(&mut self) {
        self.state.problem = check_name(
            &self.request.base_path,
            &self.state.current_text,
            &self.request.extension,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::types::TemplateError;
    use std::cell::RefCell;
    use std::fs::File;
    use std::path::Path;
    use std::rc::Rc;
    use tempfile::tempdir;

    fn recording_request(base: &Path, calls: Rc<RefCell<Vec<PathBuf>>>) -> CreationRequest {
        CreationRequest {
            title: "New Textfile".to_string(),
            default_name: "New Textfile".to_string(),
            base_path: base.to_path_buf(),
            extension: "txt".to_string(),
            create: Box::new(move |path: &Path| -> TemplateResult<()> {
                calls.borrow_mut().push(path.to_path_buf());
                File::create(path).map_err(|e| TemplateError::io(path, e))?;
                Ok(())
            }),
        }
    }

    #[test]
    fn starts_editing_with_default_name() {
        let dir = tempdir().unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let dialog: NameDialog<()> = NameDialog::new(recording_request(dir.path(), calls), None);

        assert_eq!(dialog.phase(), DialogPhase::Editing);
        assert_eq!(dialog.state().current_text, "New Textfile");
        assert!(dialog.confirm_enabled());
        assert_eq!(dialog.title(), "New Textfile (.txt)");
    }

    #[test]
    fn empty_text_disables_confirm() {
        let dir = tempdir().unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut dialog: NameDialog<()> =
            NameDialog::new(recording_request(dir.path(), calls.clone()), None);

        assert!(!dialog.on_text_changed(""));
        assert_eq!(dialog.state().problem, Some(NameProblem::Empty));
        assert_eq!(dialog.on_confirm().unwrap(), ConfirmOutcome::Rejected(NameProblem::Empty));
        assert_eq!(dialog.phase(), DialogPhase::Editing);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn colliding_name_disables_confirm() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut dialog: NameDialog<()> =
            NameDialog::new(recording_request(dir.path(), calls.clone()), None);

        assert!(!dialog.on_text_changed("notes"));
        assert_eq!(dialog.on_confirm().unwrap(), ConfirmOutcome::Rejected(NameProblem::Exists));
        assert!(dialog.on_text_changed("notes 2"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn confirm_rechecks_collision_made_after_edit() {
        let dir = tempdir().unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut dialog: NameDialog<()> =
            NameDialog::new(recording_request(dir.path(), calls.clone()), None);

        assert!(dialog.on_text_changed("late"));
        File::create(dir.path().join("late.txt")).unwrap();

        assert_eq!(dialog.on_confirm().unwrap(), ConfirmOutcome::Rejected(NameProblem::Exists));
        assert!(!dialog.confirm_enabled());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn confirm_creates_once_and_closes() {
        let dir = tempdir().unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut dialog: NameDialog<()> =
            NameDialog::new(recording_request(dir.path(), calls.clone()), None);

        dialog.on_text_changed("todo");
        let expected = dir.path().join("todo.txt");
        assert_eq!(dialog.on_confirm().unwrap(), ConfirmOutcome::Created(expected.clone()));
        assert_eq!(dialog.phase(), DialogPhase::Confirmed);

        // Further events are ignored once closed.
        assert_eq!(dialog.on_confirm().unwrap(), ConfirmOutcome::Closed);
        assert!(!dialog.on_text_changed("other"));
        dialog.on_cancel();
        assert_eq!(dialog.phase(), DialogPhase::Confirmed);

        assert_eq!(*calls.borrow(), vec![expected]);
    }

    #[test]
    fn cancel_never_creates() {
        let dir = tempdir().unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut dialog: NameDialog<()> =
            NameDialog::new(recording_request(dir.path(), calls.clone()), None);

        dialog.on_cancel();
        assert_eq!(dialog.phase(), DialogPhase::Cancelled);
        assert_eq!(dialog.on_confirm().unwrap(), ConfirmOutcome::Closed);
        assert!(calls.borrow().is_empty());
        assert!(!dir.path().join("New Textfile.txt").exists());
    }

    #[test]
    fn path_separators_are_rejected() {
        let dir = tempdir().unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut dialog: NameDialog<()> =
            NameDialog::new(recording_request(dir.path(), calls.clone()), None);

        assert!(!dialog.on_text_changed("../outside"));
        assert_eq!(
            dialog.on_confirm().unwrap(),
            ConfirmOutcome::Rejected(NameProblem::Separator)
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn creation_failure_keeps_dialog_open() {
        let dir = tempdir().unwrap();
        let request = CreationRequest {
            title: "New Document".to_string(),
            default_name: "New Document".to_string(),
            base_path: dir.path().to_path_buf(),
            extension: "odt".to_string(),
            create: Box::new(|path: &Path| -> TemplateResult<()> {
                Err(TemplateError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                ))
            }),
        };
        let mut dialog = NameDialog::new(request, Some("main-window"));

        assert!(dialog.on_confirm().is_err());
        assert_eq!(dialog.phase(), DialogPhase::Editing);
        assert!(dialog.state().error.as_deref().unwrap().contains("read-only"));
        assert_eq!(dialog.parent(), Some(&"main-window"));

        // Editing clears the stale message.
        dialog.on_text_changed("Other");
        assert_eq!(dialog.state().error, None);
    }
}
