use super::dialog::NameDialog;
use super::naming::find_empty_name;
use super::odf;
use super::types::{CreationRequest, DocumentKind, LocaleTags, MenuAction, MenuItem};
use std::path::{Path, PathBuf};

pub const TEMPLATES_ID: &str = "Templates::Templates";
pub const TEMPLATES_LABEL: &str = "Templates";

/// Host file-manager plugin seam.
pub trait MenuProvider {
    type Window;

    /// Right-click on empty space in a folder view.
    fn build_background_menu(&mut self, window: Self::Window, folder: &Path) -> Vec<MenuItem>;

    /// Right-click on a selection of files.
    fn build_file_menu(&mut self, _window: Self::Window, _files: &[PathBuf]) -> Vec<MenuItem> {
        Vec::new()
    }
}

/// Offers the "Templates" submenu and opens name dialogs for its actions.
pub struct TemplateMenuProvider<W> {
    locale: LocaleTags,
    window: Option<W>,
}

impl<W: Clone> TemplateMenuProvider<W> {
    pub fn new(locale: LocaleTags) -> Self {
        Self {
            locale,
            window: None,
        }
    }

    /// Window of the most recent menu request.
    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    /// Resolves a free default name for `action` and opens a dialog for it,
    /// parented on the window that last asked for the menu.
    pub fn activate(&self, action: &MenuAction) -> NameDialog<W> {
        let kind = action.kind;
        let default_name = find_empty_name(&action.folder, kind.label(), kind.extension());

        log::debug!("Activated {} in {}", kind, action.folder.display());

        let request = CreationRequest {
            title: kind.label().to_string(),
            default_name,
            base_path: action.folder.clone(),
            extension: kind.extension().to_string(),
            create: odf::creator(kind, self.locale.clone()),
        };

        NameDialog::new(request, self.window.clone())
    }
}

impl<W: Clone> MenuProvider for TemplateMenuProvider<W> {
    type Window = W;

    fn build_background_menu(&mut self, window: W, folder: &Path) -> Vec<MenuItem> {
        self.window = Some(window);

        let submenu = DocumentKind::ALL
            .iter()
            .map(|&kind| {
                MenuItem::new(kind.item_id(), kind.label()).with_action(MenuAction {
                    kind,
                    folder: folder.to_path_buf(),
                })
            })
            .collect();

        vec![MenuItem::new(TEMPLATES_ID, TEMPLATES_LABEL).with_submenu(submenu)]
    }
}
