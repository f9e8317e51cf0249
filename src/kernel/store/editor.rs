use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_editor_action(&mut self, action: Action) -> super::DispatchResult {
        let editor = &mut self.state.editor;
        let result = match action {
            Action::OpenFile { path } => editor.open_file(&path),
            Action::CloseFile { path } => editor.close_file(&path).map(|()| true),
            Action::SetActiveFile { path } => editor.set_active_file(&path),
            Action::UpdateFileContent { path, content } => {
                editor.update_file_content(&path, &content).map(|()| true)
            }
            _ => return super::DispatchResult::unchanged(),
        };
        super::DispatchResult::from_result(result)
    }
}
