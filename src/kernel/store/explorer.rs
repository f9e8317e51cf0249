use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        let tree = &mut self.state.tree;
        let result = match action {
            Action::CreateFile { parent, name } => tree.create_file(&parent, &name).map(|_| true),
            Action::CreateFolder { parent, name } => {
                tree.create_folder(&parent, &name).map(|_| true)
            }
            Action::DeletePath { path } => tree.delete(&path).map(|_| true),
            Action::ToggleFolder { path } => tree.toggle_folder(&path).map(|_| true),
            _ => return super::DispatchResult::unchanged(),
        };
        super::DispatchResult::from_result(result)
    }
}
