pub mod settings;

pub use settings::{GitSettings, Settings, SettingsError, WorkspaceSettings};
