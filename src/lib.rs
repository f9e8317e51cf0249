//! webide - 浏览器 IDE 的无界面工作区核心
//!
//! 模块结构：
//! - models: 数据模型（FileTree）
//! - kernel: 状态/动作/副作用（EditorSession, GitState, Store）
//! - script: 命令脚本回放
//! - logging: tracing 初始化

pub mod kernel;
pub mod logging;
pub mod models;
pub mod script;
