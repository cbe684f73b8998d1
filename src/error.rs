//! # 统一错误处理模块
//!
//! 定义 timestampmaker 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// timestampmaker 统一错误类型
#[derive(Error, Debug)]
pub enum TimestampError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read directory: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error(
        "External command failed ({status_text}): {command}",
        status_text = describe_status(.status)
    )]
    ExternalToolFailure {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
}

impl TimestampError {
    /// 进程退出码：外部工具失败时沿用其退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            TimestampError::ExternalToolFailure {
                status: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TimestampError>;
