//! # timestampmaker - 增量时间戳标注工具
//!
//! 把输入目录中的媒体文件交给外部 `timestamp` 工具叠加时间戳，
//! 写入输出目录。输出目录中已存在的同名文件保持不变，
//! 因此重复运行是安全的。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (目录扫描、同步计划、批处理器)
//!   │     ├── annotator  (外部工具调用)
//!   │     └── models/    (选项数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod annotator;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;
use error::TimestampError;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        if let TimestampError::ExternalToolFailure { stderr, .. } = &e {
            utils::output::print_tool_stderr(stderr);
        }
        std::process::exit(e.exit_code());
    }
}
