//! # 外部标注工具调用
//!
//! 把 `TimestampOptions` 翻译为外部 `timestamp` 命令的参数列表，
//! 并以阻塞方式执行一次。
//!
//! ## 功能
//! - 选项到命令行参数的映射（可选参数为空时省略）
//! - `Annotator` trait：可注入的外部调用接口，测试中可替换为假实现
//! - `CommandAnnotator`：基于 `std::process::Command` 的真实实现
//!
//! ## 依赖关系
//! - 被 `batch/processor.rs` 调用
//! - 使用 `models/options.rs`, `utils/progress.rs`, `utils/output.rs`

use crate::error::{Result, TimestampError};
use crate::models::TimestampOptions;
use crate::utils::{output, progress};

use std::io::{self, ErrorKind, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 默认外部标注程序
pub const DEFAULT_PROGRAM: &str = "timestamp";

/// 一次外部标注调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorInvocation {
    /// 程序名
    pub program: String,
    /// 选项参数（不含目录）
    pub flags: Vec<String>,
    /// 输入目录
    pub input_dir: PathBuf,
    /// 输出目录
    pub output_dir: PathBuf,
}

impl AnnotatorInvocation {
    /// 根据选项构建调用
    pub fn new(program: &str, options: &TimestampOptions, input: &Path, output: &Path) -> Self {
        Self {
            program: program.to_string(),
            flags: build_flags(options),
            input_dir: input.to_path_buf(),
            output_dir: output.to_path_buf(),
        }
    }

    /// 生成可执行的 `Command`
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.flags)
            .arg(&self.input_dir)
            .arg(&self.output_dir);
        cmd
    }

    /// 用于显示的完整命令行
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.flags.len() + 3);
        parts.push(self.program.clone());
        parts.extend(self.flags.iter().cloned());
        parts.push(self.input_dir.display().to_string());
        parts.push(self.output_dir.display().to_string());
        parts.join(" ")
    }
}

/// 选项到参数的映射，顺序固定
fn build_flags(options: &TimestampOptions) -> Vec<String> {
    let mut flags = Vec::new();

    push_flag(&mut flags, "--format", &options.format);
    push_optional(&mut flags, "--time", &options.time);
    push_flag(&mut flags, "--font-size", &options.font_size);
    push_flag(&mut flags, "--font-family", &options.font_family);
    push_flag(&mut flags, "--font-color", &options.font_color);
    push_flag(&mut flags, "--background-color", &options.background);
    push_optional(&mut flags, "--time-zone", &options.timezone);
    push_flag(&mut flags, "--coordinate-origin", &options.origin);
    push_flag(&mut flags, "-x", &options.x);
    push_flag(&mut flags, "-y", &options.y);
    push_flag(&mut flags, "--font-padding", &options.font_padding);
    push_optional(&mut flags, "--require", &options.require);

    flags
}

fn push_flag(flags: &mut Vec<String>, name: &str, value: &str) {
    flags.push(name.to_string());
    flags.push(value.to_string());
}

fn push_optional(flags: &mut Vec<String>, name: &str, value: &str) {
    if !value.is_empty() {
        push_flag(flags, name, value);
    }
}

/// 外部标注工具接口
///
/// 实现者必须遵守 skip-if-exists 约定：读取输入目录中的每个非隐藏文件，
/// 仅当输出目录中不存在同名文件时才写入。
pub trait Annotator {
    /// 程序名（用于构建调用和显示）
    fn program(&self) -> &str;

    /// 阻塞执行一次调用
    fn annotate(&self, invocation: &AnnotatorInvocation) -> Result<()>;
}

/// 调用真实外部程序的标注器
pub struct CommandAnnotator {
    /// 程序名或路径
    program: String,
    /// 是否显示 spinner
    show_progress: bool,
}

impl CommandAnnotator {
    /// 创建新的标注器
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            show_progress: false,
        }
    }

    /// 设置是否在执行期间显示 spinner
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

impl Annotator for CommandAnnotator {
    fn program(&self) -> &str {
        &self.program
    }

    fn annotate(&self, invocation: &AnnotatorInvocation) -> Result<()> {
        // stdout 直通终端；spinner 只在 stdout 被重定向时显示，避免与子进程输出交错
        let spinner = (self.show_progress && !io::stdout().is_terminal())
            .then(|| progress::create_spinner(&format!("Running {}", invocation.program)));

        let result = invocation
            .to_command()
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output();

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let out = result.map_err(|e| match e.kind() {
            ErrorKind::NotFound => TimestampError::CommandNotFound {
                command: invocation.program.clone(),
            },
            _ => TimestampError::ExternalToolFailure {
                command: invocation.command_line(),
                status: None,
                stderr: e.to_string(),
            },
        })?;

        let stderr = String::from_utf8_lossy(&out.stderr).trim_end().to_string();

        if out.status.success() {
            if !stderr.trim().is_empty() {
                output::print_warning(&format!("{} reported:", invocation.program));
                output::print_tool_stderr(&stderr);
            }
            Ok(())
        } else {
            Err(TimestampError::ExternalToolFailure {
                command: invocation.command_line(),
                status: out.status.code(),
                stderr,
            })
        }
    }
}
