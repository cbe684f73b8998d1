//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! `timestampmaker [OPTIONS] <INPUT_DIR> <OUTPUT_DIR>`
//! - 两个位置参数：输入目录、输出目录
//! - 标注选项（原样转发给外部工具）
//! - 运行控制：`--annotator`, `--dry-run`, `--quiet`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: options

pub mod options;

use crate::annotator::DEFAULT_PROGRAM;

use clap::Parser;
use std::path::PathBuf;

pub use options::AnnotateArgs;

/// timestampmaker - 增量时间戳标注
#[derive(Parser, Debug)]
#[command(name = "timestampmaker")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Stamp capture times onto media files, skipping files already present in the output directory",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the media files to stamp
    pub input_dir: PathBuf,

    /// Directory receiving the stamped files
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub options: AnnotateArgs,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// External annotator program
    #[arg(long, env = "TIMESTAMPMAKER_ANNOTATOR", default_value = DEFAULT_PROGRAM)]
    pub annotator: String,

    /// Only print the planned command, do not run it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Suppress the banner and the file table
    #[arg(short = 'q', long, default_value_t = false)]
    pub quiet: bool,
}
