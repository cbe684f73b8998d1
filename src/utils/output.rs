//! # 美化输出工具
//!
//! 提供统一的终端输出样式。状态信息走 stdout，错误走 stderr。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印外部命令的 stderr（缩进、变暗）
pub fn print_tool_stderr(stderr: &str) {
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        eprintln!("      {}", line.dimmed());
    }
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印即将执行的命令
pub fn print_command(command_line: &str, dry_run: bool) {
    let tag = if dry_run { "[DRY]" } else { "[RUN]" };
    println!("{} {}", tag.cyan().bold(), command_line);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏（程序名 + 版本）
pub fn print_banner(name: &str, version: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {} {}", name.bold(), format!("v{}", version).dimmed());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
