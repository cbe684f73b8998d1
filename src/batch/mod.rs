//! # 批量处理模块
//!
//! 提供增量目录同步能力：输出目录中已存在的同名文件保持不变，
//! 其余文件交给外部标注工具生成。
//!
//! ## 功能
//! - 收集输入/输出目录的文件列表
//! - 生成同步计划（待处理 / 已存在）
//! - 校验并执行一次外部调用
//!
//! ## 依赖关系
//! - 被 `commands/annotate.rs` 使用
//! - 使用 `annotator.rs` 执行外部调用
//! - 使用 `tabled` 打印计划表格

pub mod collector;
pub mod plan;
pub mod processor;

pub use processor::BatchProcessor;
