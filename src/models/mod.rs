//! # 数据模型模块
//!
//! 定义标注选项数据模型。
//!
//! ## 依赖关系
//! - 被 `cli/`, `batch/` 和 `annotator.rs` 使用
//! - 子模块: options

pub mod options;

pub use options::TimestampOptions;
