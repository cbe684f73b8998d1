//! # 增量同步计划
//!
//! 对比输入目录和输出目录，按文件名把输入文件分为待处理和已存在两类。
//!
//! ## 依赖关系
//! - 被 `batch/processor.rs` 调用
//! - 使用 `batch/collector.rs`

use super::collector::FileCollector;
use crate::error::Result;

use std::collections::BTreeSet;
use std::path::Path;

/// 单个文件的同步状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// 输出目录中不存在同名文件，将由外部工具生成
    Pending(String),
    /// 输出目录中已存在同名文件，保持不变
    Existing(String),
}

impl FileStatus {
    /// 文件名
    pub fn name(&self) -> &str {
        match self {
            FileStatus::Pending(name) | FileStatus::Existing(name) => name,
        }
    }
}

/// 同步计划
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    /// 待处理文件
    pub pending: Vec<String>,
    /// 已存在（跳过）文件
    pub existing: Vec<String>,
}

impl SyncPlan {
    /// 扫描两个目录生成计划
    pub fn scan(input: &Path, output: &Path) -> Result<Self> {
        let inputs = FileCollector::new(input).collect()?;
        let outputs = FileCollector::new(output).collect()?;
        Ok(Self::from_names(inputs, outputs))
    }

    /// 由文件名列表生成计划（精确字符串匹配）
    pub fn from_names(inputs: Vec<String>, outputs: Vec<String>) -> Self {
        let outputs: BTreeSet<String> = outputs.into_iter().collect();
        let mut plan = SyncPlan::default();

        for name in inputs {
            plan.merge(if outputs.contains(&name) {
                FileStatus::Existing(name)
            } else {
                FileStatus::Pending(name)
            });
        }

        plan
    }

    /// 合并单个文件状态
    pub fn merge(&mut self, status: FileStatus) {
        match status {
            FileStatus::Pending(name) => self.pending.push(name),
            FileStatus::Existing(name) => self.existing.push(name),
        }
    }

    /// 按文件名排序的全部状态
    pub fn entries(&self) -> Vec<FileStatus> {
        let mut entries: Vec<FileStatus> = self
            .pending
            .iter()
            .cloned()
            .map(FileStatus::Pending)
            .chain(self.existing.iter().cloned().map(FileStatus::Existing))
            .collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        entries
    }

    /// 输入文件总数
    pub fn total(&self) -> usize {
        self.pending.len() + self.existing.len()
    }

    /// 是否已全部处理
    pub fn is_up_to_date(&self) -> bool {
        self.pending.is_empty()
    }
}
