//! # 增量批处理器
//!
//! 校验配置与目录，生成同步计划，并把整批文件一次性交给外部标注工具。
//!
//! ## 功能
//! - 颜色检查先于任何文件 I/O
//! - 输入/输出目录校验先于任何外部调用
//! - 每次运行只调用一次外部工具（dry run 时不调用）
//! - 外部工具失败直接上抛，不重试
//! - verbose 模式下打印同步计划表格和命令行；dry run 总是打印命令行
//! - 执行后重新扫描输出目录，统计实际生成的文件
//!
//! 已存在输出文件的 skip-if-exists 语义由外部工具负责，本模块不复制文件。
//!
//! ## 依赖关系
//! - 被 `commands/annotate.rs` 调用
//! - 使用 `batch/plan.rs`, `annotator.rs`
//! - 使用 `utils/output.rs` 输出计划

use super::collector::FileCollector;
use super::plan::{FileStatus, SyncPlan};
use crate::annotator::{Annotator, AnnotatorInvocation};
use crate::error::{Result, TimestampError};
use crate::models::TimestampOptions;
use crate::utils::output;

use std::collections::BTreeSet;
use std::path::Path;
use tabled::{Table, Tabled};

/// 已通过校验、尚未执行的运行
#[derive(Debug, Clone)]
struct PreparedRun {
    plan: SyncPlan,
    invocation: AnnotatorInvocation,
}

/// 运行结果
#[derive(Debug, Clone)]
pub struct RunReport {
    /// 同步计划
    pub plan: SyncPlan,
    /// 外部工具是否实际执行
    pub executed: bool,
    /// 运行后实际出现在输出目录中的待处理文件
    pub stamped: Vec<String>,
}

impl RunReport {
    /// 待处理但运行后仍未出现在输出目录中的文件
    pub fn missing(&self) -> Vec<&str> {
        self.plan
            .pending
            .iter()
            .filter(|name| !self.stamped.contains(name))
            .map(String::as_str)
            .collect()
    }
}

/// 计划表格行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// 增量批处理器
pub struct BatchProcessor<A: Annotator> {
    /// 外部标注工具
    annotator: A,
    /// 仅生成调用，不执行
    dry_run: bool,
    /// 打印同步计划
    verbose: bool,
}

impl<A: Annotator> BatchProcessor<A> {
    /// 创建新的批处理器
    pub fn new(annotator: A) -> Self {
        Self {
            annotator,
            dry_run: false,
            verbose: false,
        }
    }

    /// 设置 dry run
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 设置是否打印计划表格
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 校验、生成计划并执行
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        options: &TimestampOptions,
    ) -> Result<RunReport> {
        let prepared = self.prepare(input, output, options)?;
        self.report(&prepared, input);
        self.execute(prepared)
    }

    /// 校验并生成计划
    fn prepare(
        &self,
        input: &Path,
        output: &Path,
        options: &TimestampOptions,
    ) -> Result<PreparedRun> {
        options.validate()?;
        ensure_directory(input)?;
        ensure_directory(output)?;

        let plan = SyncPlan::scan(input, output)?;
        let invocation = AnnotatorInvocation::new(self.annotator.program(), options, input, output);

        Ok(PreparedRun { plan, invocation })
    }

    /// 打印计划与命令行
    fn report(&self, prepared: &PreparedRun, input: &Path) {
        if !self.verbose {
            if self.dry_run {
                output::print_command(&prepared.invocation.command_line(), true);
            }
            return;
        }

        let plan = &prepared.plan;
        output::print_info(&format!(
            "Found {} files in '{}': {} new, {} already stamped",
            plan.total(),
            input.display(),
            plan.pending.len(),
            plan.existing.len()
        ));

        if plan.total() == 0 {
            output::print_warning("No files found in the input directory");
        } else {
            let rows: Vec<PlanRow> = plan
                .entries()
                .into_iter()
                .map(|entry| PlanRow {
                    file: entry.name().to_string(),
                    status: match entry {
                        FileStatus::Pending(_) => "new",
                        FileStatus::Existing(_) => "exists, skipped",
                    },
                })
                .collect();
            println!("{}", Table::new(rows));
        }

        if plan.is_up_to_date() {
            output::print_skip("Output directory is already up to date");
        }

        output::print_command(&prepared.invocation.command_line(), self.dry_run);
    }

    /// 执行已准备好的运行
    fn execute(&self, prepared: PreparedRun) -> Result<RunReport> {
        if self.dry_run {
            return Ok(RunReport {
                plan: prepared.plan,
                executed: false,
                stamped: Vec::new(),
            });
        }

        self.annotator.annotate(&prepared.invocation)?;

        // 重新扫描输出目录，只统计实际生成的文件
        let present: BTreeSet<String> = FileCollector::new(&prepared.invocation.output_dir)
            .collect()?
            .into_iter()
            .collect();
        let stamped = prepared
            .plan
            .pending
            .iter()
            .filter(|name| present.contains(*name))
            .cloned()
            .collect();

        Ok(RunReport {
            plan: prepared.plan,
            executed: true,
            stamped,
        })
    }
}

/// 检查路径存在且为目录
fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(TimestampError::DirectoryNotFound {
            path: path.display().to_string(),
        })
    }
}
