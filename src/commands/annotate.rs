//! # 标注命令实现
//!
//! 把 CLI 参数交给增量批处理器，并输出运行信息。
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/processor.rs`, `annotator.rs`
//! - 使用 `utils/output.rs`

use crate::annotator::CommandAnnotator;
use crate::batch::BatchProcessor;
use crate::cli::Cli;
use crate::error::Result;
use crate::models::TimestampOptions;
use crate::utils::output;

/// 执行标注命令
pub fn execute(cli: Cli) -> Result<()> {
    if !cli.quiet {
        output::print_banner(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }

    let options = TimestampOptions::from(&cli.options);
    let annotator = CommandAnnotator::new(cli.annotator.as_str()).show_progress(!cli.quiet);
    let processor = BatchProcessor::new(annotator)
        .dry_run(cli.dry_run)
        .verbose(!cli.quiet);

    let report = processor.run(&cli.input_dir, &cli.output_dir, &options)?;

    if !cli.quiet {
        output::print_separator();
    }
    if report.executed {
        let missing = report.missing();
        if !missing.is_empty() {
            output::print_warning(&format!(
                "{} of {} new files did not appear in the output directory: {}",
                missing.len(),
                report.plan.pending.len(),
                missing.join(", ")
            ));
        }
        output::print_done(&format!(
            "Stamped {} new files into '{}' ({} left untouched)",
            report.stamped.len(),
            cli.output_dir.display(),
            report.plan.existing.len()
        ));
    } else {
        output::print_done(&format!(
            "Dry run: {} files would be stamped",
            report.plan.pending.len()
        ));
    }

    Ok(())
}
