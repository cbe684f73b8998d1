//! # 时间戳选项数据模型
//!
//! 传递给外部标注工具的全部格式化选项。除前景色/背景色相等检查外，
//! 所有值都视为不透明字符串，由外部工具负责校验。
//!
//! ## 依赖关系
//! - 由 `cli/options.rs` 的参数转换而来
//! - 被 `batch/processor.rs`, `annotator.rs` 使用

use crate::error::{Result, TimestampError};

/// 时间戳格式化选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampOptions {
    /// 时间格式字符串 (strftime)
    pub format: String,

    /// 显式时间 (ISO 8601 / RFC 2616)，空字符串表示从文件元数据读取
    pub time: String,

    /// 字体大小
    pub font_size: String,

    /// 字体
    pub font_family: String,

    /// 字体颜色
    pub font_color: String,

    /// 背景颜色
    pub background: String,

    /// IANA 时区，空字符串表示从文件元数据读取
    pub timezone: String,

    /// 坐标原点（象限）
    pub origin: String,

    /// X 偏移
    pub x: String,

    /// Y 偏移
    pub y: String,

    /// 字体内边距
    pub font_padding: String,

    /// 额外 Ruby 库（逗号分隔）
    pub require: String,
}

impl Default for TimestampOptions {
    fn default() -> Self {
        TimestampOptions {
            format: "%Y-%m-%d %H:%M:%S".to_string(),
            time: String::new(),
            font_size: "32".to_string(),
            font_family: "DejaVu Sans".to_string(),
            font_color: "white".to_string(),
            background: "black".to_string(),
            timezone: String::new(),
            origin: "top-left".to_string(),
            x: "32".to_string(),
            y: "32".to_string(),
            font_padding: "8".to_string(),
            require: String::new(),
        }
    }
}

impl TimestampOptions {
    /// 检查前景色与背景色（区分大小写）
    pub fn validate(&self) -> Result<()> {
        if self.font_color == self.background {
            return Err(TimestampError::InvalidConfiguration(
                "Background color can not be the same as the foreground color".to_string(),
            ));
        }
        Ok(())
    }
}
