//! # 标注选项 CLI 定义
//!
//! 原样转发给外部 `timestamp` 工具的格式化选项。
//! 每个选项都可通过 `TIMESTAMPMAKER_*` 环境变量设置。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 转换为 `models/options.rs` 中的 `TimestampOptions`

use crate::models::TimestampOptions;

use clap::{Args, ValueEnum};

/// 可用字体
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FontFamily {
    #[value(name = "Century Schoolbook")]
    CenturySchoolbook,
    #[value(name = "DejaVu Sans")]
    DejaVuSans,
    #[value(name = "Lato")]
    Lato,
}

impl FontFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::CenturySchoolbook => "Century Schoolbook",
            FontFamily::DejaVuSans => "DejaVu Sans",
            FontFamily::Lato => "Lato",
        }
    }
}

/// 时间戳所在象限
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CoordinateOrigin {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CoordinateOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateOrigin::TopLeft => "top-left",
            CoordinateOrigin::TopRight => "top-right",
            CoordinateOrigin::BottomLeft => "bottom-left",
            CoordinateOrigin::BottomRight => "bottom-right",
        }
    }
}

/// 标注选项参数
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Time format string
    #[arg(short = 'f', long, env = "TIMESTAMPMAKER_FORMAT", default_value = "%Y-%m-%d %H:%M:%S")]
    pub format: String,

    /// ISO 8601 or RFC 2616 string. By default, retrieves from file's metadata
    #[arg(short = 't', long, env = "TIMESTAMPMAKER_TIME", default_value = "")]
    pub time: String,

    /// Size of the font used in the timestamp
    #[arg(long, env = "TIMESTAMPMAKER_FONT_SIZE", default_value = "32")]
    pub font_size: String,

    /// Font to use
    #[arg(long, value_enum, env = "TIMESTAMPMAKER_FONT_FAMILY", default_value = "DejaVu Sans")]
    pub font_family: FontFamily,

    /// Name or color code of the font
    #[arg(long, env = "TIMESTAMPMAKER_FONT_COLOR", default_value = "white")]
    pub font_color: String,

    /// Name or color code of the background
    #[arg(
        long = "background-color",
        env = "TIMESTAMPMAKER_BACKGROUND_COLOR",
        default_value = "black"
    )]
    pub background: String,

    /// IANA time zone. By default, retrieves from media file's metadata
    #[arg(long = "time-zone", env = "TIMESTAMPMAKER_TIME_ZONE", default_value = "")]
    pub timezone: String,

    /// Quadrant of the media where the timestamp will appear
    #[arg(
        long = "coordinate-origin",
        value_enum,
        env = "TIMESTAMPMAKER_COORDINATE_ORIGIN",
        default_value = "top-left"
    )]
    pub origin: CoordinateOrigin,

    /// X coordinate of the timestamp
    #[arg(short = 'x', long = "x-coordinate", env = "TIMESTAMPMAKER_X", default_value = "32")]
    pub x: String,

    /// Y coordinate of the timestamp
    #[arg(short = 'y', long = "y-coordinate", env = "TIMESTAMPMAKER_Y", default_value = "32")]
    pub y: String,

    /// Padding around font in timestamp
    #[arg(long, env = "TIMESTAMPMAKER_FONT_PADDING", default_value = "8")]
    pub font_padding: String,

    /// Comma-separated Ruby libs
    #[arg(short = 'r', long, env = "TIMESTAMPMAKER_REQUIRE", default_value = "")]
    pub require: String,
}

impl From<&AnnotateArgs> for TimestampOptions {
    fn from(args: &AnnotateArgs) -> Self {
        TimestampOptions {
            format: args.format.clone(),
            time: args.time.clone(),
            font_size: args.font_size.clone(),
            font_family: args.font_family.as_str().to_string(),
            font_color: args.font_color.clone(),
            background: args.background.clone(),
            timezone: args.timezone.clone(),
            origin: args.origin.as_str().to_string(),
            x: args.x.clone(),
            y: args.y.clone(),
            font_padding: args.font_padding.clone(),
            require: args.require.clone(),
        }
    }
}
