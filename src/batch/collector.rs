//! # 文件收集器
//!
//! 非递归列出目录中的普通文件名。
//!
//! ## 功能
//! - 仅收集目录第一层的普通文件
//! - 排除隐藏文件（以 `.` 开头）
//! - 结果按文件名排序
//!
//! ## 依赖关系
//! - 被 `batch/plan.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{Result, TimestampError};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 目录路径
    dir: PathBuf,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 收集所有非隐藏文件名
    pub fn collect(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // 目录内的失效链接等单项错误直接跳过
                Err(e) if e.depth() > 0 => continue,
                Err(e) => {
                    return Err(TimestampError::FileReadError {
                        path: self.dir.display().to_string(),
                        source: e.into(),
                    })
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(name) = Self::visible_name(entry.path()) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// 非隐藏文件的文件名
    fn visible_name(path: &Path) -> Option<String> {
        let name = path.file_name()?.to_string_lossy();
        if Self::is_hidden(&name) {
            None
        } else {
            Some(name.into_owned())
        }
    }

    /// 是否为隐藏文件
    pub fn is_hidden(name: &str) -> bool {
        name.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_hidden() {
        assert!(FileCollector::is_hidden(".DS_Store"));
        assert!(FileCollector::is_hidden(".a.jpg"));
        assert!(!FileCollector::is_hidden("a.jpg"));
        assert!(!FileCollector::is_hidden("a.jpg."));
    }

    #[test]
    fn test_collect_skips_hidden_and_subdirs() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.jpg"), b"b").unwrap();
        fs::write(tmp.path().join("a.jpg"), b"a").unwrap();
        fs::write(tmp.path().join(".hidden"), b"h").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("c.jpg"), b"c").unwrap();

        let names = FileCollector::new(tmp.path()).collect().unwrap();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_collect_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(FileCollector::new(tmp.path()).collect().unwrap().is_empty());
    }

    #[test]
    fn test_collect_unreadable_dir_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");

        let err = FileCollector::new(&missing).collect().unwrap_err();
        match err {
            TimestampError::FileReadError { path, .. } => {
                assert_eq!(path, missing.display().to_string())
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
