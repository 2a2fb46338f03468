use crate::error::Result;
use chrono::{DateTime, Local};
use log::debug;
use rand::{Rng, distr::Alphanumeric};
use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

/// 临时工作根目录：未指定时使用系统临时目录
pub fn resolve_work_root(work_dir: Option<PathBuf>) -> PathBuf {
    match work_dir {
        Some(dir) => dir,
        None => std::env::temp_dir(),
    }
}

/// 在工作根目录下创建本次运行独占的临时目录
pub fn create_scratch_dir(work_root: &Path) -> Result<PathBuf> {
    let dir = work_root.join(generate_random_dir_name());
    create_dir_all(&dir)?;
    debug!("Created scratch directory {:?}", dir);
    Ok(dir)
}

fn generate_random_dir_name() -> String {
    let now: DateTime<Local> = Local::now();
    let timestamp = now.format("%Y%m%d_%H%M%S").to_string();
    let random_suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("asmtest_{}_{}", timestamp, random_suffix)
}

/// 写出文本文件，`None` 表示写到标准输出
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            write(path, content)?;
            debug!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_name_has_timestamp_and_suffix() {
        let name = generate_random_dir_name();
        let parts: Vec<&str> = name.split('_').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "asmtest");
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 6);
        assert_eq!(parts[3].len(), 6);
        assert!(parts[3].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn scratch_dirs_are_created_under_the_root() {
        let root = tempfile::tempdir().unwrap();
        let dir = create_scratch_dir(root.path()).unwrap();
        assert!(dir.is_dir());
        assert!(dir.starts_with(root.path()));
    }
}
