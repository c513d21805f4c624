//! Repository paths derived from the settings loader location.
//!
//! Responsibilities:
//! - Compute the repository layout (source dir, AML assets, ETL code, env specs)
//!   from the location of the settings source file.
//!
//! Does NOT handle:
//! - Any filesystem I/O. Paths are neither checked for existence nor created.
//!
//! Invariants:
//! - `src_dir` is the directory containing the loader location.
//! - `repo_root` is the parent of `src_dir`.
//! - A path with no parent (a root or an empty path) is its own parent.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::constants::{AML_DIR_NAME, AML_ENV_DIR_NAME, ETL_DIR_NAME, PANDAS_PARQUET_ENV_FILE_NAME};

/// Filesystem locations computed once from the loader location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedPaths {
    repo_root: PathBuf,
    src_dir: PathBuf,
    aml_dir: PathBuf,
    etl_code_dir: PathBuf,
    aml_env_dir: PathBuf,
    pandas_parquet_env_file: PathBuf,
}

impl DerivedPaths {
    /// Derive the repository layout from the path of the settings source file.
    pub fn from_loader_location(location: &Path) -> Self {
        let src_dir = parent_or_self(location);
        let repo_root = parent_or_self(&src_dir);
        let aml_dir = repo_root.join(AML_DIR_NAME);
        let etl_code_dir = src_dir.join(ETL_DIR_NAME);
        let aml_env_dir = aml_dir.join(AML_ENV_DIR_NAME);
        let pandas_parquet_env_file = aml_env_dir.join(PANDAS_PARQUET_ENV_FILE_NAME);

        Self {
            repo_root,
            src_dir,
            aml_dir,
            etl_code_dir,
            aml_env_dir,
            pandas_parquet_env_file,
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    pub fn aml_dir(&self) -> &Path {
        &self.aml_dir
    }

    pub fn etl_code_dir(&self) -> &Path {
        &self.etl_code_dir
    }

    pub fn aml_env_dir(&self) -> &Path {
        &self.aml_env_dir
    }

    pub fn pandas_parquet_env_file(&self) -> &Path {
        &self.pandas_parquet_env_file
    }

    /// Name/path pairs in declaration order, for display.
    pub fn entries(&self) -> [(&'static str, &Path); 6] {
        [
            ("repo_root", self.repo_root()),
            ("src_dir", self.src_dir()),
            ("aml_dir", self.aml_dir()),
            ("etl_code_dir", self.etl_code_dir()),
            ("aml_env_dir", self.aml_env_dir()),
            ("pandas_parquet_env_file", self.pandas_parquet_env_file()),
        ]
    }
}

fn parent_or_self(path: &Path) -> PathBuf {
    path.parent().unwrap_or(path).to_path_buf()
}
