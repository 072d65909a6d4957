//! Fixture builders for e2e tests

use anyhow::{Context, Result};
use rn_advisor::models::{Category, Finding};
use std::path::Path;
use tempfile::TempDir;

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, content).with_context(|| format!("Failed to write {relative}"))
}

/// Create a temporary project from `(relative path, content)` pairs.
pub fn project(files: &[(&str, &str)]) -> Result<TempDir> {
    let temp = TempDir::new().context("Failed to create temp directory")?;
    for (relative, content) in files {
        write_file(temp.path(), relative, content)?;
    }
    Ok(temp)
}

pub fn files_of(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(Finding::file).collect()
}

pub fn in_category<'a>(findings: &'a [Finding], category: Category) -> Vec<&'a Finding> {
    findings
        .iter()
        .filter(|finding| finding.category() == category)
        .collect()
}

/// The three-file tree: a secret in config, a FlatList without keys and a test file.
pub fn mixed_project() -> Result<TempDir> {
    project(&[
        (
            "src/Config.ts",
            "export const API_KEY = \"sk_live_51HxYzAbCdEf\";\n",
        ),
        (
            "src/Feed.tsx",
            "import React from 'react';\n\
             import { FlatList } from 'react-native';\n\
             \n\
             export default function Feed({ items }) {\n\
             \x20 return <FlatList data={items} renderItem={renderRow} />;\n\
             }\n",
        ),
        (
            "src/Foo.test.tsx",
            "it('runs', () => { eval(payload); });\n",
        ),
    ])
}
