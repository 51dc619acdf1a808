/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Writing generated files to disk, or comparing them with what is already there.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Writes every file into `output`, creating the directory if needed.
pub fn write_files(output: &Path, files: &BTreeMap<&'static str, String>) -> Result<()> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {:?}", output))?;
    for (name, contents) in files {
        let path = output.join(name);
        fs::write(&path, contents).with_context(|| format!("Failed to write {:?}", path))?;
        tracing::info!(file = %path.display(), "wrote generated file");
    }
    Ok(())
}

/// Returns the names of the files in `output` that are missing or differ from `files`.
pub fn stale_files(output: &Path, files: &BTreeMap<&'static str, String>) -> Result<Vec<String>> {
    let mut stale = Vec::new();
    for (name, expected) in files {
        let path = output.join(name);
        let current = match fs::read_to_string(&path) {
            Ok(current) => Some(current),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {:?}", path));
            }
        };
        let up_to_date = current.as_deref() == Some(expected.as_str());
        tracing::info!(file = %path.display(), up_to_date, "checked generated file");
        if !up_to_date {
            stale.push(name.to_string());
        }
    }
    Ok(stale)
}

#[cfg(test)]
mod test {
    use super::{stale_files, write_files};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn files() -> BTreeMap<&'static str, String> {
        let mut files = BTreeMap::new();
        files.insert("lib.rs", "pub mod model;\n".to_owned());
        files.insert("model.rs", "pub struct Tag {}\n".to_owned());
        files
    }

    #[test]
    fn written_files_are_up_to_date() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("src");
        write_files(&output, &files()).unwrap();
        assert!(stale_files(&output, &files()).unwrap().is_empty());
    }

    #[test]
    fn missing_and_edited_files_are_stale() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &files()).unwrap();
        std::fs::write(dir.path().join("model.rs"), "// edited\n").unwrap();

        let mut expected = files();
        expected.insert("error.rs", String::new());
        assert_eq!(
            stale_files(dir.path(), &expected).unwrap(),
            vec!["error.rs".to_owned(), "model.rs".to_owned()]
        );
    }
}
