//! Generation run: the base document plus one merged variant per locale.
//!
//! A [`Generator`] owns the state of exactly one run: the output and locales
//! directories plus the list of every path it has written. The list makes a
//! failed run reversible: any error rolls back all files produced so far
//! before it is surfaced, so the output directory never holds a half-written
//! document set.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::codec;
use crate::error::GenerateError;
use crate::locales;
use crate::merge;

/// Directory and file stem shared by every generated document.
const DOC_NAME: &str = "swagger";

/// One generation run.
pub struct Generator {
    out_dir: PathBuf,
    locales_dir: PathBuf,
    generated: Vec<PathBuf>,
}

impl Generator {
    pub fn new(out_dir: impl Into<PathBuf>, locales_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            locales_dir: locales_dir.into(),
            generated: Vec::new(),
        }
    }

    /// Produce `swagger.json`/`swagger.yaml` from the API description, plus a
    /// merged `swagger.<locale>.json`/`.yaml` pair per locale override.
    ///
    /// Returns the ordered list of paths written (the `swagger/` directory
    /// first, then each file in write order).
    ///
    /// # Errors
    ///
    /// Any failure removes every file written so far and returns the
    /// originating [`GenerateError`] unchanged.
    pub fn generate<A: Serialize>(&mut self, api: &A) -> Result<Vec<PathBuf>, GenerateError> {
        self.generated.clear();
        match self.run(api) {
            Ok(()) => Ok(self.generated.clone()),
            Err(err) => {
                self.cleanup();
                Err(err)
            }
        }
    }

    fn run<A: Serialize>(&mut self, api: &A) -> Result<(), GenerateError> {
        let doc_dir = self.out_dir.join(DOC_NAME);
        if doc_dir.exists() {
            fs::remove_dir_all(&doc_dir).map_err(|e| GenerateError::io(&doc_dir, e))?;
        }
        fs::create_dir_all(&doc_dir).map_err(|e| GenerateError::io(&doc_dir, e))?;
        self.generated.push(doc_dir.clone());

        let base_json = serde_json::to_vec(api).map_err(GenerateError::encode)?;
        self.write(doc_dir.join(format!("{DOC_NAME}.json")), &base_json)?;

        // Re-decode through the exact-number path: the base document the
        // merger sees carries numeric literals as their original digit
        // strings, not as floats.
        let base = codec::decode_json("api description", &base_json)?;
        let base_yaml = codec::encode_yaml(&base)?;
        self.write(doc_dir.join(format!("{DOC_NAME}.yaml")), base_yaml.as_bytes())?;

        for locale in locales::discover(&self.locales_dir)? {
            let overlay = locale.load()?;
            let merged = merge::merge(&base, &overlay);

            let merged_json = codec::encode_json(&merged)?;
            self.write(
                doc_dir.join(format!("{DOC_NAME}.{}.json", locale.name)),
                &merged_json,
            )?;

            let merged_yaml = codec::encode_yaml(&merged)?;
            self.write(
                doc_dir.join(format!("{DOC_NAME}.{}.yaml", locale.name)),
                merged_yaml.as_bytes(),
            )?;
        }
        Ok(())
    }

    fn write(&mut self, path: PathBuf, bytes: &[u8]) -> Result<(), GenerateError> {
        fs::write(&path, bytes).map_err(|e| GenerateError::io(&path, e))?;
        self.generated.push(path);
        Ok(())
    }

    /// Remove every path recorded by the last [`Generator::generate`] call,
    /// files first, the directory last. Safe to call repeatedly.
    pub fn cleanup(&mut self) {
        for path in self.generated.drain(..).rev() {
            if path.is_dir() {
                let _ = fs::remove_dir(&path);
            } else {
                let _ = fs::remove_file(&path);
            }
        }
    }

    /// Paths written by the last run, in write order.
    pub fn generated(&self) -> &[PathBuf] {
        &self.generated
    }
}

// -------------------------------- Tests ---------------------------------- //
