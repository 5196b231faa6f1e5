//! Console and JSON reporting.
//!
//! Human output follows the chain-parameter layout so generated lines can be
//! pasted straight into the parameter source.

use serde::Serialize;
use std::io::{self, Write};

use yottaflux_types::{ValidationResult, VersionByte};

/// One address with the outcome of validating it.
#[derive(Clone, Debug, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub address: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Which report is being written; selects the headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Generate,
    Validate,
    Check,
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub kind: ReportKind,
    pub version: VersionByte,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(kind: ReportKind, version: VersionByte) -> Self {
        Self {
            kind,
            version,
            entries: Vec::new(),
        }
    }

    pub fn push(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        result: ValidationResult,
    ) {
        self.entries.push(ReportEntry {
            name: name.into(),
            address: address.into(),
            result,
        });
    }

    pub fn all_valid(&self) -> bool {
        self.entries.iter().all(|e| e.result.ok)
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }

    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.kind {
            ReportKind::Generate => self.write_generate(out),
            ReportKind::Validate => {
                writeln!(
                    out,
                    "Validating current burn addresses against version byte {}:",
                    self.version
                )?;
                writeln!(out)?;
                self.write_listing(out, true)
            }
            ReportKind::Check => {
                writeln!(out, "Checking addresses against version byte {}:", self.version)?;
                writeln!(out)?;
                self.write_listing(out, false)
            }
        }
    }

    fn write_generate<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Generating burn addresses with version byte {}:", self.version)?;
        writeln!(out)?;

        let width = self.entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
        for entry in &self.entries {
            writeln!(out, "        {:width$} = \"{}\";", entry.name, entry.address)?;
        }

        writeln!(out)?;
        if self.all_valid() {
            writeln!(out, "All addresses validated successfully.")?;
        }
        writeln!(out)?;
        writeln!(out, "Verification:")?;
        for entry in &self.entries {
            writeln!(
                out,
                "  [{:7}] {}  ver={}",
                entry.result.status(),
                entry.address,
                version_str(&entry.result)
            )?;
        }
        Ok(())
    }

    fn write_listing<W: Write>(&self, out: &mut W, named: bool) -> io::Result<()> {
        for entry in &self.entries {
            let ver = match entry.result.version {
                Some(v) => format!("(ver={v})"),
                None => String::new(),
            };
            if named {
                write!(out, "  [{:7}] {}: ", entry.result.status(), entry.name)?;
            } else {
                write!(out, "  [{:7}] ", entry.result.status())?;
            }
            writeln!(out, "{}  {} {}", entry.address, ver, entry.result.detail)?;
        }
        Ok(())
    }
}

fn version_str(result: &ValidationResult) -> String {
    result
        .version
        .map(|v| v.to_string())
        .unwrap_or_else(|| "None".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBAL_BURN: &str = "YburnXXXXXXXXXXXXXXXXXXXXXXXYqtbxJ";

    fn render(report: &Report) -> String {
        let mut buf = Vec::new();
        report.write_human(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn generate_layout() {
        let mut report = Report::new(ReportKind::Generate, VersionByte::MAINNET);
        report.push(
            "strGlobalBurnAddress",
            GLOBAL_BURN,
            ValidationResult::valid(VersionByte::MAINNET),
        );
        let text = render(&report);
        assert!(text.starts_with("Generating burn addresses with version byte 78:\n"));
        assert!(text.contains("        strGlobalBurnAddress = \"YburnXXXXXXXXXXXXXXXXXXXXXXXYqtbxJ\";\n"));
        assert!(text.contains("All addresses validated successfully."));
        assert!(text.contains("  [VALID  ] YburnXXXXXXXXXXXXXXXXXXXXXXXYqtbxJ  ver=78\n"));
    }

    #[test]
    fn validate_layout_includes_detail() {
        let mut report = Report::new(ReportKind::Validate, VersionByte::TESTNET);
        report.push(
            "strGlobalBurnAddress",
            GLOBAL_BURN,
            ValidationResult::invalid(
                Some(VersionByte::MAINNET),
                "wrong version byte: 78 (expected 111)",
            ),
        );
        let text = render(&report);
        assert!(text.contains(
            "  [INVALID] strGlobalBurnAddress: YburnXXXXXXXXXXXXXXXXXXXXXXXYqtbxJ  (ver=78) wrong version byte: 78 (expected 111)"
        ));
        assert!(!report.all_valid());
    }

    #[test]
    fn json_report_flattens_result() {
        let mut report = Report::new(ReportKind::Check, VersionByte::MAINNET);
        report.push(GLOBAL_BURN, GLOBAL_BURN, ValidationResult::valid(VersionByte::MAINNET));
        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["kind"], "check");
        assert_eq!(value["version"], 78);
        assert_eq!(value["entries"][0]["ok"], true);
        assert_eq!(value["entries"][0]["version"], 78);
        assert_eq!(value["entries"][0]["detail"], "Valid");
    }
}
