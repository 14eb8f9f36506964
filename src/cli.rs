use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::aggregate::{DocSet, DocStats};
use crate::error::{DocError, DocResult, IoContext};
use crate::generator::site::SiteGenerator;
use crate::generator::SiteOptions;
use crate::parser::XmlDocParser;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub stats: DocStats,
    pub files: Vec<PathBuf>,
}

/// Reads `input`, builds the documentation model and writes the site into
/// `output_dir`.
///
/// Nothing is written when the input is missing, cannot be parsed, or
/// documents no type at all ([`DocError::NoTypes`]).
pub fn run_generation(
    input: &Path,
    output_dir: &Path,
    options: SiteOptions,
) -> DocResult<GenerationSummary> {
    if !input.exists() {
        return Err(DocError::InputNotFound(input.to_path_buf()));
    }

    info!("reading documentation from {}", input.display());
    let content = fs::read_to_string(input)
        .with_io_context(|| format!("failed to read {}", input.display()))?;

    let records = XmlDocParser::new().parse(&content)?;
    debug!("parsed {} member records", records.len());

    let docs = DocSet::from_records(records);
    if docs.is_empty() {
        return Err(DocError::NoTypes);
    }

    info!("writing site to {}", output_dir.display());
    let files = SiteGenerator::new(&docs, options).write_to(output_dir)?;

    Ok(GenerationSummary {
        stats: docs.stats(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly><name>Assembly-CSharp</name></assembly>
    <members>
        <member name="T:App.Player"><summary>Main player</summary></member>
        <member name="M:App.Player.Jump(System.Single)">
            <summary>Jumps.</summary>
            <param name="height">Height</param>
        </member>
        <member name="P:App.Player.Health"><summary>HP</summary></member>
    </members>
</doc>
"#;

    #[test]
    fn test_run_generation_writes_site() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Assembly-CSharp.xml");
        fs::write(&input, SAMPLE).unwrap();
        let output = dir.path().join("out");

        let summary = run_generation(&input, &output, SiteOptions::default()).unwrap();

        assert_eq!(
            summary.stats,
            DocStats {
                total_types: 1,
                total_methods: 1,
                total_fields: 0,
                total_properties: 1,
            }
        );
        assert_eq!(summary.files.len(), 5);
        assert!(output.join("App.Player.html").is_file());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.xml");

        let err = run_generation(&input, &dir.path().join("out"), SiteOptions::default())
            .unwrap_err();
        assert!(matches!(err, DocError::InputNotFound(path) if path == input));
    }

    #[test]
    fn test_no_types_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.xml");
        fs::write(&input, "<doc><members></members></doc>").unwrap();
        let output = dir.path().join("out");

        let err = run_generation(&input, &output, SiteOptions::default()).unwrap_err();
        assert!(matches!(err, DocError::NoTypes));
        assert!(!output.exists());
    }

    #[test]
    fn test_only_malformed_members_is_no_types() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("odd.xml");
        fs::write(
            &input,
            r#"<doc><members><member name="XYZ"/><member name="N:App"/></members></doc>"#,
        )
        .unwrap();

        let err = run_generation(&input, &dir.path().join("out"), SiteOptions::default())
            .unwrap_err();
        assert!(matches!(err, DocError::NoTypes));
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.xml");
        fs::write(&input, "<doc><members><member name=\"T:A\"></members></doc>").unwrap();
        let output = dir.path().join("out");

        let err = run_generation(&input, &output, SiteOptions::default()).unwrap_err();
        assert!(matches!(err, DocError::Xml { .. }));
        assert!(!output.exists());
    }
}
