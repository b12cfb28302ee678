use serde::{Deserialize, Serialize};
use std::time::Duration;
use texloom_core::DocumentOptions;

/// How to invoke the external TeX engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    /// Executable name or path, resolved through `PATH`.
    pub program: String,
    /// Extra arguments placed before the source file name.
    pub args: Vec<String>,
    /// Wall-clock limit for one compiler run.
    pub timeout_secs: u64,
    /// Base name of the source, log and artifact files.
    pub job_name: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "pdflatex".to_string(),
            args: Vec::new(),
            timeout_secs: 60,
            job_name: "document".to_string(),
        }
    }
}

impl CompilerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Everything a pipeline needs, loadable from a single JSON file.
///
/// ```json
/// {
///   "document": { "export": false, "graphicsPath": "img" },
///   "compiler": { "program": "lualatex", "timeoutSecs": 120 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    pub document: DocumentOptions,
    pub compiler: CompilerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.compiler.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn camel_case_fields() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{
                "document": { "export": true, "documentClass": "report" },
                "compiler": { "program": "lualatex", "timeoutSecs": 5, "jobName": "memo" }
            }"#,
        )
        .unwrap();
        assert!(config.document.export);
        assert_eq!(config.document.document_class, "report");
        assert_eq!(config.compiler.program, "lualatex");
        assert_eq!(config.compiler.timeout(), Duration::from_secs(5));
        assert_eq!(config.compiler.job_name, "memo");
    }
}
