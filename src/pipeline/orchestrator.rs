//! Pipeline orchestrator: load, extract and write each document in turn

use super::summary::{render_summary, SummaryEntry};
use super::types::{
    ArtifactCollision, PipelineConfig, PipelineError, PipelineResult, RunReport, SkippedDocument,
};
use crate::extract::{extract_authors, extract_with_stats, Extraction, ExtractionRecord};
use crate::storage::names::name_bytes;
use crate::storage::{
    DocumentRef, DocumentSource, ParsedTextsDir, RecordSink, StorageResult, TextDirectory,
};
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::time::Instant;

/// Runs extraction over every document of a source into a sink
///
/// Documents are processed one at a time and share no state. A document that
/// cannot be loaded or written is logged, recorded in the report and skipped;
/// only destination, enumeration and summary failures abort the run.
pub struct Pipeline<S, K> {
    source: S,
    sink: K,
    config: PipelineConfig,
}

impl<S: DocumentSource, K: RecordSink> Pipeline<S, K> {
    pub fn new(source: S, sink: K, config: PipelineConfig) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Reset the destination once, then process every enumerated document
    pub fn run(&mut self) -> PipelineResult<RunReport> {
        let started = Instant::now();

        self.sink.reset().map_err(PipelineError::Destination)?;
        let documents = self.source.documents().map_err(PipelineError::Enumeration)?;

        let mut report = RunReport::new(self.sink.location());
        let mut claimed: HashMap<OsString, OsString> = HashMap::new();
        let mut entries = Vec::new();

        for doc in &documents {
            report.documents_seen += 1;

            let artifact = self.config.artifact_name(&doc.name);
            if let Some(earlier) = claimed.insert(artifact.clone(), doc.name.clone()) {
                tracing::warn!(
                    file = %doc.display_name(),
                    earlier = %earlier.to_string_lossy(),
                    artifact = %artifact.to_string_lossy(),
                    "artifact name already used in this run, overwriting"
                );
                report.collisions.push(ArtifactCollision {
                    artifact: artifact.clone(),
                    earlier,
                    later: doc.name.clone(),
                });
            }

            match self.process(doc, &artifact) {
                Ok(entry) => {
                    report.written += 1;
                    if self.config.summary.is_some() {
                        entries.push(entry);
                    }
                }
                Err(e) => {
                    tracing::error!(file = %doc.display_name(), error = %e, "skipping document");
                    report.skipped.push(SkippedDocument {
                        file: doc.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if let Some(format) = self.config.summary {
            let file_name = OsStr::new(format.file_name());
            let contents = render_summary(format, &entries, started.elapsed());
            self.sink
                .write_summary(file_name, &contents)
                .map_err(PipelineError::Summary)?;
            report.summary = Some(self.sink.location().join(file_name));
        }

        report.elapsed = started.elapsed();
        tracing::info!(
            destination = %report.destination.display(),
            documents = report.documents_seen,
            written = report.written,
            skipped = report.skipped.len(),
            collisions = report.collisions.len(),
            elapsed = ?report.elapsed,
            "run complete"
        );
        Ok(report)
    }

    /// Load, extract and write a single document
    fn process(&mut self, doc: &DocumentRef, artifact: &OsStr) -> StorageResult<SummaryEntry> {
        let started = Instant::now();
        let input = self.source.load(doc)?;
        let Extraction { mut record, stats } =
            extract_with_stats(name_bytes(&input.name), &input.lines);

        let authors = if self.config.needs_authors() {
            extract_authors(&input.lines)
        } else {
            Vec::new()
        };
        if self.config.include_authors {
            record = record.with_authors(authors.clone());
        }

        self.sink.write(artifact, &record)?;

        let elapsed = started.elapsed();
        tracing::debug!(
            file = %doc.display_name(),
            artifact = %artifact.to_string_lossy(),
            lines = stats.line_count,
            abstract_lines = stats.abstract_line_count,
            blank = record.is_blank(),
            abstract_bytes = record.abstract_text.len(),
            elapsed = ?elapsed,
            "parsed document"
        );

        let ExtractionRecord {
            normalized_name,
            title,
            abstract_text,
            ..
        } = record;
        Ok(SummaryEntry {
            normalized_name,
            title,
            authors,
            abstract_text,
            stats,
            elapsed,
        })
    }
}

/// Run the pipeline over a source directory on disk
///
/// The source is validated before anything is created, so an invalid source
/// leaves the filesystem untouched.
pub fn run_directory(config: &PipelineConfig) -> PipelineResult<RunReport> {
    let source = TextDirectory::open(&config.source_dir, config.extension.as_str())
        .map_err(PipelineError::InvalidSource)?;
    let sink = ParsedTextsDir::new(config.output_dir());

    Pipeline::new(source, sink, config.clone()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SummaryFormat;
    use crate::storage::{MemorySink, MemorySource, StorageError};

    fn config() -> PipelineConfig {
        PipelineConfig::new("memory")
    }

    #[test]
    fn test_run_writes_one_artifact_per_document() {
        let source = MemorySource::new()
            .with_document(
                "paper 1.txt",
                "\nA Study of Things\n\nAbstract: This paper studies things.\nIt also studies other things.\n\nConclusion...",
            )
            .with_document("notes.txt", "Just a title");

        let mut pipeline = Pipeline::new(source, MemorySink::new(), config());
        let report = pipeline.run().unwrap();

        assert_eq!(report.documents_seen, 2);
        assert_eq!(report.written, 2);
        assert!(report.skipped.is_empty());
        assert!(report.collisions.is_empty());
        assert_eq!(report.summary, None);

        let sink = pipeline.into_sink();
        assert_eq!(sink.artifacts().len(), 2);
        assert_eq!(
            sink.get("paper_1_parsed.txt").unwrap(),
            b"paper_1.txt\nA Study of Things\nThis paper studies things. It also studies other things.\n"
        );
        assert_eq!(sink.get("notes_parsed.txt").unwrap(), b"notes.txt\nJust a title\n\n");
    }

    #[test]
    fn test_unreadable_document_is_skipped() {
        let source = MemorySource::new()
            .with_document("good.txt", "Good Title")
            .with_unreadable("locked.txt")
            .with_document("also good.txt", "Another");

        let mut pipeline = Pipeline::new(source, MemorySink::new(), config());
        let report = pipeline.run().unwrap();

        assert_eq!(report.documents_seen, 3);
        assert_eq!(report.written, 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file, "locked.txt");
        assert!(report.skipped[0].reason.contains("simulated read failure"));

        let sink = pipeline.sink();
        assert!(sink.get("locked_parsed.txt").is_none());
        assert!(sink.get("good_parsed.txt").is_some());
        assert!(sink.get("also_good_parsed.txt").is_some());
    }

    #[test]
    fn test_failed_write_is_skipped() {
        let source = MemorySource::new()
            .with_document("a.txt", "A")
            .with_document("b.txt", "B");
        let sink = MemorySink::new().with_failing_write("a_parsed.txt");

        let mut pipeline = Pipeline::new(source, sink, config());
        let report = pipeline.run().unwrap();

        assert_eq!(report.written, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file, "a.txt");
        assert_eq!(pipeline.sink().get("b_parsed.txt").unwrap(), b"b.txt\nB\n\n");
    }

    #[test]
    fn test_reset_happens_once_before_processing() {
        let source = MemorySource::new().with_document("new.txt", "New");
        let sink = MemorySink::new().with_artifact("old_parsed.txt", "stale\n");

        let mut pipeline = Pipeline::new(source, sink, config());
        pipeline.run().unwrap();

        let sink = pipeline.into_sink();
        assert_eq!(sink.resets(), 1);
        assert!(sink.get("old_parsed.txt").is_none());
        assert_eq!(sink.artifacts().len(), 1);
    }

    #[test]
    fn test_empty_source_still_resets() {
        let mut pipeline = Pipeline::new(MemorySource::new(), MemorySink::new(), config());
        let report = pipeline.run().unwrap();

        assert_eq!(report.documents_seen, 0);
        assert_eq!(report.written, 0);
        assert_eq!(pipeline.sink().resets(), 1);
    }

    #[test]
    fn test_output_independent_of_document_order() {
        let forward = MemorySource::new()
            .with_document("x.txt", "X\nAbstract: x")
            .with_document("y.txt", "Y\nabstract y");
        let backward = MemorySource::new()
            .with_document("y.txt", "Y\nabstract y")
            .with_document("x.txt", "X\nAbstract: x");

        let mut a = Pipeline::new(forward, MemorySink::new(), config());
        let mut b = Pipeline::new(backward, MemorySink::new(), config());
        a.run().unwrap();
        b.run().unwrap();

        assert_eq!(a.sink().artifacts(), b.sink().artifacts());
    }

    #[test]
    fn test_colliding_artifact_names_are_reported() {
        let source = MemorySource::new()
            .with_document("a b.txt", "Spaced")
            .with_document("a_b.txt", "Underscored");

        let mut pipeline = Pipeline::new(source, MemorySink::new(), config());
        let report = pipeline.run().unwrap();

        assert_eq!(report.written, 2);
        assert_eq!(
            report.collisions,
            vec![ArtifactCollision {
                artifact: "a_b_parsed.txt".into(),
                earlier: "a b.txt".into(),
                later: "a_b.txt".into(),
            }]
        );
        assert_eq!(pipeline.sink().artifacts().len(), 1);
        assert_eq!(pipeline.sink().get("a_b_parsed.txt").unwrap(), b"a_b.txt\nUnderscored\n\n");
    }

    #[test]
    fn test_latin1_bytes_reach_the_artifact_unchanged() {
        let source = MemorySource::new()
            .with_document("caf.txt", &b"Caf\xe9 Study\n\nAbstract: R\xe9sum\xe9 text\n"[..]);

        let mut pipeline = Pipeline::new(source, MemorySink::new(), config());
        pipeline.run().unwrap();

        assert_eq!(
            pipeline.sink().get("caf_parsed.txt").unwrap(),
            b"caf.txt\nCaf\xe9 Study\nR\xe9sum\xe9 text\n"
        );
    }

    const WITH_AUTHORS: &str = "A Study of Things\nJane Doe, John Roe\n\nAbstract: Short.\n";

    #[test]
    fn test_authors_are_a_fourth_line_when_enabled() {
        let source = MemorySource::new().with_document("s.txt", WITH_AUTHORS);

        let mut pipeline = Pipeline::new(source, MemorySink::new(), config().with_authors(true));
        pipeline.run().unwrap();

        assert_eq!(
            pipeline.sink().get("s_parsed.txt").unwrap(),
            b"s.txt\nA Study of Things\nShort.\nJane Doe, John Roe\n"
        );
    }

    #[test]
    fn test_summary_leaves_artifacts_at_three_lines() {
        let source = MemorySource::new()
            .with_document("s.txt", WITH_AUTHORS)
            .with_unreadable("locked.txt");

        let mut pipeline = Pipeline::new(
            source,
            MemorySink::new(),
            config().with_summary(SummaryFormat::Xml),
        );
        let report = pipeline.run().unwrap();

        let sink = pipeline.into_sink();
        assert_eq!(report.summary, Some(sink.location().join("articles.xml")));
        assert_eq!(
            sink.get("s_parsed.txt").unwrap(),
            b"s.txt\nA Study of Things\nShort.\n"
        );
        let expected: &[u8] = b"<articles>\n\
\t<article>\n\
\t\t<preamble>s.txt</preamble>\n\
\t\t<title>A Study of Things</title>\n\
\t\t<authors>Jane Doe, John Roe</authors>\n\
\t\t<abstract>Short.</abstract>\n\
\t</article>\n\
</articles>\n";
        assert_eq!(sink.get("articles.xml").unwrap(), expected);
    }

    #[test]
    fn test_text_summary_lists_parsed_documents() {
        let source = MemorySource::new()
            .with_document("one.txt", "One")
            .with_document("two.txt", "Two");

        let mut pipeline = Pipeline::new(
            source,
            MemorySink::new(),
            config().with_summary(SummaryFormat::Text),
        );
        pipeline.run().unwrap();

        let summary = String::from_utf8(pipeline.sink().get("summary.txt").unwrap().to_vec()).unwrap();
        assert_eq!(summary.matches("File           : ").count(), 2);
        assert!(summary.contains("Title          : Two\n"));
        assert!(summary.contains("Documents      : 2\n"));
    }

    #[test]
    fn test_summary_write_failure_is_fatal() {
        let sink = MemorySink::new().with_failing_write("summary.txt");
        let source = MemorySource::new().with_document("a.txt", "A");

        let mut pipeline = Pipeline::new(source, sink, config().with_summary(SummaryFormat::Text));
        let err = pipeline.run().unwrap_err();

        assert!(matches!(err, PipelineError::Summary(StorageError::Io { .. })));
        assert!(pipeline.sink().get("a_parsed.txt").is_some());
    }

    #[test]
    fn test_run_directory_rejects_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::new(dir.path().join("missing"));

        let err = run_directory(&config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidSource(StorageError::NotFound(_))
        ));
        assert!(!config.output_dir().exists());
    }
}
