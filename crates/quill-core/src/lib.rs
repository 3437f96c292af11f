pub mod error;
pub mod types;

pub use error::{QuillError, QuillResult};
pub use types::{
    AnalysisResult, BasicStats, Document, HeadingAnalysis, ImageAnalysis, KeywordAnalysis, Link,
    LinkAnalysis, Readability, ReadingLevel, SeoReport, Severity, SiteConfig, ValidationIssue,
};
