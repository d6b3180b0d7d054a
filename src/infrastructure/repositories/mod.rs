pub mod analysis_repository;
pub mod article_repository;
pub mod source_repository;

pub use analysis_repository::AnalysisRepository;
pub use article_repository::ArticleRepository;
pub use source_repository::SourceRepository;
