/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system and the console.
pub mod input_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use input_reader::InputReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
