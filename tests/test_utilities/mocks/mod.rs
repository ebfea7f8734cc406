/// Mock implementations for testing
mod mock_input_reader;
mod mock_progress_reporter;

pub use mock_input_reader::MockInputReader;
pub use mock_progress_reporter::MockProgressReporter;
