pub mod report_formatter;
pub mod reporting_state_machine;

pub use report_formatter::ReportFormatter;
pub use reporting_state_machine::ReportingStateMachine;
