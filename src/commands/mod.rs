//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;
pub mod survey;

pub use check::{CheckResult, check_word};
pub use simple::run_simple;
pub use solutions::{SolutionsResult, count_solutions, find_solutions};
pub use survey::{SurveyStatistics, print_survey_statistics, run_survey};
