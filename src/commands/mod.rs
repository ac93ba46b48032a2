pub mod config_cmd;
pub mod day;
pub mod goals;

pub use config_cmd::ConfigCommand;
pub use day::DayCommand;
pub use goals::GoalsCommand;
