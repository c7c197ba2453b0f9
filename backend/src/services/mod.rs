//! Business logic services for the City Weather service

pub mod suggestions;
pub mod weather_report;

pub use suggestions::SuggestionService;
pub use weather_report::WeatherReportService;
