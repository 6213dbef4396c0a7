pub mod base_field;
pub mod city;
pub mod city_series;
pub mod comfort_score;
pub mod daily_record;
pub mod day_counts;
pub mod derived_record;
pub mod weather_record;
