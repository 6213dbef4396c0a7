pub mod error;
pub mod retry;
pub mod weather_provider;
pub mod world_weather_online;
