mod channel_provider;
mod location_provider;

pub use {channel_provider::ChannelLocationProvider, location_provider::LocationProvider};
