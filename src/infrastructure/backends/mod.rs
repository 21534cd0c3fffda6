mod transcript_api;

pub use transcript_api::*;
