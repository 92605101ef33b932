pub mod preflight;

pub use preflight::no_content_preflight;
