pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::parse_timestamp;
pub(crate) use logging::init_tracing;
