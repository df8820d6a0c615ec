mod into_result;
mod unix;

pub(crate) use self::unix::{Config, RawOutput};
