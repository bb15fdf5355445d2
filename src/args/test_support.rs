use clap::Parser;

use crate::error::{AppError, AppResult};

use super::FetchArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<FetchArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    FetchArgs::try_parse_from(args).map_err(AppError::from)
}
