use serde::Serialize;

use super::{call, to_args};
use crate::models::Notice;

#[derive(Serialize)]
struct NoticeArgs<'a> {
    notice: &'a Notice,
}

/// Show a notice in a native message dialog; resolves once it is dismissed
pub async fn show_notice(notice: &Notice) -> Result<(), Notice> {
    call("show_notice", to_args(&NoticeArgs { notice })?).await
}
