use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Attendance},
};

pub(crate) fn period_params(year: i32, month: u32) -> [(&'static str, String); 2] {
    [("year", year.to_string()), ("month", month.to_string())]
}

impl ApiClient {
    /// Full roster of attendance rows for one month.
    pub async fn get_attendances(&self, year: i32, month: u32) -> Result<Vec<Attendance>, ApiError> {
        self.send_json(
            self.request(Method::GET, "/attendances")
                .query(&period_params(year, month)),
        )
        .await
    }
}
