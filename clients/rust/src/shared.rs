pub(crate) use reqwest::StatusCode;
