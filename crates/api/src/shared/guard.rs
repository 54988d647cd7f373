use crate::error::ShareAlarmError;
use sharealarm_domain::ID;

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: String) -> Result<ID, ShareAlarmError> {
        val.parse()
            .map_err(|e| ShareAlarmError::BadClientData(format!("{}", e)))
    }
}
