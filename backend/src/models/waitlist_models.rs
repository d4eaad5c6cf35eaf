use diesel::prelude::*;
use serde::Serialize;

use crate::schema::status_checks;
use crate::schema::waitlist;

#[derive(Queryable, Selectable, Insertable, Clone, Debug)]
#[diesel(table_name = waitlist)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WaitlistEntry {
    pub id: String, // v4 uuid
    pub email: String,
    pub role: String, // "Founder", "Investor" or "Fund"
    pub founder_stage: Option<String>,
    pub funding_stage: Option<String>,
    pub biggest_pain: String,
    pub detailed_pain: Option<String>,
    pub created_at: String, // RFC 3339, UTC
    pub mailchimp_id: Option<String>,
    pub mailchimp_status: Option<String>,
}

#[derive(Queryable, Selectable, Insertable, Serialize, Clone, Debug)]
#[diesel(table_name = status_checks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}
