use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::{
    error::ApiError,
    handlers::waitlist_dtos::{WaitlistStats, DUPLICATE_EMAIL_MESSAGE},
    models::waitlist_models::{StatusCheck, WaitlistEntry},
    schema::{status_checks, waitlist},
    DbPool,
};

pub struct WaitlistRepository {
    pub pool: DbPool,
}

impl WaitlistRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The email column is `COLLATE NOCASE`, so this match ignores case.
    pub fn find_by_email(&self, email: &str) -> Result<Option<WaitlistEntry>, ApiError> {
        let mut conn = self.pool.get()?;
        let entry = waitlist::table
            .filter(waitlist::email.eq(email))
            .select(WaitlistEntry::as_select())
            .first::<WaitlistEntry>(&mut conn)
            .optional()?;
        Ok(entry)
    }

    pub fn email_exists(&self, email: &str) -> Result<bool, ApiError> {
        Ok(self.find_by_email(email)?.is_some())
    }

    /// Inserts a new signup. A concurrent insert of the same address loses to
    /// the unique index and is reported as a conflict.
    pub fn create_entry(&self, entry: &WaitlistEntry) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        match diesel::insert_into(waitlist::table)
            .values(entry)
            .execute(&mut conn)
        {
            Ok(_) => Ok(()),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(ApiError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn stats(&self) -> Result<WaitlistStats, ApiError> {
        let mut conn = self.pool.get()?;
        let total_signups = waitlist::table.count().get_result::<i64>(&mut conn)?;
        let count_role = |conn: &mut SqliteConnection, role: &str| {
            waitlist::table
                .filter(waitlist::role.eq(role))
                .count()
                .get_result::<i64>(conn)
        };
        Ok(WaitlistStats {
            total_signups,
            founders: count_role(&mut conn, "Founder")?,
            investors: count_role(&mut conn, "Investor")?,
            funds: count_role(&mut conn, "Fund")?,
        })
    }

    pub fn record_status_check(&self, check: &StatusCheck) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(status_checks::table)
            .values(check)
            .execute(&mut conn)?;
        Ok(())
    }

    /// Oldest first, at most `limit` rows.
    pub fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, ApiError> {
        let mut conn = self.pool.get()?;
        let checks = status_checks::table
            .order_by(status_checks::timestamp.asc())
            .limit(limit)
            .select(StatusCheck::as_select())
            .load::<StatusCheck>(&mut conn)?;
        Ok(checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_pool, run_migrations};

    fn repository() -> WaitlistRepository {
        let pool = build_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        WaitlistRepository::new(pool)
    }

    fn entry(id: &str, email: &str, role: &str) -> WaitlistEntry {
        WaitlistEntry {
            id: id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            founder_stage: None,
            funding_stage: None,
            biggest_pain: "Other".to_string(),
            detailed_pain: None,
            created_at: "2025-01-15T00:00:00+00:00".to_string(),
            mailchimp_id: None,
            mailchimp_status: None,
        }
    }

    #[test]
    fn lookup_ignores_email_case() {
        let repo = repository();
        repo.create_entry(&entry("1", "Jane@Example.com", "Founder")).unwrap();

        let found = repo.find_by_email("jane@example.com").unwrap().unwrap();
        assert_eq!(found.id, "1");
        assert!(found.detailed_pain.is_none());
        assert!(!repo.email_exists("other@example.com").unwrap());
    }

    #[test]
    fn unique_index_reports_conflict() {
        let repo = repository();
        repo.create_entry(&entry("1", "jane@example.com", "Founder")).unwrap();

        match repo.create_entry(&entry("2", "JANE@example.com", "Investor")) {
            Err(ApiError::Conflict(message)) => assert_eq!(message, DUPLICATE_EMAIL_MESSAGE),
            other => panic!("expected conflict, got {:?}", other),
        }
        assert_eq!(repo.stats().unwrap().total_signups, 1);
    }

    #[test]
    fn status_checks_are_limited() {
        let repo = repository();
        for i in 0..3 {
            repo.record_status_check(&StatusCheck {
                id: i.to_string(),
                client_name: "monitor".to_string(),
                timestamp: format!("2025-01-15T00:00:0{}+00:00", i),
            })
            .unwrap();
        }
        let checks = repo.list_status_checks(2).unwrap();
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].id, "0");
    }
}
