//! Trading sessions and the ordered table the analysis runs on.

use std::ops::Index;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SyntError;

/// One trading session of OHLCV data.
///
/// `low <= open, close <= high` is expected of upstream data but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Trading date of the session.
    pub date: NaiveDate,
    /// Opening price.
    pub open: Decimal,
    /// Highest traded price.
    pub high: Decimal,
    /// Lowest traded price.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume.
    pub volume: u64,
}

/// Ordered, immutable sequence of sessions, strictly increasing by date.
///
/// Cloning is cheap: the sessions are shared behind an `Arc`, so a table can be
/// handed to several analyses without copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "Vec<Session>", into = "Vec<Session>")]
pub struct SessionTable {
    sessions: Arc<[Session]>,
}

impl SessionTable {
    /// Build a table from sessions already in ascending date order.
    ///
    /// # Errors
    /// Returns `Err(SyntError::Data)` if two adjacent sessions are out of order
    /// or share a date.
    pub fn new(sessions: Vec<Session>) -> Result<Self, SyntError> {
        if let Some(pair) = sessions.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(SyntError::Data(format!(
                "sessions must be strictly increasing by date: {} then {}",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self {
            sessions: sessions.into(),
        })
    }

    /// Build a table from sessions in any order.
    ///
    /// # Errors
    /// Returns `Err(SyntError::Data)` if two sessions share a date.
    pub fn from_unsorted(mut sessions: Vec<Session>) -> Result<Self, SyntError> {
        sessions.sort_by_key(|s| s.date);
        Self::new(sessions)
    }

    /// Sessions in ascending date order.
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True when the table holds no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// First session, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Session> {
        self.sessions.first()
    }

    /// Last session, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Session> {
        self.sessions.last()
    }

    /// Iterate over sessions in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.sessions.iter()
    }

    /// True when both tables share the same underlying storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.sessions, &other.sessions)
    }
}

impl Index<usize> for SessionTable {
    type Output = Session;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.sessions[idx]
    }
}

impl<'a> IntoIterator for &'a SessionTable {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.iter()
    }
}

impl TryFrom<Vec<Session>> for SessionTable {
    type Error = SyntError;

    fn try_from(sessions: Vec<Session>) -> Result<Self, Self::Error> {
        Self::new(sessions)
    }
}

impl From<SessionTable> for Vec<Session> {
    fn from(table: SessionTable) -> Self {
        table.sessions.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(day: u32, close: i64) -> Session {
        let px = Decimal::from(close);
        Session {
            date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
            open: px,
            high: px,
            low: px,
            close: px,
            volume: 1,
        }
    }

    #[test]
    fn rejects_duplicate_dates() {
        let err = SessionTable::new(vec![session(4, 70), session(4, 71)]).unwrap_err();
        assert!(matches!(err, SyntError::Data(_)));
    }

    #[test]
    fn rejects_descending_dates() {
        assert!(SessionTable::new(vec![session(5, 70), session(4, 71)]).is_err());
        let sorted = SessionTable::from_unsorted(vec![session(5, 70), session(4, 71)]).unwrap();
        assert_eq!(sorted[0].close, Decimal::from(71));
    }

    #[test]
    fn clones_share_storage() {
        let t = SessionTable::new(vec![session(4, 70)]).unwrap();
        let c = t.clone();
        assert!(t.shares_storage_with(&c));
    }

    #[test]
    fn deserialization_validates_order() {
        let t = SessionTable::new(vec![session(4, 70), session(5, 71)]).unwrap();
        let mut json = serde_json::to_value(&t).unwrap();
        json.as_array_mut().unwrap().reverse();
        assert!(serde_json::from_value::<SessionTable>(json).is_err());
    }
}
