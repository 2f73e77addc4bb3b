use anyhow::anyhow;
use diesel::prelude::*;
use std::fmt;

/// Identifier of the one counter record the application reads and bumps.
pub const VISIT_COUNTER_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::visit_counter)]
pub struct VisitCounter {
    pub id: i32,
    pub count: i32,
}

impl VisitCounter {
    pub fn increment(&mut self) -> anyhow::Result<()> {
        self.count = self.count.checked_add(1).ok_or_else(|| {
            anyhow!("visit counter {} cannot count past {}", self.id, i32::MAX)
        })?;
        Ok(())
    }
}

impl fmt::Display for VisitCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisitCounter - number of visits: {}", self.count)
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::visit_counter)]
pub struct NewVisitCounter {
    pub count: i32,
}
