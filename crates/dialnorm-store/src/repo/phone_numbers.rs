use crate::error::{Result, StoreError};
use dialnorm_core::SeedList;
use rusqlite::Connection;

pub struct PhoneNumbersRepo<'a> {
    conn: &'a Connection,
}

impl<'a> PhoneNumbersRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All stored raw values in insertion order.
    pub fn list_all(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT phone FROM phone_numbers ORDER BY rowid ASC;")?;
        let mut rows = stmt.query([])?;
        let mut values = Vec::new();
        while let Some(row) = rows.next()? {
            values.push(row.get(0)?);
        }
        Ok(values)
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM phone_numbers;", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn insert(&self, value: &str) -> Result<()> {
        self.conn
            .execute("INSERT INTO phone_numbers (phone) VALUES (?1);", [value])?;
        Ok(())
    }

    /// Remove every row equal to `value`, returning how many went away.
    pub fn delete_value(&self, value: &str) -> Result<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM phone_numbers WHERE phone = ?1;", [value])?;
        Ok(deleted)
    }

    /// Insert the whole seed list or nothing.
    pub fn seed(&self, numbers: &SeedList) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO phone_numbers (phone) VALUES (?1);")?;
            for value in numbers.as_slice() {
                stmt.execute([value]).map_err(|source| StoreError::Seed {
                    value: value.clone(),
                    source,
                })?;
            }
        }
        tx.commit()?;
        Ok(numbers.len())
    }
}
