use std::{path::PathBuf, sync::Arc};

use redb::{
    Database, Durability, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
};
use tracing::info;

use crate::{errors::StoreError, registration::Registration, store::RegistrationStore};

/// Main table.
///
/// Key: lowercased address
/// Value: Registration (bincode encoded)
pub const REGISTRATIONS_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("registrations");

/// Uniqueness index for validator keys.
///
/// Key: lowercased validator key
/// Value: lowercased address of the owning row
pub const VALIDATOR_KEYS_TABLE: TableDefinition<&str, &str> =
    TableDefinition::new("validator_keys");

/// File name of the registration database inside the data directory.
pub const REDB_FILE: &str = "voxylon.redb";

/// redb-backed registration store.
///
/// redb is single-writer, so checking and writing both uniqueness keys
/// inside one write transaction gives the store-level atomicity the
/// registration flow relies on.
#[derive(Clone, Debug)]
pub struct RegistrationDB {
    pub db: Arc<Database>,
}

impl RegistrationDB {
    pub fn new(data_dir: PathBuf) -> Result<Self, StoreError> {
        let path = data_dir.join(REDB_FILE);
        let db = Database::create(&path)?;
        info!("registration database open at {}", path.display());

        let database = Self { db: Arc::new(db) };
        database.init_tables()?;
        Ok(database)
    }

    fn init_tables(&self) -> Result<(), StoreError> {
        let mut write_txn = self.db.begin_write()?;
        write_txn.set_durability(Durability::Immediate)?;
        write_txn.open_table(REGISTRATIONS_TABLE)?;
        write_txn.open_table(VALIDATOR_KEYS_TABLE)?;
        write_txn.commit()?;
        Ok(())
    }
}

impl RegistrationStore for RegistrationDB {
    fn total_count(&self) -> Result<u64, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(REGISTRATIONS_TABLE)?;
        Ok(table.len()?)
    }

    fn find_by_address(&self, address: &str) -> Result<Option<Registration>, StoreError> {
        let address_key = address.to_ascii_lowercase();
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(REGISTRATIONS_TABLE)?;
        match table.get(address_key.as_str())? {
            Some(row) => Ok(Some(bincode::deserialize(row.value())?)),
            None => Ok(None),
        }
    }

    fn find_by_validator_key(
        &self,
        validator_key: &str,
    ) -> Result<Option<Registration>, StoreError> {
        let validator_key_index = validator_key.to_ascii_lowercase();
        let read_txn = self.db.begin_read()?;
        let index = read_txn.open_table(VALIDATOR_KEYS_TABLE)?;
        let Some(address_key) = index.get(validator_key_index.as_str())? else {
            return Ok(None);
        };

        let table = read_txn.open_table(REGISTRATIONS_TABLE)?;
        match table.get(address_key.value())? {
            Some(row) => Ok(Some(bincode::deserialize(row.value())?)),
            None => Ok(None),
        }
    }

    fn insert(&self, registration: Registration) -> Result<Registration, StoreError> {
        let address_key = registration.address_key();
        let validator_key_index = registration.validator_key_index();
        let encoded = bincode::serialize(&registration)?;

        let mut write_txn = self.db.begin_write()?;
        write_txn.set_durability(Durability::Immediate)?;
        {
            let mut table = write_txn.open_table(REGISTRATIONS_TABLE)?;
            let mut index = write_txn.open_table(VALIDATOR_KEYS_TABLE)?;

            // Constraint check and write share the transaction; an early
            // return aborts it, leaving no partial row.
            if table.get(address_key.as_str())?.is_some() {
                return Err(StoreError::DuplicateKey("address"));
            }
            if index.get(validator_key_index.as_str())?.is_some() {
                return Err(StoreError::DuplicateKey("validator_key"));
            }

            table.insert(address_key.as_str(), encoded.as_slice())?;
            index.insert(validator_key_index.as_str(), address_key.as_str())?;
        }
        write_txn.commit()?;
        Ok(registration)
    }
}
