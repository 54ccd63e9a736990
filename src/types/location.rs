//! Positional metadata for a transaction inside the block archive
//!
//! Block archives are the `blkNNNNN.dat` segment files written by Bitcoin Core.
//! The location is supplied by whatever parsed the archive and is carried only
//! for diagnostics.

use crate::utils::time::timestamp_to_iso_datetime;
use bitcoin::hashes::Hash;
use bitcoin::BlockHash;

/// Where a transaction was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockLocation {
    /// Archive segment number (the `NNNNN` in `blkNNNNN.dat`)
    pub archive_file_index: u16,
    /// Block header timestamp, seconds since the Unix epoch
    pub block_timestamp: i64,
    /// Position of the containing block within the archive segment
    pub block_index_in_archive: u32,
    /// Hash of the containing block
    pub block_hash: BlockHash,
    /// Position of the transaction within its block
    pub index_in_block: u64,
}

impl BlockLocation {
    pub fn new(
        archive_file_index: u16,
        block_timestamp: i64,
        block_index_in_archive: u32,
        block_hash: BlockHash,
        index_in_block: u64,
    ) -> Self {
        Self {
            archive_file_index,
            block_timestamp,
            block_index_in_archive,
            block_hash,
            index_in_block,
        }
    }

    /// Archive filename for diagnostics, e.g. `blk00042.dat`
    ///
    /// # Examples
    /// ```
    /// use tx_payload_forensics::types::BlockLocation;
    ///
    /// let location = BlockLocation {
    ///     archive_file_index: 7,
    ///     ..BlockLocation::default()
    /// };
    /// assert_eq!(location.archive_filename(), "blk00007.dat");
    /// ```
    pub fn archive_filename(&self) -> String {
        format!("blk{:05}.dat", self.archive_file_index)
    }

    /// Block timestamp as an ISO 8601 UTC datetime
    pub fn block_time_iso(&self) -> String {
        timestamp_to_iso_datetime(self.block_timestamp)
    }
}

impl Default for BlockLocation {
    /// Location used for transactions obtained outside an archive walk (RPC, fixtures)
    fn default() -> Self {
        Self {
            archive_file_index: 0,
            block_timestamp: 0,
            block_index_in_archive: 0,
            block_hash: BlockHash::all_zeros(),
            index_in_block: 0,
        }
    }
}
