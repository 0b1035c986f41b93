pub mod entry_id;
pub mod validated_json;

pub use entry_id::EntryId;
pub use validated_json::ValidatedJson;
