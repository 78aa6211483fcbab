//! Moving settings between worlds: JSON export files with a confirmed
//! import, and compact Base64 share codes.

mod export;
mod payload;
mod share;

pub use export::{
    export_configuration, export_document, export_file_name, export_to_dir,
    import_configuration, ExportDocument, ExportFile, ImportOutcome,
};
pub use payload::SettingsPayload;
pub use share::{decode_share_code, load_shared_configuration, share_code, share_configuration};

#[cfg(test)]
mod tests;
