//! Media key resolution against a page's lookup table.

use crate::api::model::MediaTable;
use crate::media::item::MediaRecord;

/// Look up a media key. `None` means the API omitted the record, which is a
/// skip rather than an error.
pub fn resolve<'a>(key: &str, table: &'a MediaTable) -> Option<&'a MediaRecord> {
    table.get(key)
}
