use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter;
use crate::store::SupplierStore;

/// List suppliers, optionally narrowed by a name/category search term.
/// `None` and `Some("")` both mean the full collection.
pub fn run(store: &SupplierStore, term: Option<&str>) -> Result<CmdResult> {
    let listed = filter::matching(store.suppliers(), term.unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
