use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SupzError};
use crate::media::{MediaAccess, Pick};
use crate::store::SupplierStore;

/// Run the image selection flow: permission check, then pick.
///
/// Denied permission fails with [`SupzError::PermissionDenied`] before any
/// pick is attempted. Cancellation produces no message and leaves the
/// draft's previous image reference intact.
pub fn pick<M: MediaAccess>(store: &mut SupplierStore, media: &mut M) -> Result<CmdResult> {
    if !media.request_permission()? {
        return Err(SupzError::PermissionDenied);
    }

    match media.pick_image()? {
        Pick::Selected(uri) => {
            store.set_image(uri.clone());
            let mut result = CmdResult::default().with_draft(store.draft().clone());
            result.add_message(CmdMessage::success(format!("Image selected: {}", uri)));
            Ok(result)
        }
        Pick::Cancelled => Ok(CmdResult::default().with_draft(store.draft().clone())),
    }
}

/// Unset the draft's image reference, so a wrong pick does not have to be
/// committed. The next commit falls back to the placeholder.
pub fn clear(store: &mut SupplierStore) -> Result<CmdResult> {
    store.clear_image();
    let mut result = CmdResult::default().with_draft(store.draft().clone());
    result.add_message(CmdMessage::info("Image reference cleared."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::fixtures::ScriptedMedia;

    #[test]
    fn selected_image_lands_on_draft() {
        let mut store = SupplierStore::new();
        let mut media =
            ScriptedMedia::granting().with_pick(Pick::Selected("file:///tmp/a.png".into()));

        let result = pick(&mut store, &mut media).unwrap();

        assert_eq!(store.draft().image.as_deref(), Some("file:///tmp/a.png"));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn denied_permission_fails_without_picking() {
        let mut store = SupplierStore::new();
        let mut media =
            ScriptedMedia::denying().with_pick(Pick::Selected("file:///tmp/a.png".into()));

        let err = pick(&mut store, &mut media).unwrap_err();
        assert!(matches!(err, SupzError::PermissionDenied));
        assert!(store.draft().image.is_none());
    }

    #[test]
    fn cancellation_is_silent_and_keeps_previous_image() {
        let mut store = SupplierStore::new();
        store.set_image("file:///tmp/old.png".into());

        let mut media = ScriptedMedia::granting().with_pick(Pick::Cancelled);
        let result = pick(&mut store, &mut media).unwrap();

        assert!(result.messages.is_empty());
        assert_eq!(store.draft().image.as_deref(), Some("file:///tmp/old.png"));
    }

    #[test]
    fn clear_unsets_image() {
        let mut store = SupplierStore::new();
        store.set_image("file:///tmp/a.png".into());

        clear(&mut store).unwrap();
        assert!(store.draft().image.is_none());
    }
}
