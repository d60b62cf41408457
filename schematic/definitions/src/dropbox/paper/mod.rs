//! The `paper` namespace: legacy Paper docs and folders.
//!
//! Paper content has moved to regular Dropbox files, so every route here is
//! deprecated without a successor and each call emits a notice through the
//! client's [`Notifier`](schematic::Notifier).

mod types;

pub use types::*;

use schematic::Deprecation;
use schematic::error::Void;
use schematic::response::{EmptyFormat, JsonFormat};

const RETIRED: Deprecation = Deprecation::retired();

schematic::routes! {
    namespace = "paper";

    /// Marks the given Paper doc as archived.
    rpc DocsArchive => "docs/archive" {
        host: Api,
        auth: [User],
        arg: RefPaperDoc,
        result: EmptyFormat,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    /// Creates a new Paper doc with the uploaded content.
    upload DocsCreate => "docs/create" {
        host: Api,
        auth: [User],
        arg: PaperDocCreateArgs,
        result: JsonFormat<PaperDocCreateUpdateResult>,
        error: PaperDocCreateError,
        deprecated: RETIRED,
    }

    /// Exports and downloads a Paper doc as HTML or markdown.
    download DocsDownload => "docs/download" {
        host: Api,
        auth: [User],
        arg: PaperDocExport,
        result: JsonFormat<PaperDocExportResult>,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    /// Lists the users explicitly invited to the folder containing the doc.
    rpc DocsFolderUsersList => "docs/folder_users/list" {
        host: Api,
        auth: [User],
        arg: ListUsersOnFolderArgs,
        result: JsonFormat<ListUsersOnFolderResponse>,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    rpc DocsFolderUsersListContinue => "docs/folder_users/list/continue" {
        host: Api,
        auth: [User],
        arg: ListUsersOnFolderContinueArgs,
        result: JsonFormat<ListUsersOnFolderResponse>,
        error: ListUsersCursorError,
        deprecated: RETIRED,
    }

    /// Retrieves sharing policy and folder path for the given doc.
    rpc DocsGetFolderInfo => "docs/get_folder_info" {
        host: Api,
        auth: [User],
        arg: RefPaperDoc,
        result: JsonFormat<FoldersContainingPaperDoc>,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    /// Returns Paper doc ids matching the filter.
    rpc DocsList => "docs/list" {
        host: Api,
        auth: [User],
        arg: ListPaperDocsArgs,
        result: JsonFormat<ListPaperDocsResponse>,
        error: Void,
        deprecated: RETIRED,
    }

    rpc DocsListContinue => "docs/list/continue" {
        host: Api,
        auth: [User],
        arg: ListPaperDocsContinueArgs,
        result: JsonFormat<ListPaperDocsResponse>,
        error: ListDocsCursorError,
        deprecated: RETIRED,
    }

    /// Permanently deletes the given Paper doc.
    rpc DocsPermanentlyDelete => "docs/permanently_delete" {
        host: Api,
        auth: [User],
        arg: RefPaperDoc,
        result: EmptyFormat,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    rpc DocsSharingPolicyGet => "docs/sharing_policy/get" {
        host: Api,
        auth: [User],
        arg: RefPaperDoc,
        result: JsonFormat<SharingPolicy>,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    rpc DocsSharingPolicySet => "docs/sharing_policy/set" {
        host: Api,
        auth: [User],
        arg: PaperDocSharingPolicy,
        result: EmptyFormat,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    /// Updates an existing Paper doc with the uploaded content.
    upload DocsUpdate => "docs/update" {
        host: Api,
        auth: [User],
        arg: PaperDocUpdateArgs,
        result: JsonFormat<PaperDocCreateUpdateResult>,
        error: PaperDocUpdateError,
        deprecated: RETIRED,
    }

    /// Invites users to a doc, returning one result per member.
    rpc DocsUsersAdd => "docs/users/add" {
        host: Api,
        auth: [User],
        arg: AddPaperDocUser,
        result: JsonFormat<Vec<AddPaperDocUserMemberResult>>,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    rpc DocsUsersList => "docs/users/list" {
        host: Api,
        auth: [User],
        arg: ListUsersOnPaperDocArgs,
        result: JsonFormat<ListUsersOnPaperDocResponse>,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    rpc DocsUsersListContinue => "docs/users/list/continue" {
        host: Api,
        auth: [User],
        arg: ListUsersOnPaperDocContinueArgs,
        result: JsonFormat<ListUsersOnPaperDocResponse>,
        error: ListUsersCursorError,
        deprecated: RETIRED,
    }

    rpc DocsUsersRemove => "docs/users/remove" {
        host: Api,
        auth: [User],
        arg: RemovePaperDocUser,
        result: EmptyFormat,
        error: DocLookupError,
        deprecated: RETIRED,
    }

    /// Creates a new Paper folder.
    rpc FoldersCreate => "folders/create" {
        host: Api,
        auth: [User],
        arg: PaperFolderCreateArg,
        result: JsonFormat<PaperFolderCreateResult>,
        error: PaperFolderCreateError,
        deprecated: RETIRED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schematic::route::Route;
    use schematic::{HostClass, WireStyle, validate_routes};

    #[test]
    fn route_table_is_valid() {
        assert_eq!(ROUTES.len(), 17);
        assert_eq!(validate_routes(ROUTES), Ok(()));
    }

    #[test]
    fn every_route_is_retired() {
        assert!(
            ROUTES
                .iter()
                .all(|r| r.deprecation == Some(Deprecation::retired()))
        );
    }

    #[test]
    fn content_routes_stay_on_api_host() {
        assert_eq!(DocsCreate::DESCRIPTOR.style, WireStyle::Upload);
        assert_eq!(DocsUpdate::DESCRIPTOR.style, WireStyle::Upload);
        assert_eq!(DocsDownload::DESCRIPTOR.style, WireStyle::Download);
        assert!(ROUTES.iter().all(|r| r.host == HostClass::Api));
    }
}
